//! @acp:module "Name Normalization"
//! @acp:summary "Tie surnames and initials together for LaTeX line breaking"
//! @acp:domain cli
//! @acp:layer service
//!
//! LaTeX breaks lines at spaces, so every space inside a name becomes a
//! `~` tie. Initials also get a tie after each dot (`A.B.` -> `A.~B.`).
//! Both transforms are idempotent.

use std::sync::LazyLock;

use regex::Regex;

/// Non-breaking join marker
pub const TIE: &str = "~";

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// A dot directly followed by a letter/digit: `A.B`
static DOT_LETTER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.(\w)").unwrap());

/// Separators between the parts of a free-text name
static NAME_PARTS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s\-.~]").unwrap());

/// Replace whitespace runs in a surname with ties
pub fn normalize_surname(surname: &str) -> String {
    WHITESPACE.replace_all(surname, TIE).into_owned()
}

/// Prefer `A.~B.` to `A.B.`, and tie any remaining whitespace
pub fn normalize_initials(initials: &str) -> String {
    let spaced = DOT_LETTER.replace_all(initials, ".~$1");
    WHITESPACE.replace_all(&spaced, TIE).into_owned()
}

/// Reduce a name to bare initials for the author index.
///
/// `A.~B.`, `Anne Beth` and `Anne-Beth` all become `~A.~B.`.
pub fn index_initials(name: &str) -> String {
    let letters: Vec<char> = NAME_PARTS
        .split(name)
        .filter_map(|part| part.chars().next())
        .collect();

    if letters.is_empty() {
        return String::new();
    }

    let joined = letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(".~");
    format!("~{}.", joined)
}

/// @acp:summary "Normalized name fields for one author"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedName {
    pub surname: String,
    pub initials: String,
}

impl NormalizedName {
    pub fn new(surname: &str, initials: &str) -> Self {
        Self {
            surname: normalize_surname(surname),
            initials: normalize_initials(initials),
        }
    }

    /// `Initials~Surname`
    pub fn full(&self) -> String {
        format!("{}{}{}", self.initials, TIE, self.surname)
    }

    /// Initials reduced for the `\aindex` entry
    pub fn index_initials(&self) -> String {
        index_initials(&self.initials)
    }
}
