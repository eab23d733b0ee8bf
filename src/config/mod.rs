//! @acp:module "Configuration"
//! @acp:summary "Output mode selection and the per-mode formatting bundle"
//! @acp:domain cli
//! @acp:layer config
//!
//! Every formatting decision the renderer makes is read from a
//! [`ModeConfig`] built once from the selected [`OutputMode`].

pub mod paths;

pub use paths::{default_db_path, InputPaths, DEFAULT_AUTHORS_FILE};

/// @acp:summary "Supported output styles"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputMode {
    /// AASTeX 6.1 `\author` / `\affiliation` blocks
    #[default]
    Aas,
    /// SPIE proceedings with numbered `\affil` entries
    Spie,
    /// ADASS proceedings: one `\author` block plus index records
    Adass,
    /// Plain text for the arXiv submission form
    Arxiv,
}

impl OutputMode {
    /// All modes in CLI order
    pub fn all() -> &'static [OutputMode] {
        &[
            OutputMode::Aas,
            OutputMode::Spie,
            OutputMode::Adass,
            OutputMode::Arxiv,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputMode::Aas => "aas",
            OutputMode::Spie => "spie",
            OutputMode::Adass => "adass",
            OutputMode::Arxiv => "arxiv",
        }
    }

    /// Build the formatting bundle for this mode
    pub fn config(self) -> ModeConfig {
        ModeConfig::for_mode(self)
    }
}

impl std::fmt::Display for OutputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// @acp:summary "Which part of an affiliation address is printed"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AffiliationText {
    /// The full address string from the database
    #[default]
    Address,
    /// Only the first comma-separated component
    Institution,
}

/// @acp:summary "Fixed formatting parameters for one output mode"
///
/// Templates use `{{placeholder}}` substitution:
/// - author: `{{option}}`, `{{initials}}`, `{{surname}}`, `{{refs}}`
/// - affiliation: `{{cmd}}`, `{{index}}`, `{{text}}`
/// - reference: `{{index}}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeConfig {
    pub mode: OutputMode,
    /// LaTeX command used for affiliations (without backslash)
    pub affil_cmd: &'static str,
    pub author_template: &'static str,
    pub affil_template: &'static str,
    pub reference_template: &'static str,
    /// Separator between two references of the same author
    pub reference_sep: &'static str,
    /// Written before the first reference of every author but the last
    pub lead_reference_sep: &'static str,
    /// Emit only newly-seen affiliations, numbered, after the author(s)
    pub buffer_affiliations: bool,
    /// Collect all authors into a single block
    pub combine_authors: bool,
    pub author_sep: &'static str,
    /// Separator before the last author when there is more than one
    pub last_author_sep: &'static str,
    pub authors_open: &'static str,
    pub authors_close: &'static str,
    pub affil_block_open: &'static str,
    pub affil_block_sep: &'static str,
    pub affil_block_close: &'static str,
    pub affil_text: AffiliationText,
    /// Append `\paperauthor` records and the `%\aindex` listing
    pub index_listing: bool,
}

impl ModeConfig {
    pub fn for_mode(mode: OutputMode) -> Self {
        // AASTeX is the baseline every other mode starts from
        let aas = Self {
            mode,
            affil_cmd: "affiliation",
            author_template: r"\author{{option}}{~{{initials}}~{{surname}}}",
            affil_template: r"\{{cmd}}{{{text}}}",
            reference_template: "{{index}}",
            reference_sep: " ",
            lead_reference_sep: "",
            buffer_affiliations: false,
            combine_authors: false,
            author_sep: " ",
            last_author_sep: " and ",
            authors_open: "",
            authors_close: "",
            affil_block_open: "",
            affil_block_sep: "\n",
            affil_block_close: "\n",
            affil_text: AffiliationText::Address,
            index_listing: false,
        };

        match mode {
            OutputMode::Aas => aas,
            OutputMode::Spie => Self {
                affil_cmd: "affil",
                affil_template: r"\{{cmd}}[{{index}}]{{{text}}}",
                buffer_affiliations: true,
                ..aas
            },
            OutputMode::Adass => Self {
                affil_cmd: "affil",
                author_template: "{{initials}}~{{surname}}{{refs}}",
                affil_template: r"\{{cmd}}{$^{{index}}${{text}}}",
                reference_template: "$^{{index}}$",
                lead_reference_sep: ",",
                buffer_affiliations: true,
                combine_authors: true,
                authors_open: r"\author{",
                authors_close: "}\n",
                index_listing: true,
                ..aas
            },
            OutputMode::Arxiv => Self {
                affil_cmd: "",
                author_template: "{{initials}} {{surname}}{{refs}}",
                affil_template: "({{index}}) {{text}}",
                reference_template: "({{index}})",
                buffer_affiliations: true,
                combine_authors: true,
                author_sep: " and ",
                authors_open: "Authors:",
                authors_close: "\n",
                affil_block_open: "(",
                affil_block_sep: ", ",
                affil_block_close: ")\n\n",
                affil_text: AffiliationText::Institution,
                ..aas
            },
        }
    }

    /// Bracketed option for the author command: affiliation references
    /// when affiliations are buffered, the ORCID otherwise.
    pub fn author_option(&self, orcid: Option<&str>, refs: &str) -> String {
        let value = if self.buffer_affiliations {
            Some(refs)
        } else {
            orcid
        };
        match value {
            Some(v) if !v.is_empty() => format!("[{}]", v),
            _ => String::new(),
        }
    }
}

impl Default for ModeConfig {
    fn default() -> Self {
        Self::for_mode(OutputMode::default())
    }
}

/// Substitute `{{key}}` placeholders in a template.
///
/// One left-to-right pass: substituted values are never rescanned, and
/// unknown placeholders are kept as written.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        let (head, tail) = rest.split_at(start);
        result.push_str(head);

        let body = &tail[2..];
        let matched = body.find("}}").and_then(|end| {
            let key = &body[..end];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, value)| (*value, end))
        });

        match matched {
            Some((value, end)) => {
                result.push_str(value);
                rest = &body[end + 2..];
            }
            None => {
                // Literal brace; a placeholder may still start one char on
                result.push('{');
                rest = &tail[1..];
            }
        }
    }

    result.push_str(rest);
    result
}
