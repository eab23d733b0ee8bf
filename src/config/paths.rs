//! @acp:module "Input Paths"
//! @acp:summary "Locate the roster and author database documents"
//! @acp:domain cli
//! @acp:layer config

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Roster file looked up in the current directory
pub const DEFAULT_AUTHORS_FILE: &str = "authors.yaml";

/// Environment variable pointing at the texmf tree holding `etc/authordb.yaml`
pub const TEXMF_DIR_ENV: &str = "LSST_TEXMF_DIR";

const DB_RELATIVE_PATH: &str = "etc/authordb.yaml";

/// @acp:summary "Resolved locations of the two input documents"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputPaths {
    /// Ordered list of author IDs for this paper
    pub authors: PathBuf,
    /// Shared author and affiliation database
    pub db: PathBuf,
}

impl InputPaths {
    /// Use the given paths, falling back to the defaults for any that are missing
    pub fn resolve(authors: Option<PathBuf>, db: Option<PathBuf>) -> Self {
        Self {
            authors: authors.unwrap_or_else(|| PathBuf::from(DEFAULT_AUTHORS_FILE)),
            db: db.unwrap_or_else(default_db_path),
        }
    }
}

/// Default database location.
///
/// `$LSST_TEXMF_DIR/etc/authordb.yaml` when the variable is set, otherwise
/// `etc/authordb.yaml` next to the directory holding the executable.
pub fn default_db_path() -> PathBuf {
    if let Some(path) = db_path_for_texmf(std::env::var_os(TEXMF_DIR_ENV).as_deref()) {
        return path;
    }

    match std::env::current_exe() {
        Ok(exe) => db_path_for_exe(&exe),
        Err(e) => {
            tracing::debug!("Cannot locate executable ({}), using relative db path", e);
            PathBuf::from(DB_RELATIVE_PATH)
        }
    }
}

/// `<texmf>/etc/authordb.yaml`, unless the variable is unset or empty
fn db_path_for_texmf(texmf: Option<&OsStr>) -> Option<PathBuf> {
    texmf
        .filter(|dir| !dir.is_empty())
        .map(|dir| Path::new(dir).join(DB_RELATIVE_PATH))
}

/// `<exe dir>/../etc/authordb.yaml`
fn db_path_for_exe(exe: &Path) -> PathBuf {
    let bin_dir = exe.parent().unwrap_or_else(|| Path::new("."));
    let root = bin_dir.parent().unwrap_or(bin_dir);
    root.join(DB_RELATIVE_PATH)
}
