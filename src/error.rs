//! @acp:module "Errors"
//! @acp:summary "Error types for author list generation"
//! @acp:domain cli
//! @acp:layer model

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, AuthorListError>;

/// Errors raised while loading documents or rendering an author list
#[derive(Debug, Error)]
pub enum AuthorListError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Author ID {0} not defined in author database.")]
    UnknownAuthor(String),

    #[error("Affiliation {label} of author {author} not defined in author database.")]
    UnknownAffiliation { author: String, label: String },
}
