#![forbid(unsafe_code)]

//! @acp:module "db2authors Library"
//! @acp:summary "Generate LaTeX author lists from a YAML author database"
//! @acp:domain cli
//! @acp:layer api
//! @acp:stability stable
//!
//! # db2authors
//!
//! Converts a paper's author roster plus a shared author/affiliation
//! database into ready-to-include author text.
//!
//! ## Output modes
//!
//! - **aas**: AASTeX 6.1 `\author[ORCID]` with `\altaffiliation` and `\affiliation`
//! - **spie**: `\author[refs]` with numbered `\affil[n]` entries
//! - **adass**: one `\author{}` block, `\affil` footnotes, `\paperauthor` index
//! - **arxiv**: plain text for the arXiv submission form
//!
//! ## Example
//!
//! ```rust,no_run
//! use db2authors::{AuthorDb, AuthorListRenderer, OutputMode, Roster};
//!
//! fn main() -> anyhow::Result<()> {
//!     let roster = Roster::from_yaml("authors.yaml")?;
//!     let db = AuthorDb::from_yaml("etc/authordb.yaml")?;
//!
//!     let cfg = OutputMode::Adass.config();
//!     let text = AuthorListRenderer::new(&cfg, &db).render_to_string(&roster)?;
//!     print!("{}", text);
//!
//!     Ok(())
//! }
//! ```

pub mod address;
pub mod affiliations;
pub mod commands;
pub mod config;
pub mod db;
pub mod error;
pub mod names;
pub mod render;

// Re-exports
pub use address::{PaperAuthor, PostalAddress};
pub use affiliations::{AffiliationRegistry, Registration};
pub use config::{AffiliationText, InputPaths, ModeConfig, OutputMode};
pub use db::{Author, AuthorDb, Roster};
pub use error::{AuthorListError, Result};
pub use names::{index_initials, normalize_initials, normalize_surname, NormalizedName};
pub use render::{AuthorListRenderer, RenderSummary};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
