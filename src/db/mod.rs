//! @acp:module "Author Database"
//! @acp:summary "Author roster and author/affiliation database documents"
//! @acp:domain cli
//! @acp:layer model
//!
//! Both documents are YAML. The roster is a plain sequence of author IDs:
//!
//! ```yaml
//! - smithj
//! - doej
//! ```
//!
//! The database maps IDs to author records and labels to addresses:
//!
//! ```yaml
//! authors:
//!   smithj:
//!     name: Smith
//!     initials: J.A.
//!     orcid: 0000-0002-1825-0097
//!     email: jsmith@example.org
//!     affil: [Inst1]
//!     altaffil: [Hubble Fellow]
//! affiliations:
//!   Inst1: Some Observatory, 950 N Cherry Ave, Tucson, AZ 85719, USA
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{AuthorListError, Result};

/// @acp:summary "One author entry in the database"
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Author {
    /// Surname
    pub name: String,
    /// Initials or given names, e.g. `J.A.`
    pub initials: String,
    #[serde(default)]
    pub orcid: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Affiliation labels in the order they should be cited
    #[serde(default, deserialize_with = "nullable_list")]
    pub affil: Vec<String>,
    /// Free-text alternate affiliations (e.g. fellowships)
    #[serde(default, deserialize_with = "nullable_list")]
    pub altaffil: Vec<String>,
}

impl Author {
    /// ORCID, treating an empty string like a missing value
    pub fn orcid(&self) -> Option<&str> {
        self.orcid.as_deref().filter(|s| !s.is_empty())
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref().filter(|s| !s.is_empty())
    }
}

/// `affil: ~` / `altaffil: ~` are common in hand-edited databases
fn nullable_list<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// @acp:summary "Author and affiliation tables shared by all papers"
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AuthorDb {
    #[serde(default)]
    pub authors: HashMap<String, Author>,
    /// Affiliation label -> address string
    #[serde(default)]
    pub affiliations: HashMap<String, String>,
}

impl AuthorDb {
    /// Load the database from a YAML file
    pub fn from_yaml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = read_document(path)?;
        let db: Self = serde_yaml::from_str(&content).map_err(|source| AuthorListError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(
            "Loaded {} authors and {} affiliations from {}",
            db.authors.len(),
            db.affiliations.len(),
            path.display()
        );
        Ok(db)
    }

    /// Parse the database from a YAML string
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Look up an author, failing with the offending ID
    pub fn author(&self, id: &str) -> Result<&Author> {
        self.authors
            .get(id)
            .ok_or_else(|| AuthorListError::UnknownAuthor(id.to_string()))
    }

    /// Look up the address for an affiliation label of `author_id`
    pub fn affiliation(&self, author_id: &str, label: &str) -> Result<&str> {
        self.affiliations
            .get(label)
            .map(String::as_str)
            .ok_or_else(|| AuthorListError::UnknownAffiliation {
                author: author_id.to_string(),
                label: label.to_string(),
            })
    }
}

/// @acp:summary "Ordered author IDs for one paper"
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Roster(pub Vec<String>);

impl Roster {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(ids.into_iter().map(Into::into).collect())
    }

    /// Load the roster from a YAML file
    pub fn from_yaml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = read_document(path)?;
        let roster: Self =
            serde_yaml::from_str(&content).map_err(|source| AuthorListError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::info!("Loaded {} author IDs from {}", roster.len(), path.display());
        Ok(roster)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Resolve every ID against the database, stopping at the first unknown one
    pub fn resolve<'a>(&'a self, db: &'a AuthorDb) -> Result<Vec<(&'a str, &'a Author)>> {
        self.iter().map(|id| Ok((id, db.author(id)?))).collect()
    }
}

fn read_document(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| AuthorListError::Read {
        path: path.to_path_buf(),
        source,
    })
}
