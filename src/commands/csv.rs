//! @acp:module "CSV Command"
//! @acp:summary "Comma-separated author names for submission forms"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::{Context, Result};

use crate::config::InputPaths;
use crate::db::{AuthorDb, Roster};

/// Options for the csv command
#[derive(Debug, Clone)]
pub struct CsvOptions {
    /// Roster and database locations
    pub paths: InputPaths,
}

/// `Initials Surname` for every roster author, comma separated, as written
/// in the database
pub fn csv_line(roster: &Roster, db: &AuthorDb) -> crate::Result<String> {
    let names = roster
        .resolve(db)?
        .into_iter()
        .map(|(_, author)| format!("{} {}", author.initials, author.name))
        .collect::<Vec<_>>();
    Ok(names.join(", "))
}

/// Execute the csv command
pub fn execute_csv(options: CsvOptions) -> Result<()> {
    let roster = Roster::from_yaml(&options.paths.authors)
        .context("Failed to load author roster")?;
    let db = AuthorDb::from_yaml(&options.paths.db).context("Failed to load author database")?;

    println!("{}", csv_line(&roster, &db)?);
    Ok(())
}
