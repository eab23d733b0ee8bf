//! @acp:module "Generate Command"
//! @acp:summary "Write the author list for the selected output mode"
//! @acp:domain cli
//! @acp:layer handler

use std::io::Write;

use anyhow::{Context, Result};

use crate::config::{InputPaths, OutputMode};
use crate::db::{AuthorDb, Roster};
use crate::render::{AuthorListRenderer, RenderSummary};

/// Options for the generate command
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Output style
    pub mode: OutputMode,
    /// Leave affiliations out entirely
    pub no_affil: bool,
    /// Roster and database locations
    pub paths: InputPaths,
}

/// Static header naming the generator and how to regenerate the file
pub fn generation_banner(mode: OutputMode, no_affil: bool) -> String {
    let mut command = format!("db2authors --mode {}", mode);
    if no_affil {
        command.push_str(" --noafil");
    }
    format!(
        "%% DO NOT EDIT THIS FILE. IT IS GENERATED FROM db2authors\n\
         %% Regenerate using:\n\
         %%    {}\n\
         \n",
        command
    )
}

/// Load both documents and render the author list into `out`
pub fn generate<W: Write>(options: &GenerateOptions, out: &mut W) -> Result<RenderSummary> {
    let roster = Roster::from_yaml(&options.paths.authors)
        .context("Failed to load author roster")?;
    let db = AuthorDb::from_yaml(&options.paths.db).context("Failed to load author database")?;

    let cfg = options.mode.config();
    let summary = AuthorListRenderer::new(&cfg, &db)
        .suppress_affiliations(options.no_affil)
        .with_preamble(generation_banner(options.mode, options.no_affil))
        .render(&roster, out)?;

    tracing::info!(
        "Wrote {} authors with {} affiliations in {} mode",
        summary.authors,
        summary.affiliations,
        options.mode
    );
    Ok(summary)
}

/// Execute the generate command, writing to stdout
pub fn execute_generate(options: GenerateOptions) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    generate(&options, &mut out)?;
    Ok(())
}
