//! @acp:module "Author List Renderer"
//! @acp:summary "Turn a roster plus the author database into LaTeX/plain text"
//! @acp:domain cli
//! @acp:layer output
//!
//! The renderer walks the roster once. Per-author modes (aas, spie) write
//! each author block as soon as it is formatted; combined modes (adass,
//! arxiv) collect everything and write a single block at the end, so a
//! failing roster produces no output at all in those modes.

use std::io::Write;

use crate::address::{PaperAuthor, PostalAddress};
use crate::affiliations::{reference_string, AffiliationRegistry};
use crate::config::{fill_template, AffiliationText, ModeConfig};
use crate::db::{Author, AuthorDb, Roster};
use crate::error::Result;
use crate::names::NormalizedName;

/// Comment line introducing the `%\aindex` entries
pub const INDEX_HEADER: &str = "% Yes they said to have these index commands commented out.";

/// @acp:summary "What a render run produced"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderSummary {
    /// Author blocks (or snippets, in combined modes) written
    pub authors: usize,
    /// Distinct affiliations referenced
    pub affiliations: usize,
}

/// Everything formatted for one author
#[derive(Debug, Clone)]
struct AuthorEntry {
    /// Author line or snippet
    text: String,
    /// Formatted affiliation lines for labels first seen with this author
    new_affiliations: Vec<String>,
    /// Per-author listing (aas): alternate affiliations then every label
    own_affiliations: Vec<String>,
}

/// @acp:summary "Single-run author list renderer"
///
/// Owns the affiliation registry and the accumulators for one run.
pub struct AuthorListRenderer<'a> {
    cfg: &'a ModeConfig,
    db: &'a AuthorDb,
    suppress_affiliations: bool,
    preamble: String,
    registry: AffiliationRegistry,
    emitted: usize,
    snippets: Vec<String>,
    affiliation_lines: Vec<String>,
    paper_authors: Vec<PaperAuthor>,
    index_entries: Vec<String>,
}

impl<'a> AuthorListRenderer<'a> {
    pub fn new(cfg: &'a ModeConfig, db: &'a AuthorDb) -> Self {
        Self {
            cfg,
            db,
            suppress_affiliations: false,
            preamble: String::new(),
            registry: AffiliationRegistry::new(),
            emitted: 0,
            snippets: Vec::new(),
            affiliation_lines: Vec::new(),
            paper_authors: Vec::new(),
            index_entries: Vec::new(),
        }
    }

    /// Leave affiliation references and affiliation lines out of the output
    pub fn suppress_affiliations(mut self, suppress: bool) -> Self {
        self.suppress_affiliations = suppress;
        self
    }

    /// Text written before the first author (e.g. the generation banner)
    pub fn with_preamble(mut self, preamble: impl Into<String>) -> Self {
        self.preamble = preamble.into();
        self
    }

    /// Render the roster into `out`
    pub fn render<W: Write>(mut self, roster: &Roster, out: &mut W) -> Result<RenderSummary> {
        let last = roster.len().saturating_sub(1);

        if self.cfg.combine_authors {
            for (pos, id) in roster.iter().enumerate() {
                let entry = self.format_author(id, pos == last)?;
                self.emitted += 1;
                self.snippets.push(entry.text);
                if !self.suppress_affiliations {
                    self.affiliation_lines.extend(entry.new_affiliations);
                }
            }
            let text = self.assemble();
            out.write_all(self.preamble.as_bytes())?;
            out.write_all(text.as_bytes())?;
        } else {
            out.write_all(self.preamble.as_bytes())?;
            for (pos, id) in roster.iter().enumerate() {
                let entry = self.format_author(id, pos == last)?;
                out.write_all(self.author_block(entry).as_bytes())?;
                self.emitted += 1;
            }
        }
        out.flush()?;

        Ok(RenderSummary {
            authors: self.emitted,
            affiliations: self.registry.len(),
        })
    }

    /// Render the roster into a string
    pub fn render_to_string(self, roster: &Roster) -> Result<String> {
        let mut buf = Vec::new();
        self.render(roster, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    fn format_author(&mut self, id: &str, is_last: bool) -> Result<AuthorEntry> {
        let db = self.db;
        let cfg = self.cfg;
        let author = db.author(id)?;
        let name = NormalizedName::new(&author.name, &author.initials);
        tracing::debug!("Formatting author {} ({})", id, name.full());

        if author.affil.is_empty() {
            tracing::warn!("Author {} has no affiliations", id);
        }

        let mut indices = Vec::with_capacity(author.affil.len());
        let mut new_affiliations = Vec::new();
        let mut own_affiliations = Vec::new();

        for label in &author.affil {
            let address = db.affiliation(id, label)?;
            let registration = self.registry.register(label);
            let line = self.affiliation_line(registration.index, address);
            if registration.is_new {
                new_affiliations.push(line.clone());
            }
            own_affiliations.push(line);
            indices.push(registration.index);
        }

        let refs = if self.suppress_affiliations {
            String::new()
        } else {
            let lead = if is_last { "" } else { cfg.lead_reference_sep };
            reference_string(cfg, &indices, lead)
        };

        self.record_index_entry(id, author, &name)?;

        let option = cfg.author_option(author.orcid(), &refs);
        let text = fill_template(
            cfg.author_template,
            &[
                ("option", option.as_str()),
                ("initials", name.initials.as_str()),
                ("surname", name.surname.as_str()),
                ("refs", refs.as_str()),
            ],
        );

        let alternates = author
            .altaffil
            .iter()
            .map(|alt| format!(r"\altaffiliation{{{}}}", alt));

        Ok(AuthorEntry {
            text,
            new_affiliations,
            own_affiliations: alternates.chain(own_affiliations).collect(),
        })
    }

    fn affiliation_line(&self, index: usize, address: &str) -> String {
        let text = match self.cfg.affil_text {
            AffiliationText::Address => address.to_string(),
            AffiliationText::Institution => PostalAddress::parse(address).institution,
        };
        let index = index.to_string();
        fill_template(
            self.cfg.affil_template,
            &[
                ("cmd", self.cfg.affil_cmd),
                ("index", index.as_str()),
                ("text", text.as_str()),
            ],
        )
    }

    /// Accumulate the `\paperauthor` record and `\aindex` entry, using the
    /// first affiliation's address
    fn record_index_entry(&mut self, id: &str, author: &Author, name: &NormalizedName) -> Result<()> {
        let address = match author.affil.first() {
            Some(label) => PostalAddress::parse(self.db.affiliation(id, label)?),
            None => PostalAddress::default(),
        };

        self.paper_authors.push(PaperAuthor {
            name: name.full(),
            email: author.email().unwrap_or_default().to_string(),
            orcid: author.orcid().unwrap_or_default().to_string(),
            address,
        });
        self.index_entries.push(format!(
            r"%\aindex{{{},{}}}",
            name.surname,
            name.index_initials()
        ));
        Ok(())
    }

    /// One block per author: author line, affiliation lines, blank line
    fn author_block(&self, entry: AuthorEntry) -> String {
        let mut block = entry.text;
        block.push('\n');

        if !self.suppress_affiliations {
            let lines = if self.cfg.buffer_affiliations {
                entry.new_affiliations
            } else {
                entry.own_affiliations
            };
            for line in lines {
                block.push_str(&line);
                block.push('\n');
            }
        }

        block.push('\n');
        block
    }

    /// Combined modes: joined authors, affiliation block, index listing
    fn assemble(&self) -> String {
        let cfg = self.cfg;
        let mut text = String::new();

        text.push_str(cfg.authors_open);
        text.push_str(&join_authors(&self.snippets, cfg.author_sep, cfg.last_author_sep));
        text.push_str(cfg.authors_close);

        if !self.suppress_affiliations && !self.registry.is_empty() {
            text.push_str(cfg.affil_block_open);
            text.push_str(&self.affiliation_lines.join(cfg.affil_block_sep));
            text.push_str(cfg.affil_block_close);
        }

        if cfg.index_listing {
            for record in &self.paper_authors {
                text.push_str(&record.to_latex());
                text.push('\n');
            }
            text.push_str(INDEX_HEADER);
            text.push('\n');
            for entry in &self.index_entries {
                text.push_str(entry);
                text.push('\n');
            }
        }

        text
    }
}

/// Join snippets, using `last_sep` before the final one
pub fn join_authors(items: &[String], sep: &str, last_sep: &str) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{}{}{}", init.join(sep), last_sep, last),
    }
}
