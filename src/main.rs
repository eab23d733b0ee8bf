#![forbid(unsafe_code)]
//! db2authors Command Line Interface
//!
//! Load the author list and database and write an author tex file:
//!
//! ```text
//! db2authors --mode aas > authors.tex
//! ```
//!
//! The paper's author list is `authors.yaml` in the current directory: a
//! sequence of author IDs matching keys in the author database.

use std::path::PathBuf;

use clap::Parser;
use console::style;
use tracing_subscriber::EnvFilter;

use db2authors::commands::{execute_csv, execute_generate, CsvOptions, GenerateOptions};
use db2authors::{InputPaths, OutputMode};

#[derive(Parser)]
#[command(name = "db2authors")]
#[command(about = "Convert the author list and author database to LaTeX author commands")]
#[command(version)]
struct Cli {
    /// Output style
    #[arg(short, long, value_enum, default_value = "aas")]
    mode: ModeArg,

    /// Do not add affiliations at all
    #[arg(short, long)]
    noafil: bool,

    /// Write a comma separated list of author names instead
    #[arg(long)]
    csv: bool,

    /// Author list for this paper
    #[arg(short, long)]
    authors: Option<PathBuf>,

    /// Author database (default: $LSST_TEXMF_DIR/etc/authordb.yaml)
    #[arg(short, long, env = "AUTHORDB")]
    db: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Output style
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default)]
enum ModeArg {
    #[default]
    Aas,
    Spie,
    Adass,
    Arxiv,
}

impl From<ModeArg> for OutputMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Aas => OutputMode::Aas,
            ModeArg::Spie => OutputMode::Spie,
            ModeArg::Adass => OutputMode::Adass,
            ModeArg::Arxiv => OutputMode::Arxiv,
        }
    }
}

fn log_filter(verbose: bool) -> EnvFilter {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("db2authors=warn"));
    if verbose {
        // -v wins over RUST_LOG for our own crate
        filter.add_directive(
            "db2authors=debug"
                .parse()
                .unwrap_or_else(|_| tracing::Level::DEBUG.into()),
        )
    } else {
        filter
    }
}

fn init_logging(verbose: bool) {
    let filter = log_filter(verbose);

    // stdout carries the generated document
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let paths = InputPaths::resolve(cli.authors, cli.db);
    tracing::debug!(
        "Roster {}, database {}",
        paths.authors.display(),
        paths.db.display()
    );

    if cli.csv {
        execute_csv(CsvOptions { paths })
    } else {
        execute_generate(GenerateOptions {
            mode: cli.mode.into(),
            no_affil: cli.noafil,
            paths,
        })
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", style("✗").red(), e);
        std::process::exit(1);
    }
}
