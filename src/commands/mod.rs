//! @acp:module "Commands"
//! @acp:summary "CLI command implementations"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Provides implementations for the CLI entry points.
//! Each command is in its own submodule for maintainability.

pub mod csv;
pub mod generate;

pub use csv::{csv_line, execute_csv, CsvOptions};
pub use generate::{execute_generate, generate, generation_banner, GenerateOptions};
