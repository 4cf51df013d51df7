//! CLI argument definitions using clap.
//!
//! ## Actions
//!
//! - `sync`: Copy the English template files into the English JSON catalog
//! - `export`: Write every language catalog out as template files under `--destdir`
//! - `test`: Check that the English and documentation catalogs share the same keys

use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Action to run
    #[arg(value_enum)]
    pub action: Action,

    /// Root directory to install exported templates into (required for export)
    #[arg(long)]
    pub destdir: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Options shared by all actions.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// English template directory (overrides config file)
    #[arg(long)]
    pub templates_dir: Option<PathBuf>,

    /// Catalog directory (overrides config file)
    #[arg(long)]
    pub messages_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Action {
    /// Copy English template files into the English catalog
    Sync,
    /// Export all catalogs as template files
    Export,
    /// Check that the English and documentation catalogs have the same keys
    Test,
}
