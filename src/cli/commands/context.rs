use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result};

use crate::{
    cli::args::CommonArgs,
    config::{CONFIG_FILE_NAME, Config, load_config},
};

/// Resolved configuration for one invocation.
///
/// Paths from the config file resolve against the directory holding it;
/// paths given on the command line resolve against the working directory.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    pub config: Config,
    pub root_dir: PathBuf,
    pub templates_dir: PathBuf,
    pub messages_dir: PathBuf,
    pub verbose: bool,
}

impl ProjectContext {
    pub fn new(args: &CommonArgs) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to determine the working directory")?;
        Self::from_dir(&cwd, args)
    }

    /// Build a context as if invoked from `start_dir`.
    pub fn from_dir(start_dir: &Path, args: &CommonArgs) -> Result<Self> {
        let loaded = load_config(start_dir)?;

        if args.verbose && !loaded.from_file {
            eprintln!(
                "Note: No {} found, using default configuration",
                CONFIG_FILE_NAME
            );
        }

        let config = loaded.config;
        let root_dir = loaded.root;

        let templates_dir = match &args.templates_dir {
            Some(dir) => start_dir.join(dir),
            None => root_dir.join(&config.templates_dir),
        };
        let messages_dir = match &args.messages_dir {
            Some(dir) => start_dir.join(dir),
            None => root_dir.join(&config.messages_dir),
        };

        Ok(Self {
            config,
            root_dir,
            templates_dir,
            messages_dir,
            verbose: args.verbose,
        })
    }

    /// Path of the canonical English catalog.
    pub fn source_catalog_path(&self) -> PathBuf {
        self.messages_dir.join(self.config.source_catalog_name())
    }

    /// Path of the message documentation catalog.
    pub fn doc_catalog_path(&self) -> PathBuf {
        self.messages_dir.join(self.config.doc_catalog_name())
    }
}
