//! Command line argument parsing for the Synonymous CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SynonymousError};
use crate::synonym::{GraphBackend, StoreConfig};

/// Synonymous - an in-memory, transitively-closed synonym store
#[derive(Parser, Debug, Clone)]
#[command(name = "synonymous")]
#[command(about = "An in-memory, transitively-closed synonym store")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Synonymous Contributors")]
#[command(long_about = None)]
pub struct SynonymousArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(flatten)]
    pub store: StoreArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SynonymousArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Options controlling how the store is built.
#[derive(Args, Debug, Clone, Default)]
pub struct StoreArgs {
    /// Store configuration file (JSON)
    #[arg(long, value_name = "CONFIG_FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Storage backend for synonym groups
    #[arg(long, env = "SYNONYMOUS_BACKEND", global = true)]
    pub backend: Option<GraphBackend>,

    /// Do not merge the built-in seed pairs
    #[arg(long, global = true)]
    pub no_seed: bool,

    /// JSON file of synonym groups to merge at startup
    #[arg(long, value_name = "SEED_FILE", env = "SYNONYMOUS_SEED_FILE", global = true)]
    pub seed_file: Option<PathBuf>,
}

impl StoreArgs {
    /// Resolve the store configuration: config file first, flags on top.
    pub fn to_config(&self) -> Result<StoreConfig> {
        let mut config = match &self.config {
            Some(path) => StoreConfig::from_file(path)?,
            None => StoreConfig::default(),
        };

        if let Some(backend) = self.backend {
            config.backend = backend;
        }
        if self.no_seed {
            config.seed_defaults = false;
        }
        if let Some(seed_file) = &self.seed_file {
            config.seed_file = Some(seed_file.clone());
        }

        Ok(config)
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Search the synonyms of a word
    Search(SearchArgs),

    /// Add a synonym pair and show the resulting group
    Add(AddArgs),

    /// List every known word
    Words,

    /// List every synonym group
    Groups,

    /// Show store statistics
    Stats,

    /// Serve JSON request lines from stdin until EOF
    Serve,
}

/// Arguments for searching
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Word to look up
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Extra pairs to add before searching (WORD=SYNONYM)
    #[arg(short, long = "pair", value_name = "WORD=SYNONYM", value_parser = parse_pair)]
    pub pairs: Vec<(String, String)>,
}

/// Arguments for adding a pair
#[derive(Parser, Debug, Clone)]
pub struct AddArgs {
    /// Word
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Synonym of the word
    #[arg(value_name = "SYNONYM")]
    pub synonym: String,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

/// Parse a `WORD=SYNONYM` argument.
fn parse_pair(value: &str) -> Result<(String, String)> {
    let (word, synonym) = value.split_once('=').ok_or_else(|| {
        SynonymousError::invalid_input(format!("Expected WORD=SYNONYM, got '{value}'"))
    })?;
    Ok((word.to_string(), synonym.to_string()))
}
