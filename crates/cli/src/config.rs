//! Command-line and environment configuration.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use stockbook_observability::LogFormat;

#[derive(Debug, Parser)]
#[command(name = "stockbook", version, about = "Single-user inventory ledger")]
pub struct Cli {
    /// Inventory file used by one-shot commands and by `save`/`load` without a path.
    #[arg(short, long, env = "STOCKBOOK_FILE", default_value = "inventory.json")]
    pub file: PathBuf,

    /// Log output format: `pretty` or `json`. Filter with `RUST_LOG`.
    #[arg(long, env = "STOCKBOOK_LOG_FORMAT", default_value = "pretty")]
    pub log_format: LogFormat,

    /// Run a single command against `--file` and exit. Without one, starts the
    /// interactive shell on an empty inventory.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Start the interactive shell
    Shell,
    #[command(flatten)]
    Once(OneShot),
}

/// Commands that run once against `--file` and exit.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum OneShot {
    /// Create a new item with quantity 0
    Create {
        #[arg(allow_negative_numbers = true)]
        id: i64,
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },
    /// Add stock to an item (1-100 per call)
    Add {
        #[arg(allow_negative_numbers = true)]
        id: i64,
        #[arg(allow_negative_numbers = true)]
        qty: i64,
    },
    /// Remove stock from an item (1-100 per call)
    Remove {
        #[arg(allow_negative_numbers = true)]
        id: i64,
        #[arg(allow_negative_numbers = true)]
        qty: i64,
    },
    /// Print the inventory table
    List,
}

impl OneShot {
    /// Whether running this command must write the file back.
    pub fn is_mutation(&self) -> bool {
        !matches!(self, OneShot::List)
    }
}
