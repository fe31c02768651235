//! CLI - command-line argument parsing.
//!
//! Defines the CLI structure using clap. Keeps argument parsing separate
//! from execution logic.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default dataset path: the ShipFlex order export this tool was built around.
pub const DEFAULT_DATA_PATH: &str = "Order Data (For Data Studio) - ShipFlex.csv";

#[derive(Parser)]
#[command(name = "orderlens")]
#[command(about = "Ask questions about your order data", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the order dataset CSV
    #[arg(long, global = true, default_value = DEFAULT_DATA_PATH)]
    pub data: PathBuf,

    /// Subcommand (if not provided, starts the interactive prompt)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Answer a single free-text question and exit
    Ask {
        /// The question, e.g. "total orders" or "average delivery time"
        #[arg(required = true)]
        query: Vec<String>,

        /// Print the structured reply as JSON
        #[arg(long)]
        raw: bool,
    },

    /// Show a dataset overview
    Summary {
        /// Print the overview as JSON
        #[arg(long)]
        raw: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_starts_the_prompt() {
        let cli = Cli::try_parse_from(["orderlens"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.data, PathBuf::from(DEFAULT_DATA_PATH));
    }

    #[test]
    fn test_ask_collects_free_text() {
        let cli = Cli::try_parse_from(["orderlens", "ask", "total", "orders"]).unwrap();
        match cli.command {
            Some(Commands::Ask { query, raw }) => {
                assert_eq!(query.join(" "), "total orders");
                assert!(!raw);
            }
            _ => panic!("expected ask subcommand"),
        }
    }

    #[test]
    fn test_ask_requires_a_query() {
        assert!(Cli::try_parse_from(["orderlens", "ask"]).is_err());
    }

    #[test]
    fn test_data_flag_overrides_default() {
        let cli = Cli::try_parse_from(["orderlens", "--data", "orders.csv", "summary"]).unwrap();
        assert_eq!(cli.data, PathBuf::from("orders.csv"));
    }
}
