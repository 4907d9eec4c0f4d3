pub mod products;
pub mod sales;
pub mod users;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use till_common::money::DEFAULT_CURRENCY_SYMBOL;

#[derive(Parser)]
#[command(name = "till")]
#[command(about = "A point-of-sale counter for the terminal.")]
#[command(version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Reduce output (-q hides headers, -qq prints summaries only)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Currency symbol used for every amount
    #[arg(long, global = true, default_value = DEFAULT_CURRENCY_SYMBOL)]
    pub currency: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run an interactive sales session reading commands from stdin
    #[command(alias = "s")]
    Sales {
        /// JSON product list to sell from instead of the built-in stock
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// List products, optionally searched and filtered by category
    #[command(alias = "p")]
    Products {
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// Case-insensitive text to look for in any column
        #[arg(short, long)]
        search: Option<String>,
        /// Exact category to keep
        #[arg(short, long)]
        category: Option<String>,
    },
    /// List users, optionally deleting one first
    #[command(alias = "u")]
    Users {
        /// JSON user list instead of the built-in directory
        #[arg(long)]
        users: Option<PathBuf>,
        #[arg(short, long)]
        search: Option<String>,
        /// Exact role to keep
        #[arg(short, long)]
        role: Option<String>,
        /// Email of the user to delete
        #[arg(long)]
        delete: Option<String>,
        /// Skip the delete confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
