use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::export::DEFAULT_EXPORT_FILE;

#[derive(Parser, Debug)]
#[command(name = "pedidos")]
#[command(version, about = "Interactive order entry with CSV export")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start an interactive order-entry session
    Session {
        /// YAML file with the selectable customers
        #[arg(long, value_name = "FILE")]
        customers: Option<PathBuf>,

        /// Default target file for the session's 'export' command
        #[arg(long, value_name = "FILE", default_value = DEFAULT_EXPORT_FILE)]
        output: PathBuf,
    },

    /// Print the customer directory
    Customers {
        /// YAML file with the customers
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
