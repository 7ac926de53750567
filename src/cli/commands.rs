use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "safet-guard")]
#[command(about = "Deadline guard and appeal drafter for marketplace SAFE-T return claims")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check the claim window for a single order
    Check {
        /// Order date in YYYY-MM-DD form
        order_date: String,

        /// Order ID to validate alongside the date
        #[arg(short, long)]
        order_id: Option<String>,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Aggregate a claim batch into a dashboard summary
    Dashboard {
        /// JSON file holding an array of {order_id, order_date} claims
        #[arg(long)]
        file: Option<PathBuf>,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Draft an appeal letter for a denied claim
    Appeal {
        /// Order ID the appeal concerns
        order_id: String,

        /// Reason code (EMPTY_BOX, DAMAGED, SWITCHED)
        #[arg(short, long)]
        reason: String,

        /// Ask the configured AI generator, falling back to the template
        #[arg(long)]
        ai: bool,
    },

    /// Show configuration and generator capability status
    Init,
}
