//! CLI definition using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use trashtruck_types::OutputFormat;

#[derive(Parser)]
#[command(name = "trash-truck")]
#[command(version)]
#[command(about = "Run a trash truck through pickups, compression, driving and offloading")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format for the final truck state (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output (debug logging)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the demonstration: pick up 30, compress, drive 100 miles, offload
    Demo,

    /// Run a list of operations against the configured truck
    Run {
        /// Operations in order: pickup:<amount>, compress, drive:<miles>, offload, sniff
        #[arg(required = true)]
        operations: Vec<String>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set truck type label
        #[arg(long)]
        set_type: Option<String>,

        /// Set driver name
        #[arg(long)]
        set_driver_name: Option<String>,

        /// Set driver age
        #[arg(long)]
        set_driver_age: Option<u32>,

        /// Set starting fuel (gallons)
        #[arg(long)]
        set_fuel: Option<f64>,

        /// Set capacity
        #[arg(long)]
        set_capacity: Option<f64>,

        /// Set license plate
        #[arg(long)]
        set_plate: Option<String>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
