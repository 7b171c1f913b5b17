// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # bouquet
//!
//! Command-line interface for the bouquet assembly engine.
//!
//! ## Usage
//! ```bash
//! # Assemble bouquets from a rule block and an arrival stream
//! bouquet run < input.txt
//! bouquet run --input input.txt --strategy most-abundant --show-inventory
//!
//! # Validate rule definitions
//! bouquet check-rule AS2aS1bS3 BL0L5
//! ```

mod commands;

use clap::{Parser, Subcommand};
use engine::ErrorPolicy;

#[derive(Parser)]
#[command(
    name = "bouquet",
    about = "Assembles bouquets from streaming flower arrivals",
    version,
    author
)]
struct Cli {
    /// Path to a TOML configuration file (CLI arguments override it).
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read rules, a blank line, then arrivals; print each bouquet.
    Run {
        /// Input file (defaults to stdin).
        #[arg(short, long)]
        input: Option<std::path::PathBuf>,

        /// Fill strategy: first-fit, most-abundant.
        #[arg(short, long)]
        strategy: Option<String>,

        /// What to do with a bad line: skip, abort.
        #[arg(long)]
        on_error: Option<ErrorPolicy>,

        /// Print the residual inventory and metrics to stderr at the end.
        #[arg(long)]
        show_inventory: bool,
    },

    /// Parse rule definitions and print their structure.
    CheckRule {
        /// One or more rule definitions, e.g. "AS2aS1bS3".
        #[arg(required = true)]
        definitions: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging based on verbosity.
    commands::init_tracing(cli.verbose);

    match cli.command {
        Commands::Run {
            input,
            strategy,
            on_error,
            show_inventory,
        } => commands::run::execute(cli.config, input, strategy, on_error, show_inventory),
        Commands::CheckRule { definitions } => commands::check_rule::execute(&definitions),
    }
}
