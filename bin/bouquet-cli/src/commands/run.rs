// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `bouquet run` command: drive the engine over a line stream.
//!
//! Bouquets go to stdout, one per line. Logs and the optional inventory
//! report go to stderr so stdout stays machine-readable.

use anyhow::Context;
use engine::{run_stream, BouquetEngine, EngineConfig, ErrorPolicy};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter};
use std::path::PathBuf;

pub fn execute(
    config_path: Option<PathBuf>,
    input: Option<PathBuf>,
    strategy: Option<String>,
    on_error: Option<ErrorPolicy>,
    show_inventory: bool,
) -> anyhow::Result<()> {
    // ── Configuration ──────────────────────────────────────────
    let mut config = match &config_path {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::default(),
    };
    if let Some(strategy) = strategy {
        config.strategy = strategy;
    }
    if let Some(policy) = on_error {
        config.on_error = policy;
    }
    config.show_inventory |= show_inventory;

    tracing::info!(
        strategy = %config.strategy,
        on_error = %config.on_error,
        config = ?config_path,
        "starting run"
    );

    let mut engine = BouquetEngine::from_config(&config)?;

    // ── Stream ─────────────────────────────────────────────────
    let reader: Box<dyn BufRead> = match &input {
        Some(path) => Box::new(BufReader::new(File::open(path).with_context(|| {
            format!("cannot open input '{}'", path.display())
        })?)),
        None => Box::new(io::stdin().lock()),
    };
    let writer = BufWriter::new(io::stdout().lock());

    let result = run_stream(&mut engine, reader, writer, config.on_error);

    // The report describes the state reached, even after an abort.
    if config.show_inventory {
        eprintln!("{}", engine.inventory().to_json()?);
        eprintln!("{}", engine.metrics().summary());
        eprintln!("{}", engine.inventory().stats().summary());
    }

    result.context("processing stopped")?;
    Ok(())
}
