// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Line-oriented input driver.
//!
//! Input is a block of rule definitions, one blank line, then one flower
//! key per line:
//!
//! ```text
//! AS2aS1bS3      ← rule
//! BL0L5          ← rule
//!                ← switch to arrivals
//! aS             ← arrival
//! bS
//! ```
//!
//! Only the first blank line changes phase; later blank lines are ignored.
//! A trailing `\r` is stripped from every line.

use crate::{Bouquet, BouquetEngine, EngineError, EngineMetrics, ErrorPolicy};
use std::io::{BufRead, Write};
use std::time::Instant;

/// Which kind of line the dispatcher expects next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    AwaitingRules,
    AwaitingArrivals,
}

/// What a single line did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// A rule was registered at this index.
    RuleAdded(usize),
    /// The blank separator line; arrivals follow.
    PhaseChanged,
    /// A blank line after the separator.
    Blank,
    /// An arrival that completed a bouquet.
    Bouquet(Bouquet),
    /// An arrival that completed nothing.
    Stocked,
}

/// Routes input lines to the engine according to the current phase.
#[derive(Debug, Default)]
pub struct LineDispatcher {
    phase: Phase,
    line_number: usize,
}

impl LineDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of lines dispatched so far.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Handles one line. Errors carry the 1-based line number.
    pub fn dispatch(
        &mut self,
        engine: &mut BouquetEngine,
        line: &str,
    ) -> Result<LineOutcome, EngineError> {
        self.line_number += 1;
        let line = line.strip_suffix('\r').unwrap_or(line);

        let outcome = match (self.phase, line.is_empty()) {
            (Phase::AwaitingRules, true) => {
                self.phase = Phase::AwaitingArrivals;
                tracing::debug!(
                    line = self.line_number,
                    rules = engine.num_rules(),
                    "rule block closed"
                );
                Ok(LineOutcome::PhaseChanged)
            }
            (Phase::AwaitingRules, false) => engine.add_rule(line).map(LineOutcome::RuleAdded),
            (Phase::AwaitingArrivals, true) => Ok(LineOutcome::Blank),
            (Phase::AwaitingArrivals, false) => engine.add_flower(line).map(|b| match b {
                Some(bouquet) => LineOutcome::Bouquet(bouquet),
                None => LineOutcome::Stocked,
            }),
        };
        outcome.map_err(|e| e.at_line(self.line_number))
    }

    /// Handles one raw line, with or without its trailing `\n`.
    ///
    /// Bytes that are not UTF-8 reject the line as `InvalidText`, counted
    /// against the current phase, and leave the engine untouched.
    pub fn dispatch_bytes(
        &mut self,
        engine: &mut BouquetEngine,
        raw: &[u8],
    ) -> Result<LineOutcome, EngineError> {
        let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
        match std::str::from_utf8(raw) {
            Ok(line) => self.dispatch(engine, line),
            Err(_) => {
                self.line_number += 1;
                match self.phase {
                    Phase::AwaitingRules => engine.metrics_mut().record_rule_rejected(),
                    Phase::AwaitingArrivals => engine.metrics_mut().record_arrival_rejected(),
                }
                let text = String::from_utf8_lossy(raw).into_owned();
                Err(EngineError::InvalidText { text }.at_line(self.line_number))
            }
        }
    }
}

/// Drives `engine` over every line of `input`, writing one bouquet per
/// line to `output`.
///
/// Under [`ErrorPolicy::Skip`] recoverable errors are logged and the line
/// is dropped. Unrecoverable errors, and every error under
/// [`ErrorPolicy::Abort`], stop the run; bouquets already written stay
/// written.
pub fn run_stream<R: BufRead, W: Write>(
    engine: &mut BouquetEngine,
    mut input: R,
    mut output: W,
    policy: ErrorPolicy,
) -> Result<EngineMetrics, EngineError> {
    let start = Instant::now();
    let mut dispatcher = LineDispatcher::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        match dispatcher.dispatch_bytes(engine, &buf) {
            Ok(LineOutcome::Bouquet(bouquet)) => writeln!(output, "{bouquet}")?,
            Ok(_) => {}
            Err(e) if policy == ErrorPolicy::Skip && e.is_recoverable() => {
                tracing::warn!("Skipping {e}");
                engine.metrics_mut().record_skip();
            }
            Err(e) => {
                output.flush()?;
                return Err(e);
            }
        }
    }
    output.flush()?;

    if dispatcher.phase() == Phase::AwaitingRules {
        tracing::debug!("input ended before any arrivals");
    }

    engine.metrics_mut().finalise(start.elapsed());
    tracing::info!("{}", engine.metrics().summary());
    Ok(engine.metrics().clone())
}
