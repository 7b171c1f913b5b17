// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Processing metrics collection and reporting.

use std::time::Duration;

/// Per-rule assembly counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct RuleMetrics {
    /// Canonical text of the rule.
    pub rule: String,
    /// Bouquets assembled by this rule.
    pub bouquets: u64,
    /// Units consumed by this rule's bouquets.
    pub units_consumed: u64,
}

/// Metrics collected while the engine runs.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct EngineMetrics {
    /// Rules accepted, in registration order.
    pub rules: Vec<RuleMetrics>,
    /// Rule definitions rejected by the parser.
    pub rules_rejected: u64,
    /// Arrivals added to the inventory.
    pub arrivals: u64,
    /// Arrival lines naming an unknown key.
    pub arrivals_rejected: u64,
    /// Bouquets assembled across all rules.
    pub bouquets_assembled: u64,
    /// Units moved from the inventory into bouquets.
    pub units_consumed: u64,
    /// Input lines dropped under the skip policy.
    pub lines_skipped: u64,
    /// Wall-clock time of the run, set by [`EngineMetrics::finalise`].
    pub total_duration: Duration,
}

impl EngineMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_rule(&mut self, canonical: String) {
        self.rules.push(RuleMetrics {
            rule: canonical,
            ..Default::default()
        });
    }

    pub fn record_rule_rejected(&mut self) {
        self.rules_rejected += 1;
    }

    pub fn record_arrival(&mut self) {
        self.arrivals += 1;
    }

    pub fn record_arrival_rejected(&mut self) {
        self.arrivals_rejected += 1;
    }

    /// Records a bouquet assembled by rule `index`.
    pub fn record_bouquet(&mut self, index: usize, units: u64) {
        self.bouquets_assembled += 1;
        self.units_consumed += units;
        if let Some(rule) = self.rules.get_mut(index) {
            rule.bouquets += 1;
            rule.units_consumed += units;
        }
    }

    pub fn record_skip(&mut self) {
        self.lines_skipped += 1;
    }

    pub fn finalise(&mut self, total_duration: Duration) {
        self.total_duration = total_duration;
    }

    /// Arrivals processed per second, or 0 if no time was recorded.
    pub fn arrivals_per_second(&self) -> f64 {
        let secs = self.total_duration.as_secs_f64();
        if secs > 0.0 {
            self.arrivals as f64 / secs
        } else {
            0.0
        }
    }

    /// The metrics as a JSON object.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Returns a human-readable summary of the metrics.
    pub fn summary(&self) -> String {
        let mut s = format!(
            "Rules: {} accepted, {} rejected | Arrivals: {} ({} rejected) | \
             Bouquets: {} ({} units) | Skipped lines: {} | Time: {:.2?}",
            self.rules.len(),
            self.rules_rejected,
            self.arrivals,
            self.arrivals_rejected,
            self.bouquets_assembled,
            self.units_consumed,
            self.lines_skipped,
            self.total_duration,
        );
        for (i, r) in self.rules.iter().enumerate() {
            s.push_str(&format!(
                "\n  #{i} {}: {} bouquets, {} units",
                r.rule, r.bouquets, r.units_consumed
            ));
        }
        s
    }
}
