//! Outcome types and the final accuracy report.

pub mod console;
pub mod progress;

use serde::Serialize;
use std::collections::BTreeMap;

/// Result of comparing the oracle's answer to ground truth. Every
/// dispatched test case yields exactly one outcome; a failed decode call
/// counts as `Fail`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Pass,
    Fail,
}

/// Pass/fail counters for one strength's batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StrengthTally {
    pub pass: usize,
    pub fail: usize,
}

impl StrengthTally {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Pass => self.pass += 1,
            Outcome::Fail => self.fail += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.pass + self.fail
    }
}

/// Final mapping from strength to tally plus derived totals. Built once at
/// the end of a run, read-only thereafter.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub tallies: BTreeMap<i32, StrengthTally>,
    pub total_pass: usize,
    pub total_fail: usize,
    /// `total_pass / (total_pass + total_fail)`; `None` when no tests ran
    /// (undefined, not a crash).
    pub success_rate: Option<f64>,
    /// Sampling seed used for the run, for reproduction.
    pub seed: u64,
}

impl RunReport {
    pub fn summarize(tallies: BTreeMap<i32, StrengthTally>, seed: u64) -> Self {
        let total_pass: usize = tallies.values().map(|t| t.pass).sum();
        let total_fail: usize = tallies.values().map(|t| t.fail).sum();
        let total = total_pass + total_fail;
        let success_rate = if total == 0 {
            None
        } else {
            Some(total_pass as f64 / total as f64)
        };
        Self {
            tallies,
            total_pass,
            total_fail,
            success_rate,
            seed,
        }
    }

    pub fn total_tests(&self) -> usize {
        self.total_pass + self.total_fail
    }
}

#[cfg(test)]
mod tests {
    use super::{Outcome, RunReport, StrengthTally};
    use std::collections::BTreeMap;

    #[test]
    fn summarize_sums_across_strengths() {
        let mut tallies = BTreeMap::new();
        tallies.insert(1, StrengthTally { pass: 9, fail: 1 });
        tallies.insert(2, StrengthTally { pass: 7, fail: 3 });
        tallies.insert(3, StrengthTally { pass: 0, fail: 10 });

        let report = RunReport::summarize(tallies, 42);
        assert_eq!(report.total_pass, 16);
        assert_eq!(report.total_fail, 14);
        assert_eq!(report.total_tests(), 30);
        let rate = report.success_rate.unwrap();
        assert!((rate - 16.0 / 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_tests_yields_undefined_rate() {
        let report = RunReport::summarize(BTreeMap::new(), 0);
        assert_eq!(report.total_tests(), 0);
        assert!(report.success_rate.is_none());
    }

    #[test]
    fn tally_records_outcomes() {
        let mut tally = StrengthTally::default();
        tally.record(Outcome::Pass);
        tally.record(Outcome::Pass);
        tally.record(Outcome::Fail);
        assert_eq!(tally, StrengthTally { pass: 2, fail: 1 });
        assert_eq!(tally.total(), 3);
    }
}
