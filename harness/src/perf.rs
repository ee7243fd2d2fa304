//! Performance scenario: one large rotation under a time budget.

use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use rotator::rotate_left;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::config::PerformanceConfig;
use crate::outcome::Outcome;

#[derive(Debug, Clone, Serialize)]
pub struct PerfOutcome {
    pub length: usize,
    pub shift: i64,
    pub elapsed_ms: f64,
    pub time_limit_ms: u64,
    /// Whether the rotated output matched the independently built expectation.
    pub correct: bool,
    pub outcome: Outcome,
}

/// Rotate `0..length` by `shift`, timing the call.
#[instrument(skip_all, fields(length = cfg.length, shift = cfg.shift))]
pub fn run_performance(cfg: &PerformanceConfig) -> Result<PerfOutcome> {
    if cfg.length == 0 {
        bail!("performance.length must be > 0");
    }
    let last = i64::try_from(cfg.length).context("performance.length out of range")?;
    let sequence: Vec<i64> = (0..last).collect();

    let started = Instant::now();
    let rotated = rotate_left(&sequence, cfg.shift).context("rotate performance sequence")?;
    let elapsed = started.elapsed();

    let pivot = cfg.shift % last;
    let correct = rotated.iter().copied().eq((pivot..last).chain(0..pivot));
    let within_limit = elapsed <= Duration::from_millis(cfg.time_limit_ms);
    debug!(?elapsed, correct, within_limit, "performance rotation finished");

    Ok(PerfOutcome {
        length: cfg.length,
        shift: cfg.shift,
        elapsed_ms: elapsed.as_secs_f64() * 1000.0,
        time_limit_ms: cfg.time_limit_ms,
        correct,
        outcome: Outcome::from_passed(correct && within_limit),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scenario_is_correct() {
        let perf = run_performance(&PerformanceConfig::default()).expect("perf");
        assert!(perf.correct);
        assert_eq!(perf.length, 1000);
        assert!(perf.elapsed_ms >= 0.0);
    }

    #[test]
    fn exact_multiple_of_length_is_identity() {
        let cfg = PerformanceConfig {
            length: 10,
            shift: 30,
            ..PerformanceConfig::default()
        };
        let perf = run_performance(&cfg).expect("perf");
        assert!(perf.correct);
    }

    #[test]
    fn negative_shift_is_an_error() {
        let cfg = PerformanceConfig {
            shift: -1,
            ..PerformanceConfig::default()
        };
        let err = run_performance(&cfg).expect_err("negative shift");
        assert!(format!("{err:#}").contains("non-negative"));
    }
}
