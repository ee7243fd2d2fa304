//! Run orchestration.
//!
//! Judges every case of the selected suites and, when enabled, the
//! performance scenario.

use anyhow::{Context, Result};
use tracing::{info, instrument};

use crate::case::SuiteFile;
use crate::config::HarnessConfig;
use crate::judge::judge_case;
use crate::perf::run_performance;
use crate::report::{RunReport, SuiteReport};

#[instrument(skip_all, fields(suite_id = %suite.suite.id))]
pub fn run_suite(suite: &SuiteFile) -> Result<SuiteReport> {
    let cases = suite
        .cases
        .iter()
        .enumerate()
        .map(|(index, case)| {
            judge_case(case).with_context(|| format!("judge cases[{index}]"))
        })
        .collect::<Result<Vec<_>>>()?;
    let report = SuiteReport {
        id: suite.suite.id.clone(),
        description: suite.suite.description.clone(),
        cases,
    };
    info!(passed = report.passed(), total = report.total(), "suite finished");
    Ok(report)
}

pub fn run_all(suites: &[SuiteFile], cfg: &HarnessConfig) -> Result<RunReport> {
    let suites = suites
        .iter()
        .map(|suite| run_suite(suite).with_context(|| format!("run suite {}", suite.suite.id)))
        .collect::<Result<Vec<_>>>()?;
    let performance = if cfg.performance.enabled {
        Some(run_performance(&cfg.performance).context("run performance scenario")?)
    } else {
        None
    };
    Ok(RunReport {
        suites,
        performance,
    })
}
