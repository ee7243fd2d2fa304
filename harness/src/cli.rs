//! CLI command implementations.

use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_json::json;
use tracing::{debug, info};

use crate::case::{SuiteFile, discover_suites};
use crate::config::load_config;
use crate::exit_codes;
use crate::run::run_all;

/// List all available suites with their case counts.
pub fn list_suites(repo_root: &Path, config_path: &Path) -> Result<i32> {
    let cfg = load_config(config_path).context("load harness config")?;
    let suites = discover_suites(&repo_root.join(&cfg.cases_dir))?;
    for suite in suites {
        println!("{} cases={}", suite.suite.id, suite.cases.len());
    }
    Ok(exit_codes::OK)
}

/// Run all suites (or one, by id) and print the report.
pub fn run_suites(
    repo_root: &Path,
    config_path: &Path,
    suite_id: Option<&str>,
    json_output: bool,
) -> Result<i32> {
    let cfg = load_config(config_path).context("load harness config")?;
    let cases_dir = repo_root.join(&cfg.cases_dir);
    debug!(cases_dir = %cases_dir.display(), "discovering suites");

    let suites = select_suites(discover_suites(&cases_dir)?, suite_id)?;
    if suites.is_empty() {
        bail!("no suites found in {}", cases_dir.display());
    }

    info!(suites = suites.len(), "starting run");
    let report = run_all(&suites, &cfg)?;
    let summary = report.summary();

    if json_output {
        let payload = json!({ "summary": summary, "report": report });
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).context("serialize report")?
        );
    } else {
        print!("{report}");
    }

    if summary.outcome.passed() {
        Ok(exit_codes::OK)
    } else {
        Ok(exit_codes::FAILED)
    }
}

fn select_suites(suites: Vec<SuiteFile>, suite_id: Option<&str>) -> Result<Vec<SuiteFile>> {
    let Some(suite_id) = suite_id else {
        return Ok(suites);
    };
    let selected: Vec<SuiteFile> = suites
        .into_iter()
        .filter(|suite| suite.suite.id == suite_id)
        .collect();
    if selected.is_empty() {
        bail!("suite {} not found", suite_id);
    }
    Ok(selected)
}
