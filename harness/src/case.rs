//! Scenario suite parsing and validation.
//!
//! Suites are TOML files holding a list of rotation scenarios.
//! See `harness/cases/` for the shipped suites.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use rotator::ErrorKind;
use serde::Deserialize;
use serde_json::Value;

/// A parsed suite file.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SuiteFile {
    pub suite: SuiteMeta,
    #[serde(default)]
    pub cases: Vec<Case>,
}

/// Suite metadata.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SuiteMeta {
    /// Unique identifier (slug format: `[a-z0-9_-]+`).
    pub id: String,
    #[serde(default)]
    pub description: String,
}

/// One scenario. `sequence` and `shift` are kept untyped so that suites can
/// describe ill-typed requests; a missing field is passed on as absent.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Case {
    pub description: String,
    #[serde(default)]
    pub sequence: Option<Value>,
    #[serde(default)]
    pub shift: Option<Value>,
    #[serde(default)]
    pub expect: Option<Vec<i64>>,
    #[serde(default)]
    pub error: Option<ErrorKind>,
}

/// What a scenario expects from the rotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expectation {
    Rotated(Vec<i64>),
    Fails(ErrorKind),
}

impl Case {
    pub fn expectation(&self) -> Result<Expectation> {
        match (&self.expect, self.error) {
            (Some(values), None) => Ok(Expectation::Rotated(values.clone())),
            (None, Some(kind)) => Ok(Expectation::Fails(kind)),
            (Some(_), Some(_)) => bail!("case sets both expect and error"),
            (None, None) => bail!("case must set expect or error"),
        }
    }
}

impl SuiteFile {
    /// Load and validate a suite file from the given path.
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            fs::read_to_string(path).with_context(|| format!("read suite {}", path.display()))?;
        Self::parse_str(&contents).with_context(|| format!("load suite {}", path.display()))
    }

    pub fn parse_str(contents: &str) -> Result<Self> {
        let suite: SuiteFile = toml::from_str(contents).context("parse suite")?;
        suite.validate()?;
        Ok(suite)
    }

    fn validate(&self) -> Result<()> {
        validate_suite_id(&self.suite.id)?;
        if self.cases.is_empty() {
            bail!("cases must be a non-empty array");
        }
        for (index, case) in self.cases.iter().enumerate() {
            if case.description.trim().is_empty() {
                bail!("cases[{}].description must be non-empty", index);
            }
            case.expectation()
                .with_context(|| format!("cases[{}] invalid", index))?;
        }
        Ok(())
    }
}

/// Discover and load all suite files from a directory.
///
/// Returns suites sorted by id. Errors if duplicate ids are found.
pub fn discover_suites(dir: &Path) -> Result<Vec<SuiteFile>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    let mut suites = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("read cases dir {}", dir.display()))? {
        let entry = entry.context("read suite entry")?;
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("toml") {
            continue;
        }
        suites.push(SuiteFile::load(&path)?);
    }
    suites.sort_by(|left, right| left.suite.id.cmp(&right.suite.id));
    for pair in suites.windows(2) {
        if pair[0].suite.id == pair[1].suite.id {
            return Err(anyhow!("duplicate suite.id {}", pair[0].suite.id));
        }
    }
    Ok(suites)
}

fn validate_suite_id(id: &str) -> Result<()> {
    if id.trim().is_empty() {
        bail!("suite.id must be non-empty");
    }
    if !id
        .chars()
        .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-' || ch == '_')
    {
        bail!("suite.id must use [a-z0-9_-] only");
    }
    Ok(())
}
