//! Harness configuration stored in `harness/harness.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Harness configuration (TOML).
///
/// Missing fields default to the values the shipped suites were written for.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HarnessConfig {
    /// Directory holding suite files, relative to the repository root.
    pub cases_dir: PathBuf,

    pub performance: PerformanceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PerformanceConfig {
    pub enabled: bool,
    /// Number of elements in the generated `0..length` sequence.
    pub length: usize,
    pub shift: i64,
    /// Wall-clock budget for the single rotation.
    pub time_limit_ms: u64,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            length: 1000,
            shift: 999_999,
            time_limit_ms: 1000,
        }
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            cases_dir: PathBuf::from("harness/cases"),
            performance: PerformanceConfig::default(),
        }
    }
}

impl HarnessConfig {
    pub fn validate(&self) -> Result<()> {
        if self.cases_dir.as_os_str().is_empty() {
            return Err(anyhow!("cases_dir must be non-empty"));
        }
        if self.performance.length == 0 {
            return Err(anyhow!("performance.length must be > 0"));
        }
        if i64::try_from(self.performance.length).is_err() {
            return Err(anyhow!("performance.length must fit in a 64-bit integer"));
        }
        if self.performance.shift < 0 {
            return Err(anyhow!("performance.shift must be >= 0"));
        }
        if self.performance.time_limit_ms == 0 {
            return Err(anyhow!("performance.time_limit_ms must be > 0"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `HarnessConfig::default()`.
pub fn load_config(path: &Path) -> Result<HarnessConfig> {
    if !path.exists() {
        let cfg = HarnessConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: HarnessConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
