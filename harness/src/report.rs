//! Human-readable and JSON run reports.

use std::fmt;

use serde::Serialize;

use crate::judge::{CaseOutcome, render_values};
use crate::outcome::{Actual, Outcome};
use crate::perf::PerfOutcome;

const RULE: &str = "========================================";

#[derive(Debug, Clone, Serialize)]
pub struct SuiteReport {
    pub id: String,
    pub description: String,
    pub cases: Vec<CaseOutcome>,
}

impl SuiteReport {
    pub fn passed(&self) -> usize {
        self.cases
            .iter()
            .filter(|case| case.outcome.passed())
            .count()
    }

    pub fn total(&self) -> usize {
        self.cases.len()
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    pub suites: Vec<SuiteReport>,
    pub performance: Option<PerfOutcome>,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Summary {
    pub passed: usize,
    pub total: usize,
    pub outcome: Outcome,
}

impl RunReport {
    pub fn summary(&self) -> Summary {
        let perf_passed = self
            .performance
            .as_ref()
            .is_some_and(|perf| perf.outcome.passed());
        let passed = self.suites.iter().map(SuiteReport::passed).sum::<usize>()
            + usize::from(perf_passed);
        let total = self.suites.iter().map(SuiteReport::total).sum::<usize>()
            + usize::from(self.performance.is_some());
        Summary {
            passed,
            total,
            outcome: Outcome::from_passed(passed == total),
        }
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for suite in &self.suites {
            write_suite(f, suite)?;
        }
        if let Some(perf) = &self.performance {
            write_performance(f, perf)?;
        }

        let summary = self.summary();
        writeln!(f, "Summary")?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "Total: {}/{} passed", summary.passed, summary.total)?;
        if summary.outcome.passed() {
            writeln!(f, "All tests passed")
        } else {
            writeln!(f, "{} test(s) failed", summary.total - summary.passed)
        }
    }
}

fn write_suite(f: &mut fmt::Formatter<'_>, suite: &SuiteReport) -> fmt::Result {
    if suite.description.is_empty() {
        writeln!(f, "Suite {}", suite.id)?;
    } else {
        writeln!(f, "Suite {}: {}", suite.id, suite.description)?;
    }
    writeln!(f, "{RULE}")?;
    for (index, case) in suite.cases.iter().enumerate() {
        writeln!(f, "Test {}: {}", index + 1, case.description)?;
        writeln!(
            f,
            "  Input: {}, rotate {} positions left",
            case.sequence, case.shift
        )?;
        writeln!(f, "  Expected: {}", case.expected)?;
        match &case.actual {
            Actual::Rotated { values } => writeln!(f, "  Result: {}", render_values(values))?,
            Actual::Failed { kind, message } => writeln!(f, "  Error: {kind}: {message}")?,
        }
        writeln!(f, "  Status: {}", case.outcome)?;
        writeln!(f)?;
    }
    writeln!(f, "{}: {}/{} passed", suite.id, suite.passed(), suite.total())?;
    writeln!(f)
}

fn write_performance(f: &mut fmt::Formatter<'_>, perf: &PerfOutcome) -> fmt::Result {
    writeln!(f, "Performance")?;
    writeln!(f, "{RULE}")?;
    writeln!(
        f,
        "  Input: {} elements, rotate {} positions left",
        perf.length, perf.shift
    )?;
    writeln!(
        f,
        "  Elapsed: {:.3} ms (limit {} ms)",
        perf.elapsed_ms, perf.time_limit_ms
    )?;
    writeln!(f, "  Correct: {}", perf.correct)?;
    writeln!(f, "  Status: {}", perf.outcome)?;
    writeln!(f)
}
