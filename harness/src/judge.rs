//! Scenario execution and outcome recording.
//!
//! Feeds each case's untyped arguments through the rotator's decoding
//! boundary and records what happened alongside what was expected.

use anyhow::Result;
use rotator::input::rotate_value;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::case::{Case, Expectation};
use crate::outcome::{Actual, Outcome, classify_outcome};

/// Result of running a single scenario.
#[derive(Debug, Clone, Serialize)]
pub struct CaseOutcome {
    pub description: String,
    /// Rendered `sequence` argument.
    pub sequence: String,
    /// Rendered `shift` argument.
    pub shift: String,
    pub expected: String,
    pub actual: Actual,
    pub outcome: Outcome,
}

pub fn judge_case(case: &Case) -> Result<CaseOutcome> {
    let expectation = case.expectation()?;
    let actual = match rotate_value(case.sequence.as_ref(), case.shift.as_ref()) {
        Ok(values) => Actual::Rotated { values },
        Err(err) => Actual::Failed {
            kind: err.kind(),
            message: err.to_string(),
        },
    };
    let outcome = classify_outcome(&expectation, &actual);
    debug!(description = %case.description, ?outcome, "case judged");

    Ok(CaseOutcome {
        description: case.description.clone(),
        sequence: render_value(case.sequence.as_ref()),
        shift: render_value(case.shift.as_ref()),
        expected: render_expectation(&expectation),
        actual,
        outcome,
    })
}

/// Compact JSON for a present value, `<missing>` otherwise.
pub fn render_value(value: Option<&Value>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => "<missing>".to_string(),
    }
}

pub fn render_values(values: &[i64]) -> String {
    let items: Vec<String> = values.iter().map(i64::to_string).collect();
    format!("[{}]", items.join(", "))
}

fn render_expectation(expectation: &Expectation) -> String {
    match expectation {
        Expectation::Rotated(values) => render_values(values),
        Expectation::Fails(kind) => kind.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rotator::ErrorKind;
    use serde_json::json;

    fn case(sequence: Option<Value>, shift: Option<Value>) -> Case {
        Case {
            description: "case".to_string(),
            sequence,
            shift,
            expect: None,
            error: None,
        }
    }

    #[test]
    fn rotation_case_passes() {
        let case = Case {
            expect: Some(vec![2, 3, 1]),
            ..case(Some(json!([1, 2, 3])), Some(json!(1)))
        };
        let judged = judge_case(&case).expect("judge");
        assert_eq!(judged.outcome, Outcome::Pass);
        assert_eq!(judged.expected, "[2, 3, 1]");
        assert_eq!(judged.sequence, "[1,2,3]");
    }

    #[test]
    fn boolean_shift_fails_with_type_error() {
        let case = Case {
            error: Some(ErrorKind::InvalidArgumentType),
            ..case(Some(json!([1, 2, 3])), Some(json!(true)))
        };
        let judged = judge_case(&case).expect("judge");
        assert_eq!(judged.outcome, Outcome::Pass);
        assert!(matches!(
            judged.actual,
            Actual::Failed {
                kind: ErrorKind::InvalidArgumentType,
                ..
            }
        ));
        assert_eq!(judged.expected, "InvalidArgumentType");
    }

    #[test]
    fn wrong_expectation_is_recorded_as_fail() {
        let case = Case {
            expect: Some(vec![1, 2, 3]),
            ..case(Some(json!([1, 2, 3])), Some(json!(-1)))
        };
        let judged = judge_case(&case).expect("judge");
        assert_eq!(judged.outcome, Outcome::Fail);
    }

    #[test]
    fn missing_arguments_render_as_missing() {
        assert_eq!(render_value(None), "<missing>");
        assert_eq!(render_value(Some(&json!("not a list"))), "\"not a list\"");
    }

    #[test]
    fn case_without_expectation_is_an_error() {
        let err = judge_case(&case(Some(json!([1])), Some(json!(0)))).expect_err("no expectation");
        assert!(err.to_string().contains("must set expect or error"));
    }
}
