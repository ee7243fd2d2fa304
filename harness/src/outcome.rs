use std::fmt;

use serde::Serialize;

use crate::case::Expectation;

/// What the rotation actually did for a scenario.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Actual {
    Rotated {
        values: Vec<i64>,
    },
    Failed {
        kind: rotator::ErrorKind,
        message: String,
    },
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Pass,
    Fail,
}

impl Outcome {
    pub fn from_passed(passed: bool) -> Self {
        if passed { Outcome::Pass } else { Outcome::Fail }
    }

    pub fn passed(self) -> bool {
        self == Outcome::Pass
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Pass => f.write_str("✓ PASS"),
            Outcome::Fail => f.write_str("✗ FAIL"),
        }
    }
}

/// A scenario passes when the values match, or when it fails with the expected kind.
pub fn classify_outcome(expectation: &Expectation, actual: &Actual) -> Outcome {
    match (expectation, actual) {
        (Expectation::Rotated(expected), Actual::Rotated { values }) => {
            Outcome::from_passed(expected == values)
        }
        (Expectation::Fails(expected), Actual::Failed { kind, .. }) => {
            Outcome::from_passed(expected == kind)
        }
        (Expectation::Rotated(_), Actual::Failed { .. })
        | (Expectation::Fails(_), Actual::Rotated { .. }) => Outcome::Fail,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rotator::ErrorKind;

    fn failed(kind: ErrorKind) -> Actual {
        Actual::Failed {
            kind,
            message: "boom".to_string(),
        }
    }

    #[test]
    fn pass_when_values_match() {
        let outcome = classify_outcome(
            &Expectation::Rotated(vec![2, 1]),
            &Actual::Rotated { values: vec![2, 1] },
        );
        assert_eq!(outcome, Outcome::Pass);
    }

    #[test]
    fn fail_when_values_differ() {
        let outcome = classify_outcome(
            &Expectation::Rotated(vec![2, 1]),
            &Actual::Rotated { values: vec![1, 2] },
        );
        assert_eq!(outcome, Outcome::Fail);
    }

    #[test]
    fn pass_when_error_kind_matches() {
        let outcome = classify_outcome(
            &Expectation::Fails(ErrorKind::InvalidArgumentValue),
            &failed(ErrorKind::InvalidArgumentValue),
        );
        assert_eq!(outcome, Outcome::Pass);
    }

    #[test]
    fn fail_on_wrong_kind_or_missing_error() {
        let expectation = Expectation::Fails(ErrorKind::InvalidArgumentType);
        assert_eq!(
            classify_outcome(&expectation, &failed(ErrorKind::InvalidArgumentValue)),
            Outcome::Fail
        );
        assert_eq!(
            classify_outcome(&expectation, &Actual::Rotated { values: vec![] }),
            Outcome::Fail
        );
        assert_eq!(
            classify_outcome(
                &Expectation::Rotated(vec![1]),
                &failed(ErrorKind::InvalidArgumentType)
            ),
            Outcome::Fail
        );
    }

    #[test]
    fn display_marks_status() {
        assert_eq!(Outcome::Pass.to_string(), "✓ PASS");
        assert_eq!(Outcome::Fail.to_string(), "✗ FAIL");
    }
}
