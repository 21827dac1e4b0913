//! Named self-checks for the normalizer.
//!
//! Runs a list of [`Check`]s, printing one `Running:` line per check followed
//! by `PASS:`, `FAIL:` (assertion did not hold) or `ERROR:` (the code under
//! test returned an error). [`Report::exit_code`] is `0` when every check
//! passed and `1` otherwise.

use std::any::Any;
use std::io::{self, Write};
use std::panic::{self, AssertUnwindSafe};

use ndarray::{array, ArrayBase, Data, Ix1};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::error::NormError;
use crate::math::norms::l2_norm_view;
use crate::normalize::normalize;

/// Default absolute tolerance for comparisons.
pub const DEFAULT_ATOL: f64 = 1e-8;

/// Relative tolerance used by [`assert_allclose`] (NumPy's `allclose` default).
pub const DEFAULT_RTOL: f64 = 1e-5;

/// Why a check did not pass.
#[derive(Error, Debug)]
pub enum CheckError {
    /// An assertion about the result did not hold
    #[error("{0}")]
    Assertion(String),

    /// The code under test returned an error
    #[error(transparent)]
    Normalize(#[from] NormError),
}

/// A single named check. The body receives the absolute tolerance to use.
#[derive(Clone, Copy, Debug)]
pub struct Check {
    /// Name printed in the report
    pub name: &'static str,
    /// Check body
    pub run: fn(f64) -> Result<(), CheckError>,
}

/// Result of one check.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// Check passed
    Pass,
    /// Assertion failed, with its message
    Fail(String),
    /// Code under test errored
    Error {
        /// Error kind name
        kind: &'static str,
        /// Error message
        message: String,
    },
}

impl Outcome {
    /// Whether this outcome counts towards the failure total.
    pub fn is_failure(&self) -> bool {
        !matches!(self, Outcome::Pass)
    }
}

/// Outcomes of a harness run, in execution order.
#[derive(Clone, Debug, Default)]
pub struct Report {
    /// `(check name, outcome)` pairs
    pub results: Vec<(&'static str, Outcome)>,
}

impl Report {
    /// Number of checks that failed or errored.
    pub fn failures(&self) -> usize {
        self.results.iter().filter(|(_, o)| o.is_failure()).count()
    }

    /// Process exit status: `0` if all checks passed, `1` otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.failures() == 0 {
            0
        } else {
            1
        }
    }
}

/// Element-wise closeness test in the manner of NumPy's `allclose`.
///
/// Passes when `|a - b| <= atol + DEFAULT_RTOL * |b|` for every pair and both
/// arrays have the same length. NaN never compares close.
pub fn assert_allclose<S1, S2>(
    actual: &ArrayBase<S1, Ix1>,
    expected: &ArrayBase<S2, Ix1>,
    atol: f64,
) -> Result<(), CheckError>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    let close = actual.len() == expected.len()
        && actual
            .iter()
            .zip(expected.iter())
            .all(|(a, b)| (a - b).abs() <= atol + DEFAULT_RTOL * b.abs());

    if close {
        Ok(())
    } else {
        Err(CheckError::Assertion(format!(
            "Arrays not equal: {} vs {}",
            actual, expected
        )))
    }
}

fn check_nonzero_vector(atol: f64) -> Result<(), CheckError> {
    let x = array![3.0, 4.0];
    let y = normalize(&x)?;
    let n = l2_norm_view(y.view());
    if (n - 1.0).abs() >= atol {
        return Err(CheckError::Assertion(format!(
            "norm of result is {}, expected 1.0",
            n
        )));
    }
    assert_allclose(&y, &array![0.6, 0.8], atol)
}

fn check_zero_vector(atol: f64) -> Result<(), CheckError> {
    let x = array![0.0, 0.0];
    let y = normalize(&x)?;
    assert_allclose(&y, &x, atol)
}

fn check_list_input(atol: f64) -> Result<(), CheckError> {
    let y = normalize(vec![1, 0, 0])?;
    assert_allclose(&y, &array![1.0, 0.0, 0.0], atol)
}

/// The built-in checks covering the normalizer's documented behaviour.
pub fn builtin_checks() -> Vec<Check> {
    vec![
        Check {
            name: "normalize_nonzero_vector",
            run: check_nonzero_vector,
        },
        Check {
            name: "normalize_zero_vector",
            run: check_zero_vector,
        },
        Check {
            name: "normalize_list_input",
            run: check_list_input,
        },
    ]
}

/// Keep only the checks whose name contains `filter` (all of them for `None`).
pub fn select_checks(checks: Vec<Check>, filter: Option<&str>) -> Vec<Check> {
    checks
        .into_iter()
        .filter(|c| filter.map_or(true, |f| c.name.contains(f)))
        .collect()
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Run `checks` in order, writing the progress lines and summary to `out`.
///
/// A check body that panics is reported as an `ERROR` with kind `Panic`;
/// the remaining checks still run.
pub fn run_checks<W: Write>(checks: &[Check], atol: f64, out: &mut W) -> io::Result<Report> {
    let mut report = Report::default();

    for check in checks {
        debug!(check = check.name, atol, "running check");
        writeln!(out, "Running: {}", check.name)?;

        let result = panic::catch_unwind(AssertUnwindSafe(|| (check.run)(atol)));

        let outcome = match result {
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                warn!(check = check.name, panic = %message, "check panicked");
                writeln!(out, "ERROR: {}: Panic: {}", check.name, message)?;
                Outcome::Error {
                    kind: "Panic",
                    message,
                }
            }
            Ok(Ok(())) => {
                writeln!(out, "PASS: {}", check.name)?;
                Outcome::Pass
            }
            Ok(Err(CheckError::Assertion(msg))) => {
                warn!(check = check.name, reason = %msg, "check failed");
                writeln!(out, "FAIL: {}: {}", check.name, msg)?;
                Outcome::Fail(msg)
            }
            Ok(Err(CheckError::Normalize(e))) => {
                warn!(check = check.name, error = %e, "check errored");
                writeln!(out, "ERROR: {}: {}: {}", check.name, e.kind(), e)?;
                Outcome::Error {
                    kind: e.kind(),
                    message: e.to_string(),
                }
            }
        };
        report.results.push((check.name, outcome));
    }

    let failures = report.failures();
    info!(total = checks.len(), failures, "checks finished");
    if failures > 0 {
        writeln!(out, "\n{} test(s) failed", failures)?;
    } else {
        writeln!(out, "\nAll tests passed")?;
    }

    Ok(report)
}
