// File: crates/graph-core/src/sample.rs
// Summary: Expression sampler: validate once, then sweep the domain skipping bad points.

use log::debug;

use crate::error::BuildError;
use crate::eval::Expression;
use crate::series::{Sample, Series};

/// Probe abscissa for the validation evaluation. Any value works; the probe
/// only confirms the expression is evaluable at all.
const PROBE_X: f64 = 1.0;

/// Sample `expr` over `[x_min, x_max]` inclusive, advancing by `step`.
///
/// A per-sample evaluation error or non-finite result skips that single
/// point; expressions like `1/x` or `log(x)` are legal overall but
/// undefined at specific abscissas. Zero surviving samples is an error.
pub fn sample(expr: &str, x_min: f64, x_max: f64, step: f64) -> Result<Series, BuildError> {
    let normalized = expr.trim().to_ascii_lowercase();
    if normalized.is_empty() {
        return Err(BuildError::MissingExpression);
    }
    // must hold before the sweep below, or it never terminates
    if !(step > 0.0) || !step.is_finite() {
        return Err(BuildError::InvalidStep);
    }

    let compiled = Expression::compile(&normalized).map_err(|_| BuildError::InvalidExpression)?;

    // One trial evaluation confirms the expression actually evaluates; a
    // non-numeric result here breaks the evaluator's numeric contract and
    // surfaces through the fallback variant instead.
    if let Err(err) = compiled.eval(PROBE_X) {
        return Err(match err {
            evalexpr::EvalexprError::ExpectedNumber { .. } => BuildError::Unexpected(err.to_string()),
            _ => BuildError::InvalidExpression,
        });
    }

    let mut series = Series::new();
    let mut x = x_min;
    while x <= x_max {
        match compiled.eval(x) {
            Ok(y) if y.is_finite() => series.push(Sample {
                x,
                y,
                label: format!("{x:.1}"),
            }),
            Ok(y) => debug!("skipping x = {x}: non-finite result {y}"),
            Err(err) => debug!("skipping x = {x}: {err}"),
        }
        x += step;
    }

    if series.is_empty() {
        return Err(BuildError::NoValidPoints);
    }
    Ok(series)
}
