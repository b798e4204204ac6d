// File: crates/graph-core/src/series.rs
// Summary: Sample model and the series builder dispatching on graph kind.

use crate::error::BuildError;
use crate::sample::sample;
use crate::types::GraphControls;
use crate::values;

/// One evaluated point. For literal data `x` is the zero-based index and
/// `label` a synthetic ordinal name; for sampled expressions `x` is the
/// domain value and `label` its one-decimal text form.
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
    pub label: String,
}

/// Ordered collection of samples from one evaluation run. Order is the
/// generation order; non-empty on success by construction.
pub type Series = Vec<Sample>;

/// Build the intermediate series for `controls`, choosing the expression
/// sampler or the literal parser by graph kind. The `Result` carries the
/// mutual exclusion the pipeline promises: a series on success, exactly one
/// user-facing error otherwise.
pub fn build(controls: &GraphControls) -> Result<Series, BuildError> {
    if controls.kind.uses_equation() {
        return sample(&controls.equation, controls.x_min, controls.x_max, controls.step);
    }

    let parsed = values::parse(&controls.data);
    if parsed.is_empty() {
        return Err(BuildError::EmptyData);
    }
    Ok(parsed
        .into_iter()
        .enumerate()
        .map(|(i, v)| Sample {
            x: i as f64,
            y: v,
            label: format!("Value {}", i + 1),
        })
        .collect())
}
