// File: crates/graph-core/src/dataset.rs
// Summary: Chart data adapter mapping a series and graph kind onto a structural dataset shape.

use crate::palette::{self, Rgba};
use crate::series::Series;
use crate::types::{GraphKind, ShapeFamily};

/// Radius cap for bubble kinds; bounds the rendered marker size.
pub const MAX_BUBBLE_RADIUS: f64 = 20.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BubblePoint {
    pub x: f64,
    pub y: f64,
    pub r: f64,
}

/// Rendering-ready dataset, one variant per structural family. Derived data:
/// fully regenerated from series + kind on every call, never mutated.
/// The `fill`/`stepped`/`closed`/`gapless`/`cutout` booleans are
/// presentation hints; they never change the data shape.
#[derive(Clone, Debug, PartialEq)]
pub enum ChartData {
    /// line, area, step, radar: one value per label, ordered.
    Categorical {
        labels: Vec<String>,
        values: Vec<f64>,
        accent: Rgba,
        fill: bool,
        stepped: bool,
        closed: bool,
    },
    /// bar, histogram: one value per label, each element independently colored.
    MultiColor {
        labels: Vec<String>,
        values: Vec<f64>,
        colors: Vec<Rgba>,
        gapless: bool,
    },
    /// scatter: independent pairs, no implied order, no labels.
    XyPaired { points: Vec<(f64, f64)> },
    /// bubble: pairs plus a derived, capped radius.
    XyBubble { points: Vec<BubblePoint> },
    /// pie, doughnut, polar: one value per label, magnitude read by the renderer.
    Proportional {
        labels: Vec<String>,
        values: Vec<f64>,
        colors: Vec<Rgba>,
        cutout: bool,
    },
}

/// Map `series` into the dataset shape `kind` renders from. Pure structural
/// mapping; the radius formula is the only numeric computation.
pub fn adapt(series: &Series, kind: GraphKind) -> ChartData {
    match kind.family() {
        ShapeFamily::Categorical => ChartData::Categorical {
            labels: labels_of(series),
            values: values_of(series),
            accent: palette::ACCENT,
            fill: kind == GraphKind::Area,
            stepped: kind == GraphKind::Step,
            closed: false,
        },
        ShapeFamily::ClosedCategorical => ChartData::Categorical {
            labels: labels_of(series),
            values: values_of(series),
            accent: palette::ACCENT,
            fill: false,
            stepped: false,
            closed: true,
        },
        ShapeFamily::MultiColor => ChartData::MultiColor {
            labels: labels_of(series),
            values: values_of(series),
            colors: palette::cycle(series.len()),
            gapless: kind == GraphKind::Histogram,
        },
        ShapeFamily::XyPaired => ChartData::XyPaired {
            points: series.iter().map(|s| (s.x, s.y)).collect(),
        },
        ShapeFamily::XyBubble => ChartData::XyBubble {
            points: series
                .iter()
                .map(|s| BubblePoint {
                    x: s.x,
                    y: s.y,
                    r: bubble_radius(s.y),
                })
                .collect(),
        },
        ShapeFamily::Proportional => ChartData::Proportional {
            labels: labels_of(series),
            values: values_of(series),
            colors: palette::cycle(series.len()),
            cutout: kind == GraphKind::Doughnut,
        },
    }
}

/// Scaled magnitude, capped at `MAX_BUBBLE_RADIUS`. Non-negative by construction.
pub fn bubble_radius(y: f64) -> f64 {
    (y.abs() * 2.0).min(MAX_BUBBLE_RADIUS)
}

fn labels_of(series: &Series) -> Vec<String> {
    series.iter().map(|s| s.label.clone()).collect()
}

fn values_of(series: &Series) -> Vec<f64> {
    series.iter().map(|s| s.y).collect()
}
