// File: crates/graph-core/src/values.rs
// Summary: Literal series parser for comma-separated numeric text.

/// Split `text` on commas and parse each trimmed token as `f64`.
/// Tokens that fail to parse (including empty ones) are dropped silently;
/// an empty result is valid here, error derivation belongs to the builder.
pub fn parse(text: &str) -> Vec<f64> {
    text.split(',')
        .filter_map(|token| token.trim().parse::<f64>().ok())
        .collect()
}
