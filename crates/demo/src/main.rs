// File: crates/demo/src/main.rs
// Summary: Demo builds a chart dataset from an expression or literal values (inline or CSV) and prints it.

use anyhow::{Context, Result};
use graph_core::{adapt, build, ChartData, GraphControls, GraphKind};
use std::path::Path;

fn main() -> Result<()> {
    env_logger::init();

    // demo <kind> [input] [x_min x_max step]
    let mut args = std::env::args().skip(1);
    let kind_tag = args.next().unwrap_or_else(|| "line".to_string());
    let kind: GraphKind = kind_tag.parse().map_err(|e: String| anyhow::anyhow!(e))?;

    let mut controls = GraphControls { kind, ..GraphControls::default() };

    if let Some(input) = args.next() {
        if kind.uses_equation() {
            controls.equation = input;
        } else {
            controls.data = resolve_data(&input)?;
        }
    } else if !kind.uses_equation() {
        controls.data = "10, 20, 30, 40, 50".to_string();
    }

    if let (Some(a), Some(b), Some(s)) = (args.next(), args.next(), args.next()) {
        controls.x_min = a.parse().context("x_min is not a number")?;
        controls.x_max = b.parse().context("x_max is not a number")?;
        controls.step = s.parse().context("step is not a number")?;
    }

    if kind.uses_equation() {
        println!(
            "Sampling '{}' over [{}, {}] step {}",
            controls.equation, controls.x_min, controls.x_max, controls.step
        );
    } else {
        println!("Parsing literal values for '{}'", kind.tag());
    }

    let series = match build(&controls) {
        Ok(series) => series,
        Err(err) => {
            // the rendering layer shows this message in place of a chart
            println!("Error: {err}");
            return Ok(());
        }
    };
    println!("Built {} samples", series.len());

    print_dataset(&adapt(&series, controls.kind));
    Ok(())
}

/// Inline comma-separated text passes through; a path to a CSV file is read
/// and its value column joined into the same comma-separated form, so both
/// routes exercise the same parser.
fn resolve_data(input: &str) -> Result<String> {
    let path = Path::new(input);
    let is_csv = path
        .extension()
        .map(|e| e.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);
    if !(is_csv && path.exists()) {
        return Ok(input.to_string());
    }
    let tokens = load_values_csv(path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    println!("Loaded {} rows from {}", tokens.len(), path.display());
    Ok(tokens.join(", "))
}

/// Pull one value-like column out of a CSV file. Prefers a header named
/// value/y/close/price, falls back to the first column; unparseable cells
/// are kept as-is and dropped later by the literal parser.
fn load_values_csv(path: &Path) -> Result<Vec<String>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();

    let col = headers
        .iter()
        .position(|h| ["value", "values", "y", "close", "price"].contains(&h.as_str()))
        .unwrap_or(0);

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        if let Some(cell) = rec.get(col) {
            out.push(cell.trim().to_string());
        }
    }
    Ok(out)
}

fn print_dataset(data: &ChartData) {
    match data {
        ChartData::Categorical { labels, values, accent, fill, stepped, closed } => {
            println!(
                "Categorical dataset, accent {} (fill: {fill}, stepped: {stepped}, closed: {closed})",
                accent.hex()
            );
            for (label, value) in labels.iter().zip(values).take(10) {
                println!("  {label:>10}  {value}");
            }
            elide(labels.len());
        }
        ChartData::MultiColor { labels, values, colors, gapless } => {
            println!("Multi-color dataset (gapless: {gapless})");
            for ((label, value), color) in labels.iter().zip(values).zip(colors).take(10) {
                println!("  {label:>10}  {value}  {}", color.hex());
            }
            elide(labels.len());
        }
        ChartData::XyPaired { points } => {
            println!("XY dataset");
            for (x, y) in points.iter().take(10) {
                println!("  ({x}, {y})");
            }
            elide(points.len());
        }
        ChartData::XyBubble { points } => {
            println!("Bubble dataset");
            for p in points.iter().take(10) {
                println!("  ({}, {}) r={}", p.x, p.y, p.r);
            }
            elide(points.len());
        }
        ChartData::Proportional { labels, values, colors, cutout } => {
            println!("Proportional dataset (cutout: {cutout})");
            for ((label, value), color) in labels.iter().zip(values).zip(colors).take(10) {
                println!("  {label:>10}  {value}  {}", color.hex());
            }
            elide(labels.len());
        }
    }
}

fn elide(n: usize) {
    if n > 10 {
        println!("  ... {} more", n - 10);
    }
}
