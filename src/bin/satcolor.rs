use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde_json::json;
use tracing_subscriber::EnvFilter;

use satcolor::{parse_adjacency, ColoringOptions, Graph, TraversalMode};

#[derive(Parser)]
#[command(name = "satcolor")]
#[command(about = "Greedy saturation-degree graph coloring", long_about = None)]
struct Cli {
    /// Adjacency file: one `key, neighbor, ...` line per vertex
    input: PathBuf,

    /// Traversal mode
    #[arg(long, value_enum, default_value_t = TraversalMode::SingleSeed)]
    mode: TraversalMode,

    /// Mirror one-directional links before coloring
    #[arg(long, default_value_t = false)]
    symmetrize: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    format: OutputFormat,

    /// Log a summary and the coloring time
    #[arg(long, default_value_t = false)]
    report: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Plain,
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("satcolor=info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let file = File::open(&cli.input).with_context(|| format!("failed to open {}", cli.input.display()))?;
    let entries = parse_adjacency(BufReader::new(file))
        .with_context(|| format!("failed to parse {}", cli.input.display()))?;

    let options = ColoringOptions {
        mode: cli.mode,
        symmetrize: cli.symmetrize,
    };
    let start = Instant::now();
    let graph = options.run(entries).context("coloring failed")?;
    let elapsed = start.elapsed();

    if cli.report {
        let report = graph.report();
        tracing::info!(
            vertices = report.vertex_count,
            edges = report.edge_count,
            colors = report.color_count,
            uncolored = report.uncolored_count,
            min_saturation = ?report.saturation.min,
            max_saturation = ?report.saturation.max,
            mean_saturation = ?report.saturation.mean,
            std_dev_saturation = ?report.saturation.std_dev,
            elapsed_ms = elapsed.as_secs_f64() * 1e3,
            "coloring finished"
        );
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        OutputFormat::Plain => write_plain(&mut out, &graph)?,
        OutputFormat::Json => write_json(&mut out, &graph)?,
    }
    Ok(())
}

fn write_plain(out: &mut impl Write, graph: &Graph) -> Result<()> {
    for (key, color) in graph.colors() {
        match color {
            Some(color) => writeln!(out, "{key}: {color}")?,
            None => writeln!(out, "{key}: -")?,
        }
    }
    Ok(())
}

fn write_json(out: &mut impl Write, graph: &Graph) -> Result<()> {
    let colors: Vec<_> = graph
        .colors()
        .map(|(key, color)| json!({ "vertex": key, "color": color }))
        .collect();
    let document = json!({ "colors": colors, "report": graph.report() });
    serde_json::to_writer_pretty(&mut *out, &document)?;
    writeln!(out)?;
    Ok(())
}
