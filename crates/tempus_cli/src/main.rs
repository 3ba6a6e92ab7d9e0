//! Tempus CLI — demo harness for the combinational timing analyzer.
//!
//! Builds the bundled sample circuit, applies `tempus.toml` configuration
//! and command-line overrides, runs static timing analysis, and renders the
//! report as text or JSON. Exits with status 1 when timing is not met and
//! status 2 on configuration or analysis errors.

#![warn(missing_docs)]

mod demo;

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process;
use tempus_config::TempusConfig;
use tempus_diagnostics::{DiagnosticRenderer, DiagnosticSink, TerminalRenderer};
use tempus_sta::{analyze_timing, DelayTable, GraphLimits, StaConfig};

/// Tempus — a static timing analyzer for combinational circuits.
#[derive(Parser, Debug)]
#[command(name = "tempus", version, about = "Tempus static timing analyzer")]
struct Cli {
    /// Path to a `tempus.toml` configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Target clock period in nanoseconds (overrides the configuration file).
    #[arg(long)]
    target_period: Option<f64>,

    /// Output format for the timing report.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Suppress warning output; print only the report.
    #[arg(short, long)]
    quiet: bool,

    /// Disable ANSI colors in warning output.
    #[arg(long)]
    no_color: bool,
}

/// Report output formats.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum ReportFormat {
    /// Human-readable table and critical-path trace.
    Text,
    /// Machine-readable JSON.
    Json,
}

fn main() {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(2);
        }
    }
}

fn run(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let config = match &cli.config {
        Some(path) => tempus_config::load_config(path)?,
        None => TempusConfig::default(),
    };

    let (sta_config, limits) = build_engine_config(&config, cli.target_period)?;
    let graph = demo::build_demo_circuit(limits)?;

    let sink = DiagnosticSink::new();
    let report = analyze_timing(&graph, &sta_config, &sink)?;

    match cli.format {
        ReportFormat::Text => print!("{}", report.render_text()),
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if !cli.quiet {
        let renderer = TerminalRenderer::new(!cli.no_color);
        for diag in sink.take_all() {
            eprint!("{}", renderer.render(&diag));
        }
    }

    Ok(if report.met { 0 } else { 1 })
}

/// Maps the file configuration and CLI overrides onto engine settings.
fn build_engine_config(
    config: &TempusConfig,
    target_period: Option<f64>,
) -> Result<(StaConfig, GraphLimits), tempus_config::ConfigError> {
    let base = DelayTable::default();
    let delay_table = DelayTable {
        and: config.delays.and.unwrap_or(base.and),
        or: config.delays.or.unwrap_or(base.or),
        not: config.delays.not.unwrap_or(base.not),
        nand: config.delays.nand.unwrap_or(base.nand),
        nor: config.delays.nor.unwrap_or(base.nor),
        xor: config.delays.xor.unwrap_or(base.xor),
        input: config.delays.input.unwrap_or(base.input),
        output: config.delays.output.unwrap_or(base.output),
    };

    // A flag on the command line beats the configuration file.
    let target_period_ns = match target_period {
        Some(period) => Some(period),
        None => config.analysis.resolved_period_ns()?,
    };

    let limits = GraphLimits {
        max_nodes: config.limits.max_nodes,
        max_fanin: config.limits.max_fanin,
        max_fanout: config.limits.max_fanout,
    };

    Ok((
        StaConfig {
            delay_table,
            target_period_ns,
        },
        limits,
    ))
}
