//! snpplot: inspect a Touchstone file and emit magnitude/phase traces.

use clap::{Parser, ValueEnum};
use snpplot::prelude::*;
use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "snpplot")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the .sNp file
    file: PathBuf,

    /// Parameter to include, e.g. S21 or S10,3 (repeatable, default all)
    #[arg(short, long = "param")]
    params: Vec<ParameterName>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    output: OutputFormat,

    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    let ts = read_touchstone(&cli.file)?;

    let selected: Vec<ParameterName> = if cli.params.is_empty() {
        ts.params().to_vec()
    } else {
        for p in cli.params.iter().filter(|p| ts.index_of(p).is_none()) {
            tracing::warn!("{} is not a parameter of a {}-port file", p, ts.nports());
        }
        cli.params.clone()
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.output {
        OutputFormat::Text => write_summary(&mut out, &ts, &selected)?,
        OutputFormat::Json => {
            let plot = PlotBuilder::new().params(&selected).build(&ts);
            writeln!(out, "{}", serde_json::to_string_pretty(&plot)?)?;
        }
        OutputFormat::Csv => write_csv(&mut out, &ts, &selected)?,
    }

    Ok(())
}

fn write_summary<W: Write>(
    out: &mut W,
    ts: &Touchstone,
    selected: &[ParameterName],
) -> io::Result<()> {
    writeln!(out, "Touchstone File: {}", ts.name())?;
    writeln!(out, "  Ports: {}", ts.nports())?;
    match ts.options() {
        Some(opts) => {
            let show = |v: Option<String>| v.unwrap_or_else(|| "?".to_string());
            writeln!(out, "  Format: {}", show(opts.format.map(|f| f.to_string())))?;
            writeln!(out, "  Unit: {}", show(opts.unit.map(|u| u.to_string())))?;
            writeln!(out, "  Parameter: {}", show(opts.parameter.map(|p| p.to_string())))?;
            writeln!(out, "  Z0: {} ohms", show(opts.impedance.map(|z| z.to_string())))?;
        }
        None => writeln!(out, "  Option line: missing")?,
    }
    writeln!(out, "  Frequency points: {}", ts.npts())?;
    writeln!(out, "  Skipped data lines: {}", ts.skipped_lines())?;
    if !ts.comments().is_empty() {
        writeln!(out, "  Comments:")?;
        for line in ts.comments().lines() {
            writeln!(out, "    {}", line)?;
        }
    }

    for p in selected {
        let Some(mag) = ts.mag_db(p) else {
            continue;
        };
        let finite = mag.iter().copied().filter(|v| v.is_finite());
        let (min, max) = finite.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
        if min <= max {
            writeln!(out, "  {}: {:.3} dB .. {:.3} dB", p, min, max)?;
        } else {
            writeln!(out, "  {}: no finite samples", p)?;
        }
    }

    Ok(())
}

fn write_csv<W: Write>(out: &mut W, ts: &Touchstone, selected: &[ParameterName]) -> io::Result<()> {
    let columns: Vec<(ParameterName, &Series)> = selected
        .iter()
        .filter_map(|p| ts.series_of(p).map(|s| (*p, s)))
        .collect();

    write!(out, "freq")?;
    for (p, _) in &columns {
        write!(out, ",{}_db,{}_deg", p, p)?;
    }
    writeln!(out)?;

    for (i, f) in ts.freq().iter().enumerate() {
        write!(out, "{}", f)?;
        for (_, s) in &columns {
            write!(out, ",{},{}", s.mag_db()[i], s.phase_deg()[i])?;
        }
        writeln!(out)?;
    }

    Ok(())
}
