use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::{Duration, Instant};
use tracing_subscriber::fmt::SubscriberBuilder;

use graham_hull::data::{Hull, Traversal};
use graham_hull::io::read_points;
use graham_hull::{GrahamScan, HullScalar};

#[derive(Parser)]
#[command(name = "graham-hull")]
#[command(about = "Print the convex hull of a point set file, one point id per line")]
struct Cmd {
  /// Point set: a count line followed by one `x,y` line per point
  input: PathBuf,

  /// List the hull clockwise, ending at the pivot
  #[arg(long)]
  clockwise: bool,

  /// Read coordinates as f64 instead of i32
  #[arg(long)]
  float: bool,

  /// Repeat the computation and report the fastest run
  #[arg(long, default_value_t = 1)]
  runs: u32,
}

fn main() -> Result<()> {
  SubscriberBuilder::default()
    .with_target(false)
    .with_writer(io::stderr)
    .init();
  let cmd = Cmd::parse();
  let traversal = if cmd.clockwise {
    Traversal::ClockWise
  } else {
    Traversal::CounterClockWise
  };
  let scan = GrahamScan::new().traversal(traversal);
  let hull = if cmd.float {
    solve::<f64>(&cmd, scan)?
  } else {
    solve::<i32>(&cmd, scan)?
  };

  let mut out = BufWriter::new(io::stdout().lock());
  for id in &hull {
    writeln!(out, "{}", id.usize())?;
  }
  out.flush()?;
  Ok(())
}

fn solve<T>(cmd: &Cmd, scan: GrahamScan) -> Result<Hull>
where
  T: HullScalar + FromStr,
{
  let points = read_points::<T, _>(&cmd.input)
    .with_context(|| format!("reading {}", cmd.input.display()))?;
  tracing::info!(input = %cmd.input.display(), n = points.len(), "loaded");

  let mut best = Duration::MAX;
  let mut hull = None;
  for _ in 0..cmd.runs.max(1) {
    let start = Instant::now();
    let result = scan.run(&points)?;
    best = best.min(start.elapsed());
    hull = Some(result);
  }
  tracing::info!(runs = cmd.runs.max(1), best = ?best, "min time");
  let hull = hull.context("no run completed")?;
  tracing::info!(vertices = hull.len(), "hull");
  Ok(hull)
}
