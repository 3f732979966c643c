use anyhow::{Context, Result};
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use roadtrace::search::frames::{Frame, FrameSampler};
use roadtrace::search::types::Heuristic;
use roadtrace::{
    Algorithm, Exploration, Outcome, PathMetrics, Reconstruction, SearchError, reconstruct_path,
};

use super::load_graph;
use crate::config::Config;

pub struct RouteArgs {
    pub graph: PathBuf,
    pub from: String,
    pub to: String,
    pub algorithm: Option<Algorithm>,
    pub heuristic: Option<Heuristic>,
    pub trace: Option<PathBuf>,
    pub frame_stride: Option<usize>,
    pub quiet: bool,
}

/// Run the route command.
pub fn run(args: RouteArgs) -> Result<()> {
    let graph = load_graph(&args.graph)?;
    let config = Config::load_or_default();

    let algorithm = args.algorithm.unwrap_or_else(|| config.algorithm());
    let mut options = config.search_options();
    if let Some(heuristic) = args.heuristic {
        options.heuristic = heuristic;
    }
    let stride = args.frame_stride.unwrap_or_else(|| config.frame_stride());

    let mut exploration = Exploration::start(&graph, algorithm, options, &args.from, &args.to)?;

    let mut trace = match &args.trace {
        Some(path) => Some(TraceWriter::create(path)?),
        None => None,
    };
    if let Some(writer) = trace.as_mut() {
        for frame in FrameSampler::new(exploration.by_ref(), stride) {
            writer.write(&frame)?;
        }
    }
    let mut state = exploration.finish();

    if state.outcome != Some(Outcome::Success) {
        tracing::debug!(steps = state.steps, "route search exhausted");
        return Err(SearchError::NoPathFound {
            origin: args.from,
            destination: args.to,
        }
        .into());
    }

    let route = reconstruct_path(&graph, &mut state, None)?;

    if let Some(mut writer) = trace {
        writer.write(&Frame {
            index: writer.frames,
            step: state.steps,
            events: route.events.clone(),
        })?;
        let (path, frames) = writer.finish()?;
        if !args.quiet {
            println!("Trace written to {} ({frames} frames)", path.display());
        }
    }

    print_route(algorithm, state.steps, &route);
    Ok(())
}

/// Print a route summary with its metrics.
pub(crate) fn print_route(algorithm: Algorithm, steps: usize, route: &Reconstruction) {
    println!(
        "{} {}: {} edge(s), {} expansion(s), total weight {:.3}",
        "Route found".green().bold(),
        format!("({})", algorithm.display_name()).dimmed(),
        route.edges.len(),
        steps,
        route.total_weight
    );
    print_metrics(route.metrics.as_ref());
}

pub(crate) fn print_metrics(metrics: Option<&PathMetrics>) {
    match metrics {
        Some(m) => {
            println!("  Distance: {:.3} km", m.distance_km);
            println!("  Avg. speed: {:.1} km/h", m.avg_speed_kmh);
            println!("  Total time: {:.2} minutes", m.total_time_min);
        }
        None => println!("  {}", "No path found (origin equals destination).".yellow()),
    }
}

/// Streams frames to a file as JSON lines.
struct TraceWriter {
    path: PathBuf,
    out: BufWriter<File>,
    frames: usize,
}

impl TraceWriter {
    fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create trace file {}", path.display()))?;
        Ok(Self {
            path: path.to_path_buf(),
            out: BufWriter::new(file),
            frames: 0,
        })
    }

    fn write(&mut self, frame: &Frame) -> Result<()> {
        serde_json::to_writer(&mut self.out, frame)?;
        self.out.write_all(b"\n")?;
        self.frames += 1;
        Ok(())
    }

    fn finish(mut self) -> Result<(PathBuf, usize)> {
        self.out.flush()?;
        Ok((self.path, self.frames))
    }
}
