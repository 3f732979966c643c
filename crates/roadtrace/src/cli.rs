use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use roadtrace::search::types::{Algorithm, Heuristic};

#[derive(Parser)]
#[command(name = "roadtrace")]
#[command(author, version, about)]
#[command(long_about = "Shortest-path exploration over road graphs.\n\n\
    Runs breadth-first, Dijkstra or A* search over a graph file and records\n\
    every state change so the exploration can be replayed frame by frame.\n\n\
    Examples:\n  \
    roadtrace route city.yaml --from 1 --to 9               Dijkstra route\n  \
    roadtrace route city.yaml --from 1 --to 9 -a bfs        Breadth-first route\n  \
    roadtrace route city.yaml --from 1 --to 9 --trace t.jsonl\n  \
    roadtrace compare city.yaml --from 1 --to 9             All three algorithms")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find a route between two nodes
    Route {
        /// Graph file (.yaml, .yml or .json)
        graph: PathBuf,

        /// Origin node key
        #[arg(long)]
        from: String,

        /// Destination node key
        #[arg(long)]
        to: String,

        /// Search algorithm (defaults to the configured one)
        #[arg(short, long, value_enum)]
        algorithm: Option<AlgorithmArg>,

        /// A* heuristic (defaults to the configured one)
        #[arg(long, value_enum)]
        heuristic: Option<HeuristicArg>,

        /// Write the exploration as JSON lines, one frame per line
        #[arg(long)]
        trace: Option<PathBuf>,

        /// Node finalizations per trace frame
        #[arg(long)]
        frame_stride: Option<usize>,
    },

    /// Run every algorithm on the same graph and compare the results
    Compare {
        /// Graph file (.yaml, .yml or .json)
        graph: PathBuf,

        /// Origin node key
        #[arg(long)]
        from: String,

        /// Destination node key
        #[arg(long)]
        to: String,
    },

    /// Print a summary of a graph file
    Inspect {
        /// Graph file (.yaml, .yml or .json)
        graph: PathBuf,
    },

    /// View and modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Display current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g. defaults.algorithm, search.heuristic, trace.frame_stride)
        key: String,

        /// Value to set
        value: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum AlgorithmArg {
    Bfs,
    Dijkstra,
    #[value(alias = "astar")]
    AStar,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Bfs => Algorithm::Bfs,
            AlgorithmArg::Dijkstra => Algorithm::Dijkstra,
            AlgorithmArg::AStar => Algorithm::AStar,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum HeuristicArg {
    Euclidean,
    Zero,
}

impl From<HeuristicArg> for Heuristic {
    fn from(arg: HeuristicArg) -> Self {
        match arg {
            HeuristicArg::Euclidean => Heuristic::Euclidean,
            HeuristicArg::Zero => Heuristic::Zero,
        }
    }
}

#[derive(Clone, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            Commands::Route {
                graph,
                from,
                to,
                algorithm,
                heuristic,
                trace,
                frame_stride,
            } => crate::commands::route::run(crate::commands::route::RouteArgs {
                graph,
                from,
                to,
                algorithm: algorithm.map(Into::into),
                heuristic: heuristic.map(Into::into),
                trace,
                frame_stride,
                quiet: self.quiet,
            }),
            Commands::Compare { graph, from, to } => {
                crate::commands::compare::run(&graph, &from, &to)
            }
            Commands::Inspect { graph } => crate::commands::inspect::run(&graph),
            Commands::Config { command } => crate::commands::config::run(command),
            Commands::Completion { shell } => {
                crate::commands::completion::run(shell);
                Ok(())
            }
            Commands::Version => {
                println!("roadtrace {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}
