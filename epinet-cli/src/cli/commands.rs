//! Command implementations and argument parsing for the epinet CLI.

use std::io::{self, Write};

use clap::{Args, Parser, Subcommand};
use epinet_core::{DEFAULT_RNG_SEED, DegreeStats, NetworkBuilder, NetworkError};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

const DEFAULT_TOP_VALUES: usize = 5;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "epinet", about = "Generate random value-carrying networks.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Build a network and link it with Poisson-distributed degree targets.
    Generate(GenerateCommand),
}

/// Options accepted by the `generate` command.
#[derive(Debug, Args, Clone)]
pub struct GenerateCommand {
    /// Number of nodes in the network.
    #[arg(long, value_parser = clap::value_parser!(usize))]
    pub nodes: usize,

    /// Mean of the Poisson distribution used for per-node degree targets.
    #[arg(long = "mean-degree")]
    pub mean_degree: f64,

    /// Seed for value draws and link generation.
    #[arg(long, default_value_t = DEFAULT_RNG_SEED)]
    pub seed: u64,

    /// Number of highest node values to report.
    #[arg(long, default_value_t = DEFAULT_TOP_VALUES)]
    pub top: usize,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Network generation failed.
    #[error(transparent)]
    Core(#[from] NetworkError),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct GenerationSummary {
    /// Number of nodes generated.
    pub nodes: usize,
    /// Seed the network was generated with.
    pub seed: u64,
    /// Links created by random connection.
    pub links: usize,
    /// Degree distribution of the generated network.
    pub degrees: DegreeStats,
    /// Highest node values, in descending order.
    pub top_values: Vec<f64>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when generation fails.
///
/// # Examples
/// ```
/// use epinet_cli::cli::{Cli, Command, GenerateCommand, run_cli};
///
/// let cli = Cli {
///     command: Command::Generate(GenerateCommand {
///         nodes: 20,
///         mean_degree: 2.0,
///         seed: 7,
///         top: 3,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.nodes, 20);
/// assert_eq!(summary.top_values.len(), 3);
/// assert_eq!(summary.degrees.total(), 2 * summary.links);
/// # Ok::<(), epinet_cli::cli::CliError>(())
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<GenerationSummary, CliError> {
    match cli.command {
        Command::Generate(generate) => {
            Span::current().record("command", field::display("generate"));
            run_generate(&generate)
        }
    }
}

#[instrument(
    name = "cli.generate",
    err,
    skip(command),
    fields(nodes = command.nodes, mean_degree = command.mean_degree, seed = command.seed),
)]
pub(super) fn run_generate(command: &GenerateCommand) -> Result<GenerationSummary, CliError> {
    let mut network = NetworkBuilder::new()
        .with_size(command.nodes)
        .with_rng_seed(command.seed)
        .build();
    let links = network.random_connect(command.mean_degree)?;
    let degrees = network.degree_stats();
    let mut top_values = network.sorted_values();
    top_values.truncate(command.top);

    info!(
        links,
        max_degree = degrees.max(),
        mean_degree = degrees.mean(),
        "network generated"
    );
    Ok(GenerationSummary {
        nodes: network.size(),
        seed: command.seed,
        links,
        degrees,
        top_values,
    })
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::io::Cursor;
/// use epinet_cli::cli::{GenerationSummary, render_summary};
/// use epinet_core::DegreeStats;
///
/// let summary = GenerationSummary {
///     nodes: 2,
///     seed: 1,
///     links: 1,
///     degrees: DegreeStats::from_degrees([1, 1]),
///     top_values: vec![0.5],
/// };
/// let mut buffer = Cursor::new(Vec::new());
/// render_summary(&summary, &mut buffer)?;
/// let text = String::from_utf8(buffer.into_inner()).expect("utf-8 output");
/// assert!(text.contains("links: 1"));
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn render_summary(summary: &GenerationSummary, mut writer: impl Write) -> io::Result<()> {
    let degrees = &summary.degrees;
    writeln!(writer, "nodes: {}", summary.nodes)?;
    writeln!(writer, "seed: {}", summary.seed)?;
    writeln!(writer, "links: {}", summary.links)?;
    writeln!(
        writer,
        "degree: min={} max={} mean={:.3}",
        degrees.min(),
        degrees.max(),
        degrees.mean()
    )?;
    writeln!(writer, "degree histogram:")?;
    for (degree, count) in degrees.histogram().iter().enumerate() {
        if *count > 0 {
            writeln!(writer, "{degree}\t{count}")?;
        }
    }
    writeln!(writer, "top values:")?;
    for (rank, value) in summary.top_values.iter().enumerate() {
        writeln!(writer, "{rank}\t{value:.6}")?;
    }
    Ok(())
}
