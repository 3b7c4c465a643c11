//! Command definitions and execution for the randgraph CLI.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use randgraph_core::{
    DEFAULT_MAX_ATTEMPTS_PER_EDGE, DEFAULT_MAX_WEIGHT, DEFAULT_MIN_WEIGHT, Edge, GeneratorParams,
    GraphData, GraphError, GraphRequest, GraphRequestBuilder, RandomGraphGenerator, SkippedLine,
    Weight, parse_edge_list, write_edge_list,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument, warn};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "randgraph", about = "Generate and inspect random connected graphs.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate a random connected simple graph as an edge list.
    Generate(GenerateCommand),
    /// Summarise an edge-list file.
    Inspect(InspectCommand),
}

/// Options accepted by the `generate` command.
#[derive(Debug, Args, Clone)]
pub struct GenerateCommand {
    /// Number of nodes, numbered from 1.
    #[arg(long, value_parser = clap::value_parser!(usize))]
    pub nodes: usize,

    /// Number of edges; values above `nodes * (nodes - 1) / 2` are clamped.
    #[arg(long, value_parser = clap::value_parser!(usize))]
    pub edges: usize,

    /// Attach random integer weights to every edge.
    #[arg(long)]
    pub weighted: bool,

    /// Lower weight bound (implies `--weighted`).
    #[arg(long, allow_negative_numbers = true)]
    pub min_weight: Option<Weight>,

    /// Upper weight bound (implies `--weighted`).
    #[arg(long, allow_negative_numbers = true)]
    pub max_weight: Option<Weight>,

    /// Seed for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Candidate draws allowed per edge before giving up.
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS_PER_EDGE)]
    pub max_attempts: usize,

    /// Write the edge list to this file instead of stdout.
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

/// Options accepted by the `inspect` command.
#[derive(Debug, Args, Clone)]
pub struct InspectCommand {
    /// Path to an edge-list file.
    pub path: PathBuf,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while reading or writing an edge list.
    #[error("failed to access `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Request validation or generation failed.
    #[error(transparent)]
    Core(#[from] GraphError),
}

/// Result of a generated graph.
#[derive(Debug, Clone)]
pub struct GenerateSummary {
    /// The validated request the graph was generated for.
    pub request: GraphRequest,
    /// Generated edges in generation order.
    pub edges: Vec<Edge>,
    /// File the edges were written to, if any.
    pub output: Option<PathBuf>,
}

/// Connectivity report for an edge-list file.
#[derive(Debug, Clone)]
pub struct InspectSummary {
    /// Inspected file.
    pub path: PathBuf,
    /// Graph assembled from the parsed edges.
    pub graph: GraphData,
    /// Lines that did not describe an edge.
    pub skipped: Vec<SkippedLine>,
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub enum CommandOutput {
    /// Output of `generate`.
    Generated(GenerateSummary),
    /// Output of `inspect`.
    Inspected(InspectSummary),
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when validation, generation or file access fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use randgraph_cli::cli::{Cli, Command, CommandOutput, GenerateCommand, run_cli};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let cli = Cli {
///     command: Command::Generate(GenerateCommand {
///         nodes: 4,
///         edges: 3,
///         weighted: false,
///         min_weight: None,
///         max_weight: None,
///         seed: Some(1),
///         max_attempts: 1_000,
///         output: None,
///     }),
/// };
/// let CommandOutput::Generated(summary) = run_cli(cli)? else {
///     return Err("expected generated output".into());
/// };
/// assert_eq!(summary.edges.len(), 3);
/// # Ok(())
/// # }
/// ```
pub fn run_cli(cli: Cli) -> Result<CommandOutput, CliError> {
    match cli.command {
        Command::Generate(command) => run_generate(command).map(CommandOutput::Generated),
        Command::Inspect(command) => run_inspect(&command).map(CommandOutput::Inspected),
    }
}

/// Resolves the weight bounds to generate with.
///
/// Returns `None` for unweighted graphs. When only one bound is supplied
/// the other keeps its default unless that would invert the range, in
/// which case it is pulled to the supplied bound. Two explicit bounds are
/// passed through untouched so an inverted pair is reported by validation.
pub(super) fn resolve_weight_bounds(
    weighted: bool,
    min_weight: Option<Weight>,
    max_weight: Option<Weight>,
) -> Option<(Weight, Weight)> {
    match (min_weight, max_weight) {
        (Some(min), Some(max)) => Some((min, max)),
        (Some(min), None) => Some((min, DEFAULT_MAX_WEIGHT.max(min))),
        (None, Some(max)) => Some((DEFAULT_MIN_WEIGHT.min(max), max)),
        (None, None) if weighted => Some((DEFAULT_MIN_WEIGHT, DEFAULT_MAX_WEIGHT)),
        (None, None) => None,
    }
}

#[instrument(
    name = "cli.generate",
    err,
    skip(command),
    fields(nodes = command.nodes, edges = command.edges, seed = field::Empty),
)]
pub(super) fn run_generate(command: GenerateCommand) -> Result<GenerateSummary, CliError> {
    let GenerateCommand {
        nodes,
        edges,
        weighted,
        min_weight,
        max_weight,
        seed,
        max_attempts,
        output,
    } = command;

    let builder = GraphRequestBuilder::new().with_nodes(nodes).with_edges(edges);
    let builder = match resolve_weight_bounds(weighted, min_weight, max_weight) {
        Some((min, max)) => builder.with_weight_bounds(min, max),
        None => builder,
    };
    let request = builder.build()?;

    let mut params = GeneratorParams::new(max_attempts)?;
    if let Some(seed) = seed {
        Span::current().record("seed", seed);
        params = params.with_rng_seed(seed);
    }
    let generated = RandomGraphGenerator::new(params).generate(&request)?;

    if request.is_clamped() {
        warn!(
            requested = request.requested_edges(),
            generated = request.edge_count(),
            "requested edge count exceeds the simple-graph maximum"
        );
    }
    if !request.spans_all_nodes() {
        warn!(
            nodes = request.node_count(),
            edges = request.edge_count(),
            "edge count is below a spanning tree; graph will be disconnected"
        );
    }

    if let Some(path) = &output {
        write_edges_to_path(&generated, path)?;
    }
    info!(edges = generated.len(), "generate completed");
    Ok(GenerateSummary {
        request,
        edges: generated,
        output,
    })
}

#[instrument(
    name = "cli.inspect",
    err,
    skip(command),
    fields(path = %command.path.display()),
)]
pub(super) fn run_inspect(command: &InspectCommand) -> Result<InspectSummary, CliError> {
    let text = fs::read_to_string(&command.path).map_err(|source| CliError::Io {
        path: command.path.clone(),
        source,
    })?;
    let parsed = parse_edge_list(&text);
    let skipped = parsed.skipped().to_vec();
    let graph = GraphData::from_parsed(parsed);
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        skipped = skipped.len(),
        "inspect completed"
    );
    Ok(InspectSummary {
        path: command.path.clone(),
        graph,
        skipped,
    })
}

fn write_edges_to_path(edges: &[Edge], path: &Path) -> Result<(), CliError> {
    let to_cli_error = |source| CliError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(to_cli_error)?;
    let mut writer = BufWriter::new(file);
    write_edge_list(edges, &mut writer).map_err(to_cli_error)?;
    writer.flush().map_err(to_cli_error)
}

/// Renders `output` to `writer`.
///
/// Generated graphs print their edge list unless it was written to a file,
/// in which case a one-line confirmation is printed instead.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_output(output: &CommandOutput, mut writer: impl Write) -> io::Result<()> {
    match output {
        CommandOutput::Generated(summary) => match &summary.output {
            Some(path) => writeln!(
                writer,
                "wrote {} edges to {}",
                summary.edges.len(),
                path.display()
            ),
            None => write_edge_list(&summary.edges, writer),
        },
        CommandOutput::Inspected(summary) => render_inspection(summary, writer),
    }
}

fn render_inspection(summary: &InspectSummary, mut writer: impl Write) -> io::Result<()> {
    let graph = &summary.graph;
    writeln!(writer, "file: {}", summary.path.display())?;
    writeln!(writer, "nodes: {}", graph.node_count())?;
    writeln!(writer, "edges: {}", graph.edge_count())?;
    writeln!(writer, "components: {}", graph.component_count())?;
    writeln!(writer, "connected: {}", graph.is_connected())?;
    writeln!(writer, "skipped lines: {}", summary.skipped.len())?;
    for skipped in &summary.skipped {
        writeln!(writer, "  line {}: {}", skipped.line_number, skipped.reason)?;
    }
    Ok(())
}
