//! Unit tests for the CLI commands and their rendering.

#[path = "test_helpers.rs"]
mod test_helpers;

use super::commands::{resolve_weight_bounds, run_generate, run_inspect};
use super::{
    Cli, CliError, Command, CommandOutput, GenerateSummary, InspectCommand, InspectSummary,
    render_output, run_cli,
};

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use randgraph_core::{GraphData, GraphError, GraphErrorCode, SkipReason, parse_edge_list};
use rstest::rstest;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;

use randgraph_test_support::tracing::RecordingLayer;

use test_helpers::{
    create_text_file, generate_command, generate_expecting_error, run_cli_expecting_error,
    temp_dir,
};

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn generated(output: CommandOutput) -> GenerateSummary {
    match output {
        CommandOutput::Generated(summary) => summary,
        CommandOutput::Inspected(_) => panic!("expected generate output"),
    }
}

fn inspected(output: CommandOutput) -> InspectSummary {
    match output {
        CommandOutput::Inspected(summary) => summary,
        CommandOutput::Generated(_) => panic!("expected inspect output"),
    }
}

#[rstest]
#[case::unweighted(false, None, None, None)]
#[case::weighted_defaults(true, None, None, Some((1, 100)))]
#[case::both_bounds(false, Some(5), Some(9), Some((5, 9)))]
#[case::inverted_pair_passes_through(false, Some(9), Some(5), Some((9, 5)))]
#[case::min_only(false, Some(20), None, Some((20, 100)))]
#[case::min_above_default_max(false, Some(500), None, Some((500, 500)))]
#[case::max_only(false, None, Some(50), Some((1, 50)))]
#[case::max_below_default_min(false, None, Some(-3), Some((-3, -3)))]
fn resolve_weight_bounds_fills_missing_bound(
    #[case] weighted: bool,
    #[case] min: Option<i64>,
    #[case] max: Option<i64>,
    #[case] expected: Option<(i64, i64)>,
) {
    assert_eq!(resolve_weight_bounds(weighted, min, max), expected);
}

#[rstest]
fn parses_generate_arguments() {
    let cli = Cli::try_parse_from([
        "randgraph",
        "generate",
        "--nodes",
        "6",
        "--edges",
        "8",
        "--min-weight",
        "-4",
        "--seed",
        "3",
    ])
    .expect("arguments must parse");
    let Command::Generate(command) = cli.command else {
        panic!("expected generate command");
    };
    assert_eq!(command.nodes, 6);
    assert_eq!(command.edges, 8);
    assert_eq!(command.min_weight, Some(-4));
    assert_eq!(command.max_weight, None);
    assert_eq!(command.seed, Some(3));
    assert_eq!(command.max_attempts, 1_000_000);
    assert!(command.output.is_none());
}

#[rstest]
fn parses_inspect_arguments() {
    let cli = Cli::try_parse_from(["randgraph", "inspect", "graph.txt"])
        .expect("arguments must parse");
    let Command::Inspect(command) = cli.command else {
        panic!("expected inspect command");
    };
    assert_eq!(command.path, PathBuf::from("graph.txt"));
}

#[rstest]
fn rejects_negative_node_count_at_parse_time() {
    let result = Cli::try_parse_from(["randgraph", "generate", "--nodes", "-1", "--edges", "0"]);
    assert!(result.is_err());
}

#[rstest]
#[case(4, 3)]
#[case(6, 10)]
#[case(3, 10)]
fn generate_renders_parseable_edge_list(#[case] nodes: usize, #[case] edges: usize) -> TestResult {
    let summary = run_generate(generate_command(nodes, edges))?;
    assert_eq!(summary.edges.len(), summary.request.edge_count());

    let mut rendered = Vec::new();
    render_output(&CommandOutput::Generated(summary.clone()), &mut rendered)?;
    let text = String::from_utf8(rendered)?;
    let parsed = parse_edge_list(&text);
    assert!(parsed.skipped().is_empty());
    assert_eq!(parsed.edges(), summary.edges.as_slice());

    let graph = GraphData::from_edges(parsed.into_edges());
    assert_eq!(graph.node_count(), nodes);
    assert!(graph.is_connected());
    Ok(())
}

#[rstest]
fn generate_is_reproducible_with_seed() -> TestResult {
    let first = run_generate(generate_command(10, 20))?;
    let second = run_generate(generate_command(10, 20))?;
    assert_eq!(first.edges, second.edges);
    Ok(())
}

#[rstest]
fn weight_bound_implies_weighted_output() -> TestResult {
    let mut command = generate_command(5, 6);
    command.max_weight = Some(3);
    let summary = run_generate(command)?;
    assert!(summary.request.is_weighted());
    assert!(
        summary
            .edges
            .iter()
            .all(|edge| edge.weight().is_some_and(|weight| (1..=3).contains(&weight)))
    );
    Ok(())
}

#[rstest]
fn generate_rejects_zero_nodes() {
    let err = generate_expecting_error(generate_command(0, 1), "zero nodes must fail");
    match err {
        CliError::Core(core) => {
            assert_eq!(core, GraphError::InvalidNodeCount { got: 0 });
            assert_eq!(core.code(), GraphErrorCode::InvalidNodeCount);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[rstest]
fn generate_rejects_inverted_bounds() {
    let mut command = generate_command(4, 3);
    command.min_weight = Some(10);
    command.max_weight = Some(2);
    let err = generate_expecting_error(command, "inverted bounds must fail");
    assert!(matches!(
        err,
        CliError::Core(GraphError::InvalidWeightRange { min: 10, max: 2 })
    ));
}

#[rstest]
fn generate_rejects_zero_attempt_budget() {
    let mut command = generate_command(4, 3);
    command.max_attempts = 0;
    let err = generate_expecting_error(command, "zero budget must fail");
    assert!(matches!(
        err,
        CliError::Core(GraphError::InvalidAttemptBudget)
    ));
}

#[rstest]
fn generate_reports_oversized_request_as_core_error() {
    let err = generate_expecting_error(
        generate_command(usize::MAX, usize::MAX),
        "oversized request must fail",
    );
    match err {
        CliError::Core(core) => {
            assert_eq!(core, GraphError::CapacityExceeded { edges: usize::MAX });
            assert_eq!(core.code().as_str(), "GRAPH_CAPACITY_EXCEEDED");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[rstest]
fn generate_writes_output_file() -> TestResult {
    let dir = temp_dir();
    let path = dir.path().join("graph.txt");
    let mut command = generate_command(7, 9);
    command.output = Some(path.clone());

    let summary = run_generate(command)?;
    let written = fs::read_to_string(&path)?;
    assert_eq!(parse_edge_list(&written).edges(), summary.edges.as_slice());

    let mut rendered = Vec::new();
    render_output(&CommandOutput::Generated(summary), &mut rendered)?;
    let text = String::from_utf8(rendered)?;
    assert_eq!(text, format!("wrote 9 edges to {}\n", path.display()));
    Ok(())
}

#[rstest]
fn generate_reports_unwritable_output() {
    let dir = temp_dir();
    let path = dir.path().join("missing").join("graph.txt");
    let mut command = generate_command(4, 3);
    command.output = Some(path.clone());

    let err = generate_expecting_error(command, "missing directory must fail");
    match err {
        CliError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[rstest]
fn generate_records_span_and_warnings() -> TestResult {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    let summary =
        tracing::subscriber::with_default(subscriber, || run_generate(generate_command(5, 2)))?;
    assert_eq!(summary.edges.len(), 2);

    let spans = layer.spans();
    let span = spans
        .iter()
        .find(|span| span.name == "cli.generate")
        .expect("cli.generate span must exist");
    assert_eq!(span.fields.get("nodes"), Some(&"5".to_owned()));
    assert_eq!(span.fields.get("edges"), Some(&"2".to_owned()));
    assert_eq!(span.fields.get("seed"), Some(&"7".to_owned()));

    let events = layer.events();
    assert!(events.iter().any(|event| {
        event.level == Level::WARN
            && event.fields.get("message").is_some_and(|value| {
                value == "edge count is below a spanning tree; graph will be disconnected"
            })
    }));
    Ok(())
}

#[rstest]
fn inspect_reports_shape_and_skipped_lines() -> TestResult {
    let dir = temp_dir();
    let path = create_text_file(
        &dir,
        "graph.txt",
        "1 2 4\n2 3\n\n# comment\n4 5 x\n5\n",
    )?;
    let cli = Cli {
        command: Command::Inspect(InspectCommand { path: path.clone() }),
    };
    let summary = inspected(run_cli(cli)?);

    assert_eq!(summary.graph.node_count(), 5);
    assert_eq!(summary.graph.edge_count(), 3);
    assert_eq!(summary.graph.component_count(), 2);
    assert!(!summary.graph.is_connected());
    assert_eq!(summary.skipped.len(), 2);
    assert_eq!(summary.skipped[0].line_number, 4);
    assert_eq!(
        summary.skipped[0].reason,
        SkipReason::InvalidEndpoint {
            token: "#".to_owned()
        }
    );
    assert_eq!(summary.skipped[1].line_number, 6);
    assert_eq!(summary.skipped[1].reason, SkipReason::MissingEndpoint);

    let mut rendered = Vec::new();
    render_output(&CommandOutput::Inspected(summary), &mut rendered)?;
    let text = String::from_utf8(rendered)?;
    let expected = format!(
        "file: {}\nnodes: 5\nedges: 3\ncomponents: 2\nconnected: false\nskipped lines: 2\n  \
         line 4: `#` is not a node identifier\n  line 6: expected a source and a destination\n",
        path.display()
    );
    assert_eq!(text, expected);
    Ok(())
}

#[rstest]
fn inspect_round_trips_generated_file() -> TestResult {
    let dir = temp_dir();
    let path = dir.path().join("generated.txt");
    let mut command = generate_command(12, 30);
    command.weighted = true;
    command.output = Some(path.clone());
    generated(run_cli(Cli {
        command: Command::Generate(command),
    })?);

    let summary = run_inspect(&InspectCommand { path })?;
    assert_eq!(summary.graph.node_count(), 12);
    assert_eq!(summary.graph.edge_count(), 30);
    assert!(summary.graph.is_connected());
    assert!(summary.skipped.is_empty());
    Ok(())
}

#[rstest]
fn inspect_reports_missing_file() {
    let dir = temp_dir();
    let path = dir.path().join("absent.txt");
    let cli = Cli {
        command: Command::Inspect(InspectCommand { path: path.clone() }),
    };
    let err = run_cli_expecting_error(cli, "missing file must fail");
    match err {
        CliError::Io { path: reported, source } => {
            assert_eq!(reported, path);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
