//! Plain-text edge lists.
//!
//! Each edge occupies one line of ASCII-whitespace separated tokens:
//!
//! ```text
//! source destination [weight]
//! ```
//!
//! The first two tokens are node identifiers. An optional third token that
//! parses as an integer is the weight; anything else in that position
//! leaves the edge unweighted. Further tokens are ignored. Lines whose
//! endpoints are missing or not non-negative integers are skipped and
//! reported rather than failing the whole document.

use std::fmt::{self, Write as _};
use std::io::{self, Write};

use tracing::{Span, debug, field, instrument};

use crate::edge::{Edge, NodeId, Weight};

/// Renders `edges` as newline-terminated edge-list lines.
///
/// # Examples
/// ```
/// use randgraph_core::{Edge, format_edge_list};
///
/// let text = format_edge_list(&[Edge::new(1, 2).with_weight(5), Edge::new(2, 3)]);
/// assert_eq!(text, "1 2 5\n2 3\n");
/// ```
#[must_use]
pub fn format_edge_list(edges: &[Edge]) -> String {
    let mut out = String::with_capacity(edges.len().saturating_mul(8));
    for edge in edges {
        // Writing into a `String` cannot fail.
        let _ = writeln!(out, "{edge}");
    }
    out
}

/// Writes `edges` to `writer` as newline-terminated edge-list lines.
///
/// # Errors
/// Returns [`io::Error`] if writing to `writer` fails.
pub fn write_edge_list(edges: &[Edge], mut writer: impl Write) -> io::Result<()> {
    for edge in edges {
        writeln!(writer, "{edge}")?;
    }
    Ok(())
}

/// Why a line did not produce an edge.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SkipReason {
    /// The line held fewer than two tokens.
    MissingEndpoint,
    /// An endpoint token was not a non-negative integer.
    InvalidEndpoint {
        /// The offending token.
        token: String,
    },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingEndpoint => f.write_str("expected a source and a destination"),
            Self::InvalidEndpoint { token } => write!(f, "`{token}` is not a node identifier"),
        }
    }
}

/// A line that was ignored while parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SkippedLine {
    /// 1-based line number within the input.
    pub line_number: usize,
    /// Why the line was ignored.
    pub reason: SkipReason,
}

/// Outcome of [`parse_edge_list`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ParsedEdgeList {
    edges: Vec<Edge>,
    skipped: Vec<SkippedLine>,
}

impl ParsedEdgeList {
    /// Returns the parsed edges in input order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the non-blank lines that did not produce an edge.
    #[must_use]
    pub fn skipped(&self) -> &[SkippedLine] {
        &self.skipped
    }

    /// Consumes the result, returning only the edges.
    #[must_use]
    pub fn into_edges(self) -> Vec<Edge> {
        self.edges
    }
}

/// Parses an edge list. Blank lines are ignored; malformed lines are
/// collected in [`ParsedEdgeList::skipped`].
///
/// # Examples
/// ```
/// use randgraph_core::{Edge, parse_edge_list};
///
/// let parsed = parse_edge_list("1 2 5\n\n2 3\nfoo 4\n3 4 heavy\n");
/// assert_eq!(
///     parsed.edges(),
///     &[Edge::new(1, 2).with_weight(5), Edge::new(2, 3), Edge::new(3, 4)],
/// );
/// assert_eq!(parsed.skipped().len(), 1);
/// assert_eq!(parsed.skipped()[0].line_number, 4);
/// ```
#[instrument(
    name = "edge_list.parse",
    skip(input),
    fields(bytes = input.len(), edges = field::Empty, skipped = field::Empty),
)]
pub fn parse_edge_list(input: &str) -> ParsedEdgeList {
    let mut parsed = ParsedEdgeList::default();
    for (index, line) in input.lines().enumerate() {
        let line_number = index.saturating_add(1);
        match parse_line(line) {
            Ok(None) => {}
            Ok(Some(edge)) => parsed.edges.push(edge),
            Err(reason) => {
                debug!(line_number, %reason, "skipping edge-list line");
                parsed.skipped.push(SkippedLine {
                    line_number,
                    reason,
                });
            }
        }
    }
    let span = Span::current();
    span.record("edges", parsed.edges.len());
    span.record("skipped", parsed.skipped.len());
    parsed
}

fn parse_line(line: &str) -> Result<Option<Edge>, SkipReason> {
    let mut tokens = line.split_ascii_whitespace();
    let Some(first) = tokens.next() else {
        return Ok(None);
    };
    let source = parse_node(first)?;
    let destination = parse_node(tokens.next().ok_or(SkipReason::MissingEndpoint)?)?;
    let edge = Edge::new(source, destination);
    Ok(Some(
        match tokens.next().and_then(|token| token.parse::<Weight>().ok()) {
            Some(weight) => edge.with_weight(weight),
            None => edge,
        },
    ))
}

fn parse_node(token: &str) -> Result<NodeId, SkipReason> {
    token
        .parse::<NodeId>()
        .map_err(|_| SkipReason::InvalidEndpoint {
            token: token.to_owned(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::unweighted("1 2", Some(Edge::new(1, 2)))]
    #[case::weighted("1 2 9", Some(Edge::new(1, 2).with_weight(9)))]
    #[case::negative_weight("4 1 -3", Some(Edge::new(4, 1).with_weight(-3)))]
    #[case::non_numeric_weight("1 2 x", Some(Edge::new(1, 2)))]
    #[case::extra_tokens("1 2 3 4 5", Some(Edge::new(1, 2).with_weight(3)))]
    #[case::padded("  7\t8  ", Some(Edge::new(7, 8)))]
    #[case::carriage_return("1 2\r", Some(Edge::new(1, 2)))]
    #[case::blank("   ", None)]
    fn parse_line_accepts(#[case] line: &str, #[case] expected: Option<Edge>) {
        assert_eq!(parse_line(line), Ok(expected));
    }

    #[rstest]
    #[case::single_token("1", SkipReason::MissingEndpoint)]
    #[case::bad_source("a 2", SkipReason::InvalidEndpoint { token: "a".to_owned() })]
    #[case::bad_destination("1 2.5", SkipReason::InvalidEndpoint { token: "2.5".to_owned() })]
    #[case::negative_node("-1 2", SkipReason::InvalidEndpoint { token: "-1".to_owned() })]
    fn parse_line_rejects(#[case] line: &str, #[case] expected: SkipReason) {
        assert_eq!(parse_line(line), Err(expected));
    }

    #[test]
    fn parse_reports_line_numbers_for_skips() {
        let parsed = parse_edge_list("1 2\nbad\n\n3 x\n2 3\n");
        assert_eq!(parsed.edges(), &[Edge::new(1, 2), Edge::new(2, 3)]);
        let lines: Vec<usize> = parsed.skipped().iter().map(|skip| skip.line_number).collect();
        assert_eq!(lines, vec![2, 4]);
    }

    #[test]
    fn formatted_lists_parse_back() {
        let edges = vec![
            Edge::new(1, 2).with_weight(10),
            Edge::new(3, 1).with_weight(1),
            Edge::new(2, 3).with_weight(-4),
        ];
        let parsed = parse_edge_list(&format_edge_list(&edges));
        assert_eq!(parsed.into_edges(), edges);
    }

    #[test]
    fn write_edge_list_matches_format() -> io::Result<()> {
        let edges = [Edge::new(1, 2), Edge::new(2, 3).with_weight(4)];
        let mut buffer = Vec::new();
        write_edge_list(&edges, &mut buffer)?;
        assert_eq!(String::from_utf8_lossy(&buffer), format_edge_list(&edges));
        Ok(())
    }

    #[test]
    fn empty_input_yields_empty_list() {
        assert_eq!(parse_edge_list(""), ParsedEdgeList::default());
        assert_eq!(format_edge_list(&[]), "");
    }
}
