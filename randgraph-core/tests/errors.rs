use randgraph_core::{GraphError, GraphErrorCode};
use rstest::rstest;

#[rstest]
#[case(
    GraphError::InvalidNodeCount { got: 0 },
    GraphErrorCode::InvalidNodeCount,
    "GRAPH_INVALID_NODE_COUNT",
    true,
)]
#[case(
    GraphError::InvalidWeightRange { min: 5, max: 1 },
    GraphErrorCode::InvalidWeightRange,
    "GRAPH_INVALID_WEIGHT_RANGE",
    true,
)]
#[case(
    GraphError::InvalidAttemptBudget,
    GraphErrorCode::InvalidAttemptBudget,
    "GRAPH_INVALID_ATTEMPT_BUDGET",
    true,
)]
#[case(
    GraphError::GenerationFailed { edge_index: 4, attempts: 100 },
    GraphErrorCode::GenerationFailed,
    "GRAPH_GENERATION_FAILED",
    false,
)]
#[case(
    GraphError::CapacityExceeded { edges: usize::MAX },
    GraphErrorCode::CapacityExceeded,
    "GRAPH_CAPACITY_EXCEEDED",
    false,
)]
fn returns_expected_graph_code(
    #[case] error: GraphError,
    #[case] expected: GraphErrorCode,
    #[case] code: &str,
    #[case] invalid_argument: bool,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), code);
    assert_eq!(expected.to_string(), code);
    assert_eq!(error.is_invalid_argument(), invalid_argument);
}

#[test]
fn messages_name_the_offending_values() {
    assert_eq!(
        GraphError::InvalidWeightRange { min: 5, max: 1 }.to_string(),
        "weight range is empty: min_weight 5 is greater than max_weight 1"
    );
    assert_eq!(
        GraphError::GenerationFailed {
            edge_index: 2,
            attempts: 16,
        }
        .to_string(),
        "no unused edge found for edge 2 after 16 attempts"
    );
}
