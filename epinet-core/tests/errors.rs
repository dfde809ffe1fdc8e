use epinet_core::{NetworkError, NetworkErrorCode};
use rstest::rstest;

#[rstest]
#[case(
    NetworkError::NodeOutOfBounds { node: 3, size: 2 },
    NetworkErrorCode::NodeOutOfBounds,
    "NETWORK_NODE_OUT_OF_BOUNDS",
)]
#[case(
    NetworkError::InvalidMeanDegree { mean: -1.0 },
    NetworkErrorCode::InvalidMeanDegree,
    "NETWORK_INVALID_MEAN_DEGREE",
)]
#[case(
    NetworkError::Distribution { reason: "lambda too small".into() },
    NetworkErrorCode::Distribution,
    "NETWORK_DISTRIBUTION_FAILURE",
)]
fn returns_expected_network_code(
    #[case] error: NetworkError,
    #[case] expected: NetworkErrorCode,
    #[case] code: &str,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), code);
    assert_eq!(expected.to_string(), code);
}

#[rstest]
fn out_of_bounds_message_names_node_and_size() {
    let error = NetworkError::NodeOutOfBounds { node: 7, size: 4 };
    assert_eq!(
        error.to_string(),
        "node 7 is out of bounds for a network of 4 node(s)"
    );
}
