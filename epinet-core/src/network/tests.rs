use std::collections::BTreeSet;

use proptest::{prelude::*, test_runner::TestRunner};
use rstest::{fixture, rstest};
use test_strategy::Arbitrary;

use super::{LinkRejection, Network};
use crate::{
    NetworkError, SeededRng,
    test_utils::{ScriptedSource, suite_proptest_config},
};

#[fixture]
fn four_nodes() -> Network {
    let mut network = Network::with_source(SeededRng::new(17));
    network.resize(4);
    network
}

fn scripted(size: usize, targets: Vec<u64>) -> Network<ScriptedSource> {
    let mut network = Network::with_source(ScriptedSource::with_targets(targets));
    network.resize(size);
    network
}

#[rstest]
fn four_node_scenario(mut four_nodes: Network) {
    assert!(four_nodes.add_link(0, 1));
    assert!(!four_nodes.add_link(1, 0));
    assert!(!four_nodes.add_link(0, 0));
    assert!(!four_nodes.add_link(0, 5));
    assert_eq!(four_nodes.degree(0), Ok(1));
    assert_eq!(four_nodes.degree(1), Ok(1));
    assert_eq!(four_nodes.neighbors(0), Ok(vec![1]));
    assert_eq!(four_nodes.neighbors(1), Ok(vec![0]));
}

#[rstest]
#[case::self_loop(2, 2, LinkRejection::SelfLoop { node: 2 })]
#[case::first_out_of_range(4, 1, LinkRejection::OutOfBounds { node: 4, size: 4 })]
#[case::second_out_of_range(1, 9, LinkRejection::OutOfBounds { node: 9, size: 4 })]
#[case::both_out_of_range(7, 8, LinkRejection::OutOfBounds { node: 7, size: 4 })]
fn rejects_invalid_links(
    mut four_nodes: Network,
    #[case] a: usize,
    #[case] b: usize,
    #[case] expected: LinkRejection,
) {
    assert_eq!(four_nodes.try_add_link(a, b), Err(expected));
    assert_eq!(four_nodes.link_count(), 0);
}

#[rstest]
#[case(0, 3)]
#[case(3, 0)]
fn duplicate_is_rejected_in_either_orientation(
    mut four_nodes: Network,
    #[case] a: usize,
    #[case] b: usize,
) {
    assert_eq!(four_nodes.try_add_link(0, 3), Ok(()));
    assert_eq!(
        four_nodes.try_add_link(a, b),
        Err(LinkRejection::Duplicate { a, b })
    );
    assert_eq!(four_nodes.link_count(), 1);
}

#[rstest]
fn empty_network_rejects_every_link() {
    let mut network = Network::new();
    assert!(!network.add_link(0, 1));
    assert_eq!(network.size(), 0);
}

#[rstest]
fn resize_redraws_every_value() {
    let mut network = scripted(2, Vec::new());
    assert_eq!(network.values(), &[0.0, 1.0]);
    network.resize(3);
    assert_eq!(network.values(), &[2.0, 3.0, 4.0]);
    network.resize(1);
    assert_eq!(network.values(), &[5.0]);
}

#[rstest]
fn resize_keeps_links_until_pruned(mut four_nodes: Network) {
    assert!(four_nodes.add_link(0, 3));
    four_nodes.resize(2);
    assert_eq!(four_nodes.neighbors(0), Ok(vec![3]));
    assert_eq!(four_nodes.link_count(), 1);
    assert_eq!(four_nodes.prune_dangling_links(), 1);
    assert_eq!(four_nodes.neighbors(0), Ok(Vec::new()));
    assert_eq!(four_nodes.prune_dangling_links(), 0);
}

#[rstest]
fn growing_again_resurfaces_unpruned_links(mut four_nodes: Network) {
    assert!(four_nodes.add_link(1, 3));
    four_nodes.resize(2);
    four_nodes.resize(4);
    assert_eq!(four_nodes.neighbors(3), Ok(vec![1]));
    four_nodes.invariants().check_all().expect("links are back in range");
}

#[rstest]
#[case::empty(vec![], 0, vec![0.0, 1.0, 2.0])]
#[case::shorter(vec![9.0], 1, vec![9.0, 1.0, 2.0])]
#[case::exact(vec![7.0, 8.0, 9.0], 3, vec![7.0, 8.0, 9.0])]
#[case::longer(vec![4.0, 4.0, 4.0, 4.0], 3, vec![4.0, 4.0, 4.0])]
fn set_values_applies_the_overlap(
    #[case] input: Vec<f64>,
    #[case] written: usize,
    #[case] expected: Vec<f64>,
) {
    let mut network = scripted(3, Vec::new());
    assert_eq!(network.set_values(&input), written);
    assert_eq!(network.values(), expected.as_slice());
    assert_eq!(network.size(), 3);
}

#[rstest]
fn sorted_values_are_descending_and_leave_store_alone() {
    let mut network = scripted(5, Vec::new());
    network.set_values(&[0.3, -2.0, 4.5, 0.3, 1.0]);
    let sorted = network.sorted_values();
    assert_eq!(sorted, vec![4.5, 1.0, 0.3, 0.3, -2.0]);
    assert_eq!(network.values(), &[0.3, -2.0, 4.5, 0.3, 1.0]);
    assert_eq!(network.sorted_values(), sorted);
}

#[rstest]
fn checked_accessors_reject_out_of_range(four_nodes: Network) {
    let expected = NetworkError::NodeOutOfBounds { node: 4, size: 4 };
    assert_eq!(four_nodes.value(4), Err(expected.clone()));
    assert_eq!(four_nodes.degree(4), Err(expected.clone()));
    assert_eq!(four_nodes.neighbors(4), Err(expected));
    assert!(four_nodes.value(3).is_ok());
}

#[rstest]
fn random_connect_follows_greedy_order() {
    let mut network = scripted(4, vec![2, 0, 1, 1]);
    let created = network.random_connect(1.0).expect("valid mean");
    assert_eq!(created, 4);
    let links: Vec<_> = network.links().collect();
    assert_eq!(links, vec![(0, 1), (0, 2), (0, 3), (1, 2)]);
    assert_eq!(network.degree(0), Ok(3));
    assert_eq!(network.degree(3), Ok(1));
    assert_eq!(network.source().shuffles(), 4);
}

#[rstest]
fn random_connect_stops_when_candidates_run_out() {
    let mut network = scripted(3, vec![5, 5, 5]);
    let created = network.random_connect(5.0).expect("valid mean");
    assert_eq!(created, 3);
    assert_eq!(network.degree_stats().histogram(), &[0, 0, 3]);
}

#[rstest]
fn random_connect_clears_previous_links() {
    let mut network = scripted(3, Vec::new());
    assert!(network.add_link(0, 1));
    assert_eq!(network.random_connect(5.0), Ok(0));
    assert_eq!(network.link_count(), 0);
    assert_eq!(network.neighbors(0), Ok(Vec::new()));
}

#[rstest]
fn random_connect_clears_dangling_links() {
    let mut network = scripted(4, Vec::new());
    assert!(network.add_link(0, 3));
    network.resize(2);
    assert_eq!(network.random_connect(1.0), Ok(0));
    assert_eq!(network.link_count(), 0);
    network.resize(4);
    assert_eq!(network.neighbors(3), Ok(Vec::new()));
}

#[rstest]
#[case::negative(-1.0)]
#[case::nan(f64::NAN)]
#[case::infinite(f64::INFINITY)]
fn random_connect_rejects_invalid_mean(mut four_nodes: Network, #[case] mean: f64) {
    assert!(four_nodes.add_link(1, 2));
    let err = four_nodes
        .random_connect(mean)
        .expect_err("invalid mean must fail");
    assert!(matches!(err, NetworkError::InvalidMeanDegree { .. }));
    assert_eq!(four_nodes.neighbors(1), Ok(vec![2]));
}

#[rstest]
fn zero_mean_creates_no_links(mut four_nodes: Network) {
    assert_eq!(four_nodes.random_connect(0.0), Ok(0));
    assert!((0..4).all(|node| four_nodes.degree(node) == Ok(0)));
}

#[rstest]
fn identical_seeds_reproduce_networks() {
    let build = || {
        let mut network = Network::with_source(SeededRng::new(2024));
        network.resize(40);
        network.random_connect(3.0).expect("valid mean");
        network
    };
    let left = build();
    let right = build();
    assert_eq!(left.values(), right.values());
    assert_eq!(
        left.links().collect::<Vec<_>>(),
        right.links().collect::<Vec<_>>()
    );
}

#[test]
fn random_connect_preserves_invariants() {
    let mut runner = TestRunner::new(suite_proptest_config(64));
    runner
        .run(
            &(0_usize..40, 0.0_f64..8.0, any::<u64>()),
            |(size, mean, seed)| {
                let mut network = Network::with_source(SeededRng::new(seed));
                network.resize(size);
                let created = network
                    .random_connect(mean)
                    .map_err(|err| TestCaseError::fail(err.to_string()))?;
                prop_assert_eq!(created, network.link_count());
                prop_assert!(network.invariants().check_all().is_ok());
                let stats = network.degree_stats();
                prop_assert_eq!(stats.total(), 2 * created);
                prop_assert!(stats.max() < size.max(1));
                Ok(())
            },
        )
        .expect("random_connect property must hold");
}

#[derive(Clone, Debug, Arbitrary)]
enum LinkOp {
    #[weight(4)]
    Add(
        #[strategy(0_usize..12)] usize,
        #[strategy(0_usize..12)] usize,
    ),
    #[weight(1)]
    Resize(#[strategy(0_usize..12)] usize),
}

#[test]
fn add_link_matches_reference_model() {
    let mut runner = TestRunner::new(suite_proptest_config(128));
    runner
        .run(
            &prop::collection::vec(any::<LinkOp>(), 1..40),
            |ops| {
                let mut network = Network::with_source(SeededRng::new(1));
                network.resize(8);
                let mut model: BTreeSet<(usize, usize)> = BTreeSet::new();
                for op in ops {
                    match op {
                        LinkOp::Add(a, b) => {
                            let pair = (a.min(b), a.max(b));
                            let expected =
                                a != b && pair.1 < network.size() && !model.contains(&pair);
                            prop_assert_eq!(network.add_link(a, b), expected);
                            if expected {
                                model.insert(pair);
                            }
                        }
                        LinkOp::Resize(size) => network.resize(size),
                    }
                    prop_assert_eq!(network.links().collect::<BTreeSet<_>>(), model.clone());
                    prop_assert_eq!(network.link_count(), model.len());
                }
                Ok(())
            },
        )
        .expect("add_link must match the reference model");
}
