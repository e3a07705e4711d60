//! Tests for the probabilistic network and its incoming-weight invariant.

use immunet_core::errors::ValidationError;
use immunet_engine::model::ProbabilisticNetwork;

fn two_parent_network(w1: f64, w2: f64) -> ProbabilisticNetwork {
    let mut network = ProbabilisticNetwork::new();
    network.add_initial_infected_node("a");
    network.add_edge("a", "c", w1);
    network.add_edge("b", "c", w2);
    network
}

#[test]
fn incoming_sum_below_one_is_accepted() {
    let network = two_parent_network(0.3, 0.3);
    assert!(network.validate());
    assert!(network.check_invariant().is_ok());
}

#[test]
fn incoming_sum_above_one_is_rejected() {
    let network = two_parent_network(0.6, 0.6);
    assert!(!network.validate());
    match network.check_invariant() {
        Err(ValidationError::IncomingWeightExceeded { node, total }) => {
            assert_eq!(node, "c");
            assert!((total - 1.2).abs() < 1e-9);
        }
        other => panic!("expected IncomingWeightExceeded, got {other:?}"),
    }
}

#[test]
fn out_of_range_weights_are_rejected() {
    for weight in [-0.1, 1.5, f64::INFINITY] {
        let mut network = ProbabilisticNetwork::new();
        network.add_edge("a", "b", weight);
        assert!(
            matches!(
                network.check_invariant(),
                Err(ValidationError::InvalidWeight { .. })
            ),
            "weight {weight} accepted"
        );
    }
}

#[test]
fn invariant_is_per_target_not_per_source() {
    // a fans out with total weight 1.8, but each target receives at most 0.9
    let mut network = ProbabilisticNetwork::new();
    network.add_edge("a", "b", 0.9);
    network.add_edge("a", "c", 0.9);
    assert!(network.validate());
}

#[test]
fn parallel_edges_accumulate() {
    let mut network = ProbabilisticNetwork::new();
    network.add_edge("a", "b", 0.6);
    network.add_edge("a", "b", 0.6);
    assert!(!network.validate());
    assert_eq!(network.edge_count(), 2);
}

#[test]
fn nodes_and_seeds_are_registered() {
    let mut network = ProbabilisticNetwork::new();
    network.add_node("iso");
    network.add_initial_infected_node("s");
    network.add_edge("s", "t", 0.5);

    assert_eq!(network.node_count(), 3);
    assert_eq!(network.seeds().len(), 1);
    assert!(network.is_seed(network.node_id("s").unwrap()));
    assert!(!network.is_seed(network.node_id("iso").unwrap()));
    assert!(network.node_id("missing").is_none());
}

#[test]
fn incoming_preserves_insertion_order() {
    let mut network = ProbabilisticNetwork::new();
    network.add_edge("z", "t", 0.1);
    network.add_edge("a", "t", 0.2);
    network.add_edge("m", "t", 0.3);

    let t = network.node_id("t").unwrap();
    let parents: Vec<&str> = network
        .incoming(t)
        .map(|e| network.node_name(e.parent))
        .collect();
    assert_eq!(parents, vec!["z", "a", "m"]);
    assert_eq!(network.incoming(network.node_id("z").unwrap()).count(), 0);
}

#[test]
fn rounding_above_one_is_rejected_without_tolerance() {
    // 0.34 + 0.56 + 0.1 accumulates to 1.0000000000000002 in f64
    let mut network = ProbabilisticNetwork::new();
    network.add_initial_infected_node("a");
    network.add_edge("a", "d", 0.34);
    network.add_edge("b", "d", 0.56);
    network.add_edge("c", "d", 0.1);
    match network.check_invariant() {
        Err(ValidationError::IncomingWeightExceeded { node, total }) => {
            assert_eq!(node, "d");
            assert!(total > 1.0 && total - 1.0 < 1e-12);
        }
        other => panic!("expected IncomingWeightExceeded, got {other:?}"),
    }
}
