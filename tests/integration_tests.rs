//! Integration tests for trueno-graphgen
//!
//! Tests realistic generation pipelines (seed file → growth → persistence)

use std::collections::HashSet;
use std::io::Cursor;
use trueno_graphgen::{
    chung_lu, erdos_renyi, erdos_renyi_average_degree, generalized_preferential_attachment,
    havel_hakimi, is_graphical, partial_duplication, preferential_attachment,
    read_matrix_market, seeded_rng, CsrGraph, Direction, GeneralizedAttachment, NodeId,
    SelfLoops,
};

#[test]
fn test_same_seed_same_graph() {
    let first = preferential_attachment(500, 3, 4, &mut seeded_rng(11)).unwrap();
    let second = preferential_attachment(500, 3, 4, &mut seeded_rng(11)).unwrap();
    assert_eq!(first, second);

    let other = preferential_attachment(500, 3, 4, &mut seeded_rng(12)).unwrap();
    assert_ne!(first, other);
}

#[test]
fn test_erdos_renyi_edge_count_near_expectation() {
    // n = 400, p = 0.05: E[edges] = 0.05 * 400 * 399 / 2 = 3990
    let mut rng = seeded_rng(7);
    let graph = erdos_renyi(400, 0.05, Direction::Undirected, &mut rng).unwrap();

    let edges = graph.edges().count();
    assert!((3500..4500).contains(&edges), "edges = {edges}");
}

#[test]
fn test_erdos_renyi_average_degree_forms() {
    // p >= 1 is read as an average degree, so both calls target degree 8
    let n = 1_000;
    let by_p = erdos_renyi(n, 8.0, Direction::Undirected, &mut seeded_rng(3)).unwrap();
    let by_d =
        erdos_renyi_average_degree(n, 8.0, Direction::Undirected, &mut seeded_rng(3)).unwrap();
    assert_eq!(by_p, by_d);

    #[allow(clippy::cast_precision_loss)]
    let mean = by_p.num_edges() as f64 / n as f64;
    assert!((7.0..9.0).contains(&mean), "mean degree = {mean}");
}

#[test]
fn test_erdos_renyi_directed_has_no_loops() {
    let mut rng = seeded_rng(21);
    let graph = erdos_renyi(30, 1.0 - f64::EPSILON, Direction::Directed, &mut rng).unwrap();

    assert!(graph.is_directed());
    assert!(graph.arcs().all(|(u, v, _)| u != v));
    assert!(graph.num_edges() <= 30 * 29);
}

#[test]
fn test_parameter_errors_are_classified() {
    let mut rng = seeded_rng(0);

    assert!(erdos_renyi(10, -0.1, Direction::Directed, &mut rng).unwrap_err().is_domain());
    assert!(erdos_renyi(10, f64::NAN, Direction::Directed, &mut rng).unwrap_err().is_domain());
    assert!(erdos_renyi(10, 11.0, Direction::Directed, &mut rng).unwrap_err().is_domain());

    assert!(havel_hakimi(&[3, 3, 1, 1]).unwrap_err().is_argument());
    assert!(preferential_attachment(2, 1, 3, &mut rng).unwrap_err().is_argument());
    assert!(generalized_preferential_attachment(10, 0.7, 0.5, 3, SelfLoops::Forbidden, &mut rng)
        .unwrap_err()
        .is_domain());
}

#[test]
fn test_havel_hakimi_regular_sequence() {
    // 3-regular on 10 vertices
    let degrees = vec![3; 10];
    assert!(is_graphical(&degrees));

    let graph = havel_hakimi(&degrees).unwrap();
    assert_eq!(graph.degrees(), degrees);
    assert_eq!(graph.edges().count(), 15);
    assert_eq!(graph.direction(), Direction::Undirected);
}

#[test]
fn test_chung_lu_follows_weights() {
    // Two hubs with large expected degree among many leaves
    let mut degrees = vec![40, 40];
    degrees.extend(std::iter::repeat(2).take(98));

    let mut rng = seeded_rng(17);
    let graph = chung_lu(&degrees, None, &mut rng).unwrap();
    let realized = graph.degrees();

    assert_eq!(graph.edges().count(), degrees.iter().sum::<usize>() / 2);
    #[allow(clippy::cast_precision_loss)]
    let leaf_mean = realized[2..].iter().sum::<usize>() as f64 / 98.0;
    assert!(realized[0] as f64 > 4.0 * leaf_mean, "hub {} leaf {leaf_mean}", realized[0]);
}

#[test]
fn test_preferential_attachment_heavy_tail() {
    let mut rng = seeded_rng(99);
    let graph = preferential_attachment(5_000, 2, 3, &mut rng).unwrap();

    let degrees = graph.degrees();
    let max = degrees.iter().copied().max().unwrap();
    assert!(max >= 40, "max degree {max}");
    assert!(degrees.iter().all(|&d| d >= 1));

    // Every post-seed vertex attaches only to older vertices
    for v in 3..5_000_u32 {
        let older = graph
            .outgoing_neighbors(NodeId(v))
            .unwrap()
            .iter()
            .filter(|&&u| u < v)
            .count();
        assert!((1..=2).contains(&older));
    }
}

#[test]
fn test_generalized_attachment_pure_node_events_is_tree() {
    // p = 1: every event adds one vertex and one edge, so a clique seed
    // plus a tree of attachments
    let mut rng = seeded_rng(8);
    let graph = GeneralizedAttachment::new(300, 1.0, 0.0)
        .generate_from_clique(3, &mut rng)
        .unwrap();

    assert_eq!(graph.num_nodes(), 300);
    assert_eq!(graph.edges().count(), 3 + 297);
}

#[test]
fn test_generalized_attachment_component_events() {
    // p = r = 0: only two-vertex components, started from a single edge
    let seed = CsrGraph::from_undirected_edges(2, &[(0, 1)]).unwrap();
    let mut rng = seeded_rng(4);
    let graph = GeneralizedAttachment::new(11, 0.0, 0.0)
        .generate_from_seed(&seed, &mut rng)
        .unwrap();

    // 4 components, then a forced node event for the last slot
    assert_eq!(graph.num_nodes(), 11);
    assert_eq!(graph.edges().count(), 1 + 4 + 1);
}

#[test]
fn test_generalized_attachment_self_loop_policy() {
    let mut rng = seeded_rng(31);
    let forbidden = GeneralizedAttachment::new(200, 0.2, 0.8)
        .generate_from_clique(3, &mut rng)
        .unwrap();
    assert!(forbidden.arcs().all(|(u, v, _)| u != v));

    let allowed = GeneralizedAttachment::new(200, 0.2, 0.8)
        .with_self_loops(SelfLoops::Allowed)
        .generate_from_clique(3, &mut seeded_rng(31))
        .unwrap();
    assert_eq!(allowed.num_nodes(), 200);
}

#[test]
fn test_matrix_seed_then_duplication() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("triangle.mtx");
    std::fs::write(
        &path,
        "%%MatrixMarket matrix coordinate pattern symmetric\n3 3 3\n2 1\n3 1\n3 2\n",
    )
    .unwrap();

    let seed = CsrGraph::from_matrix_file(&path, Direction::Undirected).unwrap();
    assert_eq!(seed.degrees(), vec![2, 2, 2]);

    let mut rng = seeded_rng(10);
    let grown = partial_duplication(&seed, 50, 1.0, &mut rng).unwrap();

    // Full retention keeps every copy attached and the result symmetric
    assert_eq!(grown.num_nodes(), 53);
    assert!(grown.degrees().iter().all(|&d| d >= 2));
    let arcs: HashSet<(u32, u32)> = grown.arcs().map(|(u, v, _)| (u, v)).collect();
    assert!(arcs.iter().all(|&(u, v)| arcs.contains(&(v, u))));
}

#[test]
fn test_one_sided_matrix_seed_rejected() {
    // A general matrix listing only 1 → 2 and 3 → 4 is not an undirected graph
    let text = "%%MatrixMarket matrix coordinate pattern general\n4 4 2\n1 2\n3 4\n";
    let loaded = read_matrix_market(Cursor::new(text), Direction::Undirected);
    assert!(loaded.is_err());

    // The same file declared symmetric is a valid seed for both growth processes
    let text = "%%MatrixMarket matrix coordinate pattern symmetric\n4 4 2\n1 2\n3 4\n";
    let seed = read_matrix_market(Cursor::new(text), Direction::Undirected).unwrap();

    let mut rng = seeded_rng(3);
    let grown = partial_duplication(&seed, 5, 1.0, &mut rng).unwrap();
    assert!(grown.is_symmetric());

    let attached = GeneralizedAttachment::new(6, 0.0, 0.99)
        .generate_from_seed(&seed, &mut rng)
        .unwrap();
    assert_eq!(attached.num_nodes(), 6);
    assert!(attached.is_symmetric());
}

#[test]
fn test_arc_multiset_roundtrip() {
    let mut rng = seeded_rng(2);
    let graph = erdos_renyi(50, 0.2, Direction::Directed, &mut rng).unwrap();

    let sources: Vec<u32> = graph.arcs().map(|(u, _, _)| u).collect();
    let targets: Vec<u32> = graph.arcs().map(|(_, v, _)| v).collect();
    let rebuilt = CsrGraph::from_arcs(50, &sources, &targets, None, Direction::Directed).unwrap();

    assert_eq!(rebuilt, graph);
}

#[cfg(feature = "storage")]
#[tokio::test]
async fn test_parquet_persistence_of_generated_graph() {
    use tempfile::tempdir;

    let dir = tempdir().unwrap();
    let path = dir.path().join("pa_graph");

    let mut rng = seeded_rng(5);
    let seed = CsrGraph::from_undirected_edges(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
    let graph = partial_duplication(&seed, 20, 0.3, &mut rng).unwrap();

    graph.write_parquet(&path).await.unwrap();
    let loaded = CsrGraph::read_parquet(&path).await.unwrap();

    assert_eq!(loaded, graph);
    assert_eq!(loaded.num_nodes(), 24);
    assert_eq!(loaded.direction(), Direction::Undirected);
}
