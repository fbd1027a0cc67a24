use std::collections::HashSet;

use sanipro_core::filter::Filter;
use sanipro_core::token::Token;
use sanipro_filters::graph::{preorder, SimilarityGraph, TreeEdge};
use sanipro_filters::similar::{SimilarFilter, SimilarMethod};

fn tokens() -> Vec<Token> {
    ["white hair", "smile", "white dress", "smiling"]
        .iter()
        .map(|n| Token::new(n, 1.0))
        .collect()
}

fn names(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(Token::name).collect()
}

fn assert_clustered(out: &[Token]) {
    let got = names(out);
    assert_eq!(&got[..2], &["white hair", "white dress"], "got: {got:?}");
    let tail: HashSet<&str> = got[2..].iter().copied().collect();
    assert_eq!(tail, HashSet::from(["smile", "smiling"]), "got: {got:?}");
}

#[test]
fn naive_puts_closest_to_first_next() {
    let out = SimilarFilter::new(SimilarMethod::Naive, false).apply(tokens());
    assert_clustered(&out);
}

#[test]
fn greedy_chains_neighbours() {
    let out = SimilarFilter::new(SimilarMethod::Greedy, false).apply(tokens());
    assert_clustered(&out);
}

#[test]
fn kruskal_clusters_similar_names() {
    let out = SimilarFilter::new(SimilarMethod::Kruskal, false).apply(tokens());
    assert_clustered(&out);
}

#[test]
fn prim_clusters_similar_names() {
    let out = SimilarFilter::new(SimilarMethod::Prim, false).apply(tokens());
    assert_clustered(&out);
}

#[test]
fn reverse_flips_the_order() {
    let forward = SimilarFilter::new(SimilarMethod::Kruskal, false).apply(tokens());
    let backward = SimilarFilter::new(SimilarMethod::Kruskal, true).apply(tokens());
    let mut expected = names(&forward);
    expected.reverse();
    assert_eq!(names(&backward), expected);
}

#[test]
fn empty_and_single_inputs() {
    for method in [
        SimilarMethod::Naive,
        SimilarMethod::Greedy,
        SimilarMethod::Kruskal,
        SimilarMethod::Prim,
    ] {
        assert!(SimilarFilter::new(method, false).apply(Vec::new()).is_empty());
        let one = SimilarFilter::new(method, false).apply(vec![Token::new("solo", 1.0)]);
        assert_eq!(names(&one), vec!["solo"]);
    }
}

#[test]
fn kruskal_and_prim_trees_have_equal_weight() {
    let names = ["red eyes", "blue eyes", "red hair", "long hair", "smile", "smiling"];
    let graph = SimilarityGraph::new(&names);
    let kruskal = graph.kruskal();
    let prim = graph.prim(0);
    assert_eq!(kruskal.len(), names.len() - 1);
    assert_eq!(prim.len(), names.len() - 1);

    let total = |edges: &[TreeEdge]| edges.iter().map(|e| e.distance).sum::<f64>();
    assert!((total(&kruskal) - total(&prim)).abs() < 1e-9);
}

#[test]
fn preorder_visits_nearest_child_first() {
    let edges = [
        TreeEdge { a: 0, b: 1, distance: 0.5 },
        TreeEdge { a: 0, b: 2, distance: 0.1 },
        TreeEdge { a: 2, b: 3, distance: 0.2 },
    ];
    assert_eq!(preorder(4, &edges, 0), vec![0, 2, 3, 1]);
}

#[test]
fn preorder_appends_unreached_nodes() {
    assert_eq!(preorder(3, &[], 0), vec![0, 1, 2]);
    assert!(preorder(0, &[], 0).is_empty());
}

#[test]
fn method_names_match_the_command_line() {
    let names: Vec<String> = [
        SimilarMethod::Naive,
        SimilarMethod::Greedy,
        SimilarMethod::Kruskal,
        SimilarMethod::Prim,
    ]
    .iter()
    .map(ToString::to_string)
    .collect();
    assert_eq!(names, vec!["naive", "greedy", "kruskal", "prim"]);
}
