//! Similarity graph over token names and its minimum spanning trees.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use petgraph::algo::min_spanning_tree;
use petgraph::data::Element;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use sanipro_core::similarity::ratio;

/// An edge of a spanning tree: two token positions and their distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeEdge {
    pub a: usize,
    pub b: usize,
    pub distance: f64,
}

/// Complete undirected graph whose nodes are token positions and whose
/// edge weights are `1 - similarity` between the token names.
pub struct SimilarityGraph {
    graph: UnGraph<usize, f64>,
}

impl SimilarityGraph {
    pub fn new(names: &[&str]) -> Self {
        let mut graph = UnGraph::with_capacity(names.len(), names.len() * names.len() / 2);
        let nodes: Vec<NodeIndex> = (0..names.len()).map(|i| graph.add_node(i)).collect();
        for i in 0..names.len() {
            for j in (i + 1)..names.len() {
                let distance = 1.0 - ratio(names[i], names[j]);
                graph.add_edge(nodes[i], nodes[j], distance);
            }
        }
        Self { graph }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Minimum spanning tree by Kruskal's algorithm.
    pub fn kruskal(&self) -> Vec<TreeEdge> {
        min_spanning_tree(&self.graph)
            .filter_map(|element| match element {
                Element::Edge {
                    source,
                    target,
                    weight,
                } => Some(TreeEdge {
                    a: source,
                    b: target,
                    distance: weight,
                }),
                Element::Node { .. } => None,
            })
            .collect()
    }

    /// Minimum spanning tree by Prim's algorithm, grown from `root`.
    pub fn prim(&self, root: usize) -> Vec<TreeEdge> {
        let n = self.graph.node_count();
        if root >= n {
            return Vec::new();
        }

        let mut in_tree = vec![false; n];
        let mut tree = Vec::with_capacity(n.saturating_sub(1));
        let mut frontier = BinaryHeap::new();

        in_tree[root] = true;
        self.push_edges(root, &in_tree, &mut frontier);

        while let Some(Reverse(candidate)) = frontier.pop() {
            if in_tree[candidate.to] {
                continue;
            }
            in_tree[candidate.to] = true;
            tree.push(TreeEdge {
                a: candidate.from,
                b: candidate.to,
                distance: candidate.distance,
            });
            self.push_edges(candidate.to, &in_tree, &mut frontier);
        }
        tree
    }

    fn push_edges(&self, from: usize, in_tree: &[bool], frontier: &mut BinaryHeap<Reverse<Candidate>>) {
        let node = NodeIndex::new(from);
        for edge in self.graph.edges(node) {
            let other = if edge.source() == node {
                edge.target()
            } else {
                edge.source()
            };
            let to = other.index();
            if !in_tree[to] {
                frontier.push(Reverse(Candidate {
                    distance: *edge.weight(),
                    from,
                    to,
                }));
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    distance: f64,
    from: usize,
    to: usize,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then(self.to.cmp(&other.to))
            .then(self.from.cmp(&other.from))
    }
}

/// Depth-first preorder of a tree over `n` nodes starting at `root`.
///
/// Children are visited nearest first, ties broken by position. Nodes the
/// tree does not reach are appended in position order.
pub fn preorder(n: usize, edges: &[TreeEdge], root: usize) -> Vec<usize> {
    if n == 0 {
        return Vec::new();
    }

    let mut adjacency: Vec<Vec<(f64, usize)>> = vec![Vec::new(); n];
    for edge in edges {
        adjacency[edge.a].push((edge.distance, edge.b));
        adjacency[edge.b].push((edge.distance, edge.a));
    }
    for neighbours in &mut adjacency {
        neighbours.sort_by(|x, y| x.0.total_cmp(&y.0).then(x.1.cmp(&y.1)));
    }

    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);
    let mut stack = vec![root.min(n - 1)];
    while let Some(node) = stack.pop() {
        if visited[node] {
            continue;
        }
        visited[node] = true;
        order.push(node);
        for &(_, next) in adjacency[node].iter().rev() {
            if !visited[next] {
                stack.push(next);
            }
        }
    }

    order.extend((0..n).filter(|&i| !visited[i]));
    order
}
