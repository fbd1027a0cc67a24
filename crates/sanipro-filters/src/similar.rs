use std::fmt;

use sanipro_core::filter::Filter;
use sanipro_core::similarity::ratio;
use sanipro_core::token::Token;

use crate::graph::{preorder, SimilarityGraph};

/// Strategy used by [`SimilarFilter`] to place similar tokens together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SimilarMethod {
    /// Keep the first token, order the rest by similarity to it.
    #[default]
    Naive,
    /// Nearest-neighbour chain starting at the first token.
    Greedy,
    /// Preorder walk of a Kruskal minimum spanning tree.
    Kruskal,
    /// Preorder walk of a Prim minimum spanning tree.
    Prim,
}

impl fmt::Display for SimilarMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Naive => "naive",
            Self::Greedy => "greedy",
            Self::Kruskal => "kruskal",
            Self::Prim => "prim",
        };
        f.write_str(name)
    }
}

/// Reorders tokens so that tokens with similar names end up adjacent.
#[derive(Debug, Clone)]
pub struct SimilarFilter {
    method: SimilarMethod,
    reverse: bool,
}

impl SimilarFilter {
    pub fn new(method: SimilarMethod, reverse: bool) -> Self {
        Self { method, reverse }
    }

    /// Positions of `names` in their new order.
    pub fn order(&self, names: &[&str]) -> Vec<usize> {
        let mut order = match self.method {
            SimilarMethod::Naive => naive_order(names),
            SimilarMethod::Greedy => greedy_order(names),
            SimilarMethod::Kruskal => {
                let graph = SimilarityGraph::new(names);
                preorder(graph.node_count(), &graph.kruskal(), 0)
            }
            SimilarMethod::Prim => {
                let graph = SimilarityGraph::new(names);
                preorder(graph.node_count(), &graph.prim(0), 0)
            }
        };
        if self.reverse {
            order.reverse();
        }
        order
    }
}

fn naive_order(names: &[&str]) -> Vec<usize> {
    let Some(anchor) = names.first() else {
        return Vec::new();
    };
    let mut rest: Vec<(f64, usize)> = names
        .iter()
        .enumerate()
        .skip(1)
        .map(|(i, name)| (ratio(anchor, name), i))
        .collect();
    rest.sort_by(|x, y| y.0.total_cmp(&x.0));

    let mut order = Vec::with_capacity(names.len());
    order.push(0);
    order.extend(rest.into_iter().map(|(_, i)| i));
    order
}

fn greedy_order(names: &[&str]) -> Vec<usize> {
    if names.is_empty() {
        return Vec::new();
    }

    let mut visited = vec![false; names.len()];
    let mut order = Vec::with_capacity(names.len());
    let mut current = 0;
    visited[current] = true;
    order.push(current);

    while order.len() < names.len() {
        let mut best: Option<(f64, usize)> = None;
        for (i, name) in names.iter().enumerate() {
            if visited[i] {
                continue;
            }
            let score = ratio(names[current], name);
            if best.map_or(true, |(best_score, _)| score > best_score) {
                best = Some((score, i));
            }
        }
        let Some((_, next)) = best else {
            break;
        };
        visited[next] = true;
        order.push(next);
        current = next;
    }
    order
}

impl Filter for SimilarFilter {
    fn name(&self) -> &'static str {
        "similar"
    }

    fn apply(&mut self, tokens: Vec<Token>) -> Vec<Token> {
        let order = {
            let names: Vec<&str> = tokens.iter().map(Token::name).collect();
            self.order(&names)
        };
        tracing::debug!(method = %self.method, ?order, "similarity order");

        let mut slots: Vec<Option<Token>> = tokens.into_iter().map(Some).collect();
        order
            .into_iter()
            .filter_map(|i| slots.get_mut(i).and_then(Option::take))
            .collect()
    }
}
