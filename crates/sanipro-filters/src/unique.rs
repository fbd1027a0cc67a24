use sanipro_core::filter::Filter;
use sanipro_core::token::Token;

use crate::sort::{group_by_name, sort_by_strength};

/// Keeps one token per name: the weakest, or the strongest with `reverse`.
#[derive(Debug, Clone)]
pub struct UniqueFilter {
    reverse: bool,
}

impl UniqueFilter {
    pub fn new(reverse: bool) -> Self {
        Self { reverse }
    }
}

impl Filter for UniqueFilter {
    fn name(&self) -> &'static str {
        "unique"
    }

    fn apply(&mut self, tokens: Vec<Token>) -> Vec<Token> {
        group_by_name(tokens)
            .into_iter()
            .filter_map(|mut group| {
                sort_by_strength(&mut group, self.reverse);
                group.into_iter().next()
            })
            .collect()
    }
}
