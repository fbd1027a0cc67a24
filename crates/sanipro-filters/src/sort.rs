use std::collections::HashMap;

use sanipro_core::filter::Filter;
use sanipro_core::token::Token;

/// Group tokens sharing a name, keeping the order of first appearance.
pub(crate) fn group_by_name(tokens: Vec<Token>) -> Vec<Vec<Token>> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<Vec<Token>> = Vec::new();
    for token in tokens {
        match index.get(token.name()) {
            Some(&i) => groups[i].push(token),
            None => {
                index.insert(token.name().to_string(), groups.len());
                groups.push(vec![token]);
            }
        }
    }
    groups
}

/// Sort a group by strength, ascending unless `reverse`. Stable.
pub(crate) fn sort_by_strength(group: &mut [Token], reverse: bool) {
    group.sort_by(|a, b| {
        let ord = a.strength().total_cmp(&b.strength());
        if reverse {
            ord.reverse()
        } else {
            ord
        }
    });
}

/// Brings tokens with the same name together, ordered by strength.
#[derive(Debug, Clone)]
pub struct SortFilter {
    reverse: bool,
}

impl SortFilter {
    pub fn new(reverse: bool) -> Self {
        Self { reverse }
    }
}

impl Filter for SortFilter {
    fn name(&self) -> &'static str {
        "sort"
    }

    fn apply(&mut self, tokens: Vec<Token>) -> Vec<Token> {
        group_by_name(tokens)
            .into_iter()
            .flat_map(|mut group| {
                sort_by_strength(&mut group, self.reverse);
                group
            })
            .collect()
    }
}
