use std::cmp::Ordering;
use std::fmt;

use sanipro_core::filter::Filter;
use sanipro_core::token::Token;

/// Key used by [`SortAllFilter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortAllMethod {
    #[default]
    Lexicographical,
    Length,
    Strength,
}

impl SortAllMethod {
    fn compare(self, a: &Token, b: &Token) -> Ordering {
        match self {
            Self::Lexicographical => a.name().cmp(b.name()),
            Self::Length => a.length().cmp(&b.length()),
            Self::Strength => a.strength().total_cmp(&b.strength()),
        }
    }
}

impl fmt::Display for SortAllMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Lexicographical => "lexicographical",
            Self::Length => "length",
            Self::Strength => "strength",
        };
        f.write_str(name)
    }
}

/// Sorts every token by one key.
#[derive(Debug, Clone)]
pub struct SortAllFilter {
    method: SortAllMethod,
    reverse: bool,
}

impl SortAllFilter {
    pub fn new(method: SortAllMethod, reverse: bool) -> Self {
        Self { method, reverse }
    }
}

impl Filter for SortAllFilter {
    fn name(&self) -> &'static str {
        "sort-all"
    }

    fn apply(&mut self, mut tokens: Vec<Token>) -> Vec<Token> {
        tracing::debug!(method = %self.method, reverse = self.reverse, "sorting all tokens");
        tokens.sort_by(|a, b| {
            let ord = self.method.compare(a, b);
            if self.reverse {
                ord.reverse()
            } else {
                ord
            }
        });
        tokens
    }
}
