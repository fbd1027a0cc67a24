use sanipro_core::filter::Filter;
use sanipro_core::token::Token;

/// Drops every token whose name contains one of the patterns.
#[derive(Debug, Clone)]
pub struct ExcludeFilter {
    patterns: Vec<String>,
}

impl ExcludeFilter {
    pub fn new(patterns: Vec<String>) -> Self {
        Self { patterns }
    }

    fn is_excluded(&self, token: &Token) -> bool {
        self.patterns
            .iter()
            .any(|pattern| token.name().contains(pattern.as_str()))
    }
}

impl Filter for ExcludeFilter {
    fn name(&self) -> &'static str {
        "exclude"
    }

    fn apply(&mut self, tokens: Vec<Token>) -> Vec<Token> {
        tokens
            .into_iter()
            .filter(|token| !self.is_excluded(token))
            .collect()
    }
}
