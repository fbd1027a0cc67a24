use sanipro_core::filter::Filter;
use sanipro_core::token::Token;
use sanipro_core::DEFAULT_STRENGTH;

/// Sets every token to the same strength.
#[derive(Debug, Clone)]
pub struct ResetFilter {
    value: f64,
}

impl ResetFilter {
    pub fn new(value: f64) -> Self {
        Self { value }
    }
}

impl Default for ResetFilter {
    fn default() -> Self {
        Self::new(DEFAULT_STRENGTH)
    }
}

impl Filter for ResetFilter {
    fn name(&self) -> &'static str {
        "reset"
    }

    fn apply(&mut self, tokens: Vec<Token>) -> Vec<Token> {
        tokens
            .iter()
            .map(|token| token.with_strength(self.value))
            .collect()
    }
}
