use sanipro_core::filter::Filter;
use sanipro_core::token::Token;

/// Rounds every strength to a fixed number of decimal digits.
#[derive(Debug, Clone)]
pub struct RoundUpFilter {
    digits: u32,
}

impl RoundUpFilter {
    pub fn new(digits: u32) -> Self {
        Self { digits }
    }

    fn round(&self, value: f64) -> f64 {
        let scale = 10f64.powi(self.digits.min(15) as i32);
        (value * scale).round() / scale
    }
}

impl Filter for RoundUpFilter {
    fn name(&self) -> &'static str {
        "roundup"
    }

    fn apply(&mut self, tokens: Vec<Token>) -> Vec<Token> {
        tokens
            .iter()
            .map(|token| token.with_strength(self.round(token.strength())))
            .collect()
    }
}
