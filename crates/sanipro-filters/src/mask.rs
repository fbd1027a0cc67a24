use sanipro_core::filter::Filter;
use sanipro_core::token::Token;

/// Replaces the name of every token containing one of the patterns.
#[derive(Debug, Clone)]
pub struct MaskFilter {
    patterns: Vec<String>,
    replace_to: String,
}

impl MaskFilter {
    pub fn new(patterns: Vec<String>, replace_to: String) -> Self {
        Self {
            patterns,
            replace_to,
        }
    }
}

impl Filter for MaskFilter {
    fn name(&self) -> &'static str {
        "mask"
    }

    fn apply(&mut self, tokens: Vec<Token>) -> Vec<Token> {
        tokens
            .into_iter()
            .map(|token| {
                let hit = self
                    .patterns
                    .iter()
                    .any(|pattern| token.name().contains(pattern.as_str()));
                if hit {
                    token.with_name(&self.replace_to)
                } else {
                    token
                }
            })
            .collect()
    }
}
