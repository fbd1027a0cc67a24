use crate::token::Token;

/// A transformation over the token list of one prompt.
///
/// Filters take `&mut self` so stateful filters (the shuffler) can carry
/// state across prompts in an interactive session.
pub trait Filter: Send {
    /// Short identifier used in logs and error messages.
    fn name(&self) -> &'static str;

    fn apply(&mut self, tokens: Vec<Token>) -> Vec<Token>;
}
