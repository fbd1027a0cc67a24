use sanipro_core::filter::Filter;
use sanipro_core::lcg::Lcg;
use sanipro_core::token::Token;

/// Shuffles the tokens.
///
/// The generator is created once, so consecutive prompts in one session
/// get different orders even with a fixed seed, while the whole session
/// stays reproducible.
#[derive(Debug, Clone)]
pub struct RandomFilter {
    lcg: Lcg,
}

impl RandomFilter {
    pub fn new(seed: Option<u64>) -> Self {
        let lcg = match seed {
            Some(seed) => Lcg::new(seed),
            None => Lcg::from_time(),
        };
        Self { lcg }
    }
}

impl Filter for RandomFilter {
    fn name(&self) -> &'static str {
        "random"
    }

    fn apply(&mut self, mut tokens: Vec<Token>) -> Vec<Token> {
        self.lcg.shuffle(&mut tokens);
        tokens
    }
}
