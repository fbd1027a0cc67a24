use sanipro_util::errors::SaniproError;

use crate::token::Token;

pub const DEFAULT_INPUT_DELIMITER: &str = ",";
pub const DEFAULT_OUTPUT_DELIMITER: &str = ", ";

/// Input and output separators of a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delimiter {
    input: String,
    output: String,
}

impl Default for Delimiter {
    fn default() -> Self {
        Self {
            input: DEFAULT_INPUT_DELIMITER.to_string(),
            output: DEFAULT_OUTPUT_DELIMITER.to_string(),
        }
    }
}

impl Delimiter {
    /// Build a delimiter pair. The input side must not be empty.
    pub fn new(input: &str, output: &str) -> miette::Result<Self> {
        if input.is_empty() {
            return Err(SaniproError::Config {
                message: "input delimiter must not be empty".to_string(),
            }
            .into());
        }
        Ok(Self {
            input: input.to_string(),
            output: output.to_string(),
        })
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    /// Split raw prompt text on the input delimiter, dropping blank pieces.
    pub fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split(self.input.as_str())
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .collect()
    }

    /// Render tokens joined by the output delimiter.
    pub fn join(&self, tokens: &[Token]) -> String {
        tokens
            .iter()
            .map(Token::to_string)
            .collect::<Vec<_>>()
            .join(&self.output)
    }
}
