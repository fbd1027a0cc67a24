use crate::delimiter::Delimiter;
use crate::filter::Filter;
use crate::parser::ParserVersion;
use crate::token::Token;

/// Parses a prompt, runs it through the filters in order and renders it.
pub struct Pipeline {
    delimiter: Delimiter,
    parser: ParserVersion,
    filters: Vec<Box<dyn Filter>>,
}

impl Pipeline {
    pub fn new(delimiter: Delimiter, parser: ParserVersion) -> Self {
        Self {
            delimiter,
            parser,
            filters: Vec::new(),
        }
    }

    /// Append a filter stage at the end of the pipeline.
    pub fn append(&mut self, filter: Box<dyn Filter>) {
        self.filters.push(filter);
    }

    /// Names of the stages, in execution order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Parse and filter `input`, returning the tokens.
    pub fn tokens(&mut self, input: &str) -> miette::Result<Vec<Token>> {
        let mut tokens = self.parser.parse(input, &self.delimiter)?;
        tracing::debug!(parser = %self.parser, count = tokens.len(), "parsed");

        for filter in &mut self.filters {
            tokens = filter.apply(tokens);
            tracing::debug!(stage = filter.name(), count = tokens.len(), "applied");
        }
        Ok(tokens)
    }

    /// Parse, filter and render `input` with the output delimiter.
    pub fn execute(&mut self, input: &str) -> miette::Result<String> {
        let tokens = self.tokens(input)?;
        Ok(self.delimiter.join(&tokens))
    }
}
