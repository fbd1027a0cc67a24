//! Operation: assemble a pipeline from resolved options.

use sanipro_core::config::GlobalConfig;
use sanipro_core::delimiter::Delimiter;
use sanipro_core::parser::ParserVersion;
use sanipro_core::pipeline::Pipeline;
use sanipro_filters::exclude::ExcludeFilter;
use sanipro_filters::roundup::RoundUpFilter;
use sanipro_filters::FilterSpec;
use sanipro_util::errors::SaniproError;

/// Fully resolved options for one sanipro run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub input_delimiter: String,
    pub output_delimiter: String,
    /// Digits every strength is rounded to.
    pub roundup: u32,
    /// Tokens containing any of these are dropped.
    pub excludes: Vec<String>,
    pub parser: ParserVersion,
    pub filter: Option<FilterSpec>,
    pub interactive: bool,
    pub ps1: String,
    pub history_size: usize,
}

impl RunOptions {
    /// Options seeded from the configuration file, before command-line overrides.
    pub fn from_config(config: &GlobalConfig) -> miette::Result<Self> {
        let parser = match config.input.parser.as_deref() {
            Some(version) => version.parse::<ParserVersion>()?,
            None => ParserVersion::default(),
        };
        Ok(Self {
            input_delimiter: config.input.delimiter.clone(),
            output_delimiter: config.output.delimiter.clone(),
            roundup: config.output.roundup,
            excludes: Vec::new(),
            parser,
            filter: None,
            interactive: false,
            ps1: config.interactive.ps1.clone(),
            history_size: config.interactive.history_size,
        })
    }
}

impl Default for RunOptions {
    fn default() -> Self {
        let config = GlobalConfig::default();
        Self {
            input_delimiter: config.input.delimiter,
            output_delimiter: config.output.delimiter,
            roundup: config.output.roundup,
            excludes: Vec::new(),
            parser: ParserVersion::default(),
            filter: None,
            interactive: false,
            ps1: config.interactive.ps1,
            history_size: config.interactive.history_size,
        }
    }
}

/// Build the pipeline: rounding first, then exclusion, then the user filter.
pub fn build_pipeline(opts: &RunOptions) -> miette::Result<Pipeline> {
    let delimiter = Delimiter::new(&opts.input_delimiter, &opts.output_delimiter)?;

    if !opts.parser.supports_filters() {
        if let Some(filter) = &opts.filter {
            return Err(SaniproError::Usage {
                message: format!(
                    "the '{}' filter is not available when using parser {}",
                    filter.name(),
                    opts.parser
                ),
            }
            .into());
        }
        tracing::warn!("using parser {}", opts.parser);
    }

    let mut pipeline = Pipeline::new(delimiter, opts.parser);
    pipeline.append(Box::new(RoundUpFilter::new(opts.roundup)));

    if !opts.excludes.is_empty() {
        pipeline.append(Box::new(ExcludeFilter::new(opts.excludes.clone())));
    }

    if let Some(spec) = opts.filter.clone() {
        pipeline.append(spec.build());
    }

    tracing::info!(stages = ?pipeline.stage_names(), "pipeline ready");
    Ok(pipeline)
}
