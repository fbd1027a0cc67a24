//! Command dispatch and handler modules.

mod interactive;
mod run;

use miette::Result;

use sanipro_core::config::GlobalConfig;
use sanipro_core::parser::ParserVersion;
use sanipro_filters::FilterSpec;
use sanipro_ops::ops_pipeline::RunOptions;
use sanipro_util::errors::SaniproError;

use crate::cli::{Cli, FilterCommand};

/// Resolve options from the config file and the command line, then run.
pub fn dispatch(cli: Cli) -> Result<()> {
    let config = match cli.config.as_deref() {
        Some(path) => GlobalConfig::from_path(path)?,
        None => GlobalConfig::load()?,
    };
    let opts = resolve_options(cli, &config)?;
    tracing::debug!(?opts, "resolved options");

    if opts.interactive {
        interactive::exec(&opts)
    } else {
        run::exec(&opts)
    }
}

/// Command-line values win over the configuration file.
fn resolve_options(cli: Cli, config: &GlobalConfig) -> Result<RunOptions> {
    let mut opts = RunOptions::from_config(config)?;

    if let Some(delimiter) = cli.input_delimiter {
        opts.input_delimiter = delimiter;
    }
    if let Some(delimiter) = cli.output_delimiter {
        opts.output_delimiter = delimiter;
    }
    if let Some(ps1) = cli.ps1 {
        opts.ps1 = ps1;
    }
    if let Some(roundup) = cli.roundup {
        opts.roundup = roundup;
    }
    if cli.use_parser_v2 {
        opts.parser = ParserVersion::V2;
    }
    opts.interactive = cli.interactive;
    opts.excludes = cli.exclude;
    opts.filter = cli.filter.map(|cmd| filter_spec(cmd, config)).transpose()?;

    Ok(opts)
}

fn filter_spec(cmd: FilterCommand, config: &GlobalConfig) -> Result<FilterSpec> {
    let spec = match cmd {
        FilterCommand::Mask { words, replace_to } => FilterSpec::Mask {
            patterns: words,
            replace_to: match replace_to {
                Some(replace_to) => replace_to,
                None => config_replace_to(config)?,
            },
        },
        FilterCommand::Random { seed } => FilterSpec::Random { seed },
        FilterCommand::Reset { value } => FilterSpec::Reset { value },
        FilterCommand::Similar { method, reverse } => FilterSpec::Similar {
            method: method.into(),
            reverse,
        },
        FilterCommand::Sort { reverse } => FilterSpec::Sort { reverse },
        FilterCommand::SortAll { method, reverse } => FilterSpec::SortAll {
            method: method.into(),
            reverse,
        },
        FilterCommand::Unique { reverse } => FilterSpec::Unique { reverse },
    };
    Ok(spec)
}

fn config_replace_to(config: &GlobalConfig) -> Result<String> {
    if config.mask.replace_to.is_empty() {
        return Err(SaniproError::Config {
            message: "mask.replace-to must not be empty".to_string(),
        }
        .into());
    }
    Ok(config.mask.replace_to.clone())
}
