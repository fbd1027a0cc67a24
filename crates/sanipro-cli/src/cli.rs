//! CLI argument definitions for sanipro.
//!
//! Uses `clap` derive macros. Global options shape parsing and output; the
//! optional subcommand selects the one filter applied to every prompt.

use std::path::PathBuf;

use clap::builder::NonEmptyStringValueParser;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use sanipro_filters::{SimilarMethod, SortAllMethod};
use sanipro_util::errors::SaniproError;

#[derive(Parser, Debug)]
#[command(
    name = "sanipro",
    version,
    about = "Toolbox for Stable Diffusion prompts. 'Sanipro' stands for 'pro'mpt 'sani'tizer.",
    after_help = "Help for each filter is available, respectively."
)]
pub struct Cli {
    /// Show extra logs (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Delimiter between tokens of the original prompt
    #[arg(short = 'd', long)]
    pub input_delimiter: Option<String>,

    /// Delimiter between tokens of the processed prompt
    #[arg(short = 's', long)]
    pub output_delimiter: Option<String>,

    /// Prompt string shown while waiting for input in interactive mode
    #[arg(short = 'p', long)]
    pub ps1: Option<String>,

    /// Read prompts line by line from a REPL
    #[arg(short, long)]
    pub interactive: bool,

    /// Round every token strength to N digits
    #[arg(short = 'u', long, value_name = "N")]
    pub roundup: Option<u32>,

    /// Drop tokens containing PATTERN (repeatable)
    #[arg(short = 'x', long, value_name = "PATTERN", action = ArgAction::Append)]
    pub exclude: Vec<String>,

    /// Use the plain parser, which only splits on the delimiter
    #[arg(short = '2', long = "use-parser-v2")]
    pub use_parser_v2: bool,

    /// Read configuration from PATH instead of ~/.sanipro/config.toml
    #[arg(short, long, value_name = "PATH", env = "SANIPRO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Filter applied to the prompt (only one at a time)
    #[command(subcommand)]
    pub filter: Option<FilterCommand>,
}

#[derive(Subcommand, Debug)]
pub enum FilterCommand {
    /// Replace tokens containing any of the words
    Mask {
        /// Words to look for
        #[arg(required = true)]
        words: Vec<String>,
        /// Replacement name for matching tokens
        #[arg(short, long, value_parser = NonEmptyStringValueParser::new())]
        replace_to: Option<String>,
    },

    /// Shuffle the tokens
    Random {
        /// Seed for a reproducible order
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Set every token to the same strength
    Reset {
        /// New strength
        #[arg(long, default_value_t = 1.0, value_parser = finite_strength)]
        value: f64,
    },

    /// Put tokens with similar names next to each other
    Similar {
        /// Ordering strategy
        #[arg(short, long, value_enum, default_value_t = SimilarArg::Naive)]
        method: SimilarArg,
        /// Reverse the resulting order
        #[arg(short, long)]
        reverse: bool,
    },

    /// Gather tokens with the same name, ordered by strength
    Sort {
        /// Strongest first
        #[arg(short, long)]
        reverse: bool,
    },

    /// Sort all tokens by one key
    SortAll {
        /// Sort key
        #[arg(short, long, value_enum, default_value_t = SortAllArg::Lexicographical)]
        method: SortAllArg,
        /// Descending order
        #[arg(short, long)]
        reverse: bool,
    },

    /// Keep one token per name
    Unique {
        /// Keep the strongest instead of the weakest
        #[arg(short, long)]
        reverse: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimilarArg {
    Naive,
    Greedy,
    Kruskal,
    Prim,
}

impl From<SimilarArg> for SimilarMethod {
    fn from(arg: SimilarArg) -> Self {
        match arg {
            SimilarArg::Naive => Self::Naive,
            SimilarArg::Greedy => Self::Greedy,
            SimilarArg::Kruskal => Self::Kruskal,
            SimilarArg::Prim => Self::Prim,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortAllArg {
    Lexicographical,
    Length,
    Strength,
}

impl From<SortAllArg> for SortAllMethod {
    fn from(arg: SortAllArg) -> Self {
        match arg {
            SortAllArg::Lexicographical => Self::Lexicographical,
            SortAllArg::Length => Self::Length,
            SortAllArg::Strength => Self::Strength,
        }
    }
}

/// Strengths must be finite numbers.
fn finite_strength(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("strength must be a finite number, got '{s}'"))
    }
}

impl Cli {
    /// Log filter directive for the number of `-v` flags.
    pub fn log_level(&self) -> miette::Result<&'static str> {
        match self.verbose {
            0 => Ok("warn"),
            1 => Ok("info"),
            2 => Ok("debug"),
            _ => Err(SaniproError::Usage {
                message: "at most two -v flags are supported".to_string(),
            }
            .into()),
        }
    }
}

pub fn parse() -> Cli {
    Cli::parse()
}
