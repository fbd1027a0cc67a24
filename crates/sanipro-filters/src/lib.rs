//! Prompt filters: exclusion, masking, shuffling, strength resets and
//! rounding, similarity ordering, sorting and de-duplication.
//!
//! Every filter implements [`sanipro_core::filter::Filter`]. [`FilterSpec`]
//! describes one user-selected filter and builds it.

pub mod exclude;
pub mod graph;
pub mod mask;
pub mod random;
pub mod reset;
pub mod roundup;
pub mod similar;
pub mod sort;
pub mod sort_all;
pub mod unique;

use sanipro_core::filter::Filter;

pub use similar::SimilarMethod;
pub use sort_all::SortAllMethod;

/// A user-selected filter and its options.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterSpec {
    Mask {
        patterns: Vec<String>,
        replace_to: String,
    },
    Random {
        seed: Option<u64>,
    },
    Reset {
        value: f64,
    },
    Similar {
        method: SimilarMethod,
        reverse: bool,
    },
    Sort {
        reverse: bool,
    },
    SortAll {
        method: SortAllMethod,
        reverse: bool,
    },
    Unique {
        reverse: bool,
    },
}

impl FilterSpec {
    /// The command-line name of the filter.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mask { .. } => "mask",
            Self::Random { .. } => "random",
            Self::Reset { .. } => "reset",
            Self::Similar { .. } => "similar",
            Self::Sort { .. } => "sort",
            Self::SortAll { .. } => "sort-all",
            Self::Unique { .. } => "unique",
        }
    }

    /// Instantiate the filter.
    pub fn build(self) -> Box<dyn Filter> {
        match self {
            Self::Mask {
                patterns,
                replace_to,
            } => Box::new(mask::MaskFilter::new(patterns, replace_to)),
            Self::Random { seed } => Box::new(random::RandomFilter::new(seed)),
            Self::Reset { value } => Box::new(reset::ResetFilter::new(value)),
            Self::Similar { method, reverse } => {
                Box::new(similar::SimilarFilter::new(method, reverse))
            }
            Self::Sort { reverse } => Box::new(sort::SortFilter::new(reverse)),
            Self::SortAll { method, reverse } => {
                Box::new(sort_all::SortAllFilter::new(method, reverse))
            }
            Self::Unique { reverse } => Box::new(unique::UniqueFilter::new(reverse)),
        }
    }
}
