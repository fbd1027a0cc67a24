use std::fmt;

use crate::DEFAULT_STRENGTH;

/// A single prompt tag together with its strength.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    name: String,
    strength: f64,
}

impl Token {
    /// Create a token, normalising whitespace in `name`.
    ///
    /// Leading and trailing whitespace is removed and inner runs of
    /// whitespace collapse to a single space.
    pub fn new(name: &str, strength: f64) -> Self {
        Self {
            name: normalize_name(name),
            strength,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn strength(&self) -> f64 {
        self.strength
    }

    /// Number of characters in the name.
    pub fn length(&self) -> usize {
        self.name.chars().count()
    }

    /// A copy of this token with its name replaced.
    pub fn with_name(&self, name: &str) -> Self {
        Self::new(name, self.strength)
    }

    /// A copy of this token with a different strength.
    pub fn with_strength(&self, strength: f64) -> Self {
        Self {
            name: self.name.clone(),
            strength,
        }
    }

    /// Whether the token carries the default strength and renders bare.
    pub fn is_neutral(&self) -> bool {
        self.strength == DEFAULT_STRENGTH
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_neutral() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "({}:{})", self.name, self.strength)
        }
    }
}

fn normalize_name(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join(" ")
}
