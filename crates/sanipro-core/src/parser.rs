//! Prompt parsers.
//!
//! [`ParserVersion::V1`] understands the weighting syntax of Stable
//! Diffusion prompts: `(tag)` multiplies the strength by 1.1, `[tag]`
//! divides it by 1.1, `(tag:1.3)` sets the group factor explicitly, and
//! groups nest. A backslash escapes the next character, which is kept in
//! the token name so the output can be fed back in.
//!
//! [`ParserVersion::V2`] only splits on the delimiter.

use std::fmt;
use std::str::FromStr;

use sanipro_util::errors::SaniproError;

use crate::delimiter::Delimiter;
use crate::token::Token;
use crate::DEFAULT_STRENGTH;

/// Factor applied by one level of `( )` emphasis.
pub const EMPHASIS_FACTOR: f64 = 1.1;

/// Which parser turns raw text into tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParserVersion {
    #[default]
    V1,
    V2,
}

impl ParserVersion {
    /// Parse `text` into tokens using this parser.
    pub fn parse(self, text: &str, delimiter: &Delimiter) -> miette::Result<Vec<Token>> {
        match self {
            Self::V1 => parse_weighted(text, delimiter),
            Self::V2 => Ok(parse_plain(text, delimiter)),
        }
    }

    /// Whether filters other than the built-in stages may run after this parser.
    pub fn supports_filters(self) -> bool {
        matches!(self, Self::V1)
    }
}

impl fmt::Display for ParserVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V1 => write!(f, "v1"),
            Self::V2 => write!(f, "v2"),
        }
    }
}

impl FromStr for ParserVersion {
    type Err = SaniproError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "v1" | "1" => Ok(Self::V1),
            "v2" | "2" => Ok(Self::V2),
            other => Err(SaniproError::Config {
                message: format!("unknown parser version '{other}' (expected v1 or v2)"),
            }),
        }
    }
}

/// Split on the delimiter only; every piece becomes a neutral token.
fn parse_plain(text: &str, delimiter: &Delimiter) -> Vec<Token> {
    delimiter
        .split(text)
        .into_iter()
        .map(|piece| Token::new(piece, DEFAULT_STRENGTH))
        .collect()
}

/// One bracket level being parsed. The root level has no opening bracket.
#[derive(Default)]
struct Group {
    open: Option<(char, usize)>,
    tokens: Vec<Token>,
    current: String,
}

impl Group {
    fn opened(bracket: char, offset: usize) -> Self {
        Self {
            open: Some((bracket, offset)),
            ..Self::default()
        }
    }

    fn flush(&mut self) {
        let text = std::mem::take(&mut self.current);
        if !text.trim().is_empty() {
            self.tokens.push(Token::new(&text, DEFAULT_STRENGTH));
        }
    }

    /// Strip a trailing `:<float>` from the pending text and return the float.
    fn take_weight(&mut self) -> Option<f64> {
        let colon = last_unescaped_colon(&self.current)?;
        let weight = self.current[colon + 1..].trim().parse::<f64>().ok()?;
        if !weight.is_finite() {
            return None;
        }
        self.current.truncate(colon);
        Some(weight)
    }
}

/// Byte offset of the last `:` not preceded by an escaping backslash.
fn last_unescaped_colon(text: &str) -> Option<usize> {
    let mut found = None;
    let mut escaped = false;
    for (offset, c) in text.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == ':' {
            found = Some(offset);
        }
    }
    found
}

fn innermost<'a>(root: &'a mut Group, open: &'a mut [Group]) -> &'a mut Group {
    match open.last_mut() {
        Some(group) => group,
        None => root,
    }
}

fn closing_for(bracket: char) -> char {
    if bracket == '(' {
        ')'
    } else {
        ']'
    }
}

fn parse_weighted(text: &str, delimiter: &Delimiter) -> miette::Result<Vec<Token>> {
    let chars: Vec<char> = text.chars().collect();
    let delim: Vec<char> = delimiter.input().chars().collect();

    let mut root = Group::default();
    let mut open: Vec<Group> = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == '\\' {
            let group = innermost(&mut root, &mut open);
            group.current.push('\\');
            if let Some(&escaped) = chars.get(i + 1) {
                group.current.push(escaped);
            }
            i += 2;
            continue;
        }

        if chars[i..].starts_with(&delim) {
            innermost(&mut root, &mut open).flush();
            i += delim.len();
            continue;
        }

        match c {
            '(' | '[' => {
                innermost(&mut root, &mut open).flush();
                open.push(Group::opened(c, i));
            }
            ')' | ']' => {
                let Some(mut group) = open.pop() else {
                    return Err(SaniproError::Parse {
                        offset: i,
                        message: format!("unmatched '{c}'"),
                    }
                    .into());
                };
                let (bracket, start) = group.open.unwrap_or(('(', 0));
                if closing_for(bracket) != c {
                    return Err(SaniproError::Parse {
                        offset: i,
                        message: format!("'{bracket}' opened at offset {start} closed by '{c}'"),
                    }
                    .into());
                }

                let factor = if bracket == '(' {
                    group.take_weight().unwrap_or(EMPHASIS_FACTOR)
                } else {
                    1.0 / EMPHASIS_FACTOR
                };
                group.flush();

                let parent = innermost(&mut root, &mut open);
                parent.flush();
                parent.tokens.extend(
                    group
                        .tokens
                        .iter()
                        .map(|token| token.with_strength(token.strength() * factor)),
                );
            }
            _ => innermost(&mut root, &mut open).current.push(c),
        }
        i += 1;
    }

    if let Some(group) = open.last() {
        let (bracket, start) = group.open.unwrap_or(('(', 0));
        return Err(SaniproError::Parse {
            offset: start,
            message: format!("unclosed '{bracket}'"),
        }
        .into());
    }

    root.flush();
    tracing::trace!(tokens = root.tokens.len(), "parsed prompt");
    Ok(root.tokens)
}
