//! Delimiter-prefix tokenizer for field arguments.
//!
//! Field arguments look like `John Doe p/98765 e/john@x.com t/friends`: a
//! free-text preamble followed by `PREFIX/VALUE` pairs. A prefix boundary is
//! a recognised prefix immediately followed by `/`, starting at the beginning
//! of the text or right after whitespace. `/` is reserved for these
//! boundaries, so a `/` anywhere else is an error.

use std::fmt;

/// Text before the first prefix, then each `(prefix, value)` in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenized<'a> {
    pub preamble: String,
    pub fields: Vec<(&'a str, String)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenizeError {
    /// A `/` that is not part of a recognised prefix boundary
    StrayDelimiter(usize),
    /// A prefix with nothing after it
    EmptyValue(String),
}

impl fmt::Display for TokenizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenizeError::StrayDelimiter(pos) => {
                write!(f, "unexpected '/' at position {}", pos)
            }
            TokenizeError::EmptyValue(prefix) => write!(f, "missing value after '{}/'", prefix),
        }
    }
}

/// Splits `args` on the recognised `prefixes`.
///
/// When several prefixes match at one position the longest wins, so `pp`
/// is preferred over `p` in `pp/123`. Values and the preamble are trimmed.
pub fn tokenize<'a>(args: &str, prefixes: &[&'a str]) -> Result<Tokenized<'a>, TokenizeError> {
    let mut sorted: Vec<&'a str> = prefixes.to_vec();
    sorted.sort_by_key(|p| std::cmp::Reverse(p.len()));

    // (prefix, start of prefix, start of value)
    let mut boundaries: Vec<(&'a str, usize, usize)> = Vec::new();
    let mut at_word_start = true;
    let mut consumed_until = 0;

    for (pos, ch) in args.char_indices() {
        if pos >= consumed_until && at_word_start {
            let rest = &args[pos..];
            let matched = sorted.iter().find(|prefix| {
                rest.strip_prefix(**prefix)
                    .is_some_and(|after| after.starts_with('/'))
            });
            if let Some(prefix) = matched {
                let value_start = pos + prefix.len() + 1;
                boundaries.push((prefix, pos, value_start));
                consumed_until = value_start;
            }
        }
        if ch == '/' && pos >= consumed_until {
            return Err(TokenizeError::StrayDelimiter(pos));
        }
        at_word_start = ch.is_whitespace();
    }

    let preamble_end = boundaries
        .first()
        .map_or(args.len(), |(_, start, _)| *start);
    let preamble = args[..preamble_end].trim().to_string();

    let mut fields = Vec::with_capacity(boundaries.len());
    for (i, (prefix, _, value_start)) in boundaries.iter().enumerate() {
        let value_end = boundaries
            .get(i + 1)
            .map_or(args.len(), |(_, next_start, _)| *next_start);
        let value = args[*value_start..value_end].trim();
        if value.is_empty() {
            return Err(TokenizeError::EmptyValue(prefix.to_string()));
        }
        fields.push((*prefix, value.to_string()));
    }

    Ok(Tokenized { preamble, fields })
}
