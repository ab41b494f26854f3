//! Shell-style word splitting (Ruby `Shellwords.split` semantics).

use thiserror::Error;
use tracing::{debug, trace};

use super::scanner::{Found, Pattern, scan};

/// An opening quote with no matching close.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unmatched quote: {quote} at byte {offset}")]
pub struct UnmatchedQuote {
    /// The quote character that was left open.
    pub quote: char,
    /// Byte offset of that quote in the input line.
    pub offset: usize,
}

/// Classification of one scanner step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<'h> {
    /// Unquoted run without whitespace, backslashes or quotes.
    Word(&'h str),
    /// Content between single quotes, taken literally.
    SingleQuoted(&'h str),
    /// Content between double quotes, escapes not yet resolved.
    DoubleQuoted(&'h str),
    /// Backslash outside quotes, with the character it escapes.
    /// `None` when the backslash is last on the line or precedes a newline.
    Escaped(Option<char>),
    /// A quote that is never closed.
    Garbage(char),
}

/// One match of [`ShellPattern`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellMatch<'h> {
    pub step: Step<'h>,
    /// Bytes of leading whitespace skipped before the step.
    pub offset: usize,
    /// A whitespace character or end of input directly followed the step.
    pub separated: bool,
}

/// The composite shell pattern: leading whitespace, one step, optional separator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellPattern;

impl Pattern for ShellPattern {
    type Match<'h> = ShellMatch<'h>;

    fn find<'h>(&self, haystack: &'h str) -> Option<Found<Self::Match<'h>>> {
        let offset = haystack.len() - haystack.trim_start().len();
        let rest = &haystack[offset..];
        let first = rest.chars().next()?;

        let (step, len) = match first {
            '\'' => match rest[1..].find('\'') {
                Some(close) => (Step::SingleQuoted(&rest[1..1 + close]), close + 2),
                None => (Step::Garbage('\''), 1),
            },
            '"' => match double_quoted_len(&rest[1..]) {
                Some(close) => (Step::DoubleQuoted(&rest[1..1 + close]), close + 2),
                None => (Step::Garbage('"'), 1),
            },
            '\\' => match rest[1..].chars().next() {
                Some(c) if c != '\n' => (Step::Escaped(Some(c)), 1 + c.len_utf8()),
                _ => (Step::Escaped(None), 1),
            },
            _ => {
                let len = rest.find(ends_word).unwrap_or(rest.len());
                (Step::Word(&rest[..len]), len)
            }
        };

        let mut end = offset + len;
        let separated = match haystack[end..].chars().next() {
            None => true,
            Some(c) if c.is_whitespace() => {
                end += c.len_utf8();
                true
            }
            Some(_) => false,
        };

        Some(Found {
            start: 0,
            end,
            value: ShellMatch {
                step,
                offset,
                separated,
            },
        })
    }
}

fn ends_word(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\\' | '\'' | '"')
}

/// Byte length of double-quoted content, up to the closing quote.
fn double_quoted_len(s: &str) -> Option<usize> {
    let mut chars = s.char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            '"' => return Some(i),
            '\\' => {
                chars.next()?;
            }
            _ => {}
        }
    }
    None
}

/// Resolve the backslash escapes POSIX honors inside double quotes.
fn unescape_double_quoted(content: &str, out: &mut String) {
    let mut chars = content.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\'
            && let Some(&next) = chars.peek()
            && matches!(next, '$' | '`' | '"' | '\\' | '\n')
        {
            out.push(next);
            chars.next();
            continue;
        }
        out.push(c);
    }
}

/// Split a line into words the way a POSIX shell splits arguments.
///
/// ```
/// let words = shellwords::split(r#"cp "my file" back\ up"#).unwrap();
/// assert_eq!(words, vec!["cp", "my file", "back up"]);
/// ```
pub fn split(line: &str) -> Result<Vec<String>, UnmatchedQuote> {
    split_with(line, |_| {})
}

/// Like [`split`], but reports the raw text behind each word to `on_span`.
///
/// Spans are reported in order and together cover the whole line, including
/// whitespace after the last word.
pub fn split_with<F>(line: &str, mut on_span: F) -> Result<Vec<String>, UnmatchedQuote>
where
    F: FnMut(&str),
{
    let mut words = Vec::new();
    let mut field = String::new();
    let mut span_start = 0;
    let mut consumed = 0;

    scan(line, &ShellPattern, |raw: &str, m: ShellMatch<'_>| {
        let step_start = consumed + m.offset;
        consumed += raw.len();
        trace!(step = ?m.step, separated = m.separated, "scan step");

        let empty_quotes = match m.step {
            Step::Word(word) => {
                field.push_str(word);
                false
            }
            Step::SingleQuoted(content) => {
                field.push_str(content);
                content.is_empty()
            }
            Step::DoubleQuoted(content) => {
                unescape_double_quoted(content, &mut field);
                content.is_empty()
            }
            Step::Escaped(c) => {
                field.push(c.unwrap_or('\\'));
                false
            }
            Step::Garbage(quote) => {
                debug!(%quote, offset = step_start, "unmatched quote");
                return Err(UnmatchedQuote {
                    quote,
                    offset: step_start,
                });
            }
        };

        if m.separated || empty_quotes {
            words.push(std::mem::take(&mut field));
            on_span(&line[span_start..consumed]);
            span_start = consumed;
        }
        Ok(String::new())
    })?;

    if !field.is_empty() {
        words.push(field);
        on_span(&line[span_start..]);
    } else if span_start < line.len() {
        // trailing whitespace
        on_span(&line[span_start..]);
    }

    Ok(words)
}
