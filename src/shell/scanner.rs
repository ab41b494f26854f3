//! Repeated-match driver shared by the tokenizer and ad-hoc patterns.

use regex::{Captures, Regex};

/// A match located by a [`Pattern`], as byte offsets into the searched text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Found<M> {
    /// Start of the match; text before it is skipped.
    pub start: usize,
    /// End of the match (exclusive).
    pub end: usize,
    /// Pattern-specific match data.
    pub value: M,
}

/// Something that can locate its next match in a piece of text.
pub trait Pattern {
    /// Data handed to the scan handler for each match.
    type Match<'h>;

    /// Find the first match in `haystack`, or `None` if there is none.
    fn find<'h>(&self, haystack: &'h str) -> Option<Found<Self::Match<'h>>>;
}

impl Pattern for Regex {
    type Match<'h> = Captures<'h>;

    fn find<'h>(&self, haystack: &'h str) -> Option<Found<Self::Match<'h>>> {
        let caps = self.captures(haystack)?;
        let whole = caps.get(0)?;
        Some(Found {
            start: whole.start(),
            end: whole.end(),
            value: caps,
        })
    }
}

/// Walk `line` match by match.
///
/// For every match the skipped text before it is copied to the result, then
/// `handler` is called with the matched text and the match data and its
/// return value is appended. When no further match exists the remainder is
/// copied as-is and the scan ends.
///
/// # Errors
///
/// Stops at the first error returned by `handler` and propagates it.
pub fn scan<'h, P, F, E>(line: &'h str, pattern: &P, mut handler: F) -> Result<String, E>
where
    P: Pattern,
    F: FnMut(&'h str, P::Match<'h>) -> Result<String, E>,
{
    let mut result = String::new();
    let mut rest = line;

    while !rest.is_empty() {
        match pattern.find(rest) {
            // an empty match at the head would never advance
            Some(found) if found.end > 0 => {
                result.push_str(&rest[..found.start]);
                result.push_str(&handler(&rest[found.start..found.end], found.value)?);
                rest = &rest[found.end..];
            }
            _ => {
                result.push_str(rest);
                rest = "";
            }
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    #[test]
    fn test_replaces_matches_and_keeps_gaps() {
        let digits = Regex::new(r"\d+").unwrap();
        let out = scan("a1b22c", &digits, |_, _| Ok::<_, Infallible>("#".to_string())).unwrap();
        assert_eq!(out, "a#b#c");
    }

    #[test]
    fn test_handler_sees_matched_text_and_captures() {
        let pair = Regex::new(r"(\w)=(\w)").unwrap();
        let mut seen = Vec::new();
        let out = scan("x=1, y=2", &pair, |raw: &str, caps: Captures<'_>| {
            seen.push(raw.to_string());
            Ok::<_, Infallible>(format!("{}:{}", &caps[2], &caps[1]))
        })
        .unwrap();
        assert_eq!(out, "1:x, 2:y");
        assert_eq!(seen, vec!["x=1", "y=2"]);
    }

    #[test]
    fn test_no_match_copies_remainder() {
        let never = Regex::new(r"z").unwrap();
        let out = scan("abc", &never, |_, _| Ok::<_, Infallible>(String::new())).unwrap();
        assert_eq!(out, "abc");
    }

    #[test]
    fn test_empty_match_terminates() {
        let empty = Regex::new(r"x*").unwrap();
        let out = scan("abc", &empty, |_, _| Ok::<_, Infallible>("!".to_string())).unwrap();
        assert_eq!(out, "abc");
    }

    #[test]
    fn test_empty_input() {
        let any = Regex::new(r".").unwrap();
        let mut calls = 0;
        let out = scan("", &any, |_, _| {
            calls += 1;
            Ok::<_, Infallible>(String::new())
        })
        .unwrap();
        assert_eq!(out, "");
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_handler_error_stops_scan() {
        let word = Regex::new(r"\w+").unwrap();
        let mut calls = 0;
        let err = scan("ok stop later", &word, |raw: &str, _| {
            calls += 1;
            if raw == "stop" {
                Err(raw.to_string())
            } else {
                Ok(String::new())
            }
        })
        .unwrap_err();
        assert_eq!(err, "stop");
        assert_eq!(calls, 2);
    }
}
