//! Compiled match patterns
//!
//! Most highlighting patterns are plain regular expressions and run on
//! the `regex` engine. Patterns that need lookaround (lookbehind is
//! common in hand-written grammars) are handed to `fancy-regex`, which
//! backtracks.

use std::fmt;
use std::ops::Range;

use crate::error::{HighlightError, Result};

/// A compiled regular expression used by a highlighting rule
#[derive(Clone)]
pub enum Pattern {
    /// Finite-automaton engine, no lookaround
    Standard(regex::Regex),
    /// Backtracking engine, supports lookaround and backreferences
    Backtracking(fancy_regex::Regex),
}

impl Pattern {
    /// Compile a pattern, falling back to the backtracking engine when
    /// the standard engine rejects the syntax
    pub fn new(source: &str) -> Result<Self> {
        if let Ok(regex) = regex::Regex::new(source) {
            return Ok(Pattern::Standard(regex));
        }
        fancy_regex::Regex::new(source)
            .map(Pattern::Backtracking)
            .map_err(|e| HighlightError::InvalidPattern {
                pattern: source.to_string(),
                source: Box::new(e),
            })
    }

    /// The pattern source text
    pub fn as_str(&self) -> &str {
        match self {
            Pattern::Standard(regex) => regex.as_str(),
            Pattern::Backtracking(regex) => regex.as_str(),
        }
    }

    /// Whether this pattern needed the backtracking engine
    pub fn is_backtracking(&self) -> bool {
        matches!(self, Pattern::Backtracking(_))
    }

    /// Find the first match starting at or after `pos`
    ///
    /// Anchors and lookbehind still see the text before `pos`. A runtime
    /// failure of the backtracking engine is reported as no match.
    fn find_at(&self, text: &str, pos: usize) -> Option<Range<usize>> {
        match self {
            Pattern::Standard(regex) => regex.find_at(text, pos).map(|m| m.range()),
            Pattern::Backtracking(regex) => regex
                .find_from_pos(text, pos)
                .ok()
                .flatten()
                .map(|m| m.range()),
        }
    }

    /// Find all non-overlapping matches in `text`, left to right
    ///
    /// After an empty match the scan moves forward one character, so a
    /// pattern like `x*` terminates on any input. After a non-empty match
    /// the next search starts exactly where it ended.
    pub fn find_all(&self, text: &str) -> Vec<Range<usize>> {
        let mut matches = Vec::new();
        let mut pos = 0;

        while pos <= text.len() {
            let Some(range) = self.find_at(text, pos) else {
                break;
            };

            pos = if range.is_empty() {
                match text[range.end..].chars().next() {
                    Some(ch) => range.end + ch.len_utf8(),
                    None => text.len() + 1,
                }
            } else {
                range.end
            };
            matches.push(range);
        }

        matches
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let engine = if self.is_backtracking() { "backtracking" } else { "standard" };
        write!(f, "Pattern({:?}, {})", self.as_str(), engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_engine_preferred() {
        let pattern = Pattern::new(r"\d+").unwrap();
        assert!(!pattern.is_backtracking());
        assert_eq!(pattern.as_str(), r"\d+");
    }

    #[test]
    fn test_lookbehind_falls_back() {
        let pattern = Pattern::new(r"(?<=[^A-Za-z0-9_])[A-Z]\w*").unwrap();
        assert!(pattern.is_backtracking());
        assert_eq!(pattern.find_all("let x: Int = Foo"), vec![7..10, 13..16]);
        // Nothing precedes the first character, so lookbehind fails there
        assert_eq!(pattern.find_all("Foo"), Vec::<Range<usize>>::new());
    }

    #[test]
    fn test_invalid_pattern() {
        let err = Pattern::new("(unclosed").unwrap_err();
        match err {
            HighlightError::InvalidPattern { pattern, .. } => assert_eq!(pattern, "(unclosed"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_find_all_non_overlapping() {
        let pattern = Pattern::new("aa").unwrap();
        assert_eq!(pattern.find_all("aaaaa"), vec![0..2, 2..4]);
    }

    #[test]
    fn test_empty_matches_advance() {
        let pattern = Pattern::new("x*").unwrap();
        assert_eq!(pattern.find_all("aaa"), vec![0..0, 1..1, 2..2, 3..3]);
        assert_eq!(pattern.find_all("xa"), vec![0..1, 1..1, 2..2]);
        assert_eq!(pattern.find_all(""), vec![0..0]);
    }

    #[test]
    fn test_empty_match_steps_over_multibyte() {
        let pattern = Pattern::new("x*").unwrap();
        assert_eq!(pattern.find_all("é"), vec![0..0, 2..2]);
    }

    #[test]
    fn test_anchor_sees_only_given_text() {
        let pattern = Pattern::new("^ab").unwrap();
        assert_eq!(pattern.find_all("abab"), vec![0..2]);
    }
}
