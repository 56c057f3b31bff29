//! Highlighting rules
//!
//! A rule pairs a pattern with a color. Rules are applied in list
//! order and the first rule to claim a piece of text keeps it.

use super::fragment::Fragment;
use super::pattern::Pattern;
use crate::error::Result;

/// A single highlighting rule
#[derive(Debug, Clone)]
pub struct Rule {
    /// Name for debugging
    pub name: String,
    /// Compiled pattern
    pub pattern: Pattern,
    /// Opaque color value handed to the renderer (e.g. "#ffffbb")
    pub color: String,
}

impl Rule {
    /// Create a new rule, compiling its pattern
    pub fn new(name: &str, pattern: &str, color: &str) -> Result<Self> {
        Ok(Self {
            name: name.to_string(),
            pattern: Pattern::new(pattern)?,
            color: color.to_string(),
        })
    }

    /// Split one plain run of text around this rule's matches
    ///
    /// Produces `[before, match, between, match, ..., after]`. Plain
    /// pieces are kept even when empty, so the output always has an odd
    /// length and alternates plain and styled.
    pub fn split<'a>(&'a self, text: &'a str) -> Vec<Fragment<'a>> {
        let mut fragments = Vec::new();
        let mut last = 0;

        for range in self.pattern.find_all(text) {
            fragments.push(Fragment::Plain(&text[last..range.start]));
            fragments.push(Fragment::Styled {
                text: &text[range.start..range.end],
                color: &self.color,
            });
            last = range.end;
        }
        fragments.push(Fragment::Plain(&text[last..]));

        fragments
    }
}
