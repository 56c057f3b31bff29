//! Fragments of a segmented text

/// A contiguous run of the input, either untouched or claimed by a rule
///
/// Fragments borrow from the input text and from the rule that styled
/// them. Concatenating the texts of a segmentation gives back the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment<'a> {
    /// Text no rule has matched yet
    Plain(&'a str),
    /// Text matched by a rule, with that rule's color
    Styled { text: &'a str, color: &'a str },
}

impl<'a> Fragment<'a> {
    /// The text covered by this fragment
    pub fn text(&self) -> &'a str {
        match self {
            Fragment::Plain(text) => text,
            Fragment::Styled { text, .. } => text,
        }
    }

    /// The color of a styled fragment
    pub fn color(&self) -> Option<&'a str> {
        match self {
            Fragment::Plain(_) => None,
            Fragment::Styled { color, .. } => Some(color),
        }
    }

    /// Check if later rules may still split this fragment
    pub fn is_plain(&self) -> bool {
        matches!(self, Fragment::Plain(_))
    }
}

/// Join fragment texts back into the original input
pub fn concat(fragments: &[Fragment<'_>]) -> String {
    fragments.iter().map(Fragment::text).collect()
}
