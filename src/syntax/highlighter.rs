//! Ordered rule application
//!
//! The input starts as one plain fragment. Each rule in turn splits
//! every plain fragment around its matches; styled fragments pass
//! through untouched, so earlier rules take priority over later ones.
//! The final segmentation is rendered fragment by fragment.

use super::fragment::Fragment;
use super::rules::Rule;
use crate::render::{HtmlRenderer, Renderer};

/// Split `text` into plain and styled fragments using `rules` in order
pub fn segment<'a>(text: &'a str, rules: &'a [Rule]) -> Vec<Fragment<'a>> {
    rules.iter().fold(vec![Fragment::Plain(text)], |fragments, rule| {
        fragments
            .into_iter()
            .flat_map(|fragment| match fragment {
                Fragment::Plain(text) => rule.split(text),
                styled => vec![styled],
            })
            .collect()
    })
}

/// Highlight `text` as HTML, wrapping matches in
/// `<span style='color:...'>` elements
///
/// Nothing is escaped, in either matched or unmatched text.
pub fn highlight(text: &str, rules: &[Rule]) -> String {
    highlight_with(text, rules, &HtmlRenderer)
}

/// Highlight `text`, serializing fragments with `renderer`
pub fn highlight_with(text: &str, rules: &[Rule], renderer: &dyn Renderer) -> String {
    let mut out = String::with_capacity(text.len());
    for fragment in segment(text, rules) {
        renderer.render(&fragment, &mut out);
    }
    out
}
