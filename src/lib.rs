//! hilite - ordered regex-rule syntax highlighting
//!
//! Text is split by an ordered list of (pattern, color) rules. The first
//! rule to match a piece of text claims it and later rules only see
//! what is left. The resulting fragments are rendered as HTML spans,
//! terminal colors, or plain text.
//!
//! ```
//! use hilite::{highlight, Rule};
//!
//! let rules = vec![Rule::new("word", "[a-z]+", "green").unwrap()];
//! assert_eq!(
//!     highlight("ab cd", &rules),
//!     "<span style='color:green'>ab</span> <span style='color:green'>cd</span>"
//! );
//! ```

pub mod config;
pub mod error;
pub mod render;
pub mod syntax;

pub use error::{HighlightError, Result};
pub use render::{AnsiRenderer, HtmlRenderer, OutputFormat, PlainRenderer, Renderer};
pub use syntax::{
    highlight, highlight_with, segment, Fragment, LanguageDefinition, Palette, Pattern, Rule,
    SyntaxManager,
};
