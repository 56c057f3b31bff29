//! Syntax highlighting
//!
//! Ordered regex rules split text into plain and styled fragments:
//! - `pattern` compiles rule expressions (with lookaround fallback)
//! - `rules` and `highlighter` implement first-rule-wins segmentation
//! - `language`, `builtin` and `manager` group rules per language

mod builtin;
mod fragment;
mod highlighter;
mod language;
mod manager;
mod pattern;
mod rules;
mod style;

pub use builtin::{austral_language, austral_rules};
pub use fragment::{concat, Fragment};
pub use highlighter::{highlight, highlight_with, segment};
pub use language::LanguageDefinition;
pub use manager::SyntaxManager;
pub use pattern::Pattern;
pub use rules::Rule;
pub use style::Palette;
