//! Built-in language definitions

mod austral;

pub use austral::{austral_language, austral_rules};

use super::language::LanguageDefinition;
use super::style::Palette;
use crate::error::Result;

/// Get all built-in language definitions
pub fn all_languages(palette: &Palette) -> Result<Vec<LanguageDefinition>> {
    Ok(vec![austral::austral_language(palette)?])
}
