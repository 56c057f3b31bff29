//! Language definitions for syntax highlighting
//!
//! A language is a name, the file extensions it claims, and an ordered
//! rule list. Definitions are either built in code or loaded from TOML:
//!
//! ```toml
//! name = "Austral"
//! extensions = ["aum", "aui"]
//!
//! [colors]
//! comment = "#bbffff"
//!
//! [[rules]]
//! name = "comment"
//! pattern = "--.*(\n|$)"
//! color = "comment"
//! ```
//!
//! A rule's `color` names an entry of `[colors]` or is used literally.

use std::collections::HashMap;

use serde::Deserialize;

use super::highlighter;
use super::rules::Rule;
use crate::error::{HighlightError, Result};
use crate::render::Renderer;

/// On-disk form of a language definition
#[derive(Deserialize, Debug)]
struct LanguageFile {
    name: String,
    #[serde(default)]
    extensions: Vec<String>,
    #[serde(default)]
    colors: HashMap<String, String>,
    #[serde(default)]
    rules: Vec<RuleSpec>,
}

/// On-disk form of a single rule, before its pattern is compiled
#[derive(Deserialize, Debug)]
struct RuleSpec {
    name: Option<String>,
    pattern: String,
    color: String,
}

/// A complete language definition for syntax highlighting
#[derive(Debug, Clone)]
pub struct LanguageDefinition {
    /// Language name (e.g., "Austral")
    pub name: String,
    /// File extensions without the dot (e.g., ["aum", "aui"])
    pub extensions: Vec<String>,
    /// Rules in priority order (first wins)
    pub rules: Vec<Rule>,
}

impl LanguageDefinition {
    /// Create a new empty language definition
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            extensions: Vec::new(),
            rules: Vec::new(),
        }
    }

    /// Add a file extension
    pub fn add_extension(&mut self, ext: &str) {
        self.extensions.push(ext.trim_start_matches('.').to_string());
    }

    /// Append a rule at the lowest priority
    pub fn add_rule(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Highlight text as HTML markup
    pub fn highlight(&self, text: &str) -> String {
        highlighter::highlight(text, &self.rules)
    }

    /// Highlight text with a specific renderer
    pub fn highlight_with(&self, text: &str, renderer: &dyn Renderer) -> String {
        highlighter::highlight_with(text, &self.rules, renderer)
    }

    /// Parse a language definition from TOML source
    ///
    /// Rules keep file order. Patterns are compiled here, so a bad
    /// expression fails the whole load.
    pub fn from_toml(source: &str) -> Result<Self> {
        let file: LanguageFile = toml::from_str(source)?;

        if file.name.trim().is_empty() {
            return Err(HighlightError::Language("`name` must not be empty".to_string()));
        }

        let mut lang = LanguageDefinition::new(&file.name);
        for ext in &file.extensions {
            lang.add_extension(ext);
        }

        for (idx, spec) in file.rules.iter().enumerate() {
            let fallback = format!("{} rule #{}", file.name, idx + 1);
            let rule_name = match spec.name.as_deref() {
                Some(name) if !name.is_empty() => name,
                _ => fallback.as_str(),
            };
            let color = file.colors.get(&spec.color).unwrap_or(&spec.color);
            lang.add_rule(Rule::new(rule_name, &spec.pattern, color)?);
        }

        Ok(lang)
    }
}
