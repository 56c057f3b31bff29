//! Syntax highlighting manager
//!
//! This module provides the SyntaxManager that keeps the known
//! language definitions and picks one by name or file extension.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::builtin;
use super::language::LanguageDefinition;
use super::style::Palette;
use crate::error::{HighlightError, Result};

/// Registry of language definitions
pub struct SyntaxManager {
    /// Loaded language definitions, keyed by lowercase name
    languages: HashMap<String, LanguageDefinition>,
    /// Extension to language key mapping
    extension_map: HashMap<String, String>,
}

impl SyntaxManager {
    /// Create a manager with no languages
    pub fn empty() -> Self {
        Self {
            languages: HashMap::new(),
            extension_map: HashMap::new(),
        }
    }

    /// Create a manager with the built-in languages in `palette` colors
    pub fn with_palette(palette: &Palette) -> Result<Self> {
        let mut manager = Self::empty();
        for lang in builtin::all_languages(palette)? {
            manager.add_language(lang);
        }
        Ok(manager)
    }

    /// Create a new syntax manager with built-in languages
    pub fn new() -> Self {
        Self::with_palette(&Palette::default()).unwrap_or_else(|_| Self::empty())
    }

    /// Add a language definition
    ///
    /// A language with the same name replaces the earlier one, including
    /// the extensions it claimed.
    pub fn add_language(&mut self, lang: LanguageDefinition) {
        let key = lang.name.to_lowercase();
        if self.languages.contains_key(&key) {
            self.extension_map.retain(|_, owner| *owner != key);
        }
        for ext in &lang.extensions {
            self.extension_map.insert(ext.to_lowercase(), key.clone());
        }
        self.languages.insert(key, lang);
    }

    /// Load a TOML language definition from a file and add it
    ///
    /// Returns the name of the loaded language.
    pub fn load_file(&mut self, path: &Path) -> Result<String> {
        let source = fs::read_to_string(path)?;
        let lang = LanguageDefinition::from_toml(&source)
            .map_err(|e| HighlightError::Message(format!("{}: {}", path.display(), e)))?;
        let name = lang.name.clone();
        self.add_language(lang);
        Ok(name)
    }

    /// Detect language from filename
    pub fn detect_language(&self, filename: &Path) -> Option<&LanguageDefinition> {
        let ext = filename.extension()?.to_str()?.to_lowercase();
        self.extension_map.get(&ext).and_then(|key| self.languages.get(key))
    }

    /// Get a language definition by name (case-insensitive)
    pub fn get_language(&self, name: &str) -> Option<&LanguageDefinition> {
        self.languages.get(&name.to_lowercase())
    }

    /// Get a language by name, or fail with `UnknownLanguage`
    pub fn require_language(&self, name: &str) -> Result<&LanguageDefinition> {
        self.get_language(name)
            .ok_or_else(|| HighlightError::UnknownLanguage(name.to_string()))
    }

    /// List available languages
    pub fn list_languages(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.languages.values().map(|l| l.name.as_str()).collect();
        names.sort();
        names
    }
}

impl Default for SyntaxManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("hilite-{}-{}", std::process::id(), name));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_detect_language() {
        let manager = SyntaxManager::new();

        let lang = manager.detect_language(Path::new("Main.aum")).unwrap();
        assert_eq!(lang.name, "Austral");
        assert!(manager.detect_language(Path::new("Main.AUI")).is_some());
        assert!(manager.detect_language(Path::new("main.rs")).is_none());
        assert!(manager.detect_language(Path::new("no_extension")).is_none());
    }

    #[test]
    fn test_get_language() {
        let manager = SyntaxManager::new();
        assert!(manager.get_language("austral").is_some());
        assert!(manager.get_language("AUSTRAL").is_some());
        assert!(matches!(
            manager.require_language("cobol"),
            Err(HighlightError::UnknownLanguage(_))
        ));
    }

    #[test]
    fn test_list_languages() {
        let mut manager = SyntaxManager::new();
        manager.add_language(LanguageDefinition::new("Zed"));
        manager.add_language(LanguageDefinition::new("Basic"));
        assert_eq!(manager.list_languages(), vec!["Austral", "Basic", "Zed"]);
        assert!(SyntaxManager::empty().list_languages().is_empty());
    }

    #[test]
    fn test_replace_language_drops_old_extensions() {
        let mut manager = SyntaxManager::new();
        let mut replacement = LanguageDefinition::new("austral");
        replacement.add_extension("aus");
        manager.add_language(replacement);

        assert!(manager.detect_language(Path::new("Main.aum")).is_none());
        assert!(manager.detect_language(Path::new("Main.aui")).is_none());
        assert_eq!(manager.detect_language(Path::new("Main.aus")).unwrap().name, "austral");
        assert_eq!(manager.list_languages(), vec!["austral"]);
    }

    #[test]
    fn test_load_file() {
        let path = temp_file(
            "toy.toml",
            "name = \"Toy\"\nextensions = [\"toy\"]\n[[rules]]\npattern = '\\d+'\ncolor = \"red\"\n",
        );
        let mut manager = SyntaxManager::new();
        let name = manager.load_file(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(name, "Toy");
        let lang = manager.detect_language(Path::new("a.toy")).unwrap();
        assert_eq!(lang.highlight("x 42"), "x <span style='color:red'>42</span>");
    }

    #[test]
    fn test_load_file_errors() {
        let mut manager = SyntaxManager::new();
        let missing = std::env::temp_dir().join("hilite-definitely-missing.toml");
        assert!(matches!(manager.load_file(&missing), Err(HighlightError::Io(_))));

        let path = temp_file("bad.toml", "name = 3\n");
        let err = manager.load_file(&path).unwrap_err();
        fs::remove_file(&path).ok();
        assert!(err.to_string().contains("bad.toml"));
    }
}
