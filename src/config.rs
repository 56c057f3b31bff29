//! Configuration file support
//!
//! Loads settings from ~/.hilite.conf (or %USERPROFILE%\.hilite.conf on Windows)
//!
//! Format: simple key=value pairs, one per line
//! Lines starting with # are comments
//!
//! Example:
//! ```text
//! # hilite configuration
//! format = ansi
//! language = austral
//! rules = ~/grammars/toy.toml, /etc/hilite/lisp.toml
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::render::OutputFormat;

/// Configuration settings
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Output format when none is given on the command line
    pub format: OutputFormat,
    /// Language when none is given and the file extension is unknown
    pub language: Option<String>,
    /// Extra TOML language files to load at startup
    pub rule_files: Vec<PathBuf>,
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        home_dir().map(|home| home.join(".hilite.conf"))
    }

    /// Load configuration from file
    pub fn load() -> Self {
        let mut config = Config::default();

        if let Some(path) = Self::config_path() {
            if let Ok(contents) = fs::read_to_string(&path) {
                let settings = Self::parse(&contents);
                config.apply(&settings);
            }
        }

        config
    }

    /// Parse config file contents into key-value pairs
    fn parse(contents: &str) -> HashMap<String, String> {
        let mut settings = HashMap::new();

        for line in contents.lines() {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim().to_lowercase();
                let value = value.trim().to_string();
                settings.insert(key, value);
            }
        }

        settings
    }

    /// Apply settings from parsed config
    fn apply(&mut self, settings: &HashMap<String, String>) {
        if let Some(value) = settings.get("format") {
            if let Ok(format) = OutputFormat::from_name(value) {
                self.format = format;
            }
        }

        if let Some(value) = settings.get("language") {
            if !value.is_empty() {
                self.language = Some(value.clone());
            }
        }

        if let Some(value) = settings.get("rules") {
            self.rule_files = value
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(expand_home)
                .collect();
        }
    }
}

fn home_dir() -> Option<PathBuf> {
    #[cfg(windows)]
    {
        std::env::var("USERPROFILE").ok().map(PathBuf::from)
    }

    #[cfg(not(windows))]
    {
        std::env::var("HOME").ok().map(PathBuf::from)
    }
}

/// Expand a leading `~/` to the home directory
fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
