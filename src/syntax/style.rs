//! Named color palettes
//!
//! Rule colors are plain values chosen when a rule list is built. A
//! palette groups the ones a grammar uses under semantic names.

/// Colors for the token classes of a simple grammar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Control keywords (let, if, then)
    pub keyword: String,
    /// Comments
    pub comment: String,
    /// Declaration keywords (module, function, record)
    pub declaration: String,
    /// Capitalized type names
    pub type_name: String,
    /// String and number literals
    pub literal: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            keyword: "#ffffbb".to_string(),
            comment: "#bbffff".to_string(),
            declaration: "#bbffff".to_string(),
            type_name: "#bbffbb".to_string(),
            literal: "#ff66ff".to_string(),
        }
    }
}

impl Palette {
    /// Look up a color by its semantic name
    pub fn get(&self, name: &str) -> Option<&str> {
        match name {
            "keyword" => Some(&self.keyword),
            "comment" => Some(&self.comment),
            "declaration" => Some(&self.declaration),
            "type_name" | "type" => Some(&self.type_name),
            "literal" => Some(&self.literal),
            _ => None,
        }
    }

    /// Builder: replace a color by semantic name
    ///
    /// Unknown names leave the palette unchanged.
    pub fn with(mut self, name: &str, color: &str) -> Self {
        let slot = match name {
            "keyword" => &mut self.keyword,
            "comment" => &mut self.comment,
            "declaration" => &mut self.declaration,
            "type_name" | "type" => &mut self.type_name,
            "literal" => &mut self.literal,
            _ => return self,
        };
        *slot = color.to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette() {
        let palette = Palette::default();
        assert_eq!(palette.get("keyword"), Some("#ffffbb"));
        assert_eq!(palette.get("comment"), palette.get("declaration"));
        assert_eq!(palette.get("type"), Some("#bbffbb"));
        assert_eq!(palette.get("missing"), None);
    }

    #[test]
    fn test_palette_builder() {
        let palette = Palette::default().with("literal", "red").with("nonsense", "blue");
        assert_eq!(palette.literal, "red");
        assert_eq!(palette, Palette::default().with("literal", "red"));
    }
}
