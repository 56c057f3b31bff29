//! Austral language definition

use crate::error::Result;
use crate::syntax::language::LanguageDefinition;
use crate::syntax::rules::Rule;
use crate::syntax::style::Palette;

/// Identifier characters, as a character class body
const IDENT: &str = "A-Za-z0-9_";

/// Any character except a line terminator (`\n`, `\r`, U+2028, U+2029)
const NOT_EOL: &str = r"[^\n\r\x{2028}\x{2029}]";

/// Build the Austral rule list in priority order
///
/// Comments come first so nothing inside them is re-highlighted. Type
/// names and numbers use lookbehind so they only start after a
/// non-identifier character within the same unclaimed run.
pub fn austral_rules(palette: &Palette) -> Result<Vec<Rule>> {
    Ok(vec![
        Rule::new("comment", &format!(r"--{NOT_EOL}*(\n|$)"), &palette.comment)?,
        Rule::new(
            "keyword",
            r"(^|[ \n])[ \n]*(generic|let|if|end if|then|and|not|instance)",
            &palette.keyword,
        )?,
        Rule::new(
            "declaration",
            r"(^|[ \n])[ \n]*(typeclass|method|function|body|module|end|union|record|import|is|has)",
            &palette.declaration,
        )?,
        Rule::new("type_name", &format!("(?<=[^{IDENT}])[A-Z][{IDENT}]*"), &palette.type_name)?,
        Rule::new("literal", &format!(r#"("{NOT_EOL}*"|(?<=[^{IDENT}])[0-9])"#), &palette.literal)?,
    ])
}

/// Create Austral language definition
pub fn austral_language(palette: &Palette) -> Result<LanguageDefinition> {
    let mut lang = LanguageDefinition::new("Austral");
    lang.add_extension("aum");
    lang.add_extension("aui");

    for rule in austral_rules(palette)? {
        lang.add_rule(rule);
    }

    Ok(lang)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(color: &str, text: &str) -> String {
        format!("<span style='color:{}'>{}</span>", color, text)
    }

    #[test]
    fn test_rules_compile() {
        let rules = austral_rules(&Palette::default()).unwrap();
        let names: Vec<_> = rules.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["comment", "keyword", "declaration", "type_name", "literal"]);
        assert!(!rules[0].pattern.is_backtracking());
        assert!(rules[3].pattern.is_backtracking());
        assert!(rules[4].pattern.is_backtracking());
    }

    #[test]
    fn test_comment_claims_keywords() {
        let lang = austral_language(&Palette::default()).unwrap();
        let out = lang.highlight("-- let Foo be 1");
        assert_eq!(out, span("#bbffff", "-- let Foo be 1"));
    }

    #[test]
    fn test_comment_stops_at_carriage_return() {
        let palette = Palette::default();
        let lang = austral_language(&palette).unwrap();
        assert_eq!(
            lang.highlight("-- x\r\nlet y"),
            format!("-- x\r{} y", span(&palette.keyword, "\nlet"))
        );
        assert_eq!(
            lang.highlight("-- x\nlet y"),
            format!("{}{} y", span(&palette.comment, "-- x\n"), span(&palette.keyword, "let"))
        );
    }

    #[test]
    fn test_let_statement() {
        let palette = Palette::default();
        let lang = austral_language(&palette).unwrap();
        let out = lang.highlight("let x: Int32 := 5;");
        let expected = format!(
            "{}{}{}{}{}",
            span(&palette.keyword, "let"),
            " x: ",
            span(&palette.type_name, "Int32"),
            " := ",
            span(&palette.literal, "5"),
        ) + ";";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_keyword_includes_leading_whitespace() {
        let palette = Palette::default();
        let lang = austral_language(&palette).unwrap();
        let out = lang.highlight("x then\n  if");
        assert_eq!(
            out,
            format!("x{}{}", span(&palette.keyword, " then"), span(&palette.keyword, "\n  if"))
        );
    }

    #[test]
    fn test_type_name_needs_preceding_character() {
        let palette = Palette::default();
        let lang = austral_language(&palette).unwrap();
        // Nothing precedes the first character of the run
        assert_eq!(lang.highlight("Foo"), "Foo");
        assert_eq!(lang.highlight("(Foo)"), format!("({})", span(&palette.type_name, "Foo")));
    }

    #[test]
    fn test_string_literal() {
        let palette = Palette::default();
        let lang = austral_language(&palette).unwrap();
        assert_eq!(
            lang.highlight(r#"printLn("hi");"#),
            format!("printLn({});", span(&palette.literal, r#""hi""#))
        );
        // Type names rank above literals, so a capital inside quotes goes first
        assert_eq!(
            lang.highlight(r#"printLn("Hi");"#),
            format!(r#"printLn("{}");"#, span(&palette.type_name, "Hi"))
        );
    }

    #[test]
    fn test_custom_palette() {
        let palette = Palette::default().with("comment", "gray");
        let lang = austral_language(&palette).unwrap();
        assert_eq!(lang.highlight("-- note"), span("gray", "-- note"));
    }
}
