//! Fragment renderers
//!
//! The highlighter produces fragments; a renderer turns each one into
//! output text. HTML span markup is the default, terminal output uses
//! ANSI escapes through crossterm.

use std::fmt::Write;

use crossterm::style::{style, Color, Stylize};

use crate::error::{HighlightError, Result};
use crate::syntax::Fragment;

/// Serializes fragments into an output buffer
pub trait Renderer {
    /// Append the rendering of `fragment` to `out`
    fn render(&self, fragment: &Fragment<'_>, out: &mut String);
}

/// `<span style='color:...'>` markup, with no escaping
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, fragment: &Fragment<'_>, out: &mut String) {
        match fragment {
            Fragment::Plain(text) => out.push_str(text),
            Fragment::Styled { text, color } => {
                let _ = write!(out, "<span style='color:{}'>{}</span>", color, text);
            }
        }
    }
}

/// Foreground-colored terminal output
///
/// Colors that cannot be parsed leave the text unstyled.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiRenderer;

impl Renderer for AnsiRenderer {
    fn render(&self, fragment: &Fragment<'_>, out: &mut String) {
        match fragment {
            Fragment::Styled { text, color } if !text.is_empty() => match parse_color(color) {
                Some(color) => {
                    let _ = write!(out, "{}", style(text).with(color));
                }
                None => out.push_str(text),
            },
            _ => out.push_str(fragment.text()),
        }
    }
}

/// Text only, all styling dropped
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainRenderer;

impl Renderer for PlainRenderer {
    fn render(&self, fragment: &Fragment<'_>, out: &mut String) {
        out.push_str(fragment.text());
    }
}

/// Parse a color value into a terminal color
///
/// Accepts `#rgb`, `#rrggbb` and crossterm color names such as
/// `red` or `dark_grey`.
pub fn parse_color(value: &str) -> Option<Color> {
    let value = value.trim();
    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex(hex);
    }
    Color::try_from(value.to_lowercase().as_str()).ok()
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let mut digits = hex.chars().map(|c| c.to_digit(16).map(|d| (d * 17) as u8));
            Some(Color::Rgb {
                r: digits.next()??,
                g: digits.next()??,
                b: digits.next()??,
            })
        }
        6 => Some(Color::Rgb {
            r: channel(&hex[0..2])?,
            g: channel(&hex[2..4])?,
            b: channel(&hex[4..6])?,
        }),
        _ => None,
    }
}

/// Output formats selectable from the command line and config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Html,
    Ansi,
    Plain,
}

impl OutputFormat {
    /// Parse a format from its name
    pub fn from_name(name: &str) -> Result<Self> {
        match name.trim().to_lowercase().as_str() {
            "html" => Ok(OutputFormat::Html),
            "ansi" | "term" | "terminal" => Ok(OutputFormat::Ansi),
            "plain" | "text" => Ok(OutputFormat::Plain),
            _ => Err(HighlightError::UnknownFormat(name.to_string())),
        }
    }

    /// Get the renderer for this format
    pub fn renderer(&self) -> &'static dyn Renderer {
        match self {
            OutputFormat::Html => &HtmlRenderer,
            OutputFormat::Ansi => &AnsiRenderer,
            OutputFormat::Plain => &PlainRenderer,
        }
    }
}
