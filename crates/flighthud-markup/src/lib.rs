//! Color-marker markup for overlay text.
//!
//! Crew names (and other highlighted fragments) produced by the flighthud
//! render core are wrapped in `[color]content[/color]` markers, where
//! `color` is a color token. The overlay drawing surface decides what to do
//! with the markers; this crate provides the parser it needs.
//!
//! # Example
//!
//! ```rust
//! use flighthud_markup::{open_marker, close_marker, MarkupParser, Transform};
//!
//! let text = format!("{}Valentina{}", open_marker("#f39c12"), close_marker("#f39c12"));
//! assert_eq!(text, "[#f39c12]Valentina[/#f39c12]");
//!
//! // Plain text (markers stripped)
//! let parser = MarkupParser::new(Transform::Remove);
//! assert_eq!(parser.parse(&text), "Valentina");
//!
//! // Keep markers visible (debug / pass-through)
//! let parser = MarkupParser::new(Transform::Keep);
//! assert_eq!(parser.parse(&text), text);
//! ```
//!
//! # Color tokens
//!
//! - Named ANSI colors: `red`, `green`, `cyan`, ...
//! - Bright variants: `bright_red`, `bright_cyan`, ...
//! - RGB hex: `#f60` or `#ff6600`
//! - `clear`: a valid marker that applies no styling
//!
//! Anything else is not a marker and passes through as literal text.

use console::{Color, Style};

/// How to transform matched color markers in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Apply ANSI escape codes for the marker's color.
    Apply,

    /// Remove markers, outputting only the content.
    Remove,

    /// Keep markers as-is in the output.
    Keep,
}

/// A parsed color token from a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorToken {
    /// No styling; the marker is valid but inert.
    Clear,
    /// Named ANSI color.
    Named(Color),
    /// 256-color palette index (used for `bright_*` variants).
    Palette(u8),
    /// True-color RGB from a hex token.
    Rgb(u8, u8, u8),
}

impl ColorToken {
    /// Parses a color token, returning `None` when the token is not a
    /// recognizable color (in which case the surrounding marker is treated
    /// as literal text).
    pub fn parse(token: &str) -> Option<Self> {
        if token == "clear" {
            return Some(ColorToken::Clear);
        }
        if let Some(hex) = token.strip_prefix('#') {
            return Self::parse_hex(hex);
        }
        if let Some(base) = token.strip_prefix("bright_") {
            return Self::parse_bright(base);
        }
        Self::parse_named(token)
    }

    /// The console style this token applies. `Clear` yields an empty style.
    pub fn style(&self) -> Style {
        match *self {
            ColorToken::Clear => Style::new(),
            ColorToken::Named(color) => Style::new().fg(color),
            ColorToken::Palette(index) => Style::new().fg(Color::Color256(index)),
            ColorToken::Rgb(r, g, b) => {
                Style::new().fg(Color::Color256(rgb_to_ansi256(r, g, b)))
            }
        }
    }

    fn parse_hex(hex: &str) -> Option<Self> {
        let component = |s: &str| u8::from_str_radix(s, 16).ok();
        match hex.len() {
            // #rgb expands to #rrggbb
            3 => Some(ColorToken::Rgb(
                component(&hex[0..1])? * 17,
                component(&hex[1..2])? * 17,
                component(&hex[2..3])? * 17,
            )),
            6 => Some(ColorToken::Rgb(
                component(&hex[0..2])?,
                component(&hex[2..4])?,
                component(&hex[4..6])?,
            )),
            _ => None,
        }
    }

    fn parse_named(name: &str) -> Option<Self> {
        let color = match name {
            "black" => Color::Black,
            "red" => Color::Red,
            "green" => Color::Green,
            "yellow" => Color::Yellow,
            "blue" => Color::Blue,
            "magenta" => Color::Magenta,
            "cyan" => Color::Cyan,
            "white" | "gray" | "grey" => Color::White,
            _ => return None,
        };
        Some(ColorToken::Named(color))
    }

    fn parse_bright(base: &str) -> Option<Self> {
        // console represents bright colors as palette indices 8-15
        let index = match base {
            "black" => 8,
            "red" => 9,
            "green" => 10,
            "yellow" => 11,
            "blue" => 12,
            "magenta" => 13,
            "cyan" => 14,
            "white" => 15,
            _ => return None,
        };
        Some(ColorToken::Palette(index))
    }
}

/// Nearest 256-color palette index for an RGB triplet.
fn rgb_to_ansi256(r: u8, g: u8, b: u8) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}

/// Returns the opening marker for a color token: `[{color}]`.
pub fn open_marker(color: &str) -> String {
    format!("[{}]", color)
}

/// Returns the closing marker for a color token: `[/{color}]`.
pub fn close_marker(color: &str) -> String {
    format!("[/{}]", color)
}

/// Parser for `[color]content[/color]` markers.
///
/// Malformed or unrecognized markers pass through as literal text; an
/// opening marker with no matching close is literal too. The parser never
/// fails — worst case the input comes back unchanged.
#[derive(Debug, Clone, Copy)]
pub struct MarkupParser {
    transform: Transform,
}

impl MarkupParser {
    /// Creates a parser with the given transform mode.
    pub fn new(transform: Transform) -> Self {
        Self { transform }
    }

    /// Parses the input and transforms color markers according to the
    /// configured mode.
    pub fn parse(&self, input: &str) -> String {
        if matches!(self.transform, Transform::Keep) {
            return input.to_string();
        }

        let spans: Vec<Span<'_>> = Tokenizer::new(input).collect();
        let mut output = String::with_capacity(input.len());
        let mut stack: Vec<(&str, ColorToken)> = Vec::new();

        for (i, span) in spans.iter().enumerate() {
            match *span {
                Span::Text(text) => self.emit(&mut output, text, &stack),
                Span::Open(token) => match ColorToken::parse(token) {
                    Some(color) if has_matching_close(&spans[i + 1..], token) => {
                        stack.push((token, color));
                    }
                    // Not a color, or never closed: literal
                    _ => self.emit(&mut output, &format!("[{}]", token), &stack),
                },
                Span::Close(token) => {
                    if stack.last().map(|(name, _)| *name) == Some(token) {
                        stack.pop();
                    } else {
                        // Orphan or mis-nested close marker: literal
                        self.emit(&mut output, &format!("[/{}]", token), &stack);
                    }
                }
            }
        }

        output
    }

    /// Appends text, styled by the innermost open marker in `Apply` mode.
    fn emit(&self, output: &mut String, text: &str, stack: &[(&str, ColorToken)]) {
        if text.is_empty() {
            return;
        }
        match self.transform {
            Transform::Apply => match stack.last() {
                Some((_, color)) => {
                    output.push_str(&color.style().apply_to(text).to_string());
                }
                None => output.push_str(text),
            },
            Transform::Remove | Transform::Keep => output.push_str(text),
        }
    }
}

/// Checks whether a matching close marker for `token` appears later on,
/// accounting for nested markers with the same name.
fn has_matching_close(spans: &[Span<'_>], token: &str) -> bool {
    let mut depth = 1;
    for span in spans {
        match span {
            Span::Open(t) if *t == token => depth += 1,
            Span::Close(t) if *t == token => {
                depth -= 1;
                if depth == 0 {
                    return true;
                }
            }
            _ => {}
        }
    }
    false
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Span<'a> {
    Text(&'a str),
    Open(&'a str),
    Close(&'a str),
}

/// Splits input into text runs and `[…]` / `[/…]` marker candidates.
///
/// Bracket spans with content that could not possibly be a marker (empty,
/// containing brackets or whitespace) come back as text.
struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn marker_shaped(token: &str) -> bool {
        !token.is_empty()
            && token
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '#' | '_' | '-'))
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Span<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let remaining = &self.input[self.pos..];
        if remaining.is_empty() {
            return None;
        }

        let Some(open) = remaining.find('[') else {
            self.pos = self.input.len();
            return Some(Span::Text(remaining));
        };
        if open > 0 {
            self.pos += open;
            return Some(Span::Text(&remaining[..open]));
        }

        let Some(close) = remaining.find(']') else {
            self.pos = self.input.len();
            return Some(Span::Text(remaining));
        };

        let content = &remaining[1..close];
        self.pos += close + 1;
        if let Some(token) = content.strip_prefix('/') {
            if Self::marker_shaped(token) {
                return Some(Span::Close(token));
            }
        } else if Self::marker_shaped(content) {
            return Some(Span::Open(content));
        }
        Some(Span::Text(&remaining[..=close]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn wrap(color: &str, text: &str) -> String {
        format!("{}{}{}", open_marker(color), text, close_marker(color))
    }

    #[test]
    fn remove_strips_named_color() {
        let parser = MarkupParser::new(Transform::Remove);
        assert_eq!(parser.parse(&wrap("cyan", "Jebediah")), "Jebediah");
    }

    #[test]
    fn remove_strips_hex_color() {
        let parser = MarkupParser::new(Transform::Remove);
        assert_eq!(parser.parse(&wrap("#ff6600", "Bob")), "Bob");
        assert_eq!(parser.parse(&wrap("#f60", "Bob")), "Bob");
    }

    #[test]
    fn remove_strips_clear() {
        let parser = MarkupParser::new(Transform::Remove);
        assert_eq!(parser.parse(&wrap("clear", "Bill")), "Bill");
    }

    #[test]
    fn keep_is_identity() {
        let parser = MarkupParser::new(Transform::Keep);
        let input = wrap("red", "Val");
        assert_eq!(parser.parse(&input), input);
    }

    #[test]
    fn apply_styles_content() {
        let parser = MarkupParser::new(Transform::Apply);
        let output = parser.parse(&wrap("red", "Val"));
        // Either styled (ANSI escape present) or plain when the test
        // terminal reports no color support; content survives either way.
        assert!(output.contains("Val"));
        assert!(!output.contains("[red]"));
    }

    #[test]
    fn apply_with_clear_is_plain() {
        let parser = MarkupParser::new(Transform::Apply);
        assert_eq!(parser.parse(&wrap("clear", "Val")), "Val");
    }

    #[test]
    fn unknown_token_is_literal() {
        let parser = MarkupParser::new(Transform::Remove);
        let input = "[not a marker] and [definitely!]text";
        assert_eq!(parser.parse(input), input);
    }

    #[test]
    fn unmatched_open_is_literal() {
        let parser = MarkupParser::new(Transform::Remove);
        assert_eq!(parser.parse("[red]no close"), "[red]no close");
    }

    #[test]
    fn orphan_close_is_literal() {
        let parser = MarkupParser::new(Transform::Remove);
        assert_eq!(parser.parse("no open[/red]"), "no open[/red]");
    }

    #[test]
    fn nested_markers() {
        let parser = MarkupParser::new(Transform::Remove);
        let input = format!("[cyan]a {}c[/cyan]", wrap("red", "b"));
        assert_eq!(parser.parse(&input), "a bc");
    }

    #[test]
    fn unterminated_bracket_is_literal() {
        let parser = MarkupParser::new(Transform::Remove);
        assert_eq!(parser.parse("open [bracket"), "open [bracket");
    }

    #[test]
    fn parse_color_tokens() {
        assert_eq!(ColorToken::parse("clear"), Some(ColorToken::Clear));
        assert_eq!(
            ColorToken::parse("red"),
            Some(ColorToken::Named(console::Color::Red))
        );
        assert_eq!(ColorToken::parse("bright_cyan"), Some(ColorToken::Palette(14)));
        assert_eq!(
            ColorToken::parse("#ff6600"),
            Some(ColorToken::Rgb(255, 102, 0))
        );
        assert_eq!(ColorToken::parse("#f60"), Some(ColorToken::Rgb(255, 102, 0)));
        assert_eq!(ColorToken::parse("chartreuse-ish"), None);
        assert_eq!(ColorToken::parse("#ff660"), None);
        assert_eq!(ColorToken::parse(""), None);
    }

    proptest! {
        #[test]
        fn marker_free_text_is_untouched(text in "[^\\[\\]]*") {
            let parser = MarkupParser::new(Transform::Remove);
            prop_assert_eq!(parser.parse(&text), text);
        }

        #[test]
        fn remove_roundtrip_for_wrapped_names(name in "[A-Za-z ]{1,24}") {
            let parser = MarkupParser::new(Transform::Remove);
            prop_assert_eq!(parser.parse(&wrap("#a0e6ff", &name)), name);
        }
    }
}
