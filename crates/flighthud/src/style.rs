//! Overlay style attributes.
//!
//! These scalars describe how the drawing surface should place and paint
//! the resolved text. flighthud only carries them; the surface consumes
//! them alongside the final string.

use serde::{Deserialize, Serialize};

/// Style attributes handed to the drawing surface with the resolved text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayStyle {
    /// Base text color token (markup syntax: named, `#rrggbb`, `clear`).
    pub color: String,
    /// Where on screen the text block is pinned.
    pub anchor: Anchor,
    /// Font size in points.
    pub font_size: u32,
    pub font_weight: FontWeight,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            color: "#ffffff".to_string(),
            anchor: Anchor::TopLeft,
            font_size: 12,
            font_weight: FontWeight::Normal,
        }
    }
}

/// Nine-way screen anchor for the overlay block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    #[default]
    TopLeft,
    TopCenter,
    TopRight,
    MiddleLeft,
    MiddleCenter,
    MiddleRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

/// Font weight for the overlay text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style() {
        let style = OverlayStyle::default();
        assert_eq!(style.color, "#ffffff");
        assert_eq!(style.anchor, Anchor::TopLeft);
        assert_eq!(style.font_weight, FontWeight::Normal);
    }

    #[test]
    fn anchor_parses_from_yaml() {
        let style: OverlayStyle =
            serde_yaml::from_str("anchor: bottom_center\nfont_size: 14\n").unwrap();
        assert_eq!(style.anchor, Anchor::BottomCenter);
        assert_eq!(style.font_size, 14);
        assert_eq!(style.color, "#ffffff"); // untouched defaults survive
    }
}
