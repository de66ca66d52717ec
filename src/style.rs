//! Badge colours.
//!
//! A [`StyleChoice`] is the three colours the user can pick: the two ends of
//! the background gradient and the text colour. Colours are interpolated
//! straight into an inline `style` attribute, so only hex notation
//! (`#rgb` or `#rrggbb`, as produced by an HTML colour input) is accepted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
#[error("invalid color '{0}': expected #rgb or #rrggbb")]
pub struct ColorError(pub String);

/// A validated hex colour, stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

impl Color {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let valid = trimmed
            .strip_prefix('#')
            .is_some_and(|hex| {
                matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
            });
        if valid {
            Ok(Color(trimmed.to_ascii_lowercase()))
        } else {
            Err(ColorError(s.to_string()))
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Colours applied to the generated badge.
///
/// Doubles as the `[colors]` config section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleChoice {
    /// Top-left end of the 135° background gradient; also the solid
    /// fallback background.
    pub gradient_from: Color,
    /// Bottom-right end of the background gradient.
    pub gradient_to: Color,
    pub text: Color,
}

impl Default for StyleChoice {
    fn default() -> Self {
        Self {
            gradient_from: Color("#f8fafc".to_string()),
            gradient_to: Color("#f1f5f9".to_string()),
            text: Color("#334155".to_string()),
        }
    }
}

impl StyleChoice {
    /// CSS `background` declarations: a solid fallback followed by the gradient.
    pub fn background_css(&self) -> String {
        format!(
            "background: {from};background: linear-gradient(135deg, {from} 0%, {to} 100%);",
            from = self.gradient_from,
            to = self.gradient_to,
        )
    }

    pub fn color_css(&self) -> String {
        format!("color: {};", self.text)
    }
}
