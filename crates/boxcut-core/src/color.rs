//! Color handling for pattern strokes.
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate, so stroke colors can be written as any CSS color
//! string in configuration files.

use std::{fmt, str::FromStr};

use color::DynamicColor;

/// Wrapper around the `DynamicColor` type from the color crate
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use boxcut_core::color::Color;
    ///
    /// let green = Color::new("green").unwrap();
    /// let custom = Color::new("#00aa00").unwrap();
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Returns the alpha component, between 0.0 (transparent) and 1.0 (opaque).
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_new() {
        assert!(Color::new("#ff0000").is_ok());
        assert!(Color::new("green").is_ok());
        let translucent = Color::new("rgb(0 0 255 / 0.5)").unwrap();
        assert!((translucent.alpha() - 0.5).abs() < 0.001);

        let invalid = Color::new("not-a-color");
        assert!(invalid.unwrap_err().contains("invalid color `not-a-color`"));
    }

    #[test]
    fn test_color_default() {
        let color = Color::default();
        assert_eq!(color.to_string(), "black");
        assert_eq!(color.alpha(), 1.0);
    }

    #[test]
    fn test_color_as_svg_attribute() {
        let color = Color::default();
        let line = svg::node::element::Line::new().set("stroke", &color);
        assert!(line.to_string().contains(r#"stroke="black""#));
    }
}
