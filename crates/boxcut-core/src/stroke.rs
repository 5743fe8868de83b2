//! Stroke definitions for cut and fold lines.
//!
//! A pattern is drawn with two strokes: one for lines that are cut
//! (segments drawn by a single panel) and one for lines shared between
//! panels. Both are described by a [`StrokeDefinition`].
//!
//! # SVG Attribute Mapping
//!
//! | Rust Property | SVG Attribute              | Example Values       |
//! |---------------|----------------------------|----------------------|
//! | `color`       | `stroke`, `stroke-opacity` | `"black"`, `0.5`     |
//! | `width`       | `stroke-width`             | `0.5`                |
//! | `style`       | `stroke-dasharray`         | `"2,1"`, `"4,1,1,1"` |

use std::str::FromStr;

use crate::color::Color;

/// Line pattern of a stroke.
///
/// Dash lengths are in millimeters, the unit of the pattern canvas.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum StrokeStyle {
    /// Solid continuous line (default)
    #[default]
    Solid,
    /// 2mm dash, 1mm gap
    Dashed,
    /// 0.5mm dot, 1mm gap
    Dotted,
    /// Custom SVG dasharray pattern, e.g. "4,1,1,1"
    Custom(String),
}

impl FromStr for StrokeStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solid" => Ok(Self::Solid),
            "dashed" => Ok(Self::Dashed),
            "dotted" => Ok(Self::Dotted),
            "" => Err("empty stroke style".to_string()),
            // Anything else is a dasharray pattern
            _ => Ok(Self::Custom(s.to_string())),
        }
    }
}

impl StrokeStyle {
    /// Returns the SVG dasharray value for this style, or None for solid lines
    pub fn to_svg_value(&self) -> Option<String> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some("2,1".to_string()),
            Self::Dotted => Some("0.5,1".to_string()),
            Self::Custom(pattern) => Some(pattern.clone()),
        }
    }
}

/// A stroke definition for rendering pattern lines.
///
/// # Examples
///
/// ```
/// use boxcut_core::{color::Color, stroke::{StrokeDefinition, StrokeStyle}};
///
/// let cut = StrokeDefinition::solid(Color::default(), 0.5);
/// let fold = StrokeDefinition::dashed(Color::new("green").unwrap(), 1.0);
///
/// assert_eq!(*cut.style(), StrokeStyle::Solid);
/// assert_eq!(fold.width(), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    style: StrokeStyle,
}

impl StrokeDefinition {
    /// Creates a solid stroke with the given color and width.
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            style: StrokeStyle::Solid,
        }
    }

    /// Creates a solid stroke (same as [`new`](Self::new)).
    pub fn solid(color: Color, width: f32) -> Self {
        Self::new(color, width)
    }

    /// Creates a dashed stroke.
    pub fn dashed(color: Color, width: f32) -> Self {
        let mut stroke = Self::new(color, width);
        stroke.set_style(StrokeStyle::Dashed);
        stroke
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: StrokeStyle) {
        self.style = style;
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self::new(Color::default(), 0.5)
    }
}

/// Apply all stroke attributes to an SVG element.
///
/// Sets `stroke`, `stroke-opacity`, `stroke-width` and, for patterned
/// styles, `stroke-dasharray`.
///
/// # Examples
///
/// ```
/// use boxcut_core::{color::Color, stroke::StrokeDefinition};
/// use svg::node::element as svg_element;
///
/// let stroke = StrokeDefinition::solid(Color::default(), 0.5);
/// let line = svg_element::Line::new()
///     .set("x1", 0)
///     .set("y1", 0)
///     .set("x2", 10)
///     .set("y2", 0);
///
/// let line = boxcut_core::apply_stroke!(line, &stroke);
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let mut elem = $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width());

        if let Some(dasharray) = $stroke.style().to_svg_value() {
            elem = elem.set("stroke-dasharray", dasharray);
        }

        elem
    }};
}

#[cfg(test)]
mod tests {
    use svg::node::element as svg_element;

    use super::*;

    #[test]
    fn test_stroke_default() {
        let stroke = StrokeDefinition::default();
        assert_eq!(stroke.width(), 0.5);
        assert_eq!(stroke.color().to_string(), "black");
        assert_eq!(*stroke.style(), StrokeStyle::Solid);
    }

    #[test]
    fn test_stroke_set_style() {
        let mut stroke = StrokeDefinition::new(Color::new("green").unwrap(), 1.0);
        stroke.set_style(StrokeStyle::Dotted);

        assert_eq!(stroke.color().to_string(), "green");
        assert_eq!(stroke.width(), 1.0);
        assert_eq!(*stroke.style(), StrokeStyle::Dotted);
    }

    #[test]
    fn test_stroke_style_from_str() {
        assert_eq!(StrokeStyle::from_str("solid").unwrap(), StrokeStyle::Solid);
        assert_eq!(StrokeStyle::from_str("dashed").unwrap(), StrokeStyle::Dashed);
        assert_eq!(StrokeStyle::from_str("dotted").unwrap(), StrokeStyle::Dotted);
        assert_eq!(
            StrokeStyle::from_str("3,1").unwrap(),
            StrokeStyle::Custom("3,1".to_string())
        );
        assert!(StrokeStyle::from_str("").is_err());
    }

    #[test]
    fn test_stroke_style_dasharray() {
        assert_eq!(StrokeStyle::Solid.to_svg_value(), None);
        assert_eq!(StrokeStyle::Dashed.to_svg_value(), Some("2,1".to_string()));
        assert_eq!(StrokeStyle::Dotted.to_svg_value(), Some("0.5,1".to_string()));
    }

    #[test]
    fn test_apply_stroke_sets_attributes() {
        let stroke = StrokeDefinition::dashed(Color::new("green").unwrap(), 1.0);
        let line = crate::apply_stroke!(svg_element::Line::new(), &stroke);

        let rendered = line.to_string();
        assert!(rendered.contains(r#"stroke="green""#));
        assert!(rendered.contains(r#"stroke-width="1""#));
        assert!(rendered.contains(r#"stroke-dasharray="2,1""#));
    }

    #[test]
    fn test_apply_stroke_solid_has_no_dasharray() {
        let stroke = StrokeDefinition::default();
        let line = crate::apply_stroke!(svg_element::Line::new(), &stroke);
        assert!(!line.to_string().contains("stroke-dasharray"));
    }
}
