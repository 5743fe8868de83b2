//! Configuration types for boxcut pattern generation.
//!
//! This module provides the configuration record passed into the layout
//! builder and the SVG exporter. All types implement
//! [`serde::Deserialize`] so they can be loaded from TOML files; every
//! field is optional and falls back to the defaults below.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and style settings.
//! - [`LayoutConfig`] - Material thickness, glue flap length and taper angle.
//! - [`StyleConfig`] - Stroke colors, widths, background and canvas margin.
//!
//! # Example
//!
//! ```
//! # use boxcut::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.layout().material_thickness(), 3.0);
//! assert!(config.style().cut_stroke().is_ok());
//! ```
//!
//! A complete configuration file:
//!
//! ```toml
//! [layout]
//! material_thickness = 2.0
//! flap_length = 12.0
//! taper_angle = 30.0
//!
//! [style]
//! cut_color = "black"
//! cut_width = 0.5
//! fold_color = "green"
//! fold_width = 1.0
//! fold_style = "dashed"
//! background_color = "white"
//! canvas_margin = 5.0
//! ```

use serde::Deserialize;

use boxcut_core::{
    color::Color,
    stroke::{StrokeDefinition, StrokeStyle},
};

/// Top-level application configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Replaces the layout configuration.
    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }
}

/// Panel layout parameters, all lengths in millimeters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Thickness of the board the box is cut from.
    material_thickness: f64,

    /// Width of the glue flap on the left edge.
    flap_length: f64,

    /// Taper of the glue flap in degrees.
    taper_angle: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            material_thickness: 3.0,
            flap_length: 15.0,
            taper_angle: 30.0,
        }
    }
}

impl LayoutConfig {
    /// Creates a new [`LayoutConfig`].
    ///
    /// # Arguments
    ///
    /// * `material_thickness` - Board thickness in millimeters.
    /// * `flap_length` - Glue flap width in millimeters.
    /// * `taper_angle` - Glue flap taper in degrees.
    pub fn new(material_thickness: f64, flap_length: f64, taper_angle: f64) -> Self {
        Self {
            material_thickness,
            flap_length,
            taper_angle,
        }
    }

    pub fn material_thickness(&self) -> f64 {
        self.material_thickness
    }

    pub fn flap_length(&self) -> f64 {
        self.flap_length
    }

    pub fn taper_angle(&self) -> f64 {
        self.taper_angle
    }

    /// Returns a copy with a different material thickness.
    pub fn with_material_thickness(mut self, material_thickness: f64) -> Self {
        self.material_thickness = material_thickness;
        self
    }

    /// Returns a copy with a different flap length.
    pub fn with_flap_length(mut self, flap_length: f64) -> Self {
        self.flap_length = flap_length;
        self
    }
}

/// Visual styling of the rendered pattern.
///
/// Cut lines are drawn by exactly one panel; fold lines are shared between
/// two panels.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    cut_color: String,
    cut_width: f32,
    fold_color: String,
    fold_width: f32,
    fold_style: String,
    background_color: Option<String>,

    /// Blank border around the pattern, in millimeters.
    canvas_margin: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            cut_color: "black".to_string(),
            cut_width: 0.5,
            fold_color: "green".to_string(),
            fold_width: 1.0,
            fold_style: "solid".to_string(),
            background_color: None,
            canvas_margin: 0.0,
        }
    }
}

impl StyleConfig {
    /// Returns the stroke for cut lines.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color cannot be parsed.
    pub fn cut_stroke(&self) -> Result<StrokeDefinition, String> {
        let color = Color::new(&self.cut_color)
            .map_err(|err| format!("Invalid cut color in config: {err}"))?;
        Ok(StrokeDefinition::solid(color, self.cut_width))
    }

    /// Returns the stroke for fold (shared) lines.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color or style cannot be parsed.
    pub fn fold_stroke(&self) -> Result<StrokeDefinition, String> {
        let color = Color::new(&self.fold_color)
            .map_err(|err| format!("Invalid fold color in config: {err}"))?;
        let style = self
            .fold_style
            .parse::<StrokeStyle>()
            .map_err(|err| format!("Invalid fold style in config: {err}"))?;

        let mut stroke = StrokeDefinition::new(color, self.fold_width);
        stroke.set_style(style);
        Ok(stroke)
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    /// Returns the canvas margin in millimeters.
    ///
    /// # Errors
    ///
    /// Returns an error if the margin is negative or not finite.
    pub fn canvas_margin(&self) -> Result<f64, String> {
        if self.canvas_margin.is_finite() && self.canvas_margin >= 0.0 {
            Ok(self.canvas_margin)
        } else {
            Err(format!(
                "Invalid canvas margin in config: {}",
                self.canvas_margin
            ))
        }
    }
}
