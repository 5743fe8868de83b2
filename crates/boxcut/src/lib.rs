//! Boxcut - cutting patterns for folding boxes.
//!
//! Lays out the panels of a tuck box, detects the edges shared between
//! neighboring panels, and renders the result as SVG with distinct styles for
//! cut lines and fold lines.

pub mod config;
pub mod dimension;
pub mod layout;

mod error;
mod export;

pub use boxcut_core::{Resolution, Segment, color, geometry, stroke};

pub use error::BoxcutError;

use log::{debug, info, trace};

use boxcut_core::geometry::Bounds;

use config::AppConfig;
use export::Exporter;
use layout::{BoxDimensions, PanelLayout, Pattern};

/// A pattern whose edges have been split into cut lines and fold lines.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPattern {
    resolution: Resolution,
    bounds: Bounds,
}

impl ResolvedPattern {
    pub fn new(resolution: Resolution, bounds: Bounds) -> Self {
        Self { resolution, bounds }
    }

    /// Cut (unique) and fold (overlap) segments.
    pub fn resolution(&self) -> &Resolution {
        &self.resolution
    }

    /// Extent of the sheet, taken from the unresolved pattern.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}

/// Builder for laying out and rendering box patterns.
///
/// # Examples
///
/// ```rust
/// use boxcut::{PatternBuilder, config::AppConfig, layout::BoxDimensions};
///
/// let builder = PatternBuilder::new(AppConfig::default());
///
/// let pattern = builder
///     .layout(BoxDimensions::new(40.0, 60.0, 80.0))
///     .expect("Failed to lay out");
///
/// let svg = builder.render_svg(&pattern).expect("Failed to render");
/// assert!(svg.starts_with("<svg"));
/// ```
#[derive(Default)]
pub struct PatternBuilder {
    config: AppConfig,
}

impl PatternBuilder {
    /// Create a new pattern builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including layout and style settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this builder was created with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Lay out every panel edge for a box of the given interior size.
    ///
    /// # Errors
    ///
    /// Returns [`BoxcutError::Layout`] if the dimensions or the layout
    /// configuration are out of range.
    pub fn layout(&self, dimensions: BoxDimensions) -> Result<Pattern, BoxcutError> {
        info!(dimensions:% = dimensions; "Laying out panels");

        let pattern = PanelLayout::new(dimensions, self.config.layout())?.build();

        debug!(segments = pattern.segments().len(); "Layout calculated");
        Ok(pattern)
    }

    /// Split a pattern's edges into cut lines and shared fold lines.
    pub fn resolve(&self, pattern: &Pattern) -> ResolvedPattern {
        info!(segments = pattern.segments().len(); "Resolving shared edges");

        let resolution = boxcut_core::resolve(pattern.segments().iter().copied());

        debug!(
            unique = resolution.unique().len(),
            overlap = resolution.overlap().len();
            "Edges resolved"
        );
        trace!(resolution:?; "Resolved segments");

        ResolvedPattern::new(resolution, pattern.bounds())
    }

    /// Render a pattern to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`BoxcutError::Export`] if the style configuration is invalid.
    pub fn render_svg(&self, pattern: &Pattern) -> Result<String, BoxcutError> {
        let resolved = self.resolve(pattern);

        let mut svg_exporter = export::svg::SvgBuilder::new()
            .with_style(self.config.style())
            .build()?;

        let mut buffer = Vec::new();
        svg_exporter.export_pattern(&resolved, &mut buffer)?;

        let svg_string = String::from_utf8(buffer)
            .map_err(|err| export::Error::Render(format!("SVG output is not UTF-8: {err}")))?;

        info!("SVG rendered successfully");
        Ok(svg_string)
    }
}
