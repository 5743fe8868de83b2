//! SVG output for resolved patterns.
//!
//! Cut lines are emitted as one `<path>` made of independent `M .. L ..`
//! sub-paths, fold lines as individual `<line>` elements so they can be
//! restyled or removed separately in an editor.

use std::io::Write;

use log::{debug, error, info};
use svg::{
    Document,
    node::element::{Line, Path, Rectangle},
};

use boxcut_core::{Segment, apply_stroke, color::Color, stroke::StrokeDefinition};

use crate::{ResolvedPattern, config::StyleConfig, export};

/// Builder for [`Svg`] exporters.
#[derive(Default)]
pub struct SvgBuilder {
    style: StyleConfig,
}

impl SvgBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the style used for cut and fold strokes.
    pub fn with_style(mut self, style: &StyleConfig) -> Self {
        self.style = style.clone();
        self
    }

    /// Parses the style and builds the exporter.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Render`] if a configured color or stroke
    /// style is invalid.
    pub fn build(self) -> Result<Svg, export::Error> {
        let cut_stroke = self.style.cut_stroke().map_err(export::Error::Render)?;
        let fold_stroke = self.style.fold_stroke().map_err(export::Error::Render)?;
        let background = self
            .style
            .background_color()
            .map_err(export::Error::Render)?;
        let margin = self.style.canvas_margin().map_err(export::Error::Render)?;

        Ok(Svg {
            cut_stroke,
            fold_stroke,
            background,
            margin,
        })
    }
}

/// SVG exporter with resolved stroke styles.
#[derive(Debug)]
pub struct Svg {
    cut_stroke: StrokeDefinition,
    fold_stroke: StrokeDefinition,
    background: Option<Color>,
    margin: f64,
}

impl Svg {
    /// Builds the SVG document for a resolved pattern.
    pub fn render_document(&self, resolved: &ResolvedPattern) -> Document {
        let bounds = resolved.bounds().inflate(self.margin);
        let origin = bounds.min_point();
        let (width, height) = (bounds.width(), bounds.height());

        let mut doc = Document::new()
            .set("width", format!("{width}mm"))
            .set("height", format!("{height}mm"))
            .set(
                "viewBox",
                format!("{} {} {width} {height}", origin.x(), origin.y()),
            );

        if let Some(background) = &self.background {
            let rect = Rectangle::new()
                .set("x", origin.x())
                .set("y", origin.y())
                .set("width", width)
                .set("height", height)
                .set("fill", background);
            doc = doc.add(rect);
        }

        let unique = resolved.resolution().unique();
        if !unique.is_empty() {
            let path = Path::new()
                .set("d", cut_path_data(unique))
                .set("fill", "none");
            doc = doc.add(apply_stroke!(path, &self.cut_stroke));
        }

        for segment in resolved.resolution().overlap() {
            let line = Line::new()
                .set("x1", segment.x1())
                .set("y1", segment.y1())
                .set("x2", segment.x2())
                .set("y2", segment.y2());
            doc = doc.add(apply_stroke!(line, &self.fold_stroke));
        }

        debug!(
            cut_segments = unique.len(),
            fold_segments = resolved.resolution().overlap().len();
            "SVG document rendered"
        );

        doc
    }
}

/// Path data with one independent sub-path per segment.
fn cut_path_data(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|segment| {
            format!(
                "M {},{} L {},{}",
                segment.x1(),
                segment.y1(),
                segment.x2(),
                segment.y2()
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

impl export::Exporter for Svg {
    fn export_pattern<W: Write>(
        &mut self,
        resolved: &ResolvedPattern,
        writer: &mut W,
    ) -> Result<(), export::Error> {
        let doc = self.render_document(resolved);

        info!("Writing SVG document");
        if let Err(err) = write!(writer, "{doc}") {
            error!(err:err; "Failed to write SVG content");
            return Err(export::Error::Io(err));
        }

        Ok(())
    }
}
