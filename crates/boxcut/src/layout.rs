//! Panel layout for a tuck-box pattern.
//!
//! The pattern is a single unfolded sheet: a tapered glue flap on the left,
//! followed by four wall columns alternating between the box width and
//! length. Each column has a top closure panel, a wall and a bottom closure
//! panel. Neighboring panels share edges, which the resolution stage later
//! turns into fold lines.

mod primitives;

use std::fmt;

use log::{debug, trace};

use boxcut_core::{
    Segment,
    geometry::{Bounds, Point},
};

use crate::{config::LayoutConfig, error::BoxcutError};

pub use primitives::{polygon_segments, rectangle_segments};

/// Interior box dimensions in millimeters, sorted so that
/// `width <= length <= height`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxDimensions {
    width: f64,
    length: f64,
    height: f64,
}

impl BoxDimensions {
    /// Creates box dimensions from three lengths given in any order.
    ///
    /// # Examples
    ///
    /// ```
    /// use boxcut::layout::BoxDimensions;
    ///
    /// let dimensions = BoxDimensions::new(80.0, 40.0, 60.0);
    /// assert_eq!(dimensions.width(), 40.0);
    /// assert_eq!(dimensions.length(), 60.0);
    /// assert_eq!(dimensions.height(), 80.0);
    /// ```
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        let mut sorted = [a, b, c];
        sorted.sort_by(f64::total_cmp);
        let [width, length, height] = sorted;
        Self {
            width,
            length,
            height,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    fn as_array(&self) -> [f64; 3] {
        [self.width, self.length, self.height]
    }
}

impl fmt::Display for BoxDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}mm x {}mm x {}mm",
            self.width, self.length, self.height
        )
    }
}

/// A laid out pattern: every panel edge plus the bounding box of the sheet.
///
/// Edges are not yet resolved; shared edges appear once per panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    segments: Vec<Segment>,
    bounds: Bounds,
}

impl Pattern {
    /// Creates a pattern from raw segments, computing its bounds.
    pub fn new(segments: Vec<Segment>) -> Self {
        let bounds = Bounds::from_segments(&segments);
        Self { segments, bounds }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}

/// Validated layout parameters for one box.
#[derive(Debug, Clone)]
pub struct PanelLayout {
    dimensions: BoxDimensions,
    thickness: f64,
    flap_length: f64,
    taper_angle: f64,
}

impl PanelLayout {
    /// Creates a panel layout after validating the inputs.
    ///
    /// # Errors
    ///
    /// Returns [`BoxcutError::Layout`] if a dimension is not strictly
    /// positive, the thickness or flap length is negative, or the taper
    /// angle is outside `[0, 90)` degrees.
    pub fn new(dimensions: BoxDimensions, config: &LayoutConfig) -> Result<Self, BoxcutError> {
        if let Some(bad) = dimensions
            .as_array()
            .into_iter()
            .find(|value| !value.is_finite() || *value <= 0.0)
        {
            return Err(BoxcutError::Layout(format!(
                "box dimensions must be positive, got {bad}"
            )));
        }

        let thickness = config.material_thickness();
        if !thickness.is_finite() || thickness < 0.0 {
            return Err(BoxcutError::Layout(format!(
                "material thickness must not be negative, got {thickness}"
            )));
        }

        let flap_length = config.flap_length();
        if !flap_length.is_finite() || flap_length < 0.0 {
            return Err(BoxcutError::Layout(format!(
                "flap length must not be negative, got {flap_length}"
            )));
        }

        let taper_angle = config.taper_angle();
        if !(0.0..90.0).contains(&taper_angle) {
            return Err(BoxcutError::Layout(format!(
                "taper angle must be in [0, 90) degrees, got {taper_angle}"
            )));
        }

        Ok(Self {
            dimensions,
            thickness,
            flap_length,
            taper_angle,
        })
    }

    pub fn dimensions(&self) -> BoxDimensions {
        self.dimensions
    }

    /// Emits every panel edge of the pattern.
    pub fn build(&self) -> Pattern {
        let t = self.thickness;
        let a = self.dimensions.width() + t;
        let b = self.dimensions.length() + t;
        let h = self.dimensions.height() + t;
        let s = a.min(b).min(h) / 2.0;
        let inset = t / 2.0;
        let f = self.flap_length;
        let d = f * self.taper_angle.to_radians().tan() / 2.0;

        debug!(
            width = a, length = b, height = h, closure = s, taper = d;
            "Computed panel measurements"
        );

        let mut segments = polygon_segments(&[
            Point::new(0.0, s + d),
            Point::new(f, s),
            Point::new(f, s + h),
            Point::new(0.0, s + h - d),
        ]);

        let mut x = f;
        for (column, w) in [a, b, a, b].into_iter().enumerate() {
            // Length columns are taller by one thickness at each end.
            let lift = if column % 2 == 0 { 0.0 } else { t };

            segments.extend(rectangle_segments(x + inset, -lift, w - 2.0 * inset, s));
            segments.extend(rectangle_segments(x, s - lift, w, h + 2.0 * lift));
            segments.extend(rectangle_segments(
                x + inset,
                s + h + lift,
                w - 2.0 * inset,
                s,
            ));

            x += w;
        }

        let pattern = Pattern::new(segments);
        debug!(segments = pattern.segments().len(); "Panel edges emitted");
        trace!(bounds:? = pattern.bounds(); "Pattern bounds");

        pattern
    }
}
