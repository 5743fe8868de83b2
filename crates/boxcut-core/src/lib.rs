//! Boxcut Core Types and Algorithms
//!
//! This crate provides the geometry engine behind boxcut patterns. It includes:
//!
//! - **Segments**: Tolerance-aware line segments ([`segment::Segment`])
//! - **Grouping**: Partitioning into collinear groups ([`group`] module)
//! - **Resolution**: Splitting overlapping segments into unique and shared parts ([`resolve`] module)
//! - **Deduplication**: Final sliver and duplicate filtering ([`dedup`] module)
//! - **Geometry**: Points and bounds ([`geometry`] module)
//! - **Drawing**: Colors and strokes for SVG output ([`color`], [`stroke`] modules)

pub mod color;
pub mod dedup;
pub mod geometry;
pub mod group;
pub mod resolve;
pub mod segment;
pub mod stroke;

pub use resolve::{Resolution, resolve};
pub use segment::Segment;
