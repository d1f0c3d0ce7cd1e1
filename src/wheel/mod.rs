//! Layout and relationship lookups for the nine-point Enneagram wheel.
//!
//! Everything here is pure: positions are recomputed from the viewport
//! on every call and the relationship tables are compile-time constants.

pub mod error;
pub mod geometry;
pub mod tables;
pub mod types;

pub use error::WheelError;
pub use geometry::{
    compute_center, compute_outer_radius, disintegration_of, integration_of, position_of,
    type_order_index, Connectors, LayoutParams, Point2D, Segment, WheelGeometry, WheelLayout,
    WheelNode,
};
pub use types::{Triad, TypeId};
