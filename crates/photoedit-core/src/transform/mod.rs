//! Geometric transforms: vertical flip and rotation.
//!
//! # Transform Order
//!
//! When rendering, geometric transforms run before the selected filter:
//! 1. Vertical flip (optional)
//! 2. Rotation with canvas expansion
//! 3. Filter
//!
//! # Coordinate System
//!
//! - Rotation angles are in degrees, positive = counter-clockwise
//! - Origin is the top-left corner, y grows downwards

mod flip;
mod rotation;

pub use flip::flip_vertical;
pub use rotation::{apply_rotation, compute_rotated_bounds, InterpolationFilter};
