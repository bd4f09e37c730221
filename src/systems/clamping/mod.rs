//! Clamping engine - largest safe translation or rotation for a footprint
//!
//! Pure functions over world-space points and the arena; the rigid body calls
//! them with its cached footprint before touching its pose.

mod rotation;
mod translation;

pub use rotation::max_safe_angle;
pub use translation::max_safe_distance;

/// Trig components and radii at or below this are treated as zero
pub const EPSILON: f32 = 1e-6;
