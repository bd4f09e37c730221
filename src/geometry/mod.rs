//! Geometry value types: vectors, poses and the arena bound.

mod arena;
mod vec2;

pub use arena::Arena;
pub use vec2::Vec2;

/// Position and heading of a body.
///
/// The heading is never normalised; it wraps implicitly through `sin`/`cos`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pose {
    pub center: Vec2,
    /// Radians, counter-clockwise from +x
    pub heading: f32,
}

impl Pose {
    pub fn new(center: Vec2, heading: f32) -> Self {
        Self { center, heading }
    }

    /// Map a point from the body frame into world coordinates
    #[inline]
    pub fn to_world(&self, local: Vec2) -> Vec2 {
        Vec2::local_to_world(self.center, self.heading, local)
    }
}
