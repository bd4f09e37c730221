//! Footprint providers: the world-space points that must stay inside the arena.

use crate::domain::{Attachment, BodyShape};
use crate::geometry::{Arena, Pose, Vec2};

/// Ordered world-space boundary points of a body.
///
/// The order is polygon order so the same points can be drawn as a closed
/// outline; the clamping math treats them as an unordered set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Footprint {
    points: Vec<Vec2>,
}

impl Footprint {
    pub fn new(points: Vec<Vec2>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn extend(&mut self, points: impl IntoIterator<Item = Vec2>) {
        self.points.extend(points);
    }

    /// First point outside `arena` (beyond `tolerance`), if any
    pub fn first_outside(&self, arena: &Arena, tolerance: f32) -> Option<Vec2> {
        self.points.iter().copied().find(|p| !arena.contains(*p, tolerance))
    }

    /// Flat `[x0, y0, x1, y1, ...]` layout for the JS side
    pub fn to_flat(&self) -> Vec<f32> {
        self.points.iter().flat_map(|p| [p.x, p.y]).collect()
    }
}

/// Anything that can produce a footprint for a pose
pub trait FootprintSource {
    fn compute_footprint(&self, pose: &Pose) -> Footprint;
}

/// Plain hull: the four corners of the wheel-inflated rectangle
impl FootprintSource for BodyShape {
    fn compute_footprint(&self, pose: &Pose) -> Footprint {
        let half = self.bound_half_extents();
        let corners = [
            Vec2::new(half.x, half.y),
            Vec2::new(-half.x, half.y),
            Vec2::new(-half.x, -half.y),
            Vec2::new(half.x, -half.y),
        ];

        let mut points = Vec::with_capacity(8);
        points.extend(corners.iter().map(|c| pose.to_world(*c)));
        Footprint::new(points)
    }
}

/// Hull plus a mounted attachment
pub struct Armed<'a> {
    pub hull: &'a BodyShape,
    pub attachment: &'a Attachment,
}

impl FootprintSource for Armed<'_> {
    fn compute_footprint(&self, pose: &Pose) -> Footprint {
        let mut footprint = self.hull.compute_footprint(pose);
        footprint.extend(self.attachment.gun_outline().iter().map(|p| pose.to_world(*p)));
        footprint
    }
}
