//! World-space outlines for a renderer.
//!
//! Polygons come out in drawing order, in arena coordinates (+y up). Any
//! vertical flip for a screen belongs to the caller.

use crate::geometry::{Pose, Vec2};
use crate::rigid_body::RigidBody;

/// Hull rectangle, without the wheels
pub fn hull(body: &RigidBody) -> [Vec2; 4] {
    rect(body.pose(), Vec2::zero(), body.length() / 2.0, body.width() / 2.0)
}

/// The four wheel rectangles, same order as `BodyShape::wheel_centers`
pub fn wheels(body: &RigidBody) -> [[Vec2; 4]; 4] {
    let wheel = body.wheel();
    let pose = body.pose();
    body.shape()
        .wheel_centers()
        .map(|c| rect(pose, c, wheel.diameter / 2.0, wheel.width / 2.0))
}

pub fn tower(body: &RigidBody) -> Option<[Vec2; 6]> {
    let pose = body.pose();
    body.attachment().map(|a| a.tower_outline().map(|p| pose.to_world(p)))
}

pub fn gun(body: &RigidBody) -> Option<[Vec2; 4]> {
    let pose = body.pose();
    body.attachment().map(|a| a.gun_outline().map(|p| pose.to_world(p)))
}

/// Flat `[x0, y0, x1, y1, ...]` for the JS side
pub fn flatten(points: &[Vec2]) -> Vec<f32> {
    points.iter().flat_map(|p| [p.x, p.y]).collect()
}

fn rect(pose: Pose, center: Vec2, half_x: f32, half_y: f32) -> [Vec2; 4] {
    [
        Vec2::new(half_x, half_y),
        Vec2::new(-half_x, half_y),
        Vec2::new(-half_x, -half_y),
        Vec2::new(half_x, -half_y),
    ]
    .map(|corner| pose.to_world(center + corner))
}
