use std::f32::consts::{FRAC_PI_2, PI};

use crate::domain::Rotation;
use crate::geometry::{Arena, Vec2};

use super::EPSILON;

/// The four arena walls, each with the reference angle that turns the wall's
/// outward normal onto -x.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Wall {
    Left,
    Bottom,
    Right,
    Top,
}

impl Wall {
    const ALL: [Wall; 4] = [Wall::Left, Wall::Bottom, Wall::Right, Wall::Top];

    #[inline]
    fn alpha(self) -> f32 {
        (self as u8) as f32 * FRAC_PI_2
    }

    /// Perpendicular distance from `center` to this wall
    #[inline]
    fn distance(self, center: Vec2, arena: &Arena) -> f32 {
        match self {
            Wall::Left => center.x.abs(),
            Wall::Bottom => center.y.abs(),
            Wall::Right => (center.x - arena.max_x()).abs(),
            Wall::Top => (center.y - arena.max_y()).abs(),
        }
    }
}

/// Largest angle the points can turn around `center` in the given rotation
/// without crossing any wall, capped at `angular_cap`.
///
/// Each point traces a circle. For a wall closer than the circle's radius the
/// crossing angles follow from the circle/line intersection: in the wall's
/// frame the crossings sit at `π ± acos(d / r)`, so the margin from the
/// point's current angle `φ` is `π - acos(d / r) - sign * φ`. Walls out of
/// reach and points on the center impose nothing.
pub fn max_safe_angle(points: &[Vec2], center: Vec2, arena: &Arena, rotation: Rotation, angular_cap: f32) -> f32 {
    let sign = rotation.sign();
    let mut angle = angular_cap;

    for p in points {
        let rel = *p - center;
        let radius = rel.length();
        if radius <= EPSILON {
            log::trace!("skipping footprint point on the rotation center ({}, {})", p.x, p.y);
            continue;
        }

        for wall in Wall::ALL {
            let d = wall.distance(center, arena);
            if d >= radius {
                continue;
            }
            let local = rel.rotate(-wall.alpha());
            let phi = local.y.atan2(local.x);
            let d_phi = (d / radius).clamp(-1.0, 1.0).acos();
            let margin = PI - d_phi - sign * phi;
            if margin < angle {
                angle = margin;
            }
        }
    }
    angle
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena() -> Arena {
        Arena::new(1080.0, 720.0).unwrap()
    }

    #[test]
    fn turning_into_the_left_wall_is_blocked() {
        let center = Vec2::new(0.0, 360.0);
        let below = [Vec2::new(0.0, 310.0)];
        let toward = max_safe_angle(&below, center, &arena(), Rotation::Clockwise, 0.1);
        let away = max_safe_angle(&below, center, &arena(), Rotation::CounterClockwise, 0.1);
        assert!(toward < 0.1);
        assert!(toward.abs() < 1e-4);
        assert!((away - 0.1).abs() < 1e-6);
    }

    #[test]
    fn far_from_walls_gets_full_cap() {
        let center = Vec2::new(540.0, 360.0);
        let pts = [Vec2::new(600.0, 405.0), Vec2::new(480.0, 315.0)];
        assert_eq!(max_safe_angle(&pts, center, &arena(), Rotation::Clockwise, 0.1), 0.1);
    }

    #[test]
    fn margin_matches_circle_intersection() {
        // Point 100 right of center, top wall 50 above center: it reaches the
        // wall once 100 * sin(a) = 50, i.e. after 30° counter-clockwise.
        let center = Vec2::new(540.0, 669.0);
        let pts = [Vec2::new(640.0, 669.0)];
        let a = max_safe_angle(&pts, center, &arena(), Rotation::CounterClockwise, 3.0);
        assert!((a - PI / 6.0).abs() < 1e-4);
    }

    #[test]
    fn each_wall_constrains_its_own_side() {
        // Right wall 20 px from center, point 40 px below center.
        let center = Vec2::new(1059.0, 360.0);
        let pts = [Vec2::new(1059.0, 320.0)];
        // Counter-clockwise swings the point toward +x first.
        let ccw = max_safe_angle(&pts, center, &arena(), Rotation::CounterClockwise, 3.0);
        let expected = FRAC_PI_2 - (20.0f32 / 40.0).acos();
        assert!((ccw - expected).abs() < 1e-4);
        let cw = max_safe_angle(&pts, center, &arena(), Rotation::Clockwise, 3.0);
        assert!(cw > ccw);
    }

    #[test]
    fn point_on_center_is_ignored() {
        let center = Vec2::new(0.0, 0.0);
        let a = max_safe_angle(&[center], center, &arena(), Rotation::Clockwise, 0.25);
        assert_eq!(a, 0.25);
    }
}
