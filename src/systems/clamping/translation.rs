use crate::domain::Direction;
use crate::geometry::{Arena, Vec2};

use super::EPSILON;

/// Arena corner that lies ahead along `angle`: the x border and y border a
/// point moving that way would hit.
#[inline]
fn far_border(arena: &Arena, sin: f32, cos: f32) -> Vec2 {
    let x = if cos >= 0.0 { arena.max_x() } else { 0.0 };
    let y = if sin >= 0.0 { arena.max_y() } else { 0.0 };
    Vec2::new(x, y)
}

/// Largest distance every point can travel along `heading + direction` without
/// leaving the arena, capped at `speed_cap`.
///
/// Each point is a ray; the closest wall hit over all rays bounds the whole
/// body. An axis whose direction component is below `EPSILON` imposes no
/// constraint. The result can be negative when a point already sits past a
/// border it is moving towards; callers must not apply a negative step.
pub fn max_safe_distance(points: &[Vec2], arena: &Arena, heading: f32, direction: Direction, speed_cap: f32) -> f32 {
    let angle = heading + direction.offset();
    let (sin, cos) = angle.sin_cos();
    let border = far_border(arena, sin, cos);

    let mut distance = speed_cap;
    for p in points {
        if cos.abs() > EPSILON {
            distance = distance.min((border.x - p.x) / cos);
        }
        if sin.abs() > EPSILON {
            distance = distance.min((border.y - p.y) / sin);
        }
    }
    distance
}
