use crate::error::{KinematicsError, Result};
use crate::geometry::Vec2;

/// Wheel rectangle dimensions
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wheel {
    pub width: f32,
    pub diameter: f32,
}

/// Hull rectangle plus the wheel size. Fixed for the body's lifetime.
///
/// The hull's length runs along the heading (local +x), its width across it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyShape {
    width: f32,
    length: f32,
    wheel: Wheel,
}

impl BodyShape {
    pub fn new(width: f32, length: f32, wheel: Wheel) -> Result<Self> {
        ensure_positive("body width", width)?;
        ensure_positive("body length", length)?;
        ensure_positive("wheel width", wheel.width)?;
        ensure_positive("wheel diameter", wheel.diameter)?;
        Ok(Self { width, length, wheel })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn length(&self) -> f32 {
        self.length
    }

    pub fn wheel(&self) -> Wheel {
        self.wheel
    }

    /// Half-size of the rectangle that must stay inside the arena.
    ///
    /// The width is inflated by three wheel widths so the wheels sticking
    /// out of the hull are always covered.
    pub fn bound_half_extents(&self) -> Vec2 {
        Vec2::new(self.length / 2.0, (self.width + 3.0 * self.wheel.width) / 2.0)
    }

    /// Wheel centers in the body frame: front-left, rear-left, rear-right, front-right
    pub fn wheel_centers(&self) -> [Vec2; 4] {
        let x = (self.length - self.wheel.diameter) / 2.0;
        let y = self.width / 2.0 + self.wheel.width;
        [
            Vec2::new(x, y),
            Vec2::new(-x, y),
            Vec2::new(-x, -y),
            Vec2::new(x, -y),
        ]
    }
}

pub(crate) fn ensure_positive(what: &str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(KinematicsError::InvalidShape(format!("{} must be positive, got {}", what, value)))
    }
}
