//! Turret mounted on a body.
//!
//! The attachment keeps its own heading relative to the hull. Its outlines are
//! produced in the body frame (attachment frame rotated by the attachment
//! heading, then shifted by the mount offset); the body pose is applied by
//! whoever needs world coordinates.

use crate::geometry::Vec2;
use crate::error::Result;

use super::motion::{speed_cap, Rotation};
use super::shape::ensure_positive;

/// Tower hexagon and gun rectangle sizes, in the attachment frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AttachmentShape {
    width: f32,
    length: f32,
    gun_length: f32,
    gun_width: f32,
}

impl AttachmentShape {
    pub fn new(width: f32, length: f32, gun_length: f32, gun_width: f32) -> Result<Self> {
        ensure_positive("turret width", width)?;
        ensure_positive("turret length", length)?;
        ensure_positive("gun length", gun_length)?;
        ensure_positive("gun width", gun_width)?;
        Ok(Self { width, length, gun_length, gun_width })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn length(&self) -> f32 {
        self.length
    }

    pub fn gun_length(&self) -> f32 {
        self.gun_length
    }

    pub fn gun_width(&self) -> f32 {
        self.gun_width
    }

    /// Hexagon pointed along local +x, `width` across x and `length` across y
    pub fn tower_local(&self) -> [Vec2; 6] {
        let (w, l) = (self.width, self.length);
        [
            Vec2::new(w / 2.0, 0.0),
            Vec2::new(w / 4.0, l / 2.0),
            Vec2::new(-w / 4.0, l / 2.0),
            Vec2::new(-w / 2.0, 0.0),
            Vec2::new(-w / 4.0, -l / 2.0),
            Vec2::new(w / 4.0, -l / 2.0),
        ]
    }

    /// Barrel from the turret center out to the muzzle along local +x
    pub fn gun_local(&self) -> [Vec2; 4] {
        let half = self.gun_width / 2.0;
        [
            Vec2::new(0.0, half),
            Vec2::new(self.gun_length, half),
            Vec2::new(self.gun_length, -half),
            Vec2::new(0.0, -half),
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Attachment {
    shape: AttachmentShape,
    /// Mount point in the body frame
    center_offset: Vec2,
    /// Relative to the hull heading
    heading: f32,
    angular_speed: f32,
    /// Limit self-rotation by the arena boundary
    clamped: bool,
}

impl Attachment {
    pub fn new(shape: AttachmentShape, center_offset: Vec2, heading: f32, angular_speed: f32) -> Self {
        Self {
            shape,
            center_offset,
            heading,
            angular_speed: speed_cap(angular_speed).unwrap_or(0.0),
            clamped: false,
        }
    }

    pub fn with_clamped(mut self, clamped: bool) -> Self {
        self.clamped = clamped;
        self
    }

    pub fn shape(&self) -> &AttachmentShape {
        &self.shape
    }

    pub fn center_offset(&self) -> Vec2 {
        self.center_offset
    }

    pub fn heading(&self) -> f32 {
        self.heading
    }

    pub fn angular_speed(&self) -> f32 {
        self.angular_speed
    }

    pub fn set_angular_speed(&mut self, angular_speed: f32) -> Result<()> {
        self.angular_speed = speed_cap(angular_speed)?;
        Ok(())
    }

    pub fn is_clamped(&self) -> bool {
        self.clamped
    }

    /// Turn by `angle` radians in the given direction
    pub fn turn(&mut self, rotation: Rotation, angle: f32) {
        self.heading += rotation.sign() * angle;
    }

    /// Tower hexagon in the body frame
    pub fn tower_outline(&self) -> [Vec2; 6] {
        self.shape.tower_local().map(|p| self.to_body(p))
    }

    /// Gun rectangle in the body frame
    pub fn gun_outline(&self) -> [Vec2; 4] {
        self.shape.gun_local().map(|p| self.to_body(p))
    }

    #[inline]
    fn to_body(&self, local: Vec2) -> Vec2 {
        Vec2::local_to_world(self.center_offset, self.heading, local)
    }
}
