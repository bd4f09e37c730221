use crate::domain::{speed_cap, Attachment, BodyShape, Direction, RobotConfig, Rotation, Wheel};
use crate::error::{KinematicsError, Result};
use crate::geometry::{Arena, Pose, Vec2};
use crate::systems::clamping::{max_safe_angle, max_safe_distance};
use crate::systems::footprint::{Armed, Footprint, FootprintSource};

use super::report::{GoReport, StepReport};

/// Overshoot allowed when checking an explicit placement
const PLACEMENT_TOLERANCE: f32 = 1e-3;

/// Rigid Body - a wheeled robot, optionally carrying a turret
///
/// Every mutating call asks the clamping engine for the safe step first and
/// ends by recomputing the cached footprint, so the footprint always matches
/// the current pose.
#[derive(Clone, Debug)]
pub struct RigidBody {
    /// Unique ID within a simulation (0 until spawned)
    pub(crate) id: u32,

    // === Motion State ===
    pose: Pose,
    /// Max distance per move (pixels)
    speed: f32,
    /// Max angle per rotate (radians)
    angular_speed: f32,

    // === Shape ===
    shape: BodyShape,
    attachment: Option<Attachment>,
    arena: Arena,

    /// World-space boundary points for the current pose
    footprint: Footprint,
}

impl RigidBody {
    /// Create a body without checking that it fits the arena.
    /// Non-finite speed caps become zero.
    pub fn new(shape: BodyShape, arena: Arena, pose: Pose, speed: f32, angular_speed: f32) -> Self {
        let mut body = Self {
            id: 0,
            pose,
            speed: speed_cap(speed).unwrap_or(0.0),
            angular_speed: speed_cap(angular_speed).unwrap_or(0.0),
            shape,
            attachment: None,
            arena,
            footprint: Footprint::default(),
        };
        body.recompute();
        body
    }

    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachment = Some(attachment);
        self.recompute();
        self
    }

    /// Build a body from config; a missing center means the arena center.
    ///
    /// Fails with `OutOfBounds` if the footprint does not fit the arena.
    pub fn from_config(config: &RobotConfig, arena: Arena) -> Result<Self> {
        let shape = config.shape()?;
        let speed = speed_cap(config.speed)?;
        let angular_speed = speed_cap(config.angular_speed)?;
        let center = config.center.unwrap_or_else(|| arena.center());
        let mut body = Self::new(shape, arena, Pose::new(center, config.heading), speed, angular_speed);
        if let Some(attachment) = config.build_attachment()? {
            body = body.with_attachment(attachment);
        }
        body.ensure_contained(&body.footprint, &arena)?;
        Ok(body)
    }

    // === Accessors ===

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn center(&self) -> Vec2 {
        self.pose.center
    }

    pub fn heading(&self) -> f32 {
        self.pose.heading
    }

    pub fn shape(&self) -> &BodyShape {
        &self.shape
    }

    pub fn width(&self) -> f32 {
        self.shape.width()
    }

    pub fn length(&self) -> f32 {
        self.shape.length()
    }

    pub fn wheel(&self) -> Wheel {
        self.shape.wheel()
    }

    pub fn area(&self) -> Arena {
        self.arena
    }

    pub fn attachment(&self) -> Option<&Attachment> {
        self.attachment.as_ref()
    }

    pub fn footprint(&self) -> &Footprint {
        &self.footprint
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn angular_speed(&self) -> f32 {
        self.angular_speed
    }

    // === Settings ===

    /// Negative speeds are floored to zero; non-finite ones are rejected
    pub fn set_speed(&mut self, speed: f32) -> Result<()> {
        self.speed = speed_cap(speed)?;
        Ok(())
    }

    pub fn set_angular_speed(&mut self, angular_speed: f32) -> Result<()> {
        self.angular_speed = speed_cap(angular_speed)?;
        Ok(())
    }

    pub fn set_attachment_angular_speed(&mut self, angular_speed: f32) -> Result<()> {
        let attachment = self.attachment.as_mut().ok_or(KinematicsError::NoAttachment)?;
        attachment.set_angular_speed(angular_speed)
    }

    /// Replace the arena.
    ///
    /// A degenerate size fails with `InvalidArena`, an arena the current
    /// footprint does not fit fails with `OutOfBounds`; either way nothing
    /// changes.
    pub fn set_area(&mut self, width: f32, height: f32) -> Result<()> {
        let arena = Arena::new(width, height)?;
        self.fits_in(&arena)?;
        self.arena = arena;
        Ok(())
    }

    /// Does the current footprint fit inside `arena`?
    pub fn fits_in(&self, arena: &Arena) -> Result<()> {
        self.ensure_contained(&self.footprint, arena)
    }

    /// Teleport the body. Refused if the footprint would leave the arena.
    pub fn set_center(&mut self, x: f32, y: f32) -> Result<()> {
        let candidate = Pose::new(Vec2::new(x, y), self.pose.heading);
        let footprint = self.footprint_at(&candidate);
        self.ensure_contained(&footprint, &self.arena)?;
        self.pose = candidate;
        self.footprint = footprint;
        Ok(())
    }

    pub fn center_in_area(&mut self) -> Result<()> {
        let c = self.arena.center();
        self.set_center(c.x, c.y)
    }

    // === Motion ===

    /// The `move` command: translate toward `direction` by at most `speed`
    pub fn translate(&mut self, direction: Direction) -> StepReport {
        let safe = max_safe_distance(
            self.footprint.points(),
            &self.arena,
            self.pose.heading,
            direction,
            self.speed,
        );
        let report = StepReport::new(self.speed, safe);

        let travel = Vec2::from_angle(self.pose.heading + direction.offset());
        self.pose.center = self.pose.center + travel * report.applied;
        self.recompute();

        if report.is_truncated() {
            log::debug!(
                "body {}: move {:?} truncated to {} of {}",
                self.id, direction, report.applied, report.requested
            );
        }
        report
    }

    /// Turn the whole body by at most `angular_speed`
    pub fn rotate(&mut self, rotation: Rotation) -> StepReport {
        let safe = max_safe_angle(
            self.footprint.points(),
            self.pose.center,
            &self.arena,
            rotation,
            self.angular_speed,
        );
        let report = StepReport::new(self.angular_speed, safe);

        self.pose.heading += rotation.sign() * report.applied;
        self.recompute();

        if report.is_truncated() {
            log::debug!(
                "body {}: rotate {:?} truncated to {} of {}",
                self.id, rotation, report.applied, report.requested
            );
        }
        report
    }

    /// Move, then rotate against the already moved footprint
    pub fn go(&mut self, direction: Direction, rotation: Rotation) -> GoReport {
        let translation = self.translate(direction);
        let rotation = self.rotate(rotation);
        GoReport { translation, rotation }
    }

    /// Turn only the attachment.
    ///
    /// Unclamped unless the attachment is marked clamped, in which case the
    /// gun points are limited by the arena while turning about the mount.
    pub fn rotate_attachment(&mut self, rotation: Rotation) -> Result<StepReport> {
        let pose = self.pose;
        let arena = self.arena;
        let attachment = self.attachment.as_mut().ok_or(KinematicsError::NoAttachment)?;

        let cap = attachment.angular_speed();
        let safe = if attachment.is_clamped() {
            let gun = attachment.gun_outline().map(|p| pose.to_world(p));
            let pivot = pose.to_world(attachment.center_offset());
            max_safe_angle(&gun, pivot, &arena, rotation, cap)
        } else {
            cap
        };
        let report = StepReport::new(cap, safe);
        attachment.turn(rotation, report.applied);

        self.recompute();
        Ok(report)
    }

    // === Footprint ===

    fn footprint_at(&self, pose: &Pose) -> Footprint {
        match &self.attachment {
            Some(attachment) => Armed { hull: &self.shape, attachment }.compute_footprint(pose),
            None => self.shape.compute_footprint(pose),
        }
    }

    fn recompute(&mut self) {
        self.footprint = self.footprint_at(&self.pose);
    }

    fn ensure_contained(&self, footprint: &Footprint, arena: &Arena) -> Result<()> {
        match footprint.first_outside(arena, PLACEMENT_TOLERANCE) {
            Some(p) => {
                log::debug!("body {}: placement refused, ({}, {}) outside arena", self.id, p.x, p.y);
                Err(KinematicsError::OutOfBounds { x: p.x, y: p.y })
            }
            None => Ok(()),
        }
    }
}
