//! Named startup values.
//!
//! The engine itself never reads these; they only seed `Default` impls of the
//! configuration structs.

use std::f32::consts::FRAC_PI_2;

pub const ARENA_WIDTH: f32 = 1080.0;
pub const ARENA_HEIGHT: f32 = 720.0;

pub const BODY_WIDTH: f32 = 60.0;
pub const BODY_LENGTH: f32 = 120.0;

pub const WHEEL_WIDTH: f32 = 10.0;
pub const WHEEL_DIAMETER: f32 = 40.0;

/// Armed robots ride on wider wheels
pub const ARMED_WHEEL_WIDTH: f32 = 20.0;
pub const ARMED_WHEEL_DIAMETER: f32 = 80.0;

/// Plain robots start facing up
pub const HEADING: f32 = FRAC_PI_2;
pub const ARMED_HEADING: f32 = 0.0;

/// Pixels per command
pub const SPEED: f32 = 10.0;
/// Radians per command
pub const ANGULAR_SPEED: f32 = 0.1;

pub const TURRET_WIDTH: f32 = 40.0;
pub const TURRET_LENGTH: f32 = 60.0;
pub const GUN_LENGTH: f32 = 60.0;
pub const GUN_WIDTH: f32 = 10.0;
pub const TURRET_ANGULAR_SPEED: f32 = 0.2;
