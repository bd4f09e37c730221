//! Error types for the kinematics engine.
//!
//! A step that is shortened by the arena boundary is not an error; it is
//! reported through [`StepStatus::Truncated`](crate::rigid_body::StepStatus).

use thiserror::Error;

/// Errors returned by arena construction, placement and simulation lookups.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KinematicsError {
    /// Arena dimensions are zero, negative or not finite.
    #[error("invalid arena {width}x{height}: dimensions must be finite and positive")]
    InvalidArena {
        width: f32,
        height: f32,
    },

    /// Body or attachment dimensions are unusable.
    #[error("invalid shape: {0}")]
    InvalidShape(String),

    /// Speed caps must be finite.
    #[error("speed cap must be finite, got {0}")]
    InvalidSpeed(f32),

    /// A placement would put a footprint point outside the arena.
    #[error("footprint point ({x}, {y}) lies outside the arena")]
    OutOfBounds {
        x: f32,
        y: f32,
    },

    /// Attachment operation on a body without an attachment.
    #[error("body has no attachment")]
    NoAttachment,

    #[error("unknown body id {0}")]
    UnknownBody(u32),

    /// Direction or rotation code outside the exported range.
    #[error("unknown command code {0}")]
    UnknownCommand(u8),

    /// Configuration JSON could not be parsed.
    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, KinematicsError>;
