//! RigidBody - a robot that moves and turns as a unit
//!
//! The body stores its shape in local coordinates (relative to its center)
//! and keeps a world-space footprint for the current pose. Motion is clamped
//! so that footprint never leaves the arena.

mod body;
mod report;

pub use body::RigidBody;
pub use report::{GoReport, StepReport, StepStatus};

#[cfg(test)]
mod tests;
