//! Systems that act on bodies: footprint providers, the clamping engine and
//! the rigid body itself.

pub mod clamping;
pub mod footprint;
pub mod rigid_body;
