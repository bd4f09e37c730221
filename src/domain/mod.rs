//! Domain types: body shapes, turrets, motion commands and configuration.

pub mod attachment;
pub mod config;
pub mod defaults;
pub mod motion;
pub mod shape;

pub use attachment::{Attachment, AttachmentShape};
pub use config::{ArenaConfig, AttachmentConfig, RobotConfig, SimulationConfig, WheelConfig};
pub use motion::{speed_cap, Direction, Rotation};
pub use shape::{BodyShape, Wheel};
