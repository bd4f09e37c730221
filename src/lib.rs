//! Rover Arena Engine - bounded kinematics for wheeled robots in WASM
//!
//! A robot moves and turns in discrete steps inside a rectangular arena.
//! Every step is shortened just enough that no footprint point leaves the
//! arena, so the robot can never be driven through a wall.
//!
//! Architecture:
//! - geometry/    - Vectors, poses, the arena bound
//! - domain/      - Shapes, attachments, motion enums, config
//! - systems/     - Footprints, clamping engine, rigid body
//! - simulation/  - Orchestration and the JS facade

pub mod geometry;
pub mod domain;
pub mod systems;
pub mod simulation;
pub mod error;

// Short paths for the most used systems
pub use systems::clamping;
pub use systems::footprint;
pub use systems::rigid_body;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"Rover arena engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::{Direction, RobotConfig, Rotation, SimulationConfig};
pub use error::KinematicsError;
pub use geometry::{Arena, Pose, Vec2};
pub use rigid_body::{RigidBody, StepReport, StepStatus};
pub use simulation::{Command, CommandReport, Simulation, SimulationCore};

// Export command codes for JS
#[wasm_bindgen]
pub fn dir_forward() -> u8 { Direction::Forward as u8 }
#[wasm_bindgen]
pub fn dir_left() -> u8 { Direction::Left as u8 }
#[wasm_bindgen]
pub fn dir_back() -> u8 { Direction::Back as u8 }
#[wasm_bindgen]
pub fn dir_right() -> u8 { Direction::Right as u8 }
#[wasm_bindgen]
pub fn rot_clockwise() -> u8 { Rotation::Clockwise as u8 }
#[wasm_bindgen]
pub fn rot_counter_clockwise() -> u8 { Rotation::CounterClockwise as u8 }
