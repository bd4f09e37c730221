//! Simulation - one arena and the robots inside it
//!
//! The core only orchestrates: bodies do their own clamping, commands are
//! applied in the order they arrive, and render extraction only reads.
//!
//! Bodies are kept in spawn order; a batch passed to `tick` is applied in
//! list order, one command at a time.

use crate::domain::{RobotConfig, SimulationConfig};
use crate::error::Result;
use crate::geometry::Arena;
use crate::rigid_body::RigidBody;

#[path = "commands/commands.rs"]
mod commands;
#[path = "rigid/rigid.rs"]
mod rigid;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "render/outline.rs"]
pub mod outline;
mod facade;

pub use commands::{Command, CommandReport};
pub use facade::Simulation;

/// The simulation state
pub struct SimulationCore {
    arena: Arena,
    bodies: Vec<RigidBody>,
    next_id: u32,
}

impl SimulationCore {
    /// Create an empty simulation
    pub fn new(arena: Arena) -> Self {
        init::create_simulation_core(arena)
    }

    /// Build the arena and spawn every configured robot, stopping at the first failure
    pub fn from_config(config: &SimulationConfig) -> Result<Self> {
        init::create_from_config(config)
    }

    pub fn from_config_json(json: &str) -> Result<Self> {
        let config = SimulationConfig::from_json(json)?;
        Self::from_config(&config)
    }

    pub fn arena(&self) -> Arena {
        self.arena
    }

    /// Resize the arena for the simulation and every body in it
    pub fn set_arena(&mut self, width: f32, height: f32) -> Result<()> {
        settings::set_arena(self, width, height)
    }

    /// Spawn a robot; returns its id (ids start at 1)
    pub fn spawn(&mut self, config: &RobotConfig) -> Result<u32> {
        rigid::spawn_body(self, config)
    }

    /// Remove a robot by ID
    pub fn remove(&mut self, id: u32) -> bool {
        rigid::remove_body(self, id)
    }

    /// Remove all robots and restart ids
    pub fn clear(&mut self) {
        rigid::clear_bodies(self)
    }

    pub fn body(&self, id: u32) -> Option<&RigidBody> {
        self.bodies.iter().find(|b| b.id() == id)
    }

    pub fn body_mut(&mut self, id: u32) -> Option<&mut RigidBody> {
        self.bodies.iter_mut().find(|b| b.id() == id)
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Ids in spawn order
    pub fn ids(&self) -> Vec<u32> {
        self.bodies.iter().map(|b| b.id()).collect()
    }

    /// Apply one command to one body
    pub fn apply(&mut self, id: u32, command: Command) -> Result<CommandReport> {
        commands::apply(self, id, command)
    }

    /// Apply a batch in list order
    pub fn tick(&mut self, batch: &[(u32, Command)]) -> Vec<Result<CommandReport>> {
        batch.iter().map(|&(id, command)| self.apply(id, command)).collect()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
