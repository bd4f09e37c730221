use crate::domain::RobotConfig;
use crate::error::Result;
use crate::rigid_body::RigidBody;

use super::SimulationCore;

/// Place a new body. Refused if its footprint does not fit the arena.
pub(super) fn spawn_body(sim: &mut SimulationCore, config: &RobotConfig) -> Result<u32> {
    let mut body = RigidBody::from_config(config, sim.arena)?;

    let id = sim.next_id;
    sim.next_id = sim.next_id.saturating_add(1);
    body.id = id;

    log::debug!("spawned body {} at ({}, {})", id, body.center().x, body.center().y);
    sim.bodies.push(body);
    Ok(id)
}

pub(super) fn remove_body(sim: &mut SimulationCore, id: u32) -> bool {
    match sim.bodies.iter().position(|b| b.id() == id) {
        Some(idx) => {
            // Keep spawn order for batch processing.
            sim.bodies.remove(idx);
            true
        }
        None => false,
    }
}

pub(super) fn clear_bodies(sim: &mut SimulationCore) {
    sim.bodies.clear();
    sim.next_id = 1;
}
