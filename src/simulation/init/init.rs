use crate::domain::SimulationConfig;
use crate::error::Result;
use crate::geometry::Arena;

use super::SimulationCore;

pub(super) fn create_simulation_core(arena: Arena) -> SimulationCore {
    SimulationCore {
        arena,
        bodies: Vec::new(),
        next_id: 1,
    }
}

pub(super) fn create_from_config(config: &SimulationConfig) -> Result<SimulationCore> {
    let arena = config.arena.build()?;
    let mut core = create_simulation_core(arena);
    for robot in config.robots.iter() {
        core.spawn(robot)?;
    }
    Ok(core)
}
