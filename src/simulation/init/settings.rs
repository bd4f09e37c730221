use crate::error::Result;
use crate::geometry::Arena;

use super::SimulationCore;

/// Every body must fit the new arena before anything is committed
pub(super) fn set_arena(sim: &mut SimulationCore, width: f32, height: f32) -> Result<()> {
    let arena = Arena::new(width, height)?;
    for body in sim.bodies.iter() {
        body.fits_in(&arena)?;
    }

    for body in sim.bodies.iter_mut() {
        body.set_area(width, height)?;
    }
    sim.arena = arena;
    Ok(())
}
