use crate::domain::{Direction, Rotation};
use crate::error::{KinematicsError, Result};
use crate::rigid_body::StepReport;

use super::SimulationCore;

/// Decoded control input for one body
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Rotate(Rotation),
    /// Move, then rotate
    Go(Direction, Rotation),
    RotateAttachment(Rotation),
}

/// What a command actually did
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CommandReport {
    pub translation: Option<StepReport>,
    pub rotation: Option<StepReport>,
}

impl CommandReport {
    /// Did the arena shorten any part of the command?
    pub fn is_truncated(&self) -> bool {
        self.translation.map_or(false, |r| r.is_truncated()) || self.rotation.map_or(false, |r| r.is_truncated())
    }
}

pub(super) fn apply(sim: &mut SimulationCore, id: u32, command: Command) -> Result<CommandReport> {
    let body = sim.body_mut(id).ok_or(KinematicsError::UnknownBody(id))?;

    let report = match command {
        Command::Move(direction) => CommandReport {
            translation: Some(body.translate(direction)),
            rotation: None,
        },
        Command::Rotate(rotation) => CommandReport {
            translation: None,
            rotation: Some(body.rotate(rotation)),
        },
        Command::Go(direction, rotation) => {
            let go = body.go(direction, rotation);
            CommandReport {
                translation: Some(go.translation),
                rotation: Some(go.rotation),
            }
        }
        Command::RotateAttachment(rotation) => CommandReport {
            translation: None,
            rotation: Some(body.rotate_attachment(rotation)?),
        },
    };
    Ok(report)
}
