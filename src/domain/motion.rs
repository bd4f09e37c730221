//! Discrete motion commands.
//!
//! Directions are rotations of the heading vector, counter-clockwise positive:
//! `Forward = 0`, `Left = 90°`, `Back = 180°`, `Right = 270°`. The numeric
//! codes follow the declaration order and are what the JS side sends.

use std::f32::consts::FRAC_PI_2;

use crate::error::{KinematicsError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    Forward = 0,
    Left = 1,
    Back = 2,
    Right = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Forward, Direction::Left, Direction::Back, Direction::Right];

    /// Angle added to the heading to get the travel angle
    #[inline]
    pub fn offset(self) -> f32 {
        (self as u8) as f32 * FRAC_PI_2
    }

    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            0 => Ok(Direction::Forward),
            1 => Ok(Direction::Left),
            2 => Ok(Direction::Back),
            3 => Ok(Direction::Right),
            _ => Err(KinematicsError::UnknownCommand(code)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Rotation {
    /// Decreases the heading
    Clockwise = 0,
    /// Increases the heading
    CounterClockwise = 1,
}

impl Rotation {
    /// `-1` for clockwise, `+1` for counter-clockwise
    #[inline]
    pub fn sign(self) -> f32 {
        ((self as u8) as f32) * 2.0 - 1.0
    }

    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            0 => Ok(Rotation::Clockwise),
            1 => Ok(Rotation::CounterClockwise),
            _ => Err(KinematicsError::UnknownCommand(code)),
        }
    }
}

/// Per-step cap for `speed` and `angular_speed`.
///
/// Negative values floor to zero; NaN and infinities are rejected.
pub fn speed_cap(value: f32) -> Result<f32> {
    if value.is_finite() {
        Ok(value.max(0.0))
    } else {
        Err(KinematicsError::InvalidSpeed(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_offsets_are_quarter_turns_in_declaration_order() {
        assert_eq!(Direction::Forward.offset(), 0.0);
        assert!((Direction::Left.offset() - FRAC_PI_2).abs() < 1e-6);
        assert!((Direction::Back.offset() - std::f32::consts::PI).abs() < 1e-6);
        assert!((Direction::Right.offset() - 3.0 * FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn rotation_sign_and_codes() {
        assert_eq!(Rotation::Clockwise.sign(), -1.0);
        assert_eq!(Rotation::CounterClockwise.sign(), 1.0);
        assert_eq!(Rotation::from_code(1), Ok(Rotation::CounterClockwise));
        assert_eq!(Direction::from_code(4), Err(KinematicsError::UnknownCommand(4)));
    }

    #[test]
    fn speed_cap_floors_negatives_and_rejects_non_finite() {
        assert_eq!(speed_cap(4.5), Ok(4.5));
        assert_eq!(speed_cap(-3.0), Ok(0.0));
        assert_eq!(speed_cap(f32::INFINITY), Err(KinematicsError::InvalidSpeed(f32::INFINITY)));
        assert!(speed_cap(f32::NAN).is_err());
    }
}
