//! JSON configuration for arenas and robots.
//!
//! Raw structs are deserialized first and only turned into validated domain
//! types (`Arena`, `BodyShape`, `Attachment`) when a simulation is built.
//! Missing fields fall back to the values in [`defaults`](super::defaults).

use serde::{Deserialize, Serialize};

use crate::error::{KinematicsError, Result};
use crate::geometry::{Arena, Vec2};

use super::attachment::{Attachment, AttachmentShape};
use super::defaults;
use super::motion::speed_cap;
use super::shape::{BodyShape, Wheel};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationConfig {
    #[serde(default)]
    pub arena: ArenaConfig,
    #[serde(default)]
    pub robots: Vec<RobotConfig>,
}

impl SimulationConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        parse_json(json)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArenaConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: defaults::ARENA_WIDTH,
            height: defaults::ARENA_HEIGHT,
        }
    }
}

impl ArenaConfig {
    pub fn build(&self) -> Result<Arena> {
        Arena::new(self.width, self.height)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WheelConfig {
    pub width: f32,
    pub diameter: f32,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            width: defaults::WHEEL_WIDTH,
            diameter: defaults::WHEEL_DIAMETER,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RobotConfig {
    pub width: f32,
    pub length: f32,
    pub wheel: WheelConfig,
    /// `None` places the robot in the middle of the arena
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center: Option<Vec2>,
    pub heading: f32,
    pub speed: f32,
    pub angular_speed: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<AttachmentConfig>,
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            width: defaults::BODY_WIDTH,
            length: defaults::BODY_LENGTH,
            wheel: WheelConfig::default(),
            center: None,
            heading: defaults::HEADING,
            speed: defaults::SPEED,
            angular_speed: defaults::ANGULAR_SPEED,
            attachment: None,
        }
    }
}

impl RobotConfig {
    /// Defaults for a robot carrying a turret
    pub fn armed() -> Self {
        Self {
            wheel: WheelConfig {
                width: defaults::ARMED_WHEEL_WIDTH,
                diameter: defaults::ARMED_WHEEL_DIAMETER,
            },
            heading: defaults::ARMED_HEADING,
            attachment: Some(AttachmentConfig::default()),
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        parse_json(json)
    }

    pub fn shape(&self) -> Result<BodyShape> {
        BodyShape::new(
            self.width,
            self.length,
            Wheel {
                width: self.wheel.width,
                diameter: self.wheel.diameter,
            },
        )
    }

    pub fn build_attachment(&self) -> Result<Option<Attachment>> {
        self.attachment.as_ref().map(AttachmentConfig::build).transpose()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttachmentConfig {
    pub width: f32,
    pub length: f32,
    pub gun_length: f32,
    pub gun_width: f32,
    /// Mount point in the body frame
    pub offset: Vec2,
    pub heading: f32,
    pub angular_speed: f32,
    pub clamped: bool,
}

impl Default for AttachmentConfig {
    fn default() -> Self {
        Self {
            width: defaults::TURRET_WIDTH,
            length: defaults::TURRET_LENGTH,
            gun_length: defaults::GUN_LENGTH,
            gun_width: defaults::GUN_WIDTH,
            offset: Vec2::zero(),
            heading: 0.0,
            angular_speed: defaults::TURRET_ANGULAR_SPEED,
            clamped: false,
        }
    }
}

impl AttachmentConfig {
    pub fn build(&self) -> Result<Attachment> {
        let shape = AttachmentShape::new(self.width, self.length, self.gun_length, self.gun_width)?;
        let angular_speed = speed_cap(self.angular_speed)?;
        Ok(Attachment::new(shape, self.offset, self.heading, angular_speed).with_clamped(self.clamped))
    }
}

fn parse_json<T: for<'de> Deserialize<'de>>(json: &str) -> Result<T> {
    serde_json::from_str(json).map_err(|e| {
        log::warn!("rejected config: {}", e);
        KinematicsError::Config(e.to_string())
    })
}
