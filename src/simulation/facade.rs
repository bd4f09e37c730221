use js_sys::Float32Array;
use wasm_bindgen::prelude::*;

use crate::domain::{Direction, RobotConfig, Rotation};
use crate::error::KinematicsError;
use crate::geometry::Arena;

use super::outline;
use super::{Command, SimulationCore};

fn to_js(err: KinematicsError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn direction(code: u8) -> Result<Direction, JsValue> {
    Direction::from_code(code).map_err(to_js)
}

fn rotation(code: u8) -> Result<Rotation, JsValue> {
    Rotation::from_code(code).map_err(to_js)
}

fn to_array(values: &[f32]) -> Float32Array {
    Float32Array::from(values)
}

#[wasm_bindgen]
pub struct Simulation {
    core: SimulationCore,
}

#[wasm_bindgen]
impl Simulation {
    /// Create an empty simulation with an arena of the given size
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Result<Simulation, JsValue> {
        let arena = Arena::new(width, height).map_err(to_js)?;
        Ok(Self {
            core: SimulationCore::new(arena),
        })
    }

    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(json: String) -> Result<Simulation, JsValue> {
        let core = SimulationCore::from_config_json(&json).map_err(to_js)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f32 { self.core.arena().width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f32 { self.core.arena().height() }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize { self.core.body_count() }

    pub fn set_arena(&mut self, width: f32, height: f32) -> Result<(), JsValue> {
        self.core.set_arena(width, height).map_err(to_js)
    }

    // === BODY API ===

    /// Spawn a robot from a JSON `RobotConfig`; returns its id
    pub fn spawn(&mut self, json: String) -> Result<u32, JsValue> {
        let config = RobotConfig::from_json(&json).map_err(to_js)?;
        self.core.spawn(&config).map_err(to_js)
    }

    pub fn remove(&mut self, id: u32) -> bool {
        self.core.remove(id)
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }

    pub fn ids(&self) -> Vec<u32> {
        self.core.ids()
    }

    // === COMMANDS ===
    // Each returns true when the arena shortened the step.

    #[wasm_bindgen(js_name = moveBody)]
    pub fn move_body(&mut self, id: u32, direction_code: u8) -> Result<bool, JsValue> {
        self.run(id, Command::Move(direction(direction_code)?))
    }

    #[wasm_bindgen(js_name = rotateBody)]
    pub fn rotate_body(&mut self, id: u32, rotation_code: u8) -> Result<bool, JsValue> {
        self.run(id, Command::Rotate(rotation(rotation_code)?))
    }

    #[wasm_bindgen(js_name = goBody)]
    pub fn go_body(&mut self, id: u32, direction_code: u8, rotation_code: u8) -> Result<bool, JsValue> {
        self.run(id, Command::Go(direction(direction_code)?, rotation(rotation_code)?))
    }

    #[wasm_bindgen(js_name = rotateAttachment)]
    pub fn rotate_attachment(&mut self, id: u32, rotation_code: u8) -> Result<bool, JsValue> {
        self.run(id, Command::RotateAttachment(rotation(rotation_code)?))
    }

    // === SETTINGS ===

    pub fn set_speed(&mut self, id: u32, speed: f32) -> Result<(), JsValue> {
        let body = self.core.body_mut(id).ok_or_else(|| to_js(KinematicsError::UnknownBody(id)))?;
        body.set_speed(speed).map_err(to_js)
    }

    pub fn set_angular_speed(&mut self, id: u32, angular_speed: f32) -> Result<(), JsValue> {
        let body = self.core.body_mut(id).ok_or_else(|| to_js(KinematicsError::UnknownBody(id)))?;
        body.set_angular_speed(angular_speed).map_err(to_js)
    }

    pub fn set_attachment_angular_speed(&mut self, id: u32, angular_speed: f32) -> Result<(), JsValue> {
        let body = self.core.body_mut(id).ok_or_else(|| to_js(KinematicsError::UnknownBody(id)))?;
        body.set_attachment_angular_speed(angular_speed).map_err(to_js)
    }

    pub fn set_center(&mut self, id: u32, x: f32, y: f32) -> Result<(), JsValue> {
        let body = self.core.body_mut(id).ok_or_else(|| to_js(KinematicsError::UnknownBody(id)))?;
        body.set_center(x, y).map_err(to_js)
    }

    // === POSE ===

    pub fn center_x(&self, id: u32) -> Option<f32> {
        self.core.body(id).map(|b| b.center().x)
    }

    pub fn center_y(&self, id: u32) -> Option<f32> {
        self.core.body(id).map(|b| b.center().y)
    }

    pub fn heading(&self, id: u32) -> Option<f32> {
        self.core.body(id).map(|b| b.heading())
    }

    pub fn attachment_heading(&self, id: u32) -> Option<f32> {
        self.core.body(id).and_then(|b| b.attachment()).map(|a| a.heading())
    }

    // === RENDER EXTRACTION ===
    // Flat [x0, y0, x1, y1, ...] in arena coordinates.

    pub fn footprint(&self, id: u32) -> Option<Float32Array> {
        self.core.body(id).map(|b| to_array(&b.footprint().to_flat()))
    }

    pub fn hull_outline(&self, id: u32) -> Option<Float32Array> {
        self.core.body(id).map(|b| to_array(&outline::flatten(&outline::hull(b))))
    }

    /// All four wheels, 8 floats per wheel
    pub fn wheel_outlines(&self, id: u32) -> Option<Float32Array> {
        self.core.body(id).map(|b| {
            let flat: Vec<f32> = outline::wheels(b)
                .iter()
                .flat_map(|w| outline::flatten(w))
                .collect();
            to_array(&flat)
        })
    }

    pub fn tower_outline(&self, id: u32) -> Option<Float32Array> {
        let tower = outline::tower(self.core.body(id)?)?;
        Some(to_array(&outline::flatten(&tower)))
    }

    pub fn gun_outline(&self, id: u32) -> Option<Float32Array> {
        let gun = outline::gun(self.core.body(id)?)?;
        Some(to_array(&outline::flatten(&gun)))
    }
}

impl Simulation {
    fn run(&mut self, id: u32, command: Command) -> Result<bool, JsValue> {
        let report = self.core.apply(id, command).map_err(to_js)?;
        Ok(report.is_truncated())
    }
}
