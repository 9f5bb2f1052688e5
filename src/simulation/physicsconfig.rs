use crate::physics::{
    StepMode,
    DEFAULT_GRAVITY,
};

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PhysicsConfig {
    pub gravity: f32,
    pub step_mode: StepMode,
    pub move_speed: f32,
    pub jump_velocity: f32,
}

impl Default for PhysicsConfig {
    fn default() -> PhysicsConfig {
        PhysicsConfig {
            gravity: DEFAULT_GRAVITY,
            step_mode: StepMode::Fixed,
            move_speed: 1.0,
            jump_velocity: 30.0,
        }
    }
}
