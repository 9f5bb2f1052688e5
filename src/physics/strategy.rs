use super::{
    body::Positionable,
    jump::JumpPhysics,
};

/// Integration strategy, picked once in the configuration.
#[derive(Copy, Clone, Debug, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepMode {
    Fixed,
    Scaled,
}

impl Default for StepMode {
    fn default() -> StepMode {
        StepMode::Fixed
    }
}

/// Advances a `JumpPhysics` by one frame.
///
/// Implemented by the strategy marker types so that generic callers (the ECS
/// systems) can drive either variant. `FixedStep` ignores `delta`.
pub trait Integrator: Copy + Default + Send + Sync + 'static {
    const MODE: StepMode;

    fn integrate<B>(physics: &mut JumpPhysics<Self>, body: &mut B, delta: f32)
        where B: Positionable + ?Sized;
}

/// One implicit time unit per step; the ground is at `y = 0`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FixedStep;

/// Increments scaled by the elapsed time; the ground is the jump's start height.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ScaledStep;

impl Integrator for FixedStep {
    const MODE: StepMode = StepMode::Fixed;

    fn integrate<B>(physics: &mut JumpPhysics<Self>, body: &mut B, _delta: f32)
        where B: Positionable + ?Sized
    {
        physics.step(body);
    }
}

impl Integrator for ScaledStep {
    const MODE: StepMode = StepMode::Scaled;

    fn integrate<B>(physics: &mut JumpPhysics<Self>, body: &mut B, delta: f32)
        where B: Positionable + ?Sized
    {
        physics.step(body, delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_integrator_ignores_delta() {
        let mut body = nalgebra::Point2::new(0.0f32, 0.0);
        let mut physics = JumpPhysics::<FixedStep>::new(1.0, &body);
        physics.try_jump(&body, 10.0);

        FixedStep::integrate(&mut physics, &mut body, 0.25);

        assert_eq!(body, nalgebra::Point2::new(1.0, 10.0));
        assert_eq!(physics.velocity_y(), 0.0);
    }

    #[test]
    fn test_scaled_integrator_uses_delta() {
        let mut body = nalgebra::Point2::new(0.0f32, 0.0);
        let mut physics = JumpPhysics::<ScaledStep>::new(0.0, &body);
        physics.try_jump(&body, 10.0);

        ScaledStep::integrate(&mut physics, &mut body, 0.5);

        assert_eq!(body.coords.y, 5.0);
        assert_eq!(physics.velocity_y(), 5.0);
    }

    #[test]
    fn test_step_mode_names() {
        #[derive(serde::Deserialize)]
        struct Wrapper {
            mode: StepMode,
        }

        let fixed: Wrapper = toml::from_str("mode = \"fixed\"").unwrap();
        let scaled: Wrapper = toml::from_str("mode = \"scaled\"").unwrap();

        assert_eq!(fixed.mode, StepMode::Fixed);
        assert_eq!(scaled.mode, StepMode::Scaled);
        assert_eq!(StepMode::default(), FixedStep::MODE);
    }
}
