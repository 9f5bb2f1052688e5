use std::marker::PhantomData;

use specs::prelude::*;

use crate::physics::{
    Integrator,
    JumpPhysics,
};
use crate::simulation::{
    component::Position,
    resource::TickLength,
};

/// Integrates every jumper once per tick with strategy `S`.
pub struct StepPhysics<S> {
    strategy: PhantomData<S>,
}

impl<S> StepPhysics<S> {
    pub fn new() -> StepPhysics<S> {
        StepPhysics { strategy: PhantomData }
    }
}

impl<'a, S: Integrator> System<'a> for StepPhysics<S> {
    type SystemData = (
        Read<'a, TickLength>,
        WriteStorage<'a, Position>,
        WriteStorage<'a, JumpPhysics<S>>,
    );

    fn run(&mut self, data: Self::SystemData) {
        let (tick, mut pos, mut physics) = data;
        let delta = tick.delta();

        for (pos, physics) in (&mut pos, &mut physics).join() {
            S::integrate(physics, pos, delta);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use specs::WorldExt;
    use std::time::Duration;
    use nalgebra::Point2;
    use crate::physics::{
        FixedStep,
        ScaledStep,
    };

    fn build_world<S: Integrator>(tick: Duration) -> World {
        let mut world = World::new();
        world.register::<Position>();
        world.register::<JumpPhysics<S>>();
        world.insert(TickLength(tick));
        world
    }

    #[test]
    fn test_fixed_step_system() {
        let mut world = build_world::<FixedStep>(Duration::from_millis(16));
        let start = Point2::new(0.0f32, 0.0);
        let mut physics = JumpPhysics::<FixedStep>::new(2.0, &start);
        physics.try_jump(&start, 10.0);

        let entity = world.create_entity()
            .with(Position(start))
            .with(physics)
            .build();

        StepPhysics::<FixedStep>::new().run_now(&world);

        let pos = world.read_storage::<Position>();
        assert_eq!(pos.get(entity).unwrap().0, Point2::new(2.0, 10.0));
    }

    #[test]
    fn test_scaled_step_system_uses_tick_length() {
        let mut world = build_world::<ScaledStep>(Duration::from_millis(500));
        let start = Point2::new(0.0f32, 5.0);
        let mut physics = JumpPhysics::<ScaledStep>::new(0.0, &start);
        physics.try_jump(&start, 10.0);

        let entity = world.create_entity()
            .with(Position(start))
            .with(physics)
            .build();

        StepPhysics::<ScaledStep>::new().run_now(&world);

        let pos = world.read_storage::<Position>();
        let physics = world.read_storage::<JumpPhysics<ScaledStep>>();
        assert_eq!(pos.get(entity).unwrap().0, Point2::new(0.0, 7.5));
        assert_eq!(physics.get(entity).unwrap().velocity_y(), 5.0);
    }

    #[test]
    fn test_entities_are_independent() {
        let mut world = build_world::<FixedStep>(Duration::from_millis(16));
        let ground = Point2::new(0.0f32, 0.0);

        let mut airborne = JumpPhysics::<FixedStep>::new(0.0, &ground);
        airborne.try_jump(&ground, 10.0);

        let jumper = world.create_entity()
            .with(Position(ground))
            .with(airborne)
            .build();
        let idle = world.create_entity()
            .with(Position(ground))
            .with(JumpPhysics::<FixedStep>::new(0.0, &ground))
            .build();

        StepPhysics::<FixedStep>::new().run_now(&world);

        let pos = world.read_storage::<Position>();
        assert_eq!(pos.get(jumper).unwrap().0.y, 10.0);
        assert_eq!(pos.get(idle).unwrap().0.y, 0.0);
    }
}
