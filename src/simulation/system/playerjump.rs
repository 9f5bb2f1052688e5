use std::marker::PhantomData;

use specs::prelude::*;

use crate::physics::{
    Integrator,
    JumpPhysics,
};
use crate::simulation::{
    component::{
        Jump,
        Position,
    },
    resource::InputMap,
};

/// Starts a jump on every grounded jumper while the jump input is held.
pub struct PlayerJump<S> {
    strategy: PhantomData<S>,
}

impl<S> PlayerJump<S> {
    pub fn new() -> PlayerJump<S> {
        PlayerJump { strategy: PhantomData }
    }
}

impl<'a, S: Integrator> System<'a> for PlayerJump<S> {
    type SystemData = (
        Read<'a, InputMap>,
        ReadStorage<'a, Jump>,
        ReadStorage<'a, Position>,
        WriteStorage<'a, JumpPhysics<S>>,
    );

    fn run(&mut self, data: Self::SystemData) {
        let (input, jump, pos, mut physics) = data;

        if !input.jump {
            return;
        }

        for (jump, pos, physics) in (&jump, &pos, &mut physics).join() {
            physics.try_jump(pos, jump.force);
        }
    }
}
