use std::marker::PhantomData;
use std::sync::mpsc::Sender;

use specs::prelude::*;

use crate::physics::{
    Integrator,
    JumpPhysics,
};
use crate::simulation::{
    component::Position,
    event::{
        Update,
        UpdateEvent,
        PositionUpdate,
    },
    resource::Frame,
};

pub struct UpdateSender<S> {
    sender: Vec<Sender<Update>>,
    strategy: PhantomData<S>,
}

impl<S> UpdateSender<S> {
    pub fn new(sender: Vec<Sender<Update>>) -> UpdateSender<S> {
        UpdateSender { sender, strategy: PhantomData }
    }
}

impl<'a, S: Integrator> System<'a> for UpdateSender<S> {
    type SystemData = (
        Entities<'a>,
        Read<'a, Frame>,
        ReadStorage<'a, Position>,
        ReadStorage<'a, JumpPhysics<S>>,
    );

    fn run(&mut self, data: Self::SystemData) {
        let (entities, frame, pos, physics) = data;

        for (entity, pos, physics) in (&entities, &pos, &physics).join() {
            let event = Update {
                time: std::time::Instant::now(),
                frame: frame.0,
                event: UpdateEvent::PositionUpdate(
                    PositionUpdate {
                        entity: entity.id(),
                        position: pos.0,
                        jumping: physics.is_jumping(),
                    },
                ),
            };

            for sender in &self.sender {
                if let Err(err) = sender.send(event.clone()) {
                    log::error!("failed to send update event: {}", err);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use specs::WorldExt;
    use std::sync::mpsc::channel;
    use crate::physics::FixedStep;

    #[test]
    fn test_sends_position_and_jump_state() {
        let mut world = World::new();
        world.register::<Position>();
        world.register::<JumpPhysics<FixedStep>>();
        world.insert(Frame(7));

        let position = nalgebra::Point2::new(3.0f32, 9.0);
        let mut physics = JumpPhysics::<FixedStep>::new(0.0, &position);
        physics.try_jump(&position, 1.0);
        world.create_entity()
            .with(Position(position))
            .with(physics)
            .build();

        let (tx, rx) = channel();
        UpdateSender::<FixedStep>::new(vec![tx]).run_now(&world);

        let update = rx.try_recv().unwrap();
        assert_eq!(update.frame, 7);
        match update.event {
            UpdateEvent::PositionUpdate(update) => {
                assert_eq!(update.position, position);
                assert!(update.jumping);
            },
        }
        assert!(rx.try_recv().is_err());
    }
}
