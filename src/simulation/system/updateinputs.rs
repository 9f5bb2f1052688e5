use specs::prelude::*;

use crate::simulation::{
    event::{
        Event,
        InputEvent,
    },
    resource::{
        EventQueue,
        InputMap,
    },
};

pub struct UpdateInputs;

impl<'a> System<'a> for UpdateInputs {
    type SystemData = (
        Read<'a, EventQueue>,
        Write<'a, InputMap>,
    );

    fn run(&mut self, data: Self::SystemData) {
        let (events, mut inputs) = data;

        for event in &*events {
            match event {
                Event::InputEvent(InputEvent::KeyUp(data)) => inputs.set(*data, false),
                Event::InputEvent(InputEvent::KeyDown(data)) => inputs.set(*data, true),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use specs::WorldExt;
    use crate::input::InputTypes;

    #[test]
    fn test_key_events_toggle_jump() {
        let mut world = World::new();
        world.insert(InputMap::default());
        world.insert::<EventQueue>(vec![
            Event::InputEvent(InputEvent::KeyDown(InputTypes::Jump)),
        ]);

        UpdateInputs.run_now(&world);
        assert!(world.fetch::<InputMap>().jump);

        *world.fetch_mut::<EventQueue>() = vec![
            Event::InputEvent(InputEvent::KeyDown(InputTypes::Jump)),
            Event::InputEvent(InputEvent::KeyUp(InputTypes::Jump)),
        ];

        UpdateInputs.run_now(&world);
        assert!(!world.fetch::<InputMap>().jump);
    }
}
