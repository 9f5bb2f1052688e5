use std::sync::mpsc::Sender;
use std::time::Duration;

use failure::Error;
use specs::{
    Dispatcher,
    DispatcherBuilder,
    World,
    WorldExt,
    world::Builder,
};

use super::event::{
    Event,
    Update,
};
use super::component::{
    Jump,
    Position,
};
use super::resource::{
    EventQueue,
    Frame,
    InputMap,
    TickLength,
};
use super::system::{
    PlayerJump,
    StepPhysics,
    UpdateInputs,
    UpdateSender,
};
use super::PhysicsConfig;

use crate::util::error::ConfigError;
use crate::physics::{
    FixedStep,
    Integrator,
    JumpPhysics,
    ScaledStep,
    StepMode,
};

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SimulationConfig {
    pub tick_rate: u64,
    pub frames: u64,
    pub entities: usize,
    pub spacing: f32,
    pub base_height: f32,
    pub physics: PhysicsConfig,
}

impl Default for SimulationConfig {
    fn default() -> SimulationConfig {
        SimulationConfig {
            tick_rate: 60,
            frames: 120,
            entities: 1,
            spacing: 32.0,
            base_height: 0.0,
            physics: PhysicsConfig::default(),
        }
    }
}

impl SimulationConfig {
    /// Length of one tick. Rates of zero or above one tick per nanosecond
    /// are rejected.
    pub fn tick_length(&self) -> Result<Duration, ConfigError> {
        match 1_000_000_000u64.checked_div(self.tick_rate) {
            Some(nanos) if nanos > 0 => Ok(Duration::from_nanos(nanos)),
            _ => Err(ConfigError::InvalidTickRate),
        }
    }
}

pub struct Simulation<'a, 'b> {
    dispatcher: Dispatcher<'a, 'b>,
    world: World,
    step_mode: StepMode,
}

impl<'a, 'b> Simulation<'a, 'b> {
    pub fn new(
        mut dispatcher: Dispatcher<'a, 'b>,
        mut world: World,
        step_mode: StepMode,
    ) -> Simulation<'a, 'b> {
        dispatcher.setup(&mut world);
        Simulation { dispatcher, world, step_mode }
    }

    /// Dispatches one frame with `events` as this frame's input.
    pub fn tick(&mut self, events: Vec<Event>) {
        *self.world.write_resource::<EventQueue>() = events;

        self.dispatcher.dispatch(&self.world);
        self.world.maintain();

        self.world.write_resource::<Frame>().0 += 1;
    }

    /// Runs `frames` ticks, asking `events` for each frame's input.
    pub fn run<F>(&mut self, frames: u64, mut events: F)
        where F: FnMut(u64) -> Vec<Event>
    {
        log::info!("Running {} frames ({:?} step)", frames, self.step_mode);

        for _ in 0..frames {
            let frame = self.frame();
            self.tick(events(frame));
        }

        log::info!("Simulation stopped at frame {}", self.frame());
    }

    pub fn frame(&self) -> u64 {
        self.world.read_resource::<Frame>().0
    }

    pub fn step_mode(&self) -> StepMode {
        self.step_mode
    }

    pub fn world(&self) -> &World {
        &self.world
    }
}

pub fn build_simulation<'a, 'b>(
    config: &SimulationConfig,
    update_tx: Sender<Update>,
) -> Result<Simulation<'a, 'b>, Error> {
    match config.physics.step_mode {
        StepMode::Fixed => build::<FixedStep>(config, update_tx),
        StepMode::Scaled => build::<ScaledStep>(config, update_tx),
    }
}

fn build<'a, 'b, S: Integrator>(
    config: &SimulationConfig,
    update_tx: Sender<Update>,
) -> Result<Simulation<'a, 'b>, Error> {
    let tick_length = config.tick_length()?;
    let mut world = World::new();

    world.register::<Jump>();
    world.register::<Position>();
    world.register::<JumpPhysics<S>>();

    world.insert(EventQueue::new());
    world.insert(Frame::default());
    world.insert(InputMap::default());
    world.insert(TickLength(tick_length));

    for index in 0..config.entities {
        let position = nalgebra::Point2::new(
            index as f32 * config.spacing,
            config.base_height,
        );

        world.create_entity()
            .with(Position(position))
            .with(Jump { force: config.physics.jump_velocity })
            .with(JumpPhysics::<S>::from_config(&config.physics, &position))
            .build();
    }

    let dispatcher = DispatcherBuilder::new()
        .with(UpdateInputs, "update_inputs", &[])
        .with(PlayerJump::<S>::new(), "player_jump", &["update_inputs"])
        .with(StepPhysics::<S>::new(), "step_physics", &["player_jump"])
        .with(UpdateSender::<S>::new(vec![update_tx]), "update_sender", &["step_physics"])
        .build();

    Ok(Simulation::new(dispatcher, world, S::MODE))
}
