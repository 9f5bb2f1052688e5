pub mod input;
pub mod physics;
pub mod simulation;
pub mod util;

use std::sync::mpsc::channel;

use failure::Error;

use input::InputTypes;
use simulation::{
    build_simulation,
    event::{
        Event,
        InputEvent,
        Update,
        UpdateEvent,
    },
};
use util::config::Config;
use util::error::ConfigError;
use util::logging;

pub struct Bootstrap {
    pub args: Vec<String>,
    pub config: Option<String>,
}

/// Runs a headless simulation: every jumper is sent one jump at the first
/// frame and the resulting trajectories are logged.
pub fn run(bootstrap: Bootstrap) -> Result<Vec<Update>, Error> {
    let config = initialize(bootstrap)?;

    let (update_tx, update_rx) = channel();
    let mut simulation = build_simulation(&config.simulation, update_tx)?;

    simulation.run(config.simulation.frames, |frame| match frame {
        0 => vec![Event::InputEvent(InputEvent::KeyDown(InputTypes::Jump))],
        1 => vec![Event::InputEvent(InputEvent::KeyUp(InputTypes::Jump))],
        _ => Vec::new(),
    });

    let updates: Vec<Update> = update_rx.try_iter().collect();
    for update in &updates {
        let UpdateEvent::PositionUpdate(ref position) = update.event;
        log::info!(
            "[{}] entity {}: ({:.3}, {:.3}){}",
            update.frame,
            position.entity,
            position.position.x,
            position.position.y,
            if position.jumping { " airborne" } else { "" }
        );
    }

    Ok(updates)
}

fn initialize(bootstrap: Bootstrap) -> Result<Config, Error> {
    let config = get_configuration(bootstrap)?;

    logging::configure(&config.logging, "spritejump")?;

    Ok(config)
}

fn get_configuration(bootstrap: Bootstrap) -> Result<Config, Error> {
    match bootstrap.config {
        Some(path) => Ok(Config::from_file(&path)?),
        None => Err(ConfigError::MissingPath.into()),
    }
}
