pub mod component;
pub mod event;
pub mod resource;
pub mod system;
mod simulation;
mod physicsconfig;

pub use simulation::{
    build_simulation,
    Simulation,
    SimulationConfig,
};
pub use physicsconfig::PhysicsConfig;
