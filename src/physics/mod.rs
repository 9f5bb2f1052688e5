mod body;
mod jump;
mod strategy;

pub use body::Positionable;
pub use jump::{
    JumpPhysics,
    DEFAULT_GRAVITY,
};
pub use strategy::{
    FixedStep,
    Integrator,
    ScaledStep,
    StepMode,
};
