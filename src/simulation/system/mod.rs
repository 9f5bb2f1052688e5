mod physics;
mod playerjump;
mod updateinputs;
mod updatesender;

pub use physics::StepPhysics;
pub use playerjump::PlayerJump;
pub use updateinputs::UpdateInputs;
pub use updatesender::UpdateSender;
