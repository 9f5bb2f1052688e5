mod jump;
mod jumpphysics;
mod position;

pub use jump::Jump;
pub use position::Position;
