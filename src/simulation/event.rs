use crate::input::InputTypes;

#[derive(Clone, Debug)]
pub enum Event {
    InputEvent(InputEvent),
}

#[derive(Clone, Debug)]
pub enum InputEvent {
    KeyUp(InputTypes),
    KeyDown(InputTypes),
}

#[derive(Clone, Debug)]
pub struct Update {
    pub time: std::time::Instant,
    pub frame: u64,
    pub event: UpdateEvent,
}

#[derive(Clone, Debug)]
pub enum UpdateEvent {
    PositionUpdate(PositionUpdate),
}

#[derive(Clone, Debug)]
pub struct PositionUpdate {
    pub entity: u32,
    pub position: nalgebra::Point2<f32>,
    pub jumping: bool,
}
