use crate::input::InputTypes;

#[derive(Default)]
pub struct InputMap {
    pub jump: bool,
}

impl InputMap {
    pub fn set(&mut self, input: InputTypes, value: bool) {
        log::debug!("Input state [{:?}]: {}", input, value);
        let field = match input {
            InputTypes::Jump => &mut self.jump,
        };
        *field = value;
    }
}
