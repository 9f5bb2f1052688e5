#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum InputTypes {
    Jump,
}
