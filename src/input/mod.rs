mod inputtypes;

pub use inputtypes::InputTypes;
