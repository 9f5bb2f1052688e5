/// Number of the tick currently being dispatched.
#[derive(Default)]
pub struct Frame(pub u64);
