use specs::prelude::*;

/// Marks an entity as able to jump; `force` is the initial upward velocity.
pub struct Jump {
    pub force: f32,
}

impl Component for Jump {
    type Storage = VecStorage<Self>;
}
