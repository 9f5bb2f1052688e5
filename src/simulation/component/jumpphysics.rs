use specs::prelude::*;

use crate::physics::{
    Integrator,
    JumpPhysics,
};

impl<S: Integrator> Component for JumpPhysics<S> {
    type Storage = VecStorage<Self>;
}
