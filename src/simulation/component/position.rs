use specs::prelude::*;

use crate::physics::Positionable;

#[derive(Clone, Debug, PartialEq)]
pub struct Position(pub nalgebra::Point2<f32>);

impl Component for Position {
    type Storage = VecStorage<Self>;
}

impl Positionable for Position {
    fn x(&self) -> f32 {
        self.0.x()
    }

    fn set_x(&mut self, x: f32) {
        self.0.set_x(x);
    }

    fn y(&self) -> f32 {
        self.0.y()
    }

    fn set_y(&mut self, y: f32) {
        self.0.set_y(y);
    }
}
