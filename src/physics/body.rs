/// Anything the jump physics can move around.
///
/// The physics never owns the position; it reads and writes it through this
/// trait once per step.
pub trait Positionable {
    fn x(&self) -> f32;
    fn set_x(&mut self, x: f32);
    fn y(&self) -> f32;
    fn set_y(&mut self, y: f32);

    fn position(&self) -> nalgebra::Point2<f32> {
        nalgebra::Point2::new(self.x(), self.y())
    }
}

impl Positionable for nalgebra::Point2<f32> {
    fn x(&self) -> f32 {
        self.coords.x
    }

    fn set_x(&mut self, x: f32) {
        self.coords.x = x;
    }

    fn y(&self) -> f32 {
        self.coords.y
    }

    fn set_y(&mut self, y: f32) {
        self.coords.y = y;
    }
}
