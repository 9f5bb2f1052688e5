use std::marker::PhantomData;

use nalgebra::{
    Point2,
    Vector2,
};

use super::{
    body::Positionable,
    strategy::{
        FixedStep,
        ScaledStep,
    },
};

use crate::simulation::PhysicsConfig;

pub const DEFAULT_GRAVITY: f32 = -10.0;

/// Jump state of a single entity.
///
/// The entity position lives outside; every operation that needs it takes a
/// `Positionable`. The integration strategy `S` is fixed by the type, so each
/// instance exposes exactly one `step`.
#[derive(Clone, Debug, PartialEq)]
pub struct JumpPhysics<S> {
    move_speed: f32,
    velocity: Vector2<f32>,
    acceleration: Vector2<f32>,
    start_position: Point2<f32>,
    jumping: bool,
    strategy: PhantomData<S>,
}

impl<S> JumpPhysics<S> {
    pub fn new<B>(move_speed: f32, body: &B) -> JumpPhysics<S>
        where B: Positionable + ?Sized
    {
        JumpPhysics::with_gravity(move_speed, DEFAULT_GRAVITY, body)
    }

    pub fn with_gravity<B>(move_speed: f32, gravity: f32, body: &B) -> JumpPhysics<S>
        where B: Positionable + ?Sized
    {
        JumpPhysics {
            move_speed,
            velocity: Vector2::new(move_speed, 0.0),
            acceleration: Vector2::new(0.0, gravity),
            start_position: body.position(),
            jumping: false,
            strategy: PhantomData,
        }
    }

    pub fn from_config<B>(config: &PhysicsConfig, body: &B) -> JumpPhysics<S>
        where B: Positionable + ?Sized
    {
        JumpPhysics::with_gravity(config.move_speed, config.gravity, body)
    }

    /// Starts a jump from the body's current position.
    ///
    /// Ignored while already airborne. Returns whether a jump was started.
    pub fn try_jump<B>(&mut self, body: &B, initial_y_velocity: f32) -> bool
        where B: Positionable + ?Sized
    {
        if self.jumping {
            return false;
        }

        self.set_start_position(body.x(), body.y());
        self.set_velocity_y(initial_y_velocity);
        self.jumping = true;

        log::debug!(
            "Jump started at ({}, {}) with y-velocity {}",
            body.x(),
            body.y(),
            initial_y_velocity
        );

        true
    }

    pub fn is_jumping(&self) -> bool {
        self.jumping
    }

    pub fn move_speed(&self) -> f32 {
        self.move_speed
    }

    pub fn start_position(&self) -> Point2<f32> {
        self.start_position
    }

    pub fn set_start_position(&mut self, x: f32, y: f32) {
        self.start_position = Point2::new(x, y);
    }

    /// Puts the body back on the recorded start height. The x coordinate is
    /// left alone.
    pub fn reset_position<B>(&self, body: &mut B)
        where B: Positionable + ?Sized
    {
        body.set_y(self.start_position.y);
    }

    pub fn velocity(&self) -> Vector2<f32> {
        self.velocity
    }

    pub fn velocity_x(&self) -> f32 {
        self.velocity.x
    }

    pub fn velocity_y(&self) -> f32 {
        self.velocity.y
    }

    pub fn set_velocity(&mut self, velocity: Vector2<f32>) {
        self.velocity = velocity;
    }

    pub fn set_velocity_xy(&mut self, x: f32, y: f32) {
        self.velocity = Vector2::new(x, y);
    }

    pub fn set_velocity_x(&mut self, x: f32) {
        self.velocity.x = x;
    }

    pub fn set_velocity_y(&mut self, y: f32) {
        self.velocity.y = y;
    }

    pub fn add_velocity_x(&mut self, x: f32) {
        self.velocity.x += x;
    }

    pub fn add_velocity_y(&mut self, y: f32) {
        self.velocity.y += y;
    }

    pub fn acceleration(&self) -> Vector2<f32> {
        self.acceleration
    }

    pub fn acceleration_x(&self) -> f32 {
        self.acceleration.x
    }

    pub fn acceleration_y(&self) -> f32 {
        self.acceleration.y
    }

    pub fn set_acceleration(&mut self, acceleration: Vector2<f32>) {
        self.acceleration = acceleration;
    }

    pub fn set_acceleration_xy(&mut self, x: f32, y: f32) {
        self.acceleration = Vector2::new(x, y);
    }

    pub fn set_acceleration_x(&mut self, x: f32) {
        self.acceleration.x = x;
    }

    pub fn set_acceleration_y(&mut self, y: f32) {
        self.acceleration.y = y;
    }

    pub fn add_acceleration_x(&mut self, x: f32) {
        self.acceleration.x += x;
    }

    pub fn add_acceleration_y(&mut self, y: f32) {
        self.acceleration.y += y;
    }

    fn land<B>(&mut self, body: &B)
        where B: Positionable + ?Sized
    {
        self.jumping = false;
        log::debug!("Landed at ({}, {})", body.x(), body.y());
    }
}

impl JumpPhysics<FixedStep> {
    /// Advances one frame. Lands on `y = 0` regardless of where the jump
    /// started.
    pub fn step<B>(&mut self, body: &mut B)
        where B: Positionable + ?Sized
    {
        body.set_x(body.x() + self.velocity.x);

        if !self.jumping {
            return;
        }

        if body.y() >= 0.0 {
            body.set_y(body.y() + self.velocity.y);
            self.add_velocity_y(self.acceleration.y);
        } else {
            body.set_y(0.0);
            self.land(&*body);
        }
    }
}

impl JumpPhysics<ScaledStep> {
    /// Advances one frame of `delta` length. Lands on the jump's start height.
    ///
    /// The whole x coordinate is scaled by `delta`, not only the increment.
    pub fn step<B>(&mut self, body: &mut B, delta: f32)
        where B: Positionable + ?Sized
    {
        body.set_x((body.x() + self.velocity.x) * delta);

        if !self.jumping {
            return;
        }

        if body.y() >= self.start_position.y {
            body.set_y((body.y() + self.velocity.y) * delta);
            self.add_velocity_y(self.acceleration.y * delta);
        } else {
            self.reset_position(body);
            self.land(&*body);
        }
    }
}
