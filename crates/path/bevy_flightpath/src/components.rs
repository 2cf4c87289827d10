use bevy::prelude::*;
use flightpath_core::PathAnimation;

/// Drives this entity's `Transform` along the owned path.
/// Poses are written in the space of the entity's parent.
#[derive(Component, Clone, Debug)]
pub struct FlightPath(pub PathAnimation);

/// A part spun about `axis` through `pivot` (parent space) at the rate
/// configured on the parent's `FlightPath`.
#[derive(Component, Clone, Copy, Debug)]
pub struct Rotor {
    pub pivot: Vec3,
    pub axis: Vec3,
    /// `1.0` or `-1.0`.
    pub direction: f32,
}

impl Rotor {
    pub fn new(pivot: Vec3, axis: Vec3) -> Self {
        Self {
            pivot,
            axis: axis.normalize_or_zero(),
            direction: 1.0,
        }
    }

    pub fn reversed(mut self) -> Self {
        self.direction = -self.direction;
        self
    }

    /// Local transform after spinning by `angle` radians about the pivot.
    pub fn transform_at(&self, angle: f32) -> Transform {
        if self.axis == Vec3::ZERO {
            return Transform::IDENTITY;
        }
        let rotation = Quat::from_axis_angle(self.axis, angle * self.direction);
        Transform {
            translation: self.pivot - rotation * self.pivot,
            rotation,
            scale: Vec3::ONE,
        }
    }
}
