//! Renderable object representation for the scene
//!
//! An opaque handle from the renderer's point of view: a label for
//! diagnostics plus the mutable transform fields the animation subsystems
//! are allowed to touch.

use crate::foundation::math::Vec3;

/// A renderable scene object
///
/// Rotation is stored as Euler angles in radians; the diorama only ever
/// animates `rotation.z` (the bear-head tilt) and `position.y` (light sweep
/// and foam bobbing).
#[derive(Debug, Clone)]
pub struct RenderableObject {
    /// Diagnostic label, reported in scene logs
    pub label: String,

    /// World-space position
    pub position: Vec3,

    /// World-space rotation, Euler angles in radians
    pub rotation: Vec3,
}

impl RenderableObject {
    /// Create an object at the origin
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            position: Vec3::zeros(),
            rotation: Vec3::zeros(),
        }
    }

    /// Builder pattern: set the initial position
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Builder pattern: set the initial rotation (Euler angles, radians)
    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }
}
