//! Foam particle data
//!
//! Tracks particle creation time for automatic eviction. Radius and
//! creation timestamp are fixed at spawn and never change afterwards.

use crate::scene::ObjectKey;

/// A single live foam particle
#[derive(Debug, Clone, Copy)]
pub struct FoamParticle {
    /// Handle of the particle's renderable object in the scene
    pub object: ObjectKey,

    /// Sphere radius, sampled at spawn
    pub radius: f32,

    /// Wall-clock creation time in milliseconds
    pub created_at_ms: f64,
}

impl FoamParticle {
    /// Create a new particle record
    pub fn new(object: ObjectKey, radius: f32, created_at_ms: f64) -> Self {
        Self {
            object,
            radius,
            created_at_ms,
        }
    }

    /// Age of the particle in milliseconds
    pub fn age_ms(&self, now_ms: f64) -> f64 {
        now_ms - self.created_at_ms
    }

    /// Whether the particle has outlived the given time-to-live
    ///
    /// Expiry is strict: a particle exactly at the limit is still alive.
    pub fn is_expired(&self, now_ms: f64, lifetime_ms: f64) -> bool {
        self.age_ms(now_ms) > lifetime_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{RenderableObject, Scene};

    fn particle(created_at_ms: f64) -> FoamParticle {
        let mut scene = Scene::new();
        let key = scene.add(RenderableObject::new("foam"));
        FoamParticle::new(key, 0.1, created_at_ms)
    }

    #[test]
    fn test_alive_just_under_the_limit() {
        let p = particle(0.0);
        assert!(!p.is_expired(1999.0, 2000.0));
    }

    #[test]
    fn test_alive_exactly_at_the_limit() {
        let p = particle(0.0);
        assert!(!p.is_expired(2000.0, 2000.0));
    }

    #[test]
    fn test_expired_past_the_limit() {
        let p = particle(0.0);
        assert!(p.is_expired(2001.0, 2000.0));
    }

    #[test]
    fn test_age_is_relative_to_creation() {
        let p = particle(500.0);
        assert_eq!(p.age_ms(1500.0), 1000.0);
    }
}
