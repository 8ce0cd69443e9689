//! Foam particle group
//!
//! A group exclusively owns its live particles. Eviction runs during the
//! same pass that bobs the particles, so traversal walks the collection in
//! reverse and swap-removes; no element is skipped or visited twice when
//! several particles expire in one frame.

use super::{FoamParticle, SpawnBounds};
use crate::foundation::random::RandomSource;
use crate::scene::{ObjectKey, RenderableObject, Scene};

/// One of the eight foam spawn groups
#[derive(Debug)]
pub struct FoamGroup {
    id: u8,
    bounds: SpawnBounds,
    particles: Vec<FoamParticle>,
}

impl FoamGroup {
    /// Create an empty group with fixed spawn bounds
    pub fn new(id: u8, bounds: SpawnBounds) -> Self {
        Self {
            id,
            bounds,
            particles: Vec::new(),
        }
    }

    /// Group identifier (1-based)
    pub fn id(&self) -> u8 {
        self.id
    }

    /// The group's spawn bounds
    pub fn bounds(&self) -> &SpawnBounds {
        &self.bounds
    }

    /// Live particles, in insertion order
    pub fn particles(&self) -> &[FoamParticle] {
        &self.particles
    }

    /// Number of live particles
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether the group has no live particles
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Spawn one particle: random radius, random position within bounds,
    /// creation timestamp now; adds it to the scene and this group
    pub fn spawn(
        &mut self,
        scene: &mut Scene,
        random: &mut dyn RandomSource,
        now_ms: f64,
        min_radius: f32,
        max_radius: f32,
    ) -> ObjectKey {
        let radius = random.sample_range(min_radius, max_radius);
        let position = self.bounds.sample(random);

        let key = scene.add(
            RenderableObject::new(format!("foam-{}", self.id)).with_position(position),
        );
        self.particles.push(FoamParticle::new(key, radius, now_ms));

        log::trace!(
            "group {} spawned particle at {:?} (radius {radius:.3}), {} live",
            self.id,
            position,
            self.particles.len()
        );
        key
    }

    /// Bob every particle by the shared step, then evict expired particles
    /// from both the scene and this group
    ///
    /// Returns the number of evicted particles.
    pub fn advance(
        &mut self,
        scene: &mut Scene,
        now_ms: f64,
        lifetime_ms: f64,
        bob_step: f32,
    ) -> usize {
        let mut evicted = 0;
        for i in (0..self.particles.len()).rev() {
            let particle = self.particles[i];
            if let Some(object) = scene.get_mut(particle.object) {
                object.position.y += bob_step;
            }
            if particle.is_expired(now_ms, lifetime_ms) {
                self.particles.swap_remove(i);
                scene.remove(particle.object);
                evicted += 1;
            }
        }
        if evicted > 0 {
            log::trace!("group {} evicted {evicted} particles", self.id);
        }
        evicted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::random::EntropySource;

    fn crest_group() -> FoamGroup {
        FoamGroup::new(1, SpawnBounds::new(-1.55, -1.65, 3.8, 1.8, 1.5))
    }

    #[test]
    fn test_spawn_adds_to_scene_and_group() {
        let mut scene = Scene::new();
        let mut random = EntropySource::from_seed(3);
        let mut group = crest_group();

        let key = group.spawn(&mut scene, &mut random, 0.0, 0.05, 0.15);
        assert_eq!(group.len(), 1);
        assert_eq!(scene.len(), 1);
        assert!(scene.contains(key));

        let particle = group.particles()[0];
        assert!((0.05..=0.15).contains(&particle.radius));
        assert_eq!(particle.created_at_ms, 0.0);
    }

    #[test]
    fn test_twenty_spawns_stay_in_bounds_with_ordered_timestamps() {
        let mut scene = Scene::new();
        let mut random = EntropySource::from_seed(21);
        let mut group = crest_group();

        for i in 0..20 {
            group.spawn(&mut scene, &mut random, f64::from(i) * 16.0, 0.05, 0.15);
        }

        assert_eq!(group.len(), 20);
        assert_eq!(scene.len(), 20);

        let mut last_created = f64::NEG_INFINITY;
        for particle in group.particles() {
            let object = scene.get(particle.object).expect("spawned object missing");
            assert!((-1.65..=-1.55).contains(&object.position.x));
            assert!((1.5..=1.8).contains(&object.position.z));
            assert_eq!(object.position.y, 3.8);
            assert!(particle.created_at_ms >= last_created);
            last_created = particle.created_at_ms;
        }
    }

    #[test]
    fn test_advance_bobs_particles_in_lockstep() {
        let mut scene = Scene::new();
        let mut random = EntropySource::from_seed(5);
        let mut group = crest_group();
        group.spawn(&mut scene, &mut random, 0.0, 0.05, 0.15);
        group.spawn(&mut scene, &mut random, 0.0, 0.05, 0.15);

        let before: Vec<f32> = group
            .particles()
            .iter()
            .map(|p| scene.get(p.object).unwrap().position.y)
            .collect();

        group.advance(&mut scene, 100.0, 2000.0, 0.004);

        for (particle, y0) in group.particles().iter().zip(before) {
            let y1 = scene.get(particle.object).unwrap().position.y;
            assert!((y1 - (y0 + 0.004)).abs() < 1e-6);
        }
    }

    #[test]
    fn test_eviction_at_lifetime_boundary() {
        let mut scene = Scene::new();
        let mut random = EntropySource::from_seed(5);
        let mut group = crest_group();
        let key = group.spawn(&mut scene, &mut random, 0.0, 0.05, 0.15);

        // One millisecond under the limit: still alive
        group.advance(&mut scene, 1999.0, 2000.0, 0.0);
        assert_eq!(group.len(), 1);
        assert!(scene.contains(key));

        // One millisecond over: removed from group and scene exactly once
        group.advance(&mut scene, 2001.0, 2000.0, 0.0);
        assert_eq!(group.len(), 0);
        assert!(!scene.contains(key));

        // Further passes on the empty group are a no-op
        group.advance(&mut scene, 3000.0, 2000.0, 0.0);
        assert_eq!(group.len(), 0);
    }

    #[test]
    fn test_mass_eviction_removes_every_expired_particle() {
        let mut scene = Scene::new();
        let mut random = EntropySource::from_seed(17);
        let mut group = crest_group();

        // Half old, half fresh, interleaved
        for i in 0..10 {
            let created = if i % 2 == 0 { 0.0 } else { 1500.0 };
            group.spawn(&mut scene, &mut random, created, 0.05, 0.15);
        }

        let evicted = group.advance(&mut scene, 2500.0, 2000.0, 0.0);
        assert_eq!(evicted, 5);
        assert_eq!(group.len(), 5);
        assert_eq!(scene.len(), 5);
        assert!(group.particles().iter().all(|p| p.created_at_ms == 1500.0));
    }
}
