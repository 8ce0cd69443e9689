//! Spawn bounds for foam groups
//!
//! Each group spawns within a thin rectangular region: a free range in X
//! and Z at a fixed height. The configured scene data carries several
//! ranges with min and max swapped; sampling tolerates either order.

use crate::foundation::math::Vec3;
use crate::foundation::random::RandomSource;
use serde::{Deserialize, Serialize};

/// Rectangular spawn region for one foam group
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnBounds {
    /// One end of the X range
    pub min_x: f32,

    /// Other end of the X range
    pub max_x: f32,

    /// Fixed spawn height
    pub y: f32,

    /// One end of the Z range
    pub min_z: f32,

    /// Other end of the Z range
    pub max_z: f32,
}

impl SpawnBounds {
    /// Create bounds; min/max may be given in either order
    pub fn new(min_x: f32, max_x: f32, y: f32, min_z: f32, max_z: f32) -> Self {
        Self {
            min_x,
            max_x,
            y,
            min_z,
            max_z,
        }
    }

    /// Sample a spawn position within the bounds
    pub fn sample(&self, random: &mut dyn RandomSource) -> Vec3 {
        Vec3::new(
            random.sample_range(self.min_x, self.max_x),
            self.y,
            random.sample_range(self.min_z, self.max_z),
        )
    }

    /// Whether a point lies within the normalized bounds
    pub fn contains(&self, point: Vec3) -> bool {
        let (lo_x, hi_x) = ordered(self.min_x, self.max_x);
        let (lo_z, hi_z) = ordered(self.min_z, self.max_z);
        (lo_x..=hi_x).contains(&point.x)
            && (lo_z..=hi_z).contains(&point.z)
            && (point.y - self.y).abs() < f32::EPSILON
    }

    /// The eight spawn regions of the waterfall scene: two at the crest
    /// (y = 3.8), six in the plunge pool (y = -10.25)
    pub fn waterfall_defaults() -> Vec<Self> {
        vec![
            Self::new(-1.55, -1.65, 3.8, 1.8, 1.5),
            Self::new(-1.55, -1.65, 3.8, 0.0, -0.3),
            Self::new(-0.24, -0.20, -10.25, 2.1, 2.0),
            Self::new(0.2, 0.1, -10.25, 0.0, -0.3),
            Self::new(-0.27, -0.25, -10.25, 1.95, 1.85),
            Self::new(0.4, 0.3, -10.25, 0.1, -0.2),
            Self::new(-0.2, -0.18, -10.25, 2.0, 2.2),
            Self::new(0.0, -0.1, -10.25, -1.25, -0.9),
        ]
    }
}

fn ordered(a: f32, b: f32) -> (f32, f32) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::random::EntropySource;

    #[test]
    fn test_sample_respects_inverted_bounds() {
        let bounds = SpawnBounds::new(5.0, 2.0, 1.0, 3.0, -3.0);
        let mut random = EntropySource::from_seed(9);
        for _ in 0..500 {
            let p = bounds.sample(&mut random);
            assert!((2.0..=5.0).contains(&p.x), "x {} escaped [2, 5]", p.x);
            assert!((-3.0..=3.0).contains(&p.z), "z {} escaped [-3, 3]", p.z);
            assert_eq!(p.y, 1.0);
        }
    }

    #[test]
    fn test_sampled_points_are_contained() {
        let mut random = EntropySource::from_seed(11);
        for bounds in SpawnBounds::waterfall_defaults() {
            for _ in 0..100 {
                let p = bounds.sample(&mut random);
                assert!(bounds.contains(p), "{p:?} outside {bounds:?}");
            }
        }
    }

    #[test]
    fn test_default_groups_cover_crest_and_pool() {
        let groups = SpawnBounds::waterfall_defaults();
        assert_eq!(groups.len(), 8);
        assert_eq!(groups.iter().filter(|b| b.y > 0.0).count(), 2);
        assert_eq!(groups.iter().filter(|b| b.y < 0.0).count(), 6);
    }
}
