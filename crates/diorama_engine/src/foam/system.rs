//! Foam lifecycle system
//!
//! Per frame: draw one unit random value and map it to at most one of four
//! spawn buckets, each of which feeds a fixed pair of groups; then advance
//! and evict every group unconditionally. Most frames fall outside all
//! buckets and spawn nothing.

use super::{FoamGroup, SpawnBounds};
use crate::config::FoamConfig;
use crate::foundation::random::RandomSource;
use crate::scene::Scene;

/// Bucket-to-group-pair mapping (0-based group indices)
///
/// The unit interval is partitioned so bucket `n` covers
/// `[n * width, (n + 1) * width)`; values of `4 * width` and above spawn
/// nothing.
const SPAWN_PAIRS: [(usize, usize); 4] = [(0, 3), (4, 7), (1, 5), (2, 6)];

/// Owner of the eight foam groups and their per-frame lifecycle
pub struct FoamSystem {
    groups: Vec<FoamGroup>,
    lifetime_ms: f64,
    bucket_width: f32,
    initial_per_group: usize,
    min_radius: f32,
    max_radius: f32,
    rise_step: f32,
    wobble_rate: f64,
}

impl FoamSystem {
    /// Create the system from configuration
    ///
    /// Groups are numbered from 1 in configuration order.
    pub fn new(config: &FoamConfig) -> Self {
        let bounds = if config.groups.is_empty() {
            log::warn!("no foam groups configured, using the waterfall defaults");
            SpawnBounds::waterfall_defaults()
        } else {
            config.groups.clone()
        };

        let groups = bounds
            .into_iter()
            .enumerate()
            .map(|(index, bounds)| FoamGroup::new(index as u8 + 1, bounds))
            .collect();

        Self {
            groups,
            lifetime_ms: config.lifetime_ms,
            bucket_width: config.bucket_width,
            initial_per_group: config.initial_per_group,
            min_radius: config.min_radius,
            max_radius: config.max_radius,
            rise_step: config.rise_step,
            wobble_rate: config.wobble_rate,
        }
    }

    /// Populate every group with its initial particle count
    pub fn seed(&mut self, scene: &mut Scene, random: &mut dyn RandomSource, now_ms: f64) {
        for group in &mut self.groups {
            for _ in 0..self.initial_per_group {
                group.spawn(scene, random, now_ms, self.min_radius, self.max_radius);
            }
        }
        log::debug!(
            "seeded {} foam particles across {} groups",
            self.live_count(),
            self.groups.len()
        );
    }

    /// Run one frame: spawn decision first, then the unconditional
    /// advance-and-evict pass over all groups
    pub fn update(&mut self, scene: &mut Scene, random: &mut dyn RandomSource, now_ms: f64) {
        self.spawn_pass(scene, random, now_ms);
        self.advance_pass(scene, now_ms);
    }

    /// Total number of live particles across all groups
    pub fn live_count(&self) -> usize {
        self.groups.iter().map(FoamGroup::len).sum()
    }

    /// The groups, in identifier order
    pub fn groups(&self) -> &[FoamGroup] {
        &self.groups
    }

    fn spawn_pass(&mut self, scene: &mut Scene, random: &mut dyn RandomSource, now_ms: f64) {
        let roll = random.next_unit();
        let w = self.bucket_width;

        let bucket = if roll < w {
            Some(0)
        } else if roll < 2.0 * w {
            Some(1)
        } else if roll < 3.0 * w {
            Some(2)
        } else if roll < 4.0 * w {
            Some(3)
        } else {
            None
        };

        if let Some(bucket) = bucket {
            let (first, second) = SPAWN_PAIRS[bucket];
            for index in [first, second] {
                if let Some(group) = self.groups.get_mut(index) {
                    group.spawn(scene, random, now_ms, self.min_radius, self.max_radius);
                }
            }
        }
    }

    fn advance_pass(&mut self, scene: &mut Scene, now_ms: f64) {
        // One phase for all particles in all groups; they bob in lockstep
        let phase = (now_ms * self.wobble_rate).sin() as f32;
        let bob_step = self.rise_step * phase;

        for group in &mut self.groups {
            group.advance(scene, now_ms, self.lifetime_ms, bob_step);
        }
    }
}
