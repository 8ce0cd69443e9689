//! Frame driver
//!
//! Owns the scene, the clocks, and the three animation subsystems, and
//! sequences them once per frame: light oscillator, then head-bob animator
//! (skipped while no head object is registered), then foam lifecycle. The
//! host renders after [`AnimationDriver::on_frame`] returns.
//!
//! Nothing here returns a `Result`: the frame path is infallible by
//! design. A handle that stops resolving is skipped, never an error.

use crate::animation::{HeadBobAnimator, LightOscillator};
use crate::config::DioramaConfig;
use crate::foam::FoamSystem;
use crate::foundation::random::RandomSource;
use crate::foundation::time::{FrameClock, TimeSource};
use crate::scene::{ObjectKey, Scene};

/// Handles of the scene objects the driver animates
pub struct SceneHandles {
    /// First swept point light
    pub light_a: ObjectKey,

    /// Second swept point light
    pub light_b: ObjectKey,

    /// Bear-head object; `None` until the model has produced one
    pub bear_head: Option<ObjectKey>,
}

/// Per-frame coordinator for the diorama
pub struct AnimationDriver {
    scene: Scene,
    handles: SceneHandles,
    clock: FrameClock,
    time: Box<dyn TimeSource>,
    random: Box<dyn RandomSource>,
    oscillator: LightOscillator,
    head: HeadBobAnimator,
    foam: FoamSystem,
}

impl AnimationDriver {
    /// Create a driver over an assembled scene
    pub fn new(
        config: &DioramaConfig,
        scene: Scene,
        handles: SceneHandles,
        time: Box<dyn TimeSource>,
        random: Box<dyn RandomSource>,
    ) -> Self {
        Self {
            scene,
            handles,
            clock: FrameClock::new(),
            time,
            random,
            oscillator: LightOscillator::new(&config.lights),
            head: HeadBobAnimator::new(&config.head),
            foam: FoamSystem::new(&config.foam),
        }
    }

    /// Populate the foam groups with their initial particles
    ///
    /// Call once before the first frame.
    pub fn seed_foam(&mut self) {
        let now_ms = self.time.now_ms();
        self.foam
            .seed(&mut self.scene, self.random.as_mut(), now_ms);
    }

    /// Register the bear-head object once it exists
    ///
    /// Until this is called the pose animator is skipped entirely.
    pub fn set_bear_head(&mut self, key: ObjectKey) {
        self.handles.bear_head = Some(key);
    }

    /// Advance one frame using real frame timing
    pub fn on_frame(&mut self) {
        self.clock.update();
        self.step();
    }

    /// Advance one frame with an explicit delta, for hosts and tests that
    /// pace time themselves
    pub fn on_frame_with_delta(&mut self, delta_time: f32) {
        self.clock.advance(delta_time);
        self.step();
    }

    /// The scene in its current state, for rendering
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Mutable scene access, for host-side setup
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// The foam system, for diagnostics
    pub fn foam(&self) -> &FoamSystem {
        &self.foam
    }

    /// Number of frames driven so far
    pub fn frame_count(&self) -> u64 {
        self.clock.frame_count()
    }

    fn step(&mut self) {
        // 1. Point lights
        let (height_a, height_b) = self.oscillator.advance(self.clock.delta_time());
        if let Some(light) = self.scene.get_mut(self.handles.light_a) {
            light.position.y = height_a;
        }
        if let Some(light) = self.scene.get_mut(self.handles.light_b) {
            light.position.y = height_b;
        }

        // 2. Bear head, skipped entirely while the target is missing
        if let Some(key) = self.handles.bear_head {
            if self.scene.contains(key) {
                let rotation = self.head.advance(self.clock.elapsed());
                if let Some(head) = self.scene.get_mut(key) {
                    head.rotation.z = rotation;
                }
            }
        }

        // 3. Foam lifecycle
        let now_ms = self.time.now_ms();
        self.foam
            .update(&mut self.scene, self.random.as_mut(), now_ms);
    }
}
