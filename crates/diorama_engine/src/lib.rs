//! # Diorama Engine
//!
//! Frame-driven animation core for a waterfall/forest diorama scene.
//!
//! The crate owns the three per-frame subsystems of the diorama and the
//! driver that sequences them:
//!
//! - **Light oscillator**: sawtooth vertical sweep for two point lights
//! - **Head-bob animator**: four-phase cyclic pose state machine for the
//!   bear's head
//! - **Foam system**: probabilistic spawn, shared-phase bobbing, and
//!   time-to-live eviction of foam particles across eight groups
//!
//! Rendering, asset loading, and windowing are external collaborators; the
//! engine only mutates transform state and scene membership. All time and
//! randomness come in through capability traits so a host (or a test) can
//! substitute deterministic sources.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use diorama_engine::prelude::*;
//!
//! let config = DioramaConfig::default();
//! let mut scene = Scene::new();
//! let light_a = scene.add(RenderableObject::new("light-a"));
//! let light_b = scene.add(RenderableObject::new("light-b"));
//!
//! let mut driver = AnimationDriver::new(
//!     &config,
//!     scene,
//!     SceneHandles { light_a, light_b, bear_head: None },
//!     Box::new(SystemTimeSource::new()),
//!     Box::new(EntropySource::from_entropy()),
//! );
//! driver.seed_foam();
//!
//! loop {
//!     driver.on_frame();
//!     // hand the scene to the renderer here
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod scene;
pub mod animation;
pub mod foam;
pub mod config;

mod driver;

pub use driver::{AnimationDriver, SceneHandles};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        AnimationDriver, SceneHandles,
        foundation::{
            math::Vec3,
            time::{FrameClock, ManualTimeSource, SystemTimeSource, TimeSource},
            random::{EntropySource, RandomSource},
        },
        scene::{ObjectKey, RenderableObject, Scene},
        animation::{HeadBobAnimator, LightOscillator},
        foam::{FoamGroup, FoamParticle, FoamSystem, SpawnBounds},
        config::{Config, DioramaConfig},
    };
}
