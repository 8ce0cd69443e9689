//! Foam particle lifecycle
//!
//! Transient foam spheres at the waterfall's crest and plunge pool. Eight
//! fixed groups each own their live particles; every frame the system may
//! spawn a particle pair probabilistically, bobs every live particle on a
//! shared wall-clock phase, and evicts particles older than the configured
//! time-to-live. This is the only subsystem that changes how many
//! renderable objects exist.

mod bounds;
mod group;
mod particle;
mod system;

pub use bounds::SpawnBounds;
pub use group::FoamGroup;
pub use particle::FoamParticle;
pub use system::FoamSystem;
