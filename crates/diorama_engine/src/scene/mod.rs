//! Scene management
//!
//! The scene is the single shared resource between the animation subsystems
//! and the renderer: a keyed set of renderable objects. The foam system is
//! the only subsystem that changes membership (spawn adds, eviction
//! removes); the oscillator and head-bob animator mutate transform fields of
//! pre-existing objects only.
//!
//! Objects are stored in a slotmap so handles stay stable while the foam
//! system adds and removes particles every frame; a key for a removed
//! object simply stops resolving instead of aliasing a newer object.

mod renderable_object;

pub use renderable_object::RenderableObject;

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Stable handle to a renderable object in a [`Scene`]
    pub struct ObjectKey;
}

/// The set of renderable objects handed to the renderer each frame
#[derive(Default)]
pub struct Scene {
    objects: SlotMap<ObjectKey, RenderableObject>,
}

impl Scene {
    /// Create an empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object to the scene and return its handle
    pub fn add(&mut self, object: RenderableObject) -> ObjectKey {
        self.objects.insert(object)
    }

    /// Remove an object from the scene
    ///
    /// Returns the object if the key was live, `None` if it had already
    /// been removed.
    pub fn remove(&mut self, key: ObjectKey) -> Option<RenderableObject> {
        self.objects.remove(key)
    }

    /// Get an object by handle
    pub fn get(&self, key: ObjectKey) -> Option<&RenderableObject> {
        self.objects.get(key)
    }

    /// Get a mutable object by handle
    pub fn get_mut(&mut self, key: ObjectKey) -> Option<&mut RenderableObject> {
        self.objects.get_mut(key)
    }

    /// Whether the key currently resolves to a live object
    pub fn contains(&self, key: ObjectKey) -> bool {
        self.objects.contains_key(key)
    }

    /// Number of objects currently in the scene
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the scene is empty
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Iterate over all objects with their handles
    pub fn iter(&self) -> impl Iterator<Item = (ObjectKey, &RenderableObject)> {
        self.objects.iter()
    }
}
