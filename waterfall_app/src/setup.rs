//! Diorama scene assembly
//!
//! Stands in for the model-loading path: creates the animated objects at
//! their resting transforms and hands their keys to the driver. Static
//! props, materials, and cameras belong to the renderer side and are not
//! represented here.

use diorama_engine::prelude::*;

/// An assembled scene plus the handles the driver animates
pub struct DioramaScene {
    /// The scene containing the animated objects
    pub scene: Scene,

    /// Handles for the driver
    pub handles: SceneHandles,
}

/// Build the waterfall scene: two swept point lights above the fall and
/// the bear-head object
pub fn build_scene() -> DioramaScene {
    let mut scene = Scene::new();

    let light_a = scene.add(
        RenderableObject::new("waterfall-light-a").with_position(Vec3::new(-0.1, 3.0, -0.8)),
    );
    let light_b = scene.add(
        RenderableObject::new("waterfall-light-b").with_position(Vec3::new(-0.1, 3.0, 1.0)),
    );
    let bear_head = scene.add(RenderableObject::new("bear-head"));

    log::info!("scene assembled with {} animated objects", scene.len());

    DioramaScene {
        scene,
        handles: SceneHandles {
            light_a,
            light_b,
            bear_head: Some(bear_head),
        },
    }
}
