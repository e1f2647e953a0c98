use crate::scene::mesh::Mesh;
use crate::scene::texture::Texture;
use nalgebra::Matrix4;

/// A mesh placed in the world.
///
/// Placement is an explicit transform owned by the scene; objects sharing
/// the origin are separated by their placements rather than by ad hoc
/// per-mesh coordinate nudges in the pipeline.
pub struct SceneObject {
    pub mesh: Mesh,
    pub texture: Option<Texture>,
    pub placement: Matrix4<f32>,
    /// When set, the object rotates with the frame context's spin angle.
    pub spin: bool,
}

impl SceneObject {
    pub fn new(mesh: Mesh, placement: Matrix4<f32>) -> Self {
        Self {
            mesh,
            texture: None,
            placement,
            spin: false,
        }
    }

    pub fn with_texture(mut self, texture: Texture) -> Self {
        self.texture = Some(texture);
        self
    }
}

/// Ordered object list. Loaded once, immutable during a frame; slots may be
/// replaced wholesale between frames.
#[derive(Default)]
pub struct Scene {
    pub objects: Vec<SceneObject>,
}

impl Scene {
    pub fn new(objects: Vec<SceneObject>) -> Self {
        Self { objects }
    }

    /// Replaces the object at `index`, appending when the index is one past
    /// the end.
    pub fn replace(&mut self, index: usize, object: SceneObject) {
        if index < self.objects.len() {
            self.objects[index] = object;
        } else {
            self.objects.push(object);
        }
    }
}
