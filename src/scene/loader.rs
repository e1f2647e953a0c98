use crate::core::math::TransformFactory;
use crate::io::config::{Config, ObjectConfig};
use crate::io::obj_loader::load_mesh;
use crate::scene::mesh::Mesh;
use crate::scene::object::{Scene, SceneObject};
use crate::scene::texture::Texture;
use log::{info, warn};
use nalgebra::Vector3;

/// Builds the scene described by the config.
///
/// Load failures are never fatal: a mesh that fails to load leaves its slot
/// empty, and a texture that fails to load falls back to the flat tint. The
/// frame loop keeps running either way.
pub fn init_scene(config: &Config) -> Scene {
    let objects: Vec<SceneObject> = config.objects.iter().map(build_object).collect();
    info!("Scene initialized with {} objects", objects.len());
    Scene::new(objects)
}

fn build_object(conf: &ObjectConfig) -> SceneObject {
    let mesh = match &conf.path {
        Some(path) => match load_mesh(path) {
            Ok(mesh) => mesh,
            Err(e) => {
                warn!("Failed to load mesh '{path}': {e}; leaving the slot empty");
                Mesh::default()
            }
        },
        None => builtin_mesh(&conf.shape),
    };

    let placement = TransformFactory::translation(&Vector3::from(conf.position));
    let mut object = SceneObject::new(mesh, placement);
    object.spin = conf.spin;

    if let Some(path) = &conf.texture {
        match Texture::load(path) {
            Ok(texture) => object.texture = Some(texture),
            Err(e) => warn!("Failed to load texture '{path}': {e}; using flat shading"),
        }
    }

    object
}

fn builtin_mesh(shape: &str) -> Mesh {
    match shape {
        "cube" => Mesh::unit_cube(),
        "pyramid" => Mesh::pyramid(),
        other => {
            warn!("Unknown built-in shape '{other}'; using a cube");
            Mesh::unit_cube()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object_config(path: Option<&str>, shape: &str) -> ObjectConfig {
        ObjectConfig {
            path: path.map(str::to_string),
            shape: shape.to_string(),
            texture: None,
            position: [1.0, 2.0, 3.0],
            spin: false,
        }
    }

    #[test]
    fn missing_mesh_leaves_an_empty_slot() {
        let scene = init_scene(&Config {
            objects: vec![object_config(Some("no/such/model.obj"), "cube")],
            ..Config::default()
        });
        assert_eq!(scene.objects.len(), 1);
        assert!(scene.objects[0].mesh.is_empty());
    }

    #[test]
    fn builtin_shapes_resolve_without_files() {
        let object = build_object(&object_config(None, "pyramid"));
        assert_eq!(object.mesh.triangles.len(), 6);
        assert_eq!(
            build_object(&object_config(None, "cube")).mesh.triangles.len(),
            12
        );
    }

    #[test]
    fn position_lands_in_the_placement_column() {
        let object = build_object(&object_config(None, "cube"));
        assert_eq!(object.placement[(0, 3)], 1.0);
        assert_eq!(object.placement[(1, 3)], 2.0);
        assert_eq!(object.placement[(2, 3)], 3.0);
    }

    #[test]
    fn missing_texture_falls_back_to_flat_shading() {
        let mut conf = object_config(None, "cube");
        conf.texture = Some("no/such/texture.png".to_string());
        let object = build_object(&conf);
        assert!(object.texture.is_none());
    }
}
