use crate::io::error::LoadError;
use crate::scene::mesh::{Mesh, Triangle};
use crate::scene::texture::Texture;
use log::{info, warn};
use nalgebra::{Point3, Vector2};
use std::path::Path;

/// Loads a line-oriented mesh file (`v`/`vt`/`f` with 1-based indices) into
/// a triangle list. Faces are triangulated on load; texture coordinates are
/// optional and default to (0, 0) when the file carries none.
pub fn load_mesh<P: AsRef<Path>>(path: P) -> Result<Mesh, LoadError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    info!("Loading mesh: {}", path.display());

    let options = tobj::LoadOptions {
        triangulate: true,
        single_index: true,
        ..Default::default()
    };
    let (models, _materials) = tobj::load_obj(path, &options)
        .map_err(|e| LoadError::Parse(format!("{}: {e}", path.display())))?;

    let mut triangles = Vec::new();
    for model in &models {
        let mesh = &model.mesh;
        let has_texcoords = !mesh.texcoords.is_empty();
        if !has_texcoords {
            warn!(
                "Mesh '{}' has no texture coordinates; textured draws will sample (0, 0)",
                model.name
            );
        }

        let position = |i: u32| {
            let i = i as usize;
            Point3::new(
                mesh.positions[i * 3],
                mesh.positions[i * 3 + 1],
                mesh.positions[i * 3 + 2],
            )
        };
        let texcoord = |i: u32| {
            if has_texcoords {
                let i = i as usize;
                Vector2::new(mesh.texcoords[i * 2], mesh.texcoords[i * 2 + 1])
            } else {
                Vector2::zeros()
            }
        };

        for face in mesh.indices.chunks_exact(3) {
            triangles.push(Triangle::with_texcoords(
                [position(face[0]), position(face[1]), position(face[2])],
                [texcoord(face[0]), texcoord(face[1]), texcoord(face[2])],
            ));
        }
    }

    info!(
        "Mesh loaded: {} ({} triangles)",
        path.display(),
        triangles.len()
    );
    Ok(Mesh::new(triangles))
}

/// Loads a mesh together with the texture it is mapped with.
pub fn load_textured_mesh<P: AsRef<Path>>(
    path: P,
    texture_path: P,
) -> Result<(Mesh, Texture), LoadError> {
    let mesh = load_mesh(&path)?;
    let texture = Texture::load(&texture_path)?;
    Ok((mesh, texture))
}
