use crate::io::error::LoadError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Scene description loaded from TOML at startup (and on hot reload).
#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub objects: Vec<ObjectConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            render: RenderConfig::default(),
            camera: CameraConfig::default(),
            objects: vec![
                ObjectConfig {
                    path: None,
                    shape: "cube".to_string(),
                    texture: None,
                    position: [0.0, 0.0, 20.0],
                    spin: true,
                },
                ObjectConfig {
                    path: None,
                    shape: "pyramid".to_string(),
                    texture: None,
                    position: [0.0, -9.0, 22.0],
                    spin: false,
                },
            ],
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_width")]
    pub width: usize,
    #[serde(default = "default_height")]
    pub height: usize,

    // --- Projection ---
    #[serde(default = "default_fov")]
    pub fov: f32,
    #[serde(default = "default_near")]
    pub near: f32,
    #[serde(default = "default_far")]
    pub far: f32,
    /// "matrix" (canonical) or "simple" (first-order screen mapping).
    #[serde(default = "default_projection")]
    pub projection: String,

    // --- Pipeline & Debug ---
    #[serde(default = "default_false")]
    pub wireframe: bool,

    // --- Overlay & Output ---
    #[serde(default = "default_font_atlas")]
    pub font_atlas: String,
    #[serde(default = "default_output")]
    pub output: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            fov: default_fov(),
            near: default_near(),
            far: default_far(),
            projection: default_projection(),
            wireframe: false,
            font_atlas: default_font_atlas(),
            output: default_output(),
        }
    }
}

fn default_width() -> usize {
    960
}
fn default_height() -> usize {
    540
}
fn default_fov() -> f32 {
    100.0
}
fn default_near() -> f32 {
    0.1
}
fn default_far() -> f32 {
    1000.0
}
fn default_projection() -> String {
    "matrix".to_string()
}
fn default_font_atlas() -> String {
    "assets/font.png".to_string()
}
fn default_output() -> String {
    "render.png".to_string()
}
fn default_false() -> bool {
    false
}

#[derive(Debug, Deserialize)]
pub struct CameraConfig {
    #[serde(default)]
    pub position: [f32; 3],
    #[serde(default = "default_speed")]
    pub speed: f32,
    #[serde(default = "default_sensitivity")]
    pub sensitivity: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 0.0],
            speed: default_speed(),
            sensitivity: default_sensitivity(),
        }
    }
}

fn default_speed() -> f32 {
    8.0
}
fn default_sensitivity() -> f32 {
    0.01
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObjectConfig {
    /// Mesh file to load; when absent, `shape` picks a built-in mesh.
    pub path: Option<String>,
    #[serde(default = "default_shape")]
    pub shape: String,
    pub texture: Option<String>,
    #[serde(default)]
    pub position: [f32; 3],
    #[serde(default = "default_false")]
    pub spin: bool,
}

fn default_shape() -> String {
    "cube".to_string()
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).map_err(|_| LoadError::FileNotFound(path.to_path_buf()))?;
        toml::from_str(&content).map_err(|e| LoadError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_falls_back_to_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.render.width, 960);
        assert_eq!(config.render.height, 540);
        assert_eq!(config.render.projection, "matrix");
        assert_eq!(config.camera.speed, 8.0);
        assert!(config.objects.is_empty());
    }

    #[test]
    fn objects_parse_with_partial_fields() {
        let config: Config = toml::from_str(
            r#"
            [render]
            projection = "simple"
            wireframe = true

            [[objects]]
            path = "assets/cube.obj"
            texture = "assets/cube.png"
            position = [0.0, -9.0, 22.0]
            spin = true

            [[objects]]
            shape = "pyramid"
            "#,
        )
        .unwrap();

        assert_eq!(config.render.projection, "simple");
        assert!(config.render.wireframe);
        assert_eq!(config.objects.len(), 2);
        assert_eq!(config.objects[0].path.as_deref(), Some("assets/cube.obj"));
        assert_eq!(config.objects[0].position, [0.0, -9.0, 22.0]);
        assert!(config.objects[0].spin);
        assert_eq!(config.objects[1].shape, "pyramid");
        assert!(!config.objects[1].spin);
    }

    #[test]
    fn missing_file_reports_not_found() {
        let err = Config::load("no/such/scene.toml").unwrap_err();
        assert!(matches!(err, LoadError::FileNotFound(_)));
    }

    #[test]
    fn malformed_toml_reports_parse_error() {
        let path = std::env::temp_dir().join("meshview_bad_config.toml");
        std::fs::write(&path, "render = {{{").unwrap();
        let err = Config::load(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, LoadError::Parse(_)));
    }
}
