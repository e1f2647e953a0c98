use crate::core::color::Color;
use crate::io::config::Config;
use crate::io::image::save_framebuffer;
use crate::pipeline::projection::{MatrixProjection, ProjectionStrategy, SimpleProjection};
use crate::pipeline::renderer::Renderer;
use crate::scene::camera::Camera;
use crate::scene::context::FrameContext;
use crate::scene::loader::init_scene;
use crate::text::font::Font;
use crate::ui::input::{CameraController, sample_input};
use log::{info, warn};
use minifb::{Key, KeyRepeat, Window, WindowOptions};
use nalgebra::Point3;
use std::time::Instant;

const TITLE: &str = "meshview";
const FPS_TINT: Color = Color::rgb(255, 0, 0);

fn build_projection(config: &Config) -> Box<dyn ProjectionStrategy> {
    let r = &config.render;
    match r.projection.as_str() {
        "simple" => Box::new(SimpleProjection::new(r.fov, r.width, r.height, r.near)),
        _ => Box::new(MatrixProjection::new(r.fov, r.width, r.height, r.near, r.far)),
    }
}

fn build_renderer(config: &Config) -> Renderer {
    let mut renderer = Renderer::new(
        config.render.width,
        config.render.height,
        build_projection(config),
    );
    renderer.rasterizer.wireframe = config.render.wireframe;
    renderer
}

fn load_font(config: &Config) -> Option<Font> {
    match Font::load(&config.render.font_atlas) {
        Ok(font) => Some(font),
        Err(e) => {
            warn!("Overlay font unavailable: {e}");
            None
        }
    }
}

/// Interactive mode: first-person camera, frame loop until Escape or the
/// window closes. No frame cap; elapsed time scales movement and spin.
pub fn run_gui(config: Config, config_path: &str) {
    let width = config.render.width;
    let height = config.render.height;

    info!("Starting viewer ({width}x{height})...");
    info!("Controls: WASD=Move, E/Q=Up/Down, Mouse=Look, R=Reload Scene, Esc=Quit");

    let mut window = Window::new(TITLE, width, height, WindowOptions::default())
        .unwrap_or_else(|e| panic!("failed to create window: {e}"));

    let mut scene = init_scene(&config);
    let mut camera = Camera::new(Point3::from(config.camera.position));
    let mut controller = CameraController::new(config.camera.speed, config.camera.sensitivity);
    let mut renderer = build_renderer(&config);
    let font = load_font(&config);

    let mut ctx = FrameContext::default();
    let mut last_frame = Instant::now();
    let mut fps = 0u32;
    let mut frames = 0u32;
    let mut last_fps_update = Instant::now();

    while window.is_open() {
        let now = Instant::now();
        let dt = (now - last_frame).as_secs_f32();
        last_frame = now;
        ctx.advance(dt);

        // Scene and renderer replacement happens here, between frames,
        // never mid-frame.
        if window.is_key_pressed(Key::R, KeyRepeat::No) {
            match Config::load(config_path) {
                Ok(mut new_config) => {
                    // The window cannot be resized after creation; keep the
                    // original dimensions regardless of the reloaded file.
                    new_config.render.width = width;
                    new_config.render.height = height;

                    scene = init_scene(&new_config);
                    renderer = build_renderer(&new_config);
                    controller.speed = new_config.camera.speed;
                    controller.sensitivity = new_config.camera.sensitivity;
                    info!("Reloaded scene and render settings from '{config_path}'");
                }
                Err(e) => warn!("Failed to reload config: {e}"),
            }
        }

        let input = sample_input(&window);
        if input.quit {
            break;
        }
        controller.update(&mut camera, &input, dt);

        renderer.render_scene(&scene, &camera, &ctx);

        if let Some(font) = &font {
            font.render_text_centered(
                &mut renderer.framebuffer,
                TITLE,
                (width / 2) as i32,
                5,
                1.0,
                Color::WHITE,
            );
            font.render_text(
                &mut renderer.framebuffer,
                &format!("{fps} FPS"),
                0,
                5,
                1.0,
                FPS_TINT,
            );
        }

        if let Err(e) = window.update_with_buffer(renderer.framebuffer.data(), width, height) {
            warn!("Presentation failed: {e}");
            break;
        }

        frames += 1;
        if last_fps_update.elapsed().as_secs_f32() >= 1.0 {
            fps = frames;
            frames = 0;
            last_fps_update = Instant::now();
        }
    }
}

/// Headless mode: render a single frame and save it to the configured
/// output file.
pub fn run_headless(config: Config) {
    info!(
        "Rendering one frame headless ({}x{})...",
        config.render.width, config.render.height
    );

    let scene = init_scene(&config);
    let camera = Camera::new(Point3::from(config.camera.position));
    let mut renderer = build_renderer(&config);

    let start = Instant::now();
    renderer.render_scene(&scene, &camera, &FrameContext::default());
    if let Some(font) = load_font(&config) {
        font.render_text_centered(
            &mut renderer.framebuffer,
            TITLE,
            (config.render.width / 2) as i32,
            5,
            1.0,
            Color::WHITE,
        );
    }
    info!("Frame rendered in {:.2?}", start.elapsed());

    save_framebuffer(&renderer.framebuffer, &config.render.output);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_renderer_applies_render_settings() {
        let mut config = Config::default();
        config.render.width = 320;
        config.render.height = 200;
        config.render.wireframe = true;

        // The reload path rebuilds the renderer from the incoming config;
        // render settings must carry over instead of being dropped.
        let renderer = build_renderer(&config);
        assert!(renderer.rasterizer.wireframe);
        assert_eq!(renderer.framebuffer.width, 320);
        assert_eq!(renderer.framebuffer.height, 200);
    }
}
