use clap::Parser;
use log::warn;
use meshview::app;
use meshview::io::config::Config;

/// Software 3D mesh viewer: painter's-algorithm rasterizer with a
/// first-person camera and a bitmap-font overlay.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Scene description TOML.
    #[arg(short, long, default_value = "scene.toml")]
    config: String,

    /// Render a single frame to the configured output file and exit.
    #[arg(long)]
    headless: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let config = match Config::load(&args.config) {
        Ok(config) => config,
        Err(e) => {
            warn!("Could not load '{}': {e}; using the built-in scene", args.config);
            Config::default()
        }
    };

    if args.headless {
        app::run_headless(config);
    } else {
        app::run_gui(config, &args.config);
    }
}
