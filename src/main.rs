use eframe::egui;
use enneagram_wheel::app::EnneagramApp;
use enneagram_wheel::config;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let config_path = config::config_path();
    let (config, warnings) = config::load_from(&config_path);
    tracing::info!(
        path = %config_path.display(),
        margin = config.margin,
        hit_radius = config.hit_radius,
        "loaded wheel config"
    );

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    let app = EnneagramApp::new(config, config_path, warnings);
    eframe::run_native(
        "Enneagram Wheel",
        native_options,
        Box::new(move |_creation_context| Ok(Box::new(app))),
    )?;

    Ok(())
}
