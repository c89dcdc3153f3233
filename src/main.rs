mod api;
mod app;
mod charts;
mod config;
mod error;
mod format;
mod message;
mod render;
mod render_state;
mod reports;
mod screens;
mod theme;

use app::App;
use config::Config;
use iced::Settings;
use lucide_icons::LUCIDE_FONT_BYTES;
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    let loaded = Config::from_env();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    if let Err(err) = loaded {
        tracing::warn!(error = %err, "Using default configuration");
    }

    iced::application(move || App::new(config.clone()), App::update, App::view)
        .title(application_title)
        .theme(App::theme)
        .settings(Settings {
            fonts: vec![LUCIDE_FONT_BYTES.into()],
            ..Default::default()
        })
        .window_size((1100.0, 800.0))
        .run()
}

fn application_title(_: &App) -> String {
    "Book Lens".into()
}
