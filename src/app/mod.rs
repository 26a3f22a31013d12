mod messages;
mod state;
mod update;
mod view;

pub use state::App;

use crate::config::AppConfig;
use iced::{Size, Theme, window};
use std::path::PathBuf;

/// Launch the preview window for the document at `source_path`.
pub fn run_app(config: AppConfig, source_path: PathBuf) -> iced::Result {
    let window_settings = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        exit_on_close_request: false,
        ..window::Settings::default()
    };

    iced::application(App::title, App::update, App::view)
        .window(window_settings)
        .subscription(App::subscription)
        .theme(|_: &App| Theme::Light)
        .run_with(move || App::bootstrap(config, source_path))
}
