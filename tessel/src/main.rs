mod app;
mod model;
mod settings;
mod ui;

use env_logger::Env;
use iced::Size;

use crate::app::{App, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};

fn main() -> iced::Result {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(iced::window::Settings {
            size: Size {
                width: 1024.0,
                height: 720.0,
            },
            min_size: Some(Size {
                width: MIN_WINDOW_WIDTH,
                height: MIN_WINDOW_HEIGHT,
            }),
            ..iced::window::Settings::default()
        })
        .resizable(true)
        .subscription(App::subscription)
        .run()
}
