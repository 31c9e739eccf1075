pub mod app;
pub mod appearance;
pub mod config;
pub mod dialog;
pub mod message;
pub mod screen;
pub mod util;
pub mod widget;

pub use app::Gantry;
pub use message::Message;

pub fn run() -> iced::Result {
    iced::application("Gantry Control Center", Gantry::update, Gantry::view)
        .subscription(Gantry::subscription)
        .theme(|_| iced::Theme::Dark)
        .antialiasing(true)
        .font(lucide_icons::LUCIDE_FONT_BYTES)
        .run_with(Gantry::new)
}
