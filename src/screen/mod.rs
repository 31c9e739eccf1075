//! Screen modules for the gantry application.
//!
//! The dashboard is tab-based: Resources (processes + assets) and Action
//! Center (tasks). Each module exposes a `view` function taking a
//! borrowed state struct and the palette.

pub mod action_center;
pub mod assets;
pub mod connect;
pub mod processes;
pub mod resources;

/// Dashboard tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Resources,
    ActionCenter,
}

impl Tab {
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Resources => "Resources",
            Tab::ActionCenter => "Action Center",
        }
    }
}
