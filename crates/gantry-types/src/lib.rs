//! Shared wire types for the gantry control center.
//!
//! These types mirror the JSON returned by the orchestration platform's
//! HTTP API. They are deliberately tolerant: every field the API may omit
//! is optional, and accessor methods supply the documented defaults so
//! that filtering and rendering never re-implement a fallback.

pub mod asset;
pub mod category;
pub mod filter;
pub mod process;
pub mod task;

pub use asset::*;
pub use category::*;
pub use filter::*;
pub use process::*;
pub use task::*;

/// Folder shown and matched when a record carries none.
pub const DEFAULT_FOLDER: &str = "default";

/// Folder id used for mutations when a record carries none.
pub const DEFAULT_FOLDER_ID: i64 = 1;

/// Effective status for resources (processes, assets) without one.
pub const DEFAULT_RESOURCE_STATUS: &str = "Available";
