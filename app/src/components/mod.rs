//! UI Components
//!
//! Page building blocks for the landing page: the side rail, the content
//! stream, and the reusable effect and motion wrappers they share.

pub mod effects;
pub mod focus;
pub mod interaction;
pub mod nav_rail;
pub mod reveal;
pub mod sections;

pub use focus::{use_focus_tracker_provider, use_site_provider};
pub use nav_rail::SideRail;
pub use sections::ContentStream;
