pub mod effects;
pub mod error;
pub mod site;
pub mod tracker;

// Re-exports for convenience
pub use error::ConfigError;
pub use site::Site;
pub use tracker::{
    Region, SectionList, SectionTracker, SimulatedViewport, SubscriptionHandle,
    VisibilityCallback, VisibilitySignal, VisibilitySource,
};
