//! Cart and order lifecycle types

pub mod snapshot;
pub mod types;

pub use snapshot::{CartSnapshot, LifecyclePhase, TrackingInfo};
pub use types::CartLine;
