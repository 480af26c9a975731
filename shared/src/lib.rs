//! Shared types for Crave
//!
//! Plain data types exchanged between the order engine and any presentation
//! layer: catalog models, user profiles, cart/lifecycle types and the
//! unified error code system.

pub mod error;
pub mod models;
pub mod order;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{InterventionStatus, MenuItem, Restaurant, UserProfile};
pub use order::{CartLine, CartSnapshot, LifecyclePhase, TrackingInfo};
