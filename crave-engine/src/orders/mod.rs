//! 订单生命周期
//!
//! ```text
//! Idle ──place_order──▶ Tracking ──(delivery delay)──▶ Revealed
//!  ▲                       │                              │
//!  └────────reset──────────┴──────────────reset───────────┘
//! ```
//!
//! - [`OrderLifecycle`]: state machine owning the cart and the reveal timer
//! - [`DeliveryScheduler`]: injected one-shot timer source
//! - [`RevealData`]: what the reveal screen reads

pub mod error;
pub mod lifecycle;
pub mod reveal;
pub mod scheduler;

pub use error::OrderError;
pub use lifecycle::{LifecycleConfig, OrderLifecycle};
pub use reveal::{RevealData, SwapSummary};
pub use scheduler::{DeliveryScheduler, ManualScheduler, ScheduledTask, TimerHandle, TokioScheduler};

#[cfg(test)]
mod tests;
