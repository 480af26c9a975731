//! Catalog and profile models

pub mod menu_item;
pub mod profile;
pub mod restaurant;

pub use menu_item::MenuItem;
pub use profile::{
    INDULGENCE_THRESHOLD, INTERVENTION_THRESHOLD, InterventionStatus,
    RECENT_ORDERS_DISPLAY_LIMIT, UserProfile,
};
pub use restaurant::Restaurant;
