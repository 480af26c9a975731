//! Profile store - requester and swap partner
//!
//! Read-only from the engine's point of view. Swapping the store is how tests
//! (and an external seed process) put the requester in a given karma band.

use shared::models::UserProfile;

/// Source of the two hidden profiles
pub trait ProfileStore: Send + Sync {
    /// The user placing the order
    fn requester(&self) -> UserProfile;

    /// The user whose order the requester may receive instead
    fn partner(&self) -> UserProfile;
}

/// Fixed pair of profiles
#[derive(Debug, Clone)]
pub struct StaticProfileStore {
    requester: UserProfile,
    partner: UserProfile,
}

impl StaticProfileStore {
    pub fn new(requester: UserProfile, partner: UserProfile) -> Self {
        Self { requester, partner }
    }

    /// Demo seed: a requester deep in the intervention band and a partner who
    /// needs to live a little
    pub fn demo() -> Self {
        Self::new(
            UserProfile::new(
                "Dara Williams",
                -47,
                ["Pizza", "Burger", "Wings", "Pizza", "Nachos"]
                    .map(String::from)
                    .to_vec(),
            ),
            UserProfile::new(
                "Josh Daniels",
                82,
                [
                    "Kale Salad",
                    "Quinoa Bowl",
                    "Green Smoothie",
                    "Veggie Wrap",
                    "Acai Bowl",
                ]
                .map(String::from)
                .to_vec(),
            ),
        )
    }

    /// Same partner, requester with the given karma
    pub fn with_requester_karma(mut self, karma: i64) -> Self {
        self.requester.karma = karma;
        self
    }
}

impl ProfileStore for StaticProfileStore {
    fn requester(&self) -> UserProfile {
        self.requester.clone()
    }

    fn partner(&self) -> UserProfile {
        self.partner.clone()
    }
}
