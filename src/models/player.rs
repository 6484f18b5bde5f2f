//! Player and per-role rating data structures.

use crate::models::role::Role;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (used in seats, constraints and usage counters).
pub type PlayerId = Uuid;

/// Skill rating of a player in a single role.
pub type Rating = f64;

/// One rating per role.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleRatings {
    pub top: Rating,
    pub jungle: Rating,
    pub mid: Rating,
    pub adc: Rating,
    pub support: Rating,
}

impl RoleRatings {
    pub fn new(top: Rating, jungle: Rating, mid: Rating, adc: Rating, support: Rating) -> Self {
        Self {
            top,
            jungle,
            mid,
            adc,
            support,
        }
    }

    /// Same rating in every role.
    pub fn uniform(rating: Rating) -> Self {
        Self::new(rating, rating, rating, rating, rating)
    }

    pub fn get(&self, role: Role) -> Rating {
        match role {
            Role::Top => self.top,
            Role::Jungle => self.jungle,
            Role::Mid => self.mid,
            Role::Adc => self.adc,
            Role::Support => self.support,
        }
    }
}

/// A league player as seen by the matchmaker. Immutable during a run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub ratings: RoleRatings,
}

impl Player {
    /// Create a new player with a fresh id.
    pub fn new(name: impl Into<String>, ratings: RoleRatings) -> Self {
        Self::with_id(Uuid::new_v4(), name, ratings)
    }

    pub fn with_id(id: PlayerId, name: impl Into<String>, ratings: RoleRatings) -> Self {
        Self {
            id,
            name: name.into(),
            ratings,
        }
    }

    /// Rating this player contributes when seated in `role`.
    pub fn rating(&self, role: Role) -> Rating {
        self.ratings.get(role)
    }
}
