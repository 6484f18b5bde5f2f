//! Role-usage counters: how often each player has been placed in each role during one invocation.

use crate::models::{PlayerId, Role, ROLE_COUNT};
use std::collections::HashMap;

/// Per-player, per-role placement tally. Lives for one `generate_matches` call
/// and is threaded by `&mut` through every trial and alternative.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RoleUsage {
    counts: HashMap<PlayerId, [u32; ROLE_COUNT]>,
}

impl RoleUsage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Times `player_id` has been placed in `role` (0 if never seen).
    pub fn count(&self, player_id: PlayerId, role: Role) -> u32 {
        self.counts
            .get(&player_id)
            .map_or(0, |c| c[role.index()])
    }

    /// Record one placement of `player_id` in `role`.
    pub fn record(&mut self, player_id: PlayerId, role: Role) {
        self.counts.entry(player_id).or_default()[role.index()] += 1;
    }

    /// Placements of `player_id` across all roles.
    pub fn total(&self, player_id: PlayerId) -> u32 {
        self.counts.get(&player_id).map_or(0, |c| c.iter().sum())
    }
}
