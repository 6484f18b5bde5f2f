//! Matchmaking configuration: alternatives, tolerance, preset lanes, avoid-roles, combos.

use crate::models::player::{PlayerId, Rating};
use crate::models::role::{Role, Side};
use serde::{Deserialize, Serialize};

/// Explicit seat pins for one lane. Either side may be left open.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PresetLane {
    pub role: Role,
    #[serde(default)]
    pub blue: Option<PlayerId>,
    #[serde(default)]
    pub red: Option<PlayerId>,
}

impl PresetLane {
    pub fn new(role: Role, blue: Option<PlayerId>, red: Option<PlayerId>) -> Self {
        Self { role, blue, red }
    }

    pub fn player(&self, side: Side) -> Option<PlayerId> {
        match side {
            Side::Blue => self.blue,
            Side::Red => self.red,
        }
    }
}

/// All preset lanes for a run.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetLanes {
    #[serde(default)]
    pub lanes: Vec<PresetLane>,
    /// Coin-flip the two pinned players of a fully pinned lane on every trial.
    #[serde(default)]
    pub randomize_sides: bool,
}

/// Player must never be seated in `role`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvoidRole {
    pub player_id: PlayerId,
    pub role: Role,
}

/// Groups of players that must share a side. Only the first group is honored.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerCombos {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub groups: Vec<Vec<PlayerId>>,
}

impl PlayerCombos {
    /// The group actually enforced: the first one, when enabled and non-empty.
    pub fn honored_group(&self) -> Option<&[PlayerId]> {
        if !self.enabled {
            return None;
        }
        self.groups
            .first()
            .map(Vec::as_slice)
            .filter(|g| !g.is_empty())
    }
}

/// Which trials feed the role-usage counters.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsageTracking {
    /// Every seat placement of every trial counts, including discarded trials.
    #[default]
    EveryTrial,
    /// Only the placements of the trial kept for each alternative count.
    KeptOnly,
}

/// Input parameters for one matchmaking invocation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchConfig {
    /// Number of alternative matches requested.
    #[serde(default = "default_match_options")]
    pub match_options: usize,
    /// Max rating gap allowed between the two players of a lane.
    pub tolerance: Rating,
    #[serde(default)]
    pub preset_lanes: PresetLanes,
    #[serde(default)]
    pub avoid_roles: Vec<AvoidRole>,
    #[serde(default)]
    pub player_combos: PlayerCombos,
    #[serde(default)]
    pub usage_tracking: UsageTracking,
}

fn default_match_options() -> usize {
    1
}

impl MatchConfig {
    /// Config with no presets, avoid-roles or combos.
    pub fn new(match_options: usize, tolerance: Rating) -> Self {
        Self {
            match_options,
            tolerance,
            preset_lanes: PresetLanes::default(),
            avoid_roles: Vec::new(),
            player_combos: PlayerCombos::default(),
            usage_tracking: UsageTracking::default(),
        }
    }

    pub fn with_preset(mut self, lane: PresetLane) -> Self {
        self.preset_lanes.lanes.push(lane);
        self
    }

    pub fn with_randomized_sides(mut self, randomize: bool) -> Self {
        self.preset_lanes.randomize_sides = randomize;
        self
    }

    pub fn with_avoid(mut self, player_id: PlayerId, role: Role) -> Self {
        self.avoid_roles.push(AvoidRole { player_id, role });
        self
    }

    pub fn with_combo(mut self, group: Vec<PlayerId>) -> Self {
        self.player_combos.enabled = true;
        self.player_combos.groups.push(group);
        self
    }

    pub fn with_usage_tracking(mut self, tracking: UsageTracking) -> Self {
        self.usage_tracking = tracking;
        self
    }

    pub fn avoids(&self, player_id: PlayerId, role: Role) -> bool {
        self.avoid_roles
            .iter()
            .any(|a| a.player_id == player_id && a.role == role)
    }
}
