//! Input validation: runs before any search is attempted.

use crate::models::{MatchConfig, MatchmakingError, Player, PlayerId, PLAYERS_PER_MATCH};
use std::collections::HashSet;

/// Check roster size, roster uniqueness and that every constraint refers to a rostered player.
pub fn validate_input(players: &[Player], config: &MatchConfig) -> Result<(), MatchmakingError> {
    if players.len() != PLAYERS_PER_MATCH {
        return Err(MatchmakingError::WrongPlayerCount {
            expected: PLAYERS_PER_MATCH,
            got: players.len(),
        });
    }

    let mut roster: HashSet<PlayerId> = HashSet::with_capacity(players.len());
    for p in players {
        if !roster.insert(p.id) {
            return Err(MatchmakingError::DuplicatePlayer(p.id));
        }
    }

    if config.match_options == 0 {
        return Err(MatchmakingError::InvalidMatchOptions);
    }
    if !config.tolerance.is_finite() || config.tolerance < 0.0 {
        return Err(MatchmakingError::InvalidTolerance);
    }

    let known = |id: PlayerId| -> Result<(), MatchmakingError> {
        if roster.contains(&id) {
            Ok(())
        } else {
            Err(MatchmakingError::UnknownPlayer(id))
        }
    };

    let mut pinned_roles = HashSet::new();
    let mut pinned_players = HashSet::new();
    for lane in &config.preset_lanes.lanes {
        if !pinned_roles.insert(lane.role) {
            return Err(MatchmakingError::DuplicatePresetLane(lane.role));
        }
        for id in [lane.blue, lane.red].into_iter().flatten() {
            known(id)?;
            if !pinned_players.insert(id) {
                return Err(MatchmakingError::PlayerPinnedTwice(id));
            }
            // Side swaps keep the pin in the same lane, so this holds for every trial.
            if config.avoids(id, lane.role) {
                return Err(MatchmakingError::PresetConflictsWithAvoid(id, lane.role));
            }
        }
    }

    for avoid in &config.avoid_roles {
        known(avoid.player_id)?;
    }

    if config.player_combos.enabled {
        for id in config.player_combos.groups.iter().flatten() {
            known(*id)?;
        }
    }

    Ok(())
}
