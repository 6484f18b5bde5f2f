//! Matchmaking errors and the structured result handed back to callers.

use crate::models::assignment::CandidateAssignment;
use crate::models::player::PlayerId;
use crate::models::role::{Role, SEAT_COUNT};
use serde::{Deserialize, Serialize};

/// Errors that can occur during a matchmaking invocation.
#[derive(Clone, Debug, PartialEq)]
pub enum MatchmakingError {
    /// Roster does not contain exactly 10 players.
    WrongPlayerCount { expected: usize, got: usize },
    /// The same player id appears twice in the roster.
    DuplicatePlayer(PlayerId),
    /// Zero alternatives requested.
    InvalidMatchOptions,
    /// Tolerance is negative or not a finite number.
    InvalidTolerance,
    /// A constraint references a player that is not in the roster.
    UnknownPlayer(PlayerId),
    /// Preset lanes pin the same player to more than one seat.
    PlayerPinnedTwice(PlayerId),
    /// A player is preset to a lane they are excluded from.
    PresetConflictsWithAvoid(PlayerId, Role),
    /// More than one preset lane was given for the same role.
    DuplicatePresetLane(Role),
    /// Every alternative exhausted its attempts without a valid match.
    NoValidMatch,
    /// Anything else that went wrong during the search.
    Internal,
}

impl std::fmt::Display for MatchmakingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchmakingError::WrongPlayerCount { expected, got } => {
                write!(f, "Exactly {} players are required (got {})", expected, got)
            }
            MatchmakingError::DuplicatePlayer(id) => write!(f, "Player {} is listed twice", id),
            MatchmakingError::InvalidMatchOptions => {
                write!(f, "At least one match option must be requested")
            }
            MatchmakingError::InvalidTolerance => {
                write!(f, "Tolerance must be a non-negative number")
            }
            MatchmakingError::UnknownPlayer(id) => {
                write!(f, "Player {} is not part of the selected roster", id)
            }
            MatchmakingError::PlayerPinnedTwice(id) => {
                write!(f, "Player {} is preset to more than one lane", id)
            }
            MatchmakingError::PresetConflictsWithAvoid(id, role) => {
                write!(f, "Player {} is preset to {} but must avoid that role", id, role)
            }
            MatchmakingError::DuplicatePresetLane(role) => {
                write!(f, "The {} lane is preset more than once", role)
            }
            MatchmakingError::NoValidMatch => write!(
                f,
                "No match satisfies the current constraints; try raising the tolerance or relaxing presets, avoided roles or combos"
            ),
            MatchmakingError::Internal => write!(f, "Unexpected error while generating matches"),
        }
    }
}

impl std::error::Error for MatchmakingError {}

/// Outcome of `generate_matches`: always a definite success or failure.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub success: bool,
    /// Generated alternatives; may be fewer than requested.
    pub matches: Vec<CandidateAssignment>,
    /// Human-readable reason when `success` is false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl MatchResult {
    pub fn failure(err: &MatchmakingError) -> Self {
        Self {
            success: false,
            matches: Vec::new(),
            message: Some(err.to_string()),
        }
    }
}

impl From<Result<Vec<CandidateAssignment>, MatchmakingError>> for MatchResult {
    fn from(outcome: Result<Vec<CandidateAssignment>, MatchmakingError>) -> Self {
        match outcome {
            Ok(matches) => Self {
                success: !matches.is_empty(),
                matches,
                message: None,
            },
            Err(e) => Self::failure(&e),
        }
    }
}

/// Expected roster size.
pub const PLAYERS_PER_MATCH: usize = SEAT_COUNT;
