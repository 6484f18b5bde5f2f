//! Data structures for the matchmaker: players, roles and seats, configuration, assignments, results.

mod assignment;
mod config;
mod outcome;
mod player;
mod role;

pub use assignment::{CandidateAssignment, LanePairing, SeatedPlayer};
pub use config::{AvoidRole, MatchConfig, PlayerCombos, PresetLane, PresetLanes, UsageTracking};
pub use outcome::{MatchResult, MatchmakingError, PLAYERS_PER_MATCH};
pub use player::{Player, PlayerId, Rating, RoleRatings};
pub use role::{Role, Seat, Side, ROLE_COUNT, SEAT_COUNT};
