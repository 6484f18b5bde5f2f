//! League matchmaker: library with models and the team-matchmaking engine.

pub mod logic;
pub mod models;

pub use logic::{
    build_assignment, generate_matches, generate_matches_with_rng, generate_one_match,
    parse_roster_csv, resolve_preset_seats, score_assignment, try_generate_matches,
    validate_input, RoleUsage, RosterError, Score, MAX_ATTEMPTS,
};
pub use models::{
    AvoidRole, CandidateAssignment, LanePairing, MatchConfig, MatchResult, MatchmakingError,
    Player, PlayerCombos, PlayerId, PresetLane, PresetLanes, Rating, Role, RoleRatings, Seat,
    SeatedPlayer, Side, UsageTracking, PLAYERS_PER_MATCH, ROLE_COUNT, SEAT_COUNT,
};
