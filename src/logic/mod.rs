//! Matchmaking logic: validation, the assignment builder, scoring, the match search, roster import.

mod builder;
mod roster;
mod scoring;
mod search;
mod usage;
mod validation;

pub use builder::{build_assignment, resolve_preset_seats};
pub use roster::{parse_roster_csv, RosterError};
pub use scoring::{score_assignment, Score};
pub use search::{
    generate_matches, generate_matches_with_rng, generate_one_match, try_generate_matches,
    MAX_ATTEMPTS,
};
pub use usage::RoleUsage;
pub use validation::validate_input;
