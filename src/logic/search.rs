//! Match search: repeated trials, keep the best-scoring valid one, once per requested alternative.

use crate::logic::builder::build_assignment;
use crate::logic::scoring::{score_assignment, Score};
use crate::logic::usage::RoleUsage;
use crate::logic::validation::validate_input;
use crate::models::{
    CandidateAssignment, MatchConfig, MatchResult, MatchmakingError, Player, UsageTracking,
};
use rand::Rng;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Trials per alternative. The only bound on search time.
pub const MAX_ATTEMPTS: usize = 10_000;

/// Search for one alternative: up to `MAX_ATTEMPTS` trials, stopping early on a perfect score.
///
/// Returns the lowest-scoring valid trial, or `None` if every trial was
/// incomplete or out of tolerance.
pub fn generate_one_match<R: Rng + ?Sized>(
    players: &[Player],
    config: &MatchConfig,
    usage: &mut RoleUsage,
    rng: &mut R,
) -> Option<CandidateAssignment> {
    let mut best: Option<(CandidateAssignment, Score)> = None;
    let mut best_usage: Option<RoleUsage> = None;
    let mut attempts = 0;

    while attempts < MAX_ATTEMPTS {
        attempts += 1;

        let (trial, trial_usage) = match config.usage_tracking {
            UsageTracking::EveryTrial => (build_assignment(players, config, usage, rng), None),
            UsageTracking::KeptOnly => {
                let mut scratch = usage.clone();
                let trial = build_assignment(players, config, &mut scratch, rng);
                (trial, Some(scratch))
            }
        };
        let Some(trial) = trial else {
            continue;
        };

        let score = score_assignment(&trial, config.tolerance);
        let improves = match &best {
            Some((_, best_score)) => score.beats(best_score),
            None => score.is_valid(),
        };
        if improves {
            best = Some((trial, score));
            best_usage = trial_usage;
            if score.is_perfect() {
                break;
            }
        }
    }

    if let Some(kept) = best_usage {
        *usage = kept;
    }

    match &best {
        Some((_, score)) => log::debug!("Alternative found after {} attempts (score {:?})", attempts, score),
        None => log::debug!("No valid alternative after {} attempts", attempts),
    }
    best.map(|(assignment, _)| assignment)
}

/// Validate the input, then run one search per requested alternative with shared usage counters.
///
/// Succeeds with 1..=`match_options` assignments; fails with `NoValidMatch` if none were found.
pub fn try_generate_matches<R: Rng + ?Sized>(
    players: &[Player],
    config: &MatchConfig,
    rng: &mut R,
) -> Result<Vec<CandidateAssignment>, MatchmakingError> {
    validate_input(players, config)?;

    if config.player_combos.enabled && config.player_combos.groups.len() > 1 {
        log::warn!(
            "{} combo groups given; only the first is enforced",
            config.player_combos.groups.len()
        );
    }

    let mut usage = RoleUsage::new();
    let mut matches = Vec::with_capacity(config.match_options);
    for _ in 0..config.match_options {
        if let Some(found) = generate_one_match(players, config, &mut usage, rng) {
            matches.push(found);
        }
    }

    if matches.is_empty() {
        return Err(MatchmakingError::NoValidMatch);
    }
    if matches.len() < config.match_options {
        log::warn!(
            "Only {} of {} requested alternatives could be generated",
            matches.len(),
            config.match_options
        );
    }
    log::info!("Generated {} match alternative(s)", matches.len());
    Ok(matches)
}

/// Like `generate_matches`, with a caller-supplied random source.
pub fn generate_matches_with_rng<R: Rng + ?Sized>(
    players: &[Player],
    config: &MatchConfig,
    rng: &mut R,
) -> MatchResult {
    let outcome = catch_unwind(AssertUnwindSafe(|| try_generate_matches(players, config, rng)));
    match outcome {
        Ok(result) => {
            if let Err(e) = &result {
                log::info!("Matchmaking failed: {}", e);
            }
            MatchResult::from(result)
        }
        Err(_) => {
            log::error!("Matchmaking panicked; reporting a generic failure");
            MatchResult::failure(&MatchmakingError::Internal)
        }
    }
}

/// Generate up to `config.match_options` balanced 5v5 assignments for exactly 10 players.
///
/// Never panics: every failure is reported through `MatchResult::success` and `message`.
pub fn generate_matches(players: &[Player], config: &MatchConfig) -> MatchResult {
    generate_matches_with_rng(players, config, &mut rand::thread_rng())
}
