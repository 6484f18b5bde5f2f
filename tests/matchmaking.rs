//! Integration tests for the match search: validation, constraints, scoring and result shape.

use league_matchmaker::{
    generate_matches, generate_matches_with_rng, generate_one_match, score_assignment,
    try_generate_matches, CandidateAssignment, MatchConfig, MatchResult, MatchmakingError,
    Player, PresetLane, Role, RoleRatings, RoleUsage, Score, Seat, Side, UsageTracking,
};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::collections::HashSet;

/// Ratings all within 40..=50, so a tolerance of 10 can never be exceeded.
fn league_roster() -> Vec<Player> {
    (0..10)
        .map(|i| {
            let ratings = RoleRatings::new(
                40.0 + i as f64,
                50.0 - i as f64,
                45.0 + (i % 3) as f64,
                42.0 + (i % 5) as f64,
                48.0 - (i % 4) as f64,
            );
            Player::new(format!("P{i}"), ratings)
        })
        .collect()
}

fn roster_of(n: usize) -> Vec<Player> {
    (0..n)
        .map(|i| Player::new(format!("P{i}"), RoleRatings::uniform(5.0)))
        .collect()
}

fn assert_everyone_seated_once(players: &[Player], m: &CandidateAssignment) {
    let seated: HashSet<_> = m.seats.iter().copied().collect();
    assert_eq!(m.seats.len(), 10);
    assert_eq!(seated.len(), 10);
    for p in players {
        assert!(seated.contains(&p.id), "{} missing", p.name);
    }
}

#[test]
fn wrong_player_count_fails_without_search() {
    for n in [9, 11] {
        let result = generate_matches(&roster_of(n), &MatchConfig::new(1, 10.0));
        assert!(!result.success);
        assert!(result.matches.is_empty());
        assert!(result.message.is_some());
    }
    let err = try_generate_matches(&roster_of(9), &MatchConfig::new(1, 10.0), &mut StdRng::seed_from_u64(0));
    assert_eq!(err, Err(MatchmakingError::WrongPlayerCount { expected: 10, got: 9 }));
}

#[test]
fn identical_ratings_give_a_perfect_match() {
    let players = roster_of(10);
    let config = MatchConfig::new(1, 0.0);
    let mut rng = StdRng::seed_from_u64(11);

    let result = generate_matches_with_rng(&players, &config, &mut rng);
    assert!(result.success);
    assert_eq!(result.matches.len(), 1);
    let m = &result.matches[0];
    assert_everyone_seated_once(&players, m);
    assert_eq!(score_assignment(m, 0.0), Score::Valid(0.0));
    assert_eq!(m.blue_total, m.red_total);
}

#[test]
fn unsatisfiable_tolerance_reports_failure() {
    let players: Vec<Player> = (0..10)
        .map(|i| Player::new(format!("P{i}"), RoleRatings::uniform(i as f64 * 10.0)))
        .collect();
    let config = MatchConfig::new(2, 0.0);
    let mut rng = StdRng::seed_from_u64(12);

    let result = generate_matches_with_rng(&players, &config, &mut rng);
    assert!(!result.success);
    assert!(result.matches.is_empty());
    assert_eq!(result.message, Some(MatchmakingError::NoValidMatch.to_string()));
}

#[test]
fn several_alternatives_each_satisfy_constraints() {
    let players = league_roster();
    let tolerance = 10.0;
    let group = vec![players[2].id, players[8].id];
    let config = MatchConfig::new(3, tolerance)
        .with_preset(PresetLane::new(Role::Jungle, Some(players[0].id), None))
        .with_avoid(players[5].id, Role::Support)
        .with_avoid(players[6].id, Role::Top)
        .with_combo(group.clone());
    let mut rng = StdRng::seed_from_u64(13);

    let result = generate_matches_with_rng(&players, &config, &mut rng);
    assert!(result.success);
    assert!((1..=3).contains(&result.matches.len()));

    for m in &result.matches {
        assert_everyone_seated_once(&players, m);
        for lane in &m.lanes {
            assert!(lane.difference() <= tolerance);
        }
        assert_eq!(m.player_at(Seat::new(Role::Jungle, Side::Blue)), Some(players[0].id));
        assert_ne!(m.seat_of(players[5].id).unwrap().role, Role::Support);
        assert_ne!(m.seat_of(players[6].id).unwrap().role, Role::Top);
        assert_eq!(m.side_of(group[0]), m.side_of(group[1]));

        // re-scoring never lands on Invalid and stays within the tolerance bound
        let score = score_assignment(m, tolerance).value().unwrap();
        assert!(score <= 10.0 * tolerance);
    }
}

#[test]
fn combo_split_by_presets_is_infeasible() {
    let players = league_roster();
    let config = MatchConfig::new(1, 10.0)
        .with_preset(PresetLane::new(Role::Top, Some(players[0].id), Some(players[1].id)))
        .with_combo(vec![players[0].id, players[1].id]);
    let mut rng = StdRng::seed_from_u64(14);

    let err = try_generate_matches(&players, &config, &mut rng);
    assert_eq!(err, Err(MatchmakingError::NoValidMatch));
}

#[test]
fn only_first_combo_group_is_enforced() {
    let players = league_roster();
    // second group is contradictory with the pins; it must be ignored
    let config = MatchConfig::new(1, 10.0)
        .with_preset(PresetLane::new(Role::Mid, Some(players[3].id), Some(players[4].id)))
        .with_combo(vec![players[0].id, players[1].id])
        .with_combo(vec![players[3].id, players[4].id]);
    let mut rng = StdRng::seed_from_u64(15);

    let matches = try_generate_matches(&players, &config, &mut rng).unwrap();
    assert_eq!(matches[0].side_of(players[0].id), matches[0].side_of(players[1].id));
}

#[test]
fn invalid_configuration_is_rejected() {
    let players = league_roster();
    let stranger = Player::new("Stranger", RoleRatings::uniform(1.0));
    let mut rng = StdRng::seed_from_u64(16);

    let cases = [
        (MatchConfig::new(0, 10.0), MatchmakingError::InvalidMatchOptions),
        (MatchConfig::new(1, -1.0), MatchmakingError::InvalidTolerance),
        (
            MatchConfig::new(1, 10.0).with_avoid(stranger.id, Role::Mid),
            MatchmakingError::UnknownPlayer(stranger.id),
        ),
        (
            MatchConfig::new(1, 10.0)
                .with_preset(PresetLane::new(Role::Top, Some(players[0].id), None))
                .with_preset(PresetLane::new(Role::Mid, None, Some(players[0].id))),
            MatchmakingError::PlayerPinnedTwice(players[0].id),
        ),
        (
            MatchConfig::new(1, 10.0)
                .with_preset(PresetLane::new(Role::Top, Some(players[0].id), None))
                .with_preset(PresetLane::new(Role::Top, None, Some(players[1].id))),
            MatchmakingError::DuplicatePresetLane(Role::Top),
        ),
    ];
    for (config, expected) in cases {
        assert_eq!(try_generate_matches(&players, &config, &mut rng), Err(expected));
    }

    let mut dup = players.clone();
    dup[9] = dup[0].clone();
    assert_eq!(
        try_generate_matches(&dup, &MatchConfig::new(1, 10.0), &mut rng),
        Err(MatchmakingError::DuplicatePlayer(players[0].id))
    );
}

#[test]
fn usage_counters_track_every_trial_by_default() {
    let players = league_roster();
    let config = MatchConfig::new(1, 10.0);
    let mut usage = RoleUsage::new();
    let mut rng = StdRng::seed_from_u64(17);

    assert!(generate_one_match(&players, &config, &mut usage, &mut rng).is_some());
    let total: u32 = players.iter().map(|p| usage.total(p.id)).sum();
    assert!(total >= 10);
    assert_eq!(total % 10, 0);
}

#[test]
fn kept_only_tracking_counts_just_the_kept_trial() {
    let players = league_roster();
    let config = MatchConfig::new(1, 10.0).with_usage_tracking(UsageTracking::KeptOnly);
    let mut usage = RoleUsage::new();
    let mut rng = StdRng::seed_from_u64(18);

    let m = generate_one_match(&players, &config, &mut usage, &mut rng).unwrap();
    for p in &players {
        let role = m.seat_of(p.id).unwrap().role;
        assert_eq!(usage.count(p.id, role), 1);
        assert_eq!(usage.total(p.id), 1);
    }
}

#[test]
fn same_seed_same_matches() {
    let players = league_roster();
    let config = MatchConfig::new(2, 10.0);

    let a = generate_matches_with_rng(&players, &config, &mut StdRng::seed_from_u64(19));
    let b = generate_matches_with_rng(&players, &config, &mut StdRng::seed_from_u64(19));
    assert_eq!(a, b);
}

#[test]
fn config_and_result_use_camel_case_json() {
    let players = roster_of(10);
    let json = serde_json::json!({
        "matchOptions": 2,
        "tolerance": 0,
        "presetLanes": {
            "lanes": [{ "role": "adc", "blue": players[0].id }],
            "randomizeSides": true
        },
        "avoidRoles": [{ "playerId": players[1].id, "role": "top" }],
        "playerCombos": { "enabled": false, "groups": [] }
    });
    let config: MatchConfig = serde_json::from_value(json).unwrap();
    assert_eq!(config.match_options, 2);
    assert!(config.preset_lanes.randomize_sides);
    assert!(config.avoids(players[1].id, Role::Top));
    assert_eq!(config.usage_tracking, UsageTracking::EveryTrial);

    let result = generate_matches_with_rng(&players, &config, &mut StdRng::seed_from_u64(20));
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["success"], true);
    assert!(value["matches"][0]["blueTotal"].is_number());
    assert!(value.get("message").is_none());

    let back: MatchResult = serde_json::from_value(value).unwrap();
    assert_eq!(back, result);
}

#[test]
fn preset_into_an_avoided_role_is_rejected() {
    let players = roster_of(10);
    let config = MatchConfig::new(1, 0.0)
        .with_preset(PresetLane::new(Role::Top, Some(players[0].id), None))
        .with_avoid(players[0].id, Role::Top);
    let mut rng = StdRng::seed_from_u64(21);

    let result = generate_matches_with_rng(&players, &config, &mut rng);
    assert!(!result.success);
    assert!(result.matches.is_empty());
    let expected = MatchmakingError::PresetConflictsWithAvoid(players[0].id, Role::Top);
    assert_eq!(result.message, Some(expected.to_string()));

    // a side swap cannot move the pin out of the lane either
    let swapped = MatchConfig::new(1, 0.0)
        .with_preset(PresetLane::new(Role::Adc, Some(players[1].id), Some(players[2].id)))
        .with_randomized_sides(true)
        .with_avoid(players[2].id, Role::Adc);
    assert_eq!(
        try_generate_matches(&players, &swapped, &mut rng),
        Err(MatchmakingError::PresetConflictsWithAvoid(players[2].id, Role::Adc))
    );
}

/// Random source that fails on first use.
struct FailingRng;

impl RngCore for FailingRng {
    fn next_u32(&mut self) -> u32 {
        panic!("random source unavailable")
    }

    fn next_u64(&mut self) -> u64 {
        panic!("random source unavailable")
    }

    fn fill_bytes(&mut self, _dest: &mut [u8]) {
        panic!("random source unavailable")
    }

    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
        panic!("random source unavailable")
    }
}

#[test]
fn panic_during_search_becomes_generic_failure() {
    let players = league_roster();
    let config = MatchConfig::new(2, 10.0);

    let result = generate_matches_with_rng(&players, &config, &mut FailingRng);
    assert!(!result.success);
    assert!(result.matches.is_empty());
    assert_eq!(result.message, Some(MatchmakingError::Internal.to_string()));
}

#[test]
fn randomized_sides_keep_pinned_pair_in_their_lane() {
    let players = league_roster();
    let tolerance = 10.0;
    let (a, b) = (players[0].id, players[1].id);
    let config = MatchConfig::new(3, tolerance)
        .with_preset(PresetLane::new(Role::Top, Some(a), Some(b)))
        .with_randomized_sides(true);

    for seed in 0..5 {
        let result = generate_matches_with_rng(&players, &config, &mut StdRng::seed_from_u64(seed));
        assert!(result.success);
        for m in &result.matches {
            assert_everyone_seated_once(&players, m);
            let top: HashSet<_> = [
                m.player_at(Seat::new(Role::Top, Side::Blue)),
                m.player_at(Seat::new(Role::Top, Side::Red)),
            ]
            .into_iter()
            .flatten()
            .collect();
            assert_eq!(top, HashSet::from([a, b]));
            assert!(m.lanes[Role::Top.index()].difference() <= tolerance);
            assert!(score_assignment(m, tolerance).is_valid());
        }
    }
}
