//! Assignment builder: one randomized trial that fills all 10 seats.

use crate::logic::usage::RoleUsage;
use crate::models::{
    CandidateAssignment, MatchConfig, Player, PlayerId, PresetLanes, Seat, Side, SEAT_COUNT,
};
use rand::seq::SliceRandom;
use rand::Rng;

/// Seat pins for one trial, indexed by `Seat::index`.
///
/// When `randomize_sides` is set, every lane with both sides pinned gets an
/// independent coin flip deciding whether its two players swap sides.
pub fn resolve_preset_seats<R: Rng + ?Sized>(
    preset: &PresetLanes,
    rng: &mut R,
) -> [Option<PlayerId>; SEAT_COUNT] {
    let mut seats = [None; SEAT_COUNT];
    for lane in &preset.lanes {
        let (mut blue, mut red) = (lane.player(Side::Blue), lane.player(Side::Red));
        if preset.randomize_sides && blue.is_some() && red.is_some() && rng.gen_bool(0.5) {
            std::mem::swap(&mut blue, &mut red);
        }
        seats[Seat::new(lane.role, Side::Blue).index()] = blue;
        seats[Seat::new(lane.role, Side::Red).index()] = red;
    }
    seats
}

/// Run one trial: seed pinned seats, shuffle the rest, then greedily fill the
/// empty seats in order with the eligible player least used in that role.
///
/// Returns `None` when the pins split the combo group or some seat has no
/// eligible player left. Earlier choices are never revisited; the caller
/// retries with fresh randomness instead.
/// `usage` is bumped for every greedy placement, including in trials that fail.
pub fn build_assignment<R: Rng + ?Sized>(
    players: &[Player],
    config: &MatchConfig,
    usage: &mut RoleUsage,
    rng: &mut R,
) -> Option<CandidateAssignment> {
    let pins = resolve_preset_seats(&config.preset_lanes, rng);

    let mut seats: [Option<&Player>; SEAT_COUNT] = [None; SEAT_COUNT];
    for (slot, pin) in seats.iter_mut().zip(pins) {
        if let Some(id) = pin {
            *slot = players.iter().find(|p| p.id == id);
        }
    }

    let mut pool: Vec<&Player> = players
        .iter()
        .filter(|p| !seats.iter().flatten().any(|s| s.id == p.id))
        .collect();
    pool.shuffle(rng);

    let combo = config.player_combos.honored_group();

    // Pins alone can already split the combo group.
    let pins_split_combo = seats.iter().enumerate().any(|(idx, seated)| match seated {
        Some(p) => Seat::from_index(idx).map_or(false, |s| breaks_combo(p.id, s.side, combo, &seats)),
        None => false,
    });
    if pins_split_combo {
        return None;
    }

    for seat in Seat::all() {
        if seats[seat.index()].is_some() {
            continue;
        }

        // (pool position, usage count) of the best candidate so far
        let mut chosen: Option<(usize, u32)> = None;
        for (pos, candidate) in pool.iter().enumerate() {
            if config.avoids(candidate.id, seat.role) {
                continue;
            }
            if breaks_combo(candidate.id, seat.side, combo, &seats) {
                continue;
            }
            let used = usage.count(candidate.id, seat.role);
            if chosen.map_or(true, |(_, best)| used < best) {
                chosen = Some((pos, used));
            }
        }

        let (pos, _) = chosen?;
        let player = pool.remove(pos);
        usage.record(player.id, seat.role);
        seats[seat.index()] = Some(player);
    }

    let filled: Vec<&Player> = seats.into_iter().collect::<Option<_>>()?;
    let filled: [&Player; SEAT_COUNT] = filled.try_into().ok()?;
    Some(CandidateAssignment::from_seats(&filled))
}

/// True if `candidate` belongs to the combo group and a group mate already sits on the other side.
fn breaks_combo(
    candidate: PlayerId,
    side: Side,
    group: Option<&[PlayerId]>,
    seats: &[Option<&Player>; SEAT_COUNT],
) -> bool {
    let Some(group) = group else {
        return false;
    };
    if !group.contains(&candidate) {
        return false;
    }
    seats.iter().enumerate().any(|(idx, seated)| match seated {
        Some(p) if group.contains(&p.id) => {
            Seat::from_index(idx).map_or(false, |s| s.side != side)
        }
        _ => false,
    })
}
