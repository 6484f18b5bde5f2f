//! Candidate assignment: 10 seated players plus the derived lane and team views.

use crate::models::player::{Player, PlayerId, Rating};
use crate::models::role::{Role, Seat, Side, SEAT_COUNT};
use serde::{Deserialize, Serialize};

/// A player in a seat, with the rating they contribute in that role.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeatedPlayer {
    pub id: PlayerId,
    pub name: String,
    pub rating: Rating,
}

/// The two opposing players of one role.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LanePairing {
    pub role: Role,
    pub blue: SeatedPlayer,
    pub red: SeatedPlayer,
}

impl LanePairing {
    /// Absolute rating gap between the two sides of the lane.
    pub fn difference(&self) -> Rating {
        (self.blue.rating - self.red.rating).abs()
    }
}

/// One complete 5v5 assignment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateAssignment {
    /// Player ids in seat order (top blue, top red, jungle blue, ...).
    pub seats: Vec<PlayerId>,
    /// Per-role pairing view, in role order.
    pub lanes: Vec<LanePairing>,
    pub blue_total: Rating,
    pub red_total: Rating,
}

impl CandidateAssignment {
    /// Build from a fully populated seat layout (indexed by `Seat::index`).
    pub fn from_seats(seats: &[&Player; SEAT_COUNT]) -> Self {
        let seated = |role: Role, side: Side| {
            let p = seats[Seat::new(role, side).index()];
            SeatedPlayer {
                id: p.id,
                name: p.name.clone(),
                rating: p.rating(role),
            }
        };
        let lanes: Vec<LanePairing> = Role::ALL
            .into_iter()
            .map(|role| LanePairing {
                role,
                blue: seated(role, Side::Blue),
                red: seated(role, Side::Red),
            })
            .collect();
        let blue_total: Rating = lanes.iter().map(|l| l.blue.rating).sum();
        let red_total: Rating = lanes.iter().map(|l| l.red.rating).sum();
        Self {
            seats: seats.iter().map(|p| p.id).collect(),
            lanes,
            blue_total,
            red_total,
        }
    }

    pub fn player_at(&self, seat: Seat) -> Option<PlayerId> {
        self.seats.get(seat.index()).copied()
    }

    /// Seat occupied by `player_id`, if any.
    pub fn seat_of(&self, player_id: PlayerId) -> Option<Seat> {
        self.seats
            .iter()
            .position(|&id| id == player_id)
            .and_then(Seat::from_index)
    }

    pub fn side_of(&self, player_id: PlayerId) -> Option<Side> {
        self.seat_of(player_id).map(|s| s.side)
    }

    pub fn team(&self, side: Side) -> Vec<PlayerId> {
        Seat::all()
            .filter(|s| s.side == side)
            .filter_map(|s| self.player_at(s))
            .collect()
    }
}
