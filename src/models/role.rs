//! Role, Side and Seat: the fixed 5 lanes x 2 sides layout of a match.

use serde::{Deserialize, Serialize};

/// Number of roles (lanes) per match.
pub const ROLE_COUNT: usize = 5;

/// Number of seats per match: one per (role, side).
pub const SEAT_COUNT: usize = ROLE_COUNT * 2;

/// Lane designation. Declaration order is the seat-filling order.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Top,
    Jungle,
    Mid,
    Adc,
    Support,
}

impl Role {
    pub const ALL: [Role; ROLE_COUNT] = [Role::Top, Role::Jungle, Role::Mid, Role::Adc, Role::Support];

    pub fn index(self) -> usize {
        match self {
            Role::Top => 0,
            Role::Jungle => 1,
            Role::Mid => 2,
            Role::Adc => 3,
            Role::Support => 4,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Role::Top => "top",
            Role::Jungle => "jungle",
            Role::Mid => "mid",
            Role::Adc => "adc",
            Role::Support => "support",
        };
        f.write_str(label)
    }
}

/// Which team a seat belongs to (side A is blue, side B is red).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    #[default]
    Blue,
    Red,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Blue, Side::Red];

    pub fn index(self) -> usize {
        match self {
            Side::Blue => 0,
            Side::Red => 1,
        }
    }
}

/// A (role, side) pair. Seats are indexed `role * 2 + side`, so iterating
/// indices 0..SEAT_COUNT visits top blue, top red, jungle blue, ...
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Seat {
    pub role: Role,
    pub side: Side,
}

impl Seat {
    pub fn new(role: Role, side: Side) -> Self {
        Self { role, side }
    }

    pub fn index(self) -> usize {
        self.role.index() * 2 + self.side.index()
    }

    pub fn from_index(index: usize) -> Option<Seat> {
        let role = *Role::ALL.get(index / 2)?;
        let side = Side::BOTH[index % 2];
        Some(Seat { role, side })
    }

    /// All seats in filling order.
    pub fn all() -> impl Iterator<Item = Seat> {
        Role::ALL
            .into_iter()
            .flat_map(|role| Side::BOTH.into_iter().map(move |side| Seat { role, side }))
    }
}
