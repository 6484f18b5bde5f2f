//! Roster import: build players from a CSV export of the league sheet.
//!
//! Expected header: `name,top,jungle,mid,adc,support`, with an optional `id` column (UUID).

use crate::models::{Player, PlayerId, Rating, Role, RoleRatings};
use serde::Deserialize;
use std::io::Read;
use uuid::Uuid;

/// Errors while reading a roster CSV.
#[derive(Debug)]
pub enum RosterError {
    /// Malformed CSV or a field that could not be parsed.
    Csv { row: usize, source: csv::Error },
    /// Player name is empty.
    BlankName { row: usize },
    /// Rating is negative or not a finite number.
    InvalidRating { row: usize, role: Role },
}

impl std::fmt::Display for RosterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterError::Csv { row, source } => write!(f, "Row {}: {}", row, source),
            RosterError::BlankName { row } => write!(f, "Row {}: player name is empty", row),
            RosterError::InvalidRating { row, role } => {
                write!(f, "Row {}: {} rating must be a non-negative number", row, role)
            }
        }
    }
}

impl std::error::Error for RosterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RosterError::Csv { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
struct RosterRow {
    #[serde(default)]
    id: Option<PlayerId>,
    name: String,
    top: Rating,
    jungle: Rating,
    mid: Rating,
    adc: Rating,
    support: Rating,
}

/// Parse players from CSV. Rows without an id get a fresh one.
pub fn parse_roster_csv<R: Read>(reader: R) -> Result<Vec<Player>, RosterError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut players = Vec::new();
    for (i, record) in rdr.deserialize::<RosterRow>().enumerate() {
        // Header is line 1.
        let row = i + 2;
        let record = record.map_err(|source| RosterError::Csv { row, source })?;
        if record.name.is_empty() {
            return Err(RosterError::BlankName { row });
        }
        let ratings = RoleRatings::new(
            record.top,
            record.jungle,
            record.mid,
            record.adc,
            record.support,
        );
        if let Some(role) = Role::ALL
            .into_iter()
            .find(|&r| !ratings.get(r).is_finite() || ratings.get(r) < 0.0)
        {
            return Err(RosterError::InvalidRating { row, role });
        }
        let id = record.id.unwrap_or_else(Uuid::new_v4);
        players.push(Player::with_id(id, record.name, ratings));
    }
    Ok(players)
}
