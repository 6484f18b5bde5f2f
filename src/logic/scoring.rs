//! Balance objective for a completed assignment.

use crate::models::{CandidateAssignment, Rating};

/// Score of a trial. Lower is better; `Invalid` can never be selected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Score {
    Valid(Rating),
    /// Some lane's rating gap exceeds the tolerance.
    Invalid,
}

impl Score {
    pub fn is_valid(&self) -> bool {
        matches!(self, Score::Valid(_))
    }

    pub fn value(&self) -> Option<Rating> {
        match self {
            Score::Valid(v) => Some(*v),
            Score::Invalid => None,
        }
    }

    /// Perfect lane parity and perfect team-total parity.
    pub fn is_perfect(&self) -> bool {
        matches!(self, Score::Valid(v) if *v == 0.0)
    }

    /// Strictly better than `other`. Any valid score beats `Invalid`.
    pub fn beats(&self, other: &Score) -> bool {
        match (self, other) {
            (Score::Valid(a), Score::Valid(b)) => a < b,
            (Score::Valid(_), Score::Invalid) => true,
            (Score::Invalid, _) => false,
        }
    }
}

/// Sum of the five lane gaps plus the gap between team totals,
/// or `Invalid` if any lane gap exceeds `tolerance`.
pub fn score_assignment(assignment: &CandidateAssignment, tolerance: Rating) -> Score {
    let mut lane_sum = 0.0;
    for lane in &assignment.lanes {
        let diff = lane.difference();
        if diff > tolerance {
            return Score::Invalid;
        }
        lane_sum += diff;
    }
    Score::Valid(lane_sum + (assignment.blue_total - assignment.red_total).abs())
}
