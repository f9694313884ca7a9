use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::Add;

/// A single hole on the card.
///
/// `gross == 0` means the hole has not been played yet. The engine keeps that
/// convention for its numeric output; [`Hole::gross_score`] gives the
/// optional view for callers that prefer it.
///
/// Example YAML:
/// ```yaml
/// - { par: 4, stroke_index: 7, gross: 5 }
/// - { par: 3, stroke_index: 17 }   # not played yet
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Hole {
    pub par: i32,

    /// Difficulty rank on the course (1 = hardest)
    pub stroke_index: i32,

    /// Strokes taken, 0 while unplayed
    #[serde(default)]
    pub gross: i32,
}

impl Hole {
    pub fn new(par: i32, stroke_index: i32, gross: i32) -> Self {
        Self {
            par,
            stroke_index,
            gross,
        }
    }

    pub fn is_played(&self) -> bool {
        self.gross > 0
    }

    /// Gross strokes if the hole has been played
    pub fn gross_score(&self) -> Option<i32> {
        self.is_played().then_some(self.gross)
    }
}

/// Everything needed to score one hole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoleInput {
    pub par: i32,
    pub gross: i32,
    pub stroke_index: i32,
    pub handicap: i32,
}

impl HoleInput {
    pub fn for_hole(hole: &Hole, handicap: i32) -> Self {
        Self {
            par: hole.par,
            gross: hole.gross,
            stroke_index: hole.stroke_index,
            handicap,
        }
    }
}

/// Result of scoring one hole.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct HoleScore {
    /// Handicap strokes received on this hole
    pub shots: i32,
    /// Net strokes, 0 while unplayed
    pub net: i32,
    /// Stableford points, 0 while unplayed
    pub points: i32,
}

/// A hole paired with its score, numbered from 1 in card order.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ScoredHole {
    pub number: usize,
    pub hole: Hole,
    pub score: HoleScore,
}

/// Gross, net and points summed over a run of holes. Sums saturate at the
/// bounds of `i32`.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Totals {
    pub gross_total: i32,
    pub net_total: i32,
    pub points_total: i32,
}

impl Add for Totals {
    type Output = Totals;

    fn add(self, rhs: Totals) -> Totals {
        Totals {
            gross_total: self.gross_total.saturating_add(rhs.gross_total),
            net_total: self.net_total.saturating_add(rhs.net_total),
            points_total: self.points_total.saturating_add(rhs.points_total),
        }
    }
}

impl Sum for Totals {
    fn sum<I: Iterator<Item = Totals>>(iter: I) -> Totals {
        iter.fold(Totals::default(), Add::add)
    }
}

/// Front nine, back nine and full-round totals.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Split {
    pub out: Totals,
    #[serde(rename = "in")]
    pub inward: Totals,
    pub total: Totals,
}
