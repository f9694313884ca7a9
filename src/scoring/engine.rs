use super::rules::{net_score, shots_received, stableford_points};
use super::types::{Hole, HoleInput, HoleScore, ScoredHole, Split, Totals};

/// Holes in the front nine when no split point is given
pub const DEFAULT_SPLIT: usize = 9;

/// Score a single hole.
///
/// Shots received are always reported since they only depend on the
/// handicap allocation. Net and points stay at 0 until the hole is played.
pub fn calculate_hole_score(input: HoleInput) -> HoleScore {
    let shots = shots_received(input.handicap, input.stroke_index);

    if input.gross > 0 {
        let net = net_score(input.gross, shots);
        HoleScore {
            shots,
            net,
            points: stableford_points(input.par, net),
        }
    } else {
        HoleScore {
            shots,
            net: 0,
            points: 0,
        }
    }
}

/// Sum gross, net and points over `holes`, each scored independently.
pub fn calculate_totals(holes: &[Hole], handicap: i32) -> Totals {
    holes
        .iter()
        .map(|hole| {
            let score = calculate_hole_score(HoleInput::for_hole(hole, handicap));
            Totals {
                gross_total: hole.gross,
                net_total: score.net,
                points_total: score.points,
            }
        })
        .sum()
}

/// Totals for the first `split_at` holes, the rest, and the whole card.
///
/// A split point past the end of the card puts every hole in `out`.
pub fn calculate_split(holes: &[Hole], handicap: i32, split_at: usize) -> Split {
    let (out_holes, in_holes) = holes.split_at(split_at.min(holes.len()));

    Split {
        out: calculate_totals(out_holes, handicap),
        inward: calculate_totals(in_holes, handicap),
        total: calculate_totals(holes, handicap),
    }
}

/// Per-hole breakdown in card order, numbered from 1.
pub fn score_round(holes: &[Hole], handicap: i32) -> Vec<ScoredHole> {
    holes
        .iter()
        .enumerate()
        .map(|(idx, hole)| {
            let score = calculate_hole_score(HoleInput::for_hole(hole, handicap));
            tracing::trace!(
                hole = idx + 1,
                par = hole.par,
                gross = hole.gross,
                shots = score.shots,
                net = score.net,
                points = score.points,
                "scored hole"
            );
            ScoredHole {
                number: idx + 1,
                hole: *hole,
                score,
            }
        })
        .collect()
}
