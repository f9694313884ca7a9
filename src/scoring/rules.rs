/// Handicap strokes a player receives on a hole.
///
/// Up to 18 the handicap is spread one stroke per hole from stroke index 1
/// upwards. Beyond 18 every hole gets one stroke and the remainder adds a
/// second stroke on the hardest holes. Inputs are not range-checked.
pub fn shots_received(handicap: i32, stroke_index: i32) -> i32 {
    if handicap <= 0 {
        return 0;
    }

    if handicap <= 18 {
        if stroke_index <= handicap {
            1
        } else {
            0
        }
    } else {
        let extra = handicap - 18;
        if stroke_index <= extra {
            2
        } else {
            1
        }
    }
}

/// Net strokes after handicap. Not floored at zero; saturates at the
/// bounds of `i32` instead of overflowing.
pub fn net_score(gross: i32, shots: i32) -> i32 {
    gross.saturating_sub(shots)
}

/// Stableford points for a net score on a hole of the given par.
///
/// A net of 0 is the unplayed marker and scores nothing. Otherwise a net par
/// is worth 4, each stroke under adds one up to 6, and each stroke over
/// takes one away down to 0.
///
/// The difference is taken as `par - net` so that fewer strokes earn more
/// points: net 5 on a par 4 is 3 points, net 2 is 6. Flipping it to
/// `net - par` breaks those results.
pub fn stableford_points(par: i32, net: i32) -> i32 {
    if net == 0 {
        return 0;
    }

    match i64::from(par) - i64::from(net) {
        diff if diff <= -4 => 0,
        -3 => 1,
        -2 => 2,
        -1 => 3,
        0 => 4,
        1 => 5,
        _ => 6,
    }
}
