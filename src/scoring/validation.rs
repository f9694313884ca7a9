use std::collections::HashMap;

use super::types::Hole;

/// Largest playing handicap accepted on a card
pub const MAX_HANDICAP: i32 = 54;

/// Most holes a single round can have
pub const MAX_HOLES: usize = 18;

/// Check a round before scoring it.
/// Returns all validation errors at once (not just the first).
///
/// The scoring functions never call this: they compute a result for any
/// integers they are given. This is for callers that want to reject bad
/// input up front.
pub fn validate_round(holes: &[Hole], handicap: i32) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if !(0..=MAX_HANDICAP).contains(&handicap) {
        errors.push(format!(
            "handicap: must be between 0 and {}, got {}",
            MAX_HANDICAP, handicap
        ));
    }

    if holes.len() > MAX_HOLES {
        errors.push(format!(
            "holes: a round has at most {} holes, got {}",
            MAX_HOLES,
            holes.len()
        ));
    }

    // stroke index -> first hole that used it
    let mut seen: HashMap<i32, usize> = HashMap::new();

    for (i, hole) in holes.iter().enumerate() {
        if hole.par < 1 {
            errors.push(format!("holes[{}].par: must be at least 1, got {}", i, hole.par));
        }

        if hole.gross < 0 {
            errors.push(format!(
                "holes[{}].gross: must be non-negative (0 = not played), got {}",
                i, hole.gross
            ));
        }

        if !(1..=MAX_HOLES as i32).contains(&hole.stroke_index) {
            errors.push(format!(
                "holes[{}].stroke_index: must be between 1 and {}, got {}",
                i, MAX_HOLES, hole.stroke_index
            ));
        } else if let Some(first) = seen.get(&hole.stroke_index) {
            errors.push(format!(
                "holes[{}].stroke_index: {} already used by holes[{}]",
                i, hole.stroke_index, first
            ));
        } else {
            seen.insert(hole.stroke_index, i);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_round() -> Vec<Hole> {
        (1..=18).map(|si| Hole::new(4, si, 5)).collect()
    }

    #[test]
    fn test_valid_round() {
        assert!(validate_round(&valid_round(), 18).is_ok());
    }

    #[test]
    fn test_empty_round() {
        assert!(validate_round(&[], 0).is_ok());
    }

    #[test]
    fn test_nine_hole_card_with_odd_indices() {
        let holes: Vec<Hole> = (0..9).map(|i| Hole::new(4, i * 2 + 1, 0)).collect();
        assert!(validate_round(&holes, 9).is_ok());
    }

    #[test]
    fn test_handicap_out_of_range() {
        let result = validate_round(&valid_round(), 55);
        let errors = result.unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("handicap"));

        assert!(validate_round(&valid_round(), -1).is_err());
        assert!(validate_round(&valid_round(), 54).is_ok());
    }

    #[test]
    fn test_invalid_par() {
        let mut holes = valid_round();
        holes[2].par = 0;
        let errors = validate_round(&holes, 10).unwrap_err();
        assert!(errors[0].contains("holes[2].par"));
    }

    #[test]
    fn test_negative_gross() {
        let mut holes = valid_round();
        holes[4].gross = -1;
        let errors = validate_round(&holes, 10).unwrap_err();
        assert!(errors[0].contains("holes[4].gross"));
    }

    #[test]
    fn test_stroke_index_out_of_range() {
        let mut holes = valid_round();
        holes[0].stroke_index = 19;
        let errors = validate_round(&holes, 10).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("holes[0].stroke_index"));
    }

    #[test]
    fn test_duplicate_stroke_index() {
        let mut holes = valid_round();
        holes[5].stroke_index = 1;
        let errors = validate_round(&holes, 10).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0],
            "holes[5].stroke_index: 1 already used by holes[0]"
        );
    }

    #[test]
    fn test_too_many_holes() {
        let mut holes = valid_round();
        holes.push(Hole::new(4, 1, 4));
        let errors = validate_round(&holes, 10).unwrap_err();
        assert!(errors.iter().any(|e| e.starts_with("holes: ")));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut holes = valid_round();
        holes[0].par = -4; // Error 1
        holes[1].stroke_index = 0; // Error 2
        let errors = validate_round(&holes, 60).unwrap_err(); // Error 3
        assert_eq!(errors.len(), 3);
    }
}
