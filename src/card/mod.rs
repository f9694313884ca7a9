mod schema;

pub use schema::Card;

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::course::{Course, Tee};
use crate::scoring::{Hole, DEFAULT_SPLIT};

/// Handicap and split point for one round after applying precedence:
/// command line, then the card, then the user config, then defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSettings {
    pub handicap: i32,
    pub split_at: usize,
}

impl RoundSettings {
    pub fn resolve(
        handicap: Option<i32>,
        split_at: Option<usize>,
        card: &Card,
        config: &Config,
    ) -> Self {
        Self {
            handicap: handicap.or(card.handicap).or(config.handicap).unwrap_or(0),
            split_at: split_at
                .or(card.split_at)
                .or(config.split_at)
                .unwrap_or(DEFAULT_SPLIT),
        }
    }
}

impl Card {
    /// The course and tee this card is played from, if it names a course
    /// with at least one tee.
    pub fn course_tee(&self) -> Option<(&Course, &Tee)> {
        let course = self.course.as_ref()?;
        course.tee(self.tee.as_deref()).map(|tee| (course, tee))
    }

    /// Resolve the card to the ordered hole list the engine scores.
    pub fn round_holes(&self) -> Result<Vec<Hole>> {
        match (&self.holes, &self.course) {
            (Some(holes), None) => {
                if self.scores.is_some() || self.tee.is_some() {
                    bail!("'scores' and 'tee' only apply to cards with a 'course'");
                }
                Ok(holes.clone())
            }
            (None, Some(course)) => {
                let Some((_, tee)) = self.course_tee() else {
                    bail!("Course '{}' has no tees", course.name);
                };
                if let Some(ref wanted) = self.tee {
                    if &tee.name != wanted {
                        tracing::warn!(
                            wanted = %wanted,
                            using = %tee.name,
                            "tee not found on course, using first tee"
                        );
                    }
                }
                let scores = self.scores.as_deref().unwrap_or_default();
                tee.holes(scores)
                    .with_context(|| format!("Failed to build holes for course '{}'", course.name))
            }
            (Some(_), Some(_)) => bail!("Card has both 'holes' and 'course'; use one"),
            (None, None) => bail!("Card has neither 'holes' nor 'course'"),
        }
    }
}

/// Parse a round card from YAML text
pub fn parse_card(content: &str) -> Result<Card> {
    serde_saphyr::from_str(content).context("Failed to parse round card")
}

/// Load a round card from a YAML file
///
/// # Errors
///
/// Returns an error if the file does not exist, cannot be read, or is not a
/// valid card.
pub fn load_card(path: &Path) -> Result<Card> {
    if !path.exists() {
        bail!("Round card not found at {}", path.display());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read round card at {}", path.display()))?;

    let card = parse_card(&content)
        .with_context(|| format!("Invalid round card in {}", path.display()))?;

    tracing::debug!(path = %path.display(), "loaded round card");

    Ok(card)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_parse_explicit_holes() {
        let yaml = r#"
handicap: 12
split_at: 9
holes:
  - { par: 4, stroke_index: 7, gross: 5 }
  - { par: 3, stroke_index: 15 }
"#;
        let card = parse_card(yaml).unwrap();
        assert_eq!(card.handicap, Some(12));
        assert_eq!(card.split_at, Some(9));
        let holes = card.round_holes().unwrap();
        assert_eq!(holes, vec![Hole::new(4, 7, 5), Hole::new(3, 15, 0)]);
    }

    #[test]
    fn test_parse_course_and_scores() {
        let yaml = r#"
course:
  name: Test Links
  tees:
    - { name: White, par: [4, 4], stroke_index: [1, 2] }
    - { name: Blue, par: [4, 5], stroke_index: [2, 1] }
tee: Blue
scores: [6]
"#;
        let card = parse_card(yaml).unwrap();
        assert!(card.handicap.is_none());
        let holes = card.round_holes().unwrap();
        assert_eq!(holes, vec![Hole::new(4, 2, 6), Hole::new(5, 1, 0)]);
    }

    #[test]
    fn test_unknown_tee_uses_first() {
        let yaml = r#"
course:
  name: Test Links
  tees:
    - { name: White, par: [4, 4], stroke_index: [1, 2] }
tee: Gold
"#;
        let holes = parse_card(yaml).unwrap().round_holes().unwrap();
        assert_eq!(holes, vec![Hole::new(4, 1, 0), Hole::new(4, 2, 0)]);
    }

    #[test]
    fn test_course_tee_resolves_named_tee() {
        let yaml = r#"
course:
  name: Test Links
  tees:
    - { name: White, par: [4, 4], stroke_index: [1, 2] }
    - { name: Blue, par: [4, 5], stroke_index: [2, 1], yardage: [400, 520] }
tee: Blue
"#;
        let card = parse_card(yaml).unwrap();
        let (course, tee) = card.course_tee().unwrap();
        assert_eq!(course.name, "Test Links");
        assert_eq!(tee.name, "Blue");
        assert_eq!(tee.total_par(), 9);
    }

    #[test]
    fn test_course_tee_absent_for_explicit_holes() {
        let card = Card {
            holes: Some(vec![Hole::new(4, 1, 4)]),
            ..Card::default()
        };
        assert!(card.course_tee().is_none());
    }

    #[test]
    fn test_load_card_invalid_yaml() {
        let path = env::temp_dir().join("scorecard-test-invalid-card.yaml");
        fs::write(&path, "holes: 7
").unwrap();

        let err = load_card(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid round card"));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_both_sources_rejected() {
        let card = Card {
            holes: Some(vec![]),
            course: Some(crate::course::Course {
                name: "X".to_string(),
                tees: vec![],
            }),
            ..Card::default()
        };
        assert!(card.round_holes().is_err());
    }

    #[test]
    fn test_no_source_rejected() {
        let err = Card::default().round_holes().unwrap_err();
        assert!(err.to_string().contains("neither"));
    }

    #[test]
    fn test_scores_without_course_rejected() {
        let card = Card {
            holes: Some(vec![Hole::new(4, 1, 4)]),
            scores: Some(vec![4]),
            ..Card::default()
        };
        assert!(card.round_holes().is_err());
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(parse_card("holes: []\nputts: 30\n").is_err());
    }

    #[test]
    fn test_settings_defaults() {
        let settings = RoundSettings::resolve(None, None, &Card::default(), &Config::default());
        assert_eq!(
            settings,
            RoundSettings {
                handicap: 0,
                split_at: 9
            }
        );
    }

    #[test]
    fn test_settings_precedence() {
        let card = Card {
            handicap: Some(12),
            ..Card::default()
        };
        let config = Config {
            handicap: Some(20),
            split_at: Some(10),
            color: None,
        };

        let settings = RoundSettings::resolve(None, None, &card, &config);
        assert_eq!(settings.handicap, 12);
        assert_eq!(settings.split_at, 10);

        let settings = RoundSettings::resolve(Some(3), Some(6), &card, &config);
        assert_eq!(settings.handicap, 3);
        assert_eq!(settings.split_at, 6);
    }

    #[test]
    fn test_load_card_from_file() {
        let path = env::temp_dir().join("scorecard-test-load-card.yaml");
        fs::write(
            &path,
            "handicap: 18\nholes:\n  - { par: 4, stroke_index: 1, gross: 4 }\n",
        )
        .unwrap();

        let card = load_card(&path).unwrap();
        assert_eq!(card.handicap, Some(18));
        assert_eq!(card.round_holes().unwrap().len(), 1);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_card_missing_file() {
        let path = env::temp_dir().join("scorecard-test-does-not-exist.yaml");
        let err = load_card(&path).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
