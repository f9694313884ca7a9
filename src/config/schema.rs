use serde::{Deserialize, Serialize};

/// User defaults, applied when neither the command line nor the round card
/// sets a value.
///
/// Example YAML:
/// ```yaml
/// handicap: 14
/// split_at: 9
/// color: false
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Playing handicap used when a card has none
    #[serde(default)]
    pub handicap: Option<i32>,

    /// Front-half hole count (default: 9)
    #[serde(default)]
    pub split_at: Option<usize>,

    /// Force colours off (or on when stdout is a terminal)
    #[serde(default)]
    pub color: Option<bool>,
}
