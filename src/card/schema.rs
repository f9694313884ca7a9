use serde::{Deserialize, Serialize};

use crate::course::Course;
use crate::scoring::Hole;

/// A round as written on disk.
///
/// Holes are given either directly or as a course/tee plus gross scores:
/// ```yaml
/// handicap: 18
/// course:
///   name: Kingston Heath
///   tees:
///     - { name: Blue, par: [4, 5, 3], stroke_index: [2, 1, 3] }
/// tee: Blue
/// scores: [5, 6]
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Card {
    /// Playing handicap for this round
    #[serde(default)]
    pub handicap: Option<i32>,

    /// Number of holes in the front half (default: 9)
    #[serde(default)]
    pub split_at: Option<usize>,

    #[serde(default)]
    pub holes: Option<Vec<Hole>>,

    #[serde(default)]
    pub course: Option<Course>,

    /// Tee name on `course`; the first tee is used when absent or unknown
    #[serde(default)]
    pub tee: Option<String>,

    /// Gross scores in hole order, used with `course`
    #[serde(default)]
    pub scores: Option<Vec<i32>>,
}
