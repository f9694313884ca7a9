use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::scoring::Hole;

/// A course as it appears on a round card.
///
/// Example YAML:
/// ```yaml
/// course:
///   name: Kingston Heath
///   tees:
///     - name: Blue
///       par: [4, 5, 3, ...]
///       stroke_index: [7, 1, 15, ...]
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Course {
    pub name: String,
    pub tees: Vec<Tee>,
}

/// One set of tees: pars per hole plus optional stroke indices and yardages.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Tee {
    pub name: String,

    pub par: Vec<i32>,

    #[serde(default)]
    pub stroke_index: Option<Vec<i32>>,

    #[serde(default)]
    pub yardage: Option<Vec<u32>>,

    /// Slope rating, carried for display only
    #[serde(default)]
    pub slope: Option<u32>,
}

impl Course {
    /// Find a tee by name, falling back to the first tee when the name is
    /// missing or unknown.
    pub fn tee(&self, name: Option<&str>) -> Option<&Tee> {
        name.and_then(|n| self.tees.iter().find(|t| t.name == n))
            .or_else(|| self.tees.first())
    }
}

impl Tee {
    pub fn total_par(&self) -> i32 {
        self.par.iter().sum()
    }

    pub fn total_yardage(&self) -> Option<u32> {
        self.yardage.as_ref().map(|y| y.iter().sum())
    }

    /// Build the hole list for a round from this tee's layout and the gross
    /// scores entered so far. Holes without a score are left unplayed.
    pub fn holes(&self, scores: &[i32]) -> Result<Vec<Hole>> {
        let Some(ref stroke_index) = self.stroke_index else {
            bail!("Tee '{}' has no stroke index; holes cannot be scored", self.name);
        };

        if stroke_index.len() != self.par.len() {
            bail!(
                "Tee '{}' has {} pars but {} stroke indices",
                self.name,
                self.par.len(),
                stroke_index.len()
            );
        }

        if scores.len() > self.par.len() {
            bail!(
                "{} scores entered but tee '{}' only has {} holes",
                scores.len(),
                self.name,
                self.par.len()
            );
        }

        Ok(self
            .par
            .iter()
            .zip(stroke_index)
            .enumerate()
            .map(|(i, (&par, &si))| Hole::new(par, si, scores.get(i).copied().unwrap_or(0)))
            .collect())
    }
}
