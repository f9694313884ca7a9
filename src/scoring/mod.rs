pub mod engine;
pub mod rules;
pub mod types;
pub mod validation;

pub use engine::{calculate_hole_score, calculate_split, calculate_totals, score_round, DEFAULT_SPLIT};
pub use rules::{net_score, shots_received, stableford_points};
pub use types::*;
pub use validation::validate_round;
