use serde::{Deserialize, Serialize};

/// Aggregate diet statistics for a single user.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DietMetrics {
    pub total_meals: u64,
    pub total_meals_in_diet: u64,
    pub total_meals_not_in_diet: u64,
    /// Longest chronological run of meals sharing the same in-diet flag.
    pub best_sequence: u64,
}
