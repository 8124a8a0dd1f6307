//! Penalize acclaimed (and typically mature) movies for younger users.

use crate::context::ScoringContext;
use crate::traits::ScoreComponent;
use catalog::Movie;

/// Users younger than this are penalized
pub const ADULT_AGE: u32 = 18;

/// Ratings strictly above this trigger the penalty
pub const MATURE_RATING_THRESHOLD: f32 = 8.5;

/// Points subtracted when the penalty applies
pub const MATURITY_PENALTY: f32 = 10.0;

/// Subtracts a fixed penalty when a minor is scored against a highly rated movie.
///
/// ## Algorithm
/// Applies only when `age < adult_age` AND `rating > rating_threshold`;
/// otherwise contributes nothing.
pub struct MaturityPenalty {
    adult_age: u32,
    rating_threshold: f32,
    penalty: f32,
}

impl MaturityPenalty {
    pub fn new(adult_age: u32, rating_threshold: f32, penalty: f32) -> Self {
        Self {
            adult_age,
            rating_threshold,
            penalty,
        }
    }
}

impl Default for MaturityPenalty {
    fn default() -> Self {
        Self::new(ADULT_AGE, MATURE_RATING_THRESHOLD, MATURITY_PENALTY)
    }
}

impl ScoreComponent for MaturityPenalty {
    fn name(&self) -> &str {
        "MaturityPenalty"
    }

    fn points(&self, movie: &Movie, context: &ScoringContext) -> f32 {
        if context.age < self.adult_age && movie.rating > self.rating_threshold {
            -self.penalty
        } else {
            0.0
        }
    }
}
