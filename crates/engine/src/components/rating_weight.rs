//! Reward critically well-rated movies.

use crate::context::ScoringContext;
use crate::traits::ScoreComponent;
use catalog::Movie;

/// Multiplier applied to the critic rating
pub const RATING_MULTIPLIER: f32 = 2.0;

/// Adds the movie's critic rating scaled by a constant (9.3 -> 18.6 points)
pub struct RatingWeight {
    multiplier: f32,
}

impl RatingWeight {
    pub fn new(multiplier: f32) -> Self {
        Self { multiplier }
    }
}

impl Default for RatingWeight {
    fn default() -> Self {
        Self::new(RATING_MULTIPLIER)
    }
}

impl ScoreComponent for RatingWeight {
    fn name(&self) -> &str {
        "RatingWeight"
    }

    fn points(&self, movie: &Movie, _context: &ScoringContext) -> f32 {
        movie.rating * self.multiplier
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Catalog;

    #[test]
    fn test_rating_weight() {
        let catalog = Catalog::builtin();
        let shawshank = catalog.find_by_title("The Shawshank Redemption").unwrap();
        let context = ScoringContext::new(30, []);

        let points = RatingWeight::default().points(shawshank, &context);
        assert!((points - 18.6).abs() < 1e-4);

        let tripled = RatingWeight::new(3.0).points(shawshank, &context);
        assert!((tripled - 27.9).abs() < 1e-4);
    }
}
