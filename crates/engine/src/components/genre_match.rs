//! Reward movies tagged with the user's preferred genres.

use crate::context::ScoringContext;
use crate::traits::ScoreComponent;
use catalog::Movie;

/// Points awarded per shared genre
pub const GENRE_MATCH_POINTS: f32 = 30.0;

/// Adds a fixed number of points for every movie genre the user prefers.
///
/// ## Algorithm
/// Counts each matching genre separately, so a movie sharing two genres with
/// the user earns twice the points. There is no cap.
pub struct GenreMatch {
    points_per_genre: f32,
}

impl GenreMatch {
    pub fn new(points_per_genre: f32) -> Self {
        Self { points_per_genre }
    }
}

impl Default for GenreMatch {
    fn default() -> Self {
        Self::new(GENRE_MATCH_POINTS)
    }
}

impl ScoreComponent for GenreMatch {
    fn name(&self) -> &str {
        "GenreMatch"
    }

    fn points(&self, movie: &Movie, context: &ScoringContext) -> f32 {
        let matches = movie
            .genres
            .iter()
            .filter(|&&genre| context.prefers(genre))
            .count();
        matches as f32 * self.points_per_genre
    }
}
