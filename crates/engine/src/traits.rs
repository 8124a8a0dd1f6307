//! Core traits for the scoring pipeline.
//!
//! This module defines the ScoreComponent trait that lets each scoring rule
//! live in its own type and be composed into a ScoringPipeline.

use crate::context::ScoringContext;
use catalog::Movie;

/// One additive term of a movie's match score.
///
/// ## Design Note
/// - `Send + Sync` lets the pipeline score movies on the rayon pool
/// - Components are pure: same movie and context, same points
/// - Penalties are expressed as negative points
pub trait ScoreComponent: Send + Sync {
    /// Returns the name of this component (for logging and explanations)
    fn name(&self) -> &str;

    /// Points this component contributes for `movie` given the user context
    fn points(&self, movie: &Movie, context: &ScoringContext) -> f32;
}
