//! The ScoringPipeline sums score components.
//!
//! This module provides the ScoringPipeline struct that chains components
//! together using the builder pattern and records each one's contribution.

use crate::breakdown::ScoreBreakdown;
use crate::components::{GenreMatch, MaturityPenalty, RatingWeight};
use crate::context::ScoringContext;
use crate::traits::ScoreComponent;
use catalog::Movie;
use std::fmt;
use tracing;

/// Chains score components into the deterministic part of a match score.
///
/// ## Usage
/// ```ignore
/// let pipeline = ScoringPipeline::new()
///     .add_component(GenreMatch::default())
///     .add_component(RatingWeight::default())
///     .add_component(MaturityPenalty::default());
///
/// let breakdown = pipeline.score(&movie, &context);
/// ```
pub struct ScoringPipeline {
    components: Vec<Box<dyn ScoreComponent>>,
}

impl ScoringPipeline {
    /// Create a new empty ScoringPipeline (every movie scores 0).
    pub fn new() -> Self {
        Self {
            components: Vec::new(),
        }
    }

    /// The production pipeline: genre match, rating weight, maturity penalty.
    pub fn standard() -> Self {
        Self::new()
            .add_component(GenreMatch::default())
            .add_component(RatingWeight::default())
            .add_component(MaturityPenalty::default())
    }

    /// Add a component to the pipeline (builder pattern).
    pub fn add_component(mut self, component: impl ScoreComponent + 'static) -> Self {
        self.components.push(Box::new(component));
        self
    }

    /// Names of the components, in evaluation order
    pub fn component_names(&self) -> Vec<&str> {
        self.components.iter().map(|c| c.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Score one movie without jitter.
    ///
    /// The returned breakdown carries `jitter == 0`; the recommender adds the
    /// random term afterwards.
    pub fn score(&self, movie: &Movie, context: &ScoringContext) -> ScoreBreakdown {
        let mut breakdown = ScoreBreakdown::new(movie.id.clone());
        for component in &self.components {
            let points = component.points(movie, context);
            tracing::trace!(
                "{} gave {} {:+.1} points",
                component.name(),
                movie.title,
                points
            );
            breakdown.push_component(component.name(), points);
        }
        breakdown
    }
}

impl Default for ScoringPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ScoringPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScoringPipeline")
            .field("components", &self.component_names())
            .finish()
    }
}
