//! Score component implementations.
//!
//! This module contains the concrete components that are composed into a
//! ScoringPipeline. `ScoringPipeline::standard()` uses all three.

pub mod genre_match;
pub mod maturity_penalty;
pub mod rating_weight;

// Re-export for convenience
pub use genre_match::GenreMatch;
pub use maturity_penalty::MaturityPenalty;
pub use rating_weight::RatingWeight;
