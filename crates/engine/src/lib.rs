//! Recommendation engine: score and rank catalog movies for a profile.
//!
//! This crate provides:
//! - ScoreComponent trait and implementations for each scoring rule
//! - ScoringPipeline for composing components
//! - Recommender, which adds random jitter, clamps, ranks and truncates
//!
//! ## Architecture
//! A recommendation pass runs in stages:
//! 1. The profile is condensed into a ScoringContext
//! 2. The pipeline sums component points into each movie's base score
//! 3. Jitter in [0, 20] is added per movie, then clamped and floored into [0, 100]
//! 4. Movies are ranked by match score and the top N are returned
//!
//! ## Example Usage
//! ```ignore
//! use engine::{Recommender, DEFAULT_TOP_N};
//! use catalog::{Catalog, CatalogProvider};
//!
//! let catalog = Catalog::builtin();
//! let recommender = Recommender::standard();
//! let mut rng = rand::rng();
//!
//! let top = recommender.recommend(&profile, catalog.list_movies(), DEFAULT_TOP_N, &mut rng);
//! for scored in &top {
//!     println!("{} - Match: {}%", scored.movie.title, scored.match_score);
//! }
//! ```

pub mod breakdown;
pub mod components;
pub mod context;
pub mod recommender;
pub mod scoring_pipeline;
pub mod traits;

// Re-export main types
pub use breakdown::{ComponentScore, MAX_MATCH_SCORE, ScoreBreakdown, to_match_score};
pub use context::ScoringContext;
pub use recommender::{DEFAULT_TOP_N, JitterRange, Recommender, ScoredMovie};
pub use scoring_pipeline::ScoringPipeline;
pub use traits::ScoreComponent;
