//! Per-movie score breakdowns.
//!
//! A breakdown records every component's points, the random jitter and the
//! final clamped score, so callers can explain a recommendation after the fact.

use catalog::MovieId;
use std::fmt::Write;

/// Highest possible match score
pub const MAX_MATCH_SCORE: u8 = 100;

/// Points contributed by one named component
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentScore {
    pub name: String,
    pub points: f32,
}

/// How a movie's match score was assembled.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub movie_id: MovieId,
    pub components: Vec<ComponentScore>,
    /// Sum of all component points (the non-random floor)
    pub base: f32,
    /// Random jitter added on top of `base`
    pub jitter: u32,
    /// `base + jitter` before clamping
    pub raw: f32,
    pub match_score: u8,
}

impl ScoreBreakdown {
    /// Empty breakdown: no components, no jitter, score 0
    pub fn new(movie_id: MovieId) -> Self {
        Self {
            movie_id,
            components: Vec::new(),
            base: 0.0,
            jitter: 0,
            raw: 0.0,
            match_score: 0,
        }
    }

    /// Record one component's points and fold them into the base
    pub(crate) fn push_component(&mut self, name: &str, points: f32) {
        self.components.push(ComponentScore {
            name: name.to_string(),
            points,
        });
        self.base += points;
        self.raw = self.base + self.jitter as f32;
        self.match_score = to_match_score(self.raw);
    }

    /// Add the random jitter and recompute the final score
    pub(crate) fn with_jitter(mut self, jitter: u32) -> Self {
        self.jitter = jitter;
        self.raw = self.base + jitter as f32;
        self.match_score = to_match_score(self.raw);
        self
    }

    /// One-line human explanation, e.g.
    /// "GenreMatch +60.0, RatingWeight +17.6, jitter +12 = 89.6 -> 89%"
    pub fn explain(&self) -> String {
        let mut out = String::new();
        for component in &self.components {
            let _ = write!(out, "{} {:+.1}, ", component.name, component.points);
        }
        let _ = write!(
            out,
            "jitter +{} = {:.1} -> {}%",
            self.jitter, self.raw, self.match_score
        );
        out
    }
}

/// Convert a raw score into a match score: clamp into [0, 100], then floor.
///
/// Non-finite inputs can't come from the standard components, but a NaN maps
/// to 0 rather than leaking through.
pub fn to_match_score(raw: f32) -> u8 {
    if raw.is_nan() {
        return 0;
    }
    raw.clamp(0.0, MAX_MATCH_SCORE as f32).floor() as u8
}
