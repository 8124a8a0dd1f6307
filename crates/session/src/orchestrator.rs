//! # Recommendation Orchestrator
//!
//! This module coordinates one "Recommendations" request:
//! 1. Look up the current profile from the session
//! 2. Wait out the processing delay (non-blocking)
//! 3. Run the recommender against the shared catalog
//! 4. Map the ranked movies into display-ready recommendations
//!
//! A refresh is just another call: the delay is waited again and every
//! score is recomputed with fresh jitter.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use rand::Rng;
use tracing::info;

use catalog::{Catalog, CatalogProvider, MovieId};
use engine::{DEFAULT_TOP_N, Recommender, ScoredMovie};
use profile::UserProfile;

use crate::config::CineMateConfig;
use crate::delay::ProcessingDelay;
use crate::session::Session;

/// Final recommendation returned to the user
#[derive(Debug, Clone, PartialEq)]
pub struct MovieRecommendation {
    pub movie_id: MovieId,
    pub title: String,
    pub genres: Vec<String>,
    pub year: u16,
    pub rating: f32,
    /// Runtime in minutes
    pub duration: u16,
    pub match_score: u8,
    pub explanation: String,
}

impl From<ScoredMovie> for MovieRecommendation {
    fn from(scored: ScoredMovie) -> Self {
        let explanation = scored.breakdown.explain();
        let movie = scored.movie;
        Self {
            genres: movie.genres.iter().map(|g| g.to_string()).collect(),
            movie_id: movie.id,
            title: movie.title,
            year: movie.year,
            rating: movie.rating,
            duration: movie.duration,
            match_score: scored.match_score,
            explanation,
        }
    }
}

/// Coordinates the delay, the recommender and the shared catalog
#[derive(Debug, Clone)]
pub struct RecommendationOrchestrator {
    catalog: Arc<Catalog>,
    recommender: Arc<Recommender>,
    delay: ProcessingDelay,
    top_n: usize,
}

impl RecommendationOrchestrator {
    /// Create an orchestrator with the standard recommender, the default
    /// 1.5 s delay and top 5 results
    ///
    /// # Arguments
    /// * `catalog` - Shared, read-only movie catalog
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            recommender: Arc::new(Recommender::standard()),
            delay: ProcessingDelay::default(),
            top_n: DEFAULT_TOP_N,
        }
    }

    /// Create an orchestrator whose delay and result count come from `config`
    pub fn from_config(catalog: Arc<Catalog>, config: &CineMateConfig) -> Self {
        Self::new(catalog)
            .with_delay(config.processing_delay())
            .with_top_n(config.top_n)
    }

    pub fn with_recommender(mut self, recommender: Recommender) -> Self {
        self.recommender = Arc::new(recommender);
        self
    }

    pub fn with_delay(mut self, delay: ProcessingDelay) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn delay(&self) -> ProcessingDelay {
        self.delay
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Main entry point: recommendations for the session's current user
    ///
    /// # Arguments
    /// * `session` - Must hold a registered profile
    /// * `rng` - Source of the per-movie jitter
    ///
    /// # Returns
    /// At most `top_n` recommendations, best match first
    pub async fn get_recommendations<R: Rng + ?Sized>(
        &self,
        session: &Session,
        rng: &mut R,
    ) -> Result<Vec<MovieRecommendation>> {
        let profile = session
            .require_profile()
            .context("Recommendations need a registered profile")?;
        Ok(self.recommend_for(profile, rng).await)
    }

    /// Recommendations for an explicit profile
    pub async fn recommend_for<R: Rng + ?Sized>(
        &self,
        profile: &UserProfile,
        rng: &mut R,
    ) -> Vec<MovieRecommendation> {
        let start_time = Instant::now();

        info!("Generating recommendations for {}...", profile.name);
        self.delay.wait().await;

        let ranked = self
            .recommender
            .recommend(profile, self.catalog.list_movies(), self.top_n, rng);
        info!(
            "Scored {} movies, returning top {}",
            self.catalog.len(),
            ranked.len()
        );

        let recommendations: Vec<MovieRecommendation> =
            ranked.into_iter().map(MovieRecommendation::from).collect();

        let elapsed = start_time.elapsed();
        info!(
            "Total time to get recommendations for {}: {:.2?}",
            profile.name, elapsed
        );
        recommendations
    }
}
