//! Session crate for CineMate.
//!
//! This crate holds the application-level pieces that sit between the CLI
//! and the libraries: configuration, the logged-in session, the processing
//! delay, and the orchestrator that serves a recommendation request.

pub mod config;
pub mod delay;
pub mod error;
pub mod orchestrator;
pub mod session;

pub use config::{CineMateConfig, ENV_PREFIX};
pub use delay::ProcessingDelay;
pub use error::{Result, SessionError};
pub use orchestrator::{MovieRecommendation, RecommendationOrchestrator};
pub use session::Session;
