use crate::delay::ProcessingDelay;
use profile::{DEFAULT_STORE_FILE, ProfileStore};
use serde::Deserialize;

/// Prefix shared by every environment variable the app reads
pub const ENV_PREFIX: &str = "CINEMATE_";

/// Application configuration loaded from `CINEMATE_*` environment variables
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CineMateConfig {
    /// Where the single profile record lives
    #[serde(default = "default_store_path")]
    pub store_path: String,

    /// How many recommendations a request returns
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Artificial "thinking" pause before results, in milliseconds (0 disables it)
    #[serde(default = "default_processing_delay_ms")]
    pub processing_delay_ms: u64,
}

fn default_store_path() -> String {
    DEFAULT_STORE_FILE.to_string()
}

fn default_top_n() -> usize {
    engine::DEFAULT_TOP_N
}

fn default_processing_delay_ms() -> u64 {
    ProcessingDelay::DEFAULT_MILLIS
}

impl CineMateConfig {
    /// Load configuration from `.env` and the process environment
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::prefixed(ENV_PREFIX)
            .from_env::<CineMateConfig>()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Load configuration from explicit `(NAME, value)` pairs instead of the
    /// process environment. Names carry the `CINEMATE_` prefix.
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config: CineMateConfig = envy::prefixed(ENV_PREFIX)
            .from_iter(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
        Ok(config)
    }

    pub fn processing_delay(&self) -> ProcessingDelay {
        ProcessingDelay::from_millis(self.processing_delay_ms)
    }

    pub fn store(&self) -> ProfileStore {
        ProfileStore::new(&self.store_path)
    }
}

impl Default for CineMateConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            top_n: default_top_n(),
            processing_delay_ms: default_processing_delay_ms(),
        }
    }
}
