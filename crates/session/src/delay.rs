//! The artificial pause shown before recommendations appear.

use std::time::Duration;
use tokio::time::sleep;

/// How long a recommendation request "thinks" before answering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingDelay {
    /// Answer straight away (tests, scripted use)
    Immediate,
    /// Wait this long first
    Fixed(Duration),
}

impl ProcessingDelay {
    pub const DEFAULT_MILLIS: u64 = 1500;

    /// `0` means `Immediate`
    pub fn from_millis(millis: u64) -> Self {
        if millis == 0 {
            Self::Immediate
        } else {
            Self::Fixed(Duration::from_millis(millis))
        }
    }

    pub fn duration(&self) -> Duration {
        match self {
            Self::Immediate => Duration::ZERO,
            Self::Fixed(duration) => *duration,
        }
    }

    /// Wait out the delay without blocking the runtime
    pub async fn wait(&self) {
        if let Self::Fixed(duration) = self {
            sleep(*duration).await;
        }
    }
}

impl Default for ProcessingDelay {
    fn default() -> Self {
        Self::from_millis(Self::DEFAULT_MILLIS)
    }
}
