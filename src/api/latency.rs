use std::time::Duration;

/// Artificial per-operation delays imitating a remote data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    pub current: Duration,
    pub forecast: Duration,
    pub historical: Duration,
    pub weather: Duration,
    pub prediction: Duration,
    pub search: Duration,
}

impl LatencyProfile {
    /// Delays resembling a slow network backend.
    pub const fn realistic() -> Self {
        Self {
            current: Duration::from_millis(800),
            forecast: Duration::from_millis(1000),
            historical: Duration::from_millis(1200),
            weather: Duration::from_millis(600),
            prediction: Duration::from_millis(800),
            search: Duration::from_millis(300),
        }
    }

    /// No delays at all.
    pub const fn none() -> Self {
        Self {
            current: Duration::ZERO,
            forecast: Duration::ZERO,
            historical: Duration::ZERO,
            weather: Duration::ZERO,
            prediction: Duration::ZERO,
            search: Duration::ZERO,
        }
    }
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self::realistic()
    }
}

/// Suspends the current task for `delay`; returns immediately for zero.
pub(crate) async fn simulate(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
