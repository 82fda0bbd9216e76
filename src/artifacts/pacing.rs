use std::time::Duration;

/// Fixed pause taken after every commit attempt, successful or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pacing {
    interval: Duration,
}

impl Pacing {
    pub fn new(interval: Duration) -> Self {
        Pacing { interval }
    }

    pub fn from_millis(millis: u64) -> Self {
        Pacing::new(Duration::from_millis(millis))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub async fn pause(&self) {
        if !self.interval.is_zero() {
            tokio::time::sleep(self.interval).await;
        }
    }
}
