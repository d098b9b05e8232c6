use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Local};

/// Source of wall-clock time and of the poll delay.
#[async_trait]
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;

    async fn sleep(&self, duration: Duration);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

#[async_trait]
impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
