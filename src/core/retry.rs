use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
pub const DEFAULT_BACKOFF: Duration = Duration::from_millis(1000);

/// 固定間隔重試：最多 `max_attempts` 次（含第一次），每次失敗後等待 `backoff`。
///
/// 不區分錯誤類型，任何錯誤都會重試。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS, DEFAULT_BACKOFF)
    }
}

impl RetryPolicy {
    /// `max_attempts` 為 0 時視為 1
    pub fn new(max_attempts: u32, backoff: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff,
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn backoff(&self) -> Duration {
        self.backoff
    }

    /// 每次嘗試最多耗時 `per_attempt` 時，全部重試用盡的最長時間
    pub fn worst_case_duration(&self, per_attempt: Duration) -> Duration {
        per_attempt * self.max_attempts + self.backoff * (self.max_attempts - 1)
    }

    /// 執行 `operation`，失敗時依策略重試；用盡次數後回傳最後一次的錯誤
    pub async fn execute<T, E, F, Fut>(&self, mut operation: F) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        let mut attempt = 1;
        loop {
            match operation().await {
                Ok(value) => {
                    if attempt > 1 {
                        tracing::debug!("🔁 Succeeded on attempt {}/{}", attempt, self.max_attempts);
                    }
                    return Ok(value);
                }
                Err(e) if attempt < self.max_attempts => {
                    tracing::warn!(
                        attempt,
                        max_attempts = self.max_attempts,
                        backoff_ms = self.backoff.as_millis() as u64,
                        "Attempt failed, retrying: {}",
                        e
                    );
                    tokio::time::sleep(self.backoff).await;
                    attempt += 1;
                }
                Err(e) => {
                    tracing::warn!(
                        attempt,
                        max_attempts = self.max_attempts,
                        "All attempts exhausted: {}",
                        e
                    );
                    return Err(e);
                }
            }
        }
    }
}
