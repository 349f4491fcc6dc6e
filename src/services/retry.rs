use std::time::Duration;

use crate::error::FetchError;

/// Bounded retry with linear backoff: attempt `n` failing waits `backoff * n`.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub backoff: f64,
}

impl RetryPolicy {
    pub fn delay(&self, attempt: u32) -> Duration {
        let secs = self.backoff * f64::from(attempt);
        if secs.is_nan() || secs <= 0.0 {
            return Duration::ZERO;
        }

        // Saturates past the range of Duration.
        Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
    }

    /// Runs `op` until it succeeds or the attempt budget is spent.
    ///
    /// `op` receives the 1-based attempt number. `sleep` is called between
    /// attempts, never after the last one.
    pub fn run<T, F, S>(&self, mut op: F, mut sleep: S) -> Result<T, FetchError>
    where
        F: FnMut(u32) -> Result<T, FetchError>,
        S: FnMut(Duration),
    {
        let max_attempts = self.max_attempts.max(1);
        let mut attempt = 0;

        loop {
            attempt += 1;

            match op(attempt) {
                Ok(v) => return Ok(v),
                Err(err) => {
                    tracing::warn!("Attempt {attempt} failed: {err}");

                    if attempt >= max_attempts {
                        return Err(FetchError::Exhausted {
                            attempts: attempt,
                            source: Box::new(err),
                        });
                    }

                    sleep(self.delay(attempt));
                }
            }
        }
    }
}
