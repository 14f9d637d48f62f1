use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::{sleep, timeout, Instant};
use tracing::warn;

use crate::error::{AppError, Result};

/// Sliding-window rate limiter shared by all submission callers.
///
/// Admission timestamps are kept oldest-first; a caller is admitted once
/// fewer than `limit` admissions fall within the trailing `interval`.
/// Cloning shares the same window.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    admitted: Arc<Mutex<VecDeque<Instant>>>,
    limit: usize,
    interval: Duration,
}

impl RateLimiter {
    pub fn new(request_limit: usize, interval: Duration) -> Result<Self> {
        if request_limit == 0 {
            return Err(AppError::Init(
                "request limit must be greater than zero".to_string(),
            ));
        }
        if interval.is_zero() {
            return Err(AppError::Init(
                "rate limit interval must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            admitted: Arc::new(Mutex::new(VecDeque::new())),
            limit: request_limit,
            interval,
        })
    }

    /// Suspends the caller until admitting it keeps the window within the
    /// limit, then records the admission and returns.
    ///
    /// The wait happens with the lock released, so one caller sleeping out
    /// the window never prevents others from pruning or being admitted.
    /// Dropping the returned future mid-wait records nothing.
    pub async fn acquire(&self) {
        loop {
            let wait = {
                let mut admitted = self.admitted.lock().await;
                let now = Instant::now();

                // Prune admissions that have aged out of the window.
                while let Some(&oldest) = admitted.front() {
                    if now.duration_since(oldest) >= self.interval {
                        admitted.pop_front();
                    } else {
                        break;
                    }
                }

                if admitted.len() < self.limit {
                    admitted.push_back(now);
                    return;
                }

                // Window is full; the oldest entry decides how long until a
                // slot frees up. The queue is non-empty here since limit > 0.
                let oldest = admitted.front().copied().unwrap_or(now);
                self.interval.saturating_sub(now.duration_since(oldest))
            };

            warn!("Rate limit reached, waiting {:?} for a free slot", wait);
            sleep(wait).await;
        }
    }

    /// Like [`acquire`](Self::acquire), but gives up after `deadline`.
    /// A timed-out caller is never recorded as admitted.
    pub async fn acquire_timeout(&self, deadline: Duration) -> Result<()> {
        timeout(deadline, self.acquire())
            .await
            .map_err(|_| AppError::Canceled(deadline))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const INTERVAL: Duration = Duration::from_millis(300);

    #[tokio::test]
    async fn test_rejects_zero_configuration() {
        assert!(RateLimiter::new(0, INTERVAL).is_err());
        assert!(RateLimiter::new(5, Duration::ZERO).is_err());
    }

    #[tokio::test]
    async fn test_burst_admitted_immediately() {
        let limiter = RateLimiter::new(3, INTERVAL).unwrap();

        let start = Instant::now();
        for _ in 0..3 {
            limiter.acquire().await;
        }
        assert!(start.elapsed() < Duration::from_millis(50));
    }

    #[tokio::test]
    async fn test_over_limit_blocks_until_window_passes() {
        // Spec scenario: limit=2, three calls at t=0. First two are
        // immediate, the third waits out the window from the oldest.
        let limiter = RateLimiter::new(2, INTERVAL).unwrap();

        let start = Instant::now();
        limiter.acquire().await;
        limiter.acquire().await;
        assert!(start.elapsed() < Duration::from_millis(50));

        limiter.acquire().await;
        let elapsed = start.elapsed();
        assert!(
            elapsed >= INTERVAL - Duration::from_millis(20),
            "third call admitted after {:?}, expected ~{:?}",
            elapsed,
            INTERVAL
        );
        assert!(elapsed < INTERVAL * 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_callers_never_exceed_window() {
        let limiter = RateLimiter::new(3, Duration::from_millis(200)).unwrap();
        let admissions = Arc::new(Mutex::new(Vec::new()));

        let mut handles = Vec::new();
        for _ in 0..10 {
            let limiter = limiter.clone();
            let admissions = admissions.clone();
            handles.push(tokio::spawn(async move {
                limiter.acquire().await;
                admissions.lock().await.push(Instant::now());
            }));
        }
        for h in handles {
            h.await.unwrap();
        }

        let mut times = admissions.lock().await.clone();
        times.sort();
        assert_eq!(times.len(), 10);

        // Any 4 consecutive admissions must span at least the window.
        for pair in times.windows(4) {
            let span = pair[3].duration_since(pair[0]);
            assert!(
                span >= Duration::from_millis(180),
                "4 admissions within {:?}",
                span
            );
        }
    }

    #[tokio::test]
    async fn test_timed_out_waiter_is_not_recorded() {
        let limiter = RateLimiter::new(1, INTERVAL).unwrap();

        let start = Instant::now();
        limiter.acquire().await;

        let result = limiter.acquire_timeout(Duration::from_millis(50)).await;
        assert!(matches!(result, Err(AppError::Canceled(_))));

        // The canceled waiter consumed nothing: the next caller gets the
        // slot as soon as the first admission ages out, not a window later.
        limiter.acquire().await;
        let elapsed = start.elapsed();
        assert!(elapsed >= INTERVAL - Duration::from_millis(20));
        assert!(
            elapsed < INTERVAL * 2,
            "admission delayed to {:?}, canceled waiter must not hold a slot",
            elapsed
        );
    }

    #[tokio::test]
    async fn test_instances_are_independent() {
        let a = RateLimiter::new(1, INTERVAL).unwrap();
        let b = RateLimiter::new(1, INTERVAL).unwrap();

        a.acquire().await;

        let start = Instant::now();
        b.acquire().await;
        assert!(start.elapsed() < Duration::from_millis(50));
    }
}
