use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use log::{debug, warn};
use sqlx::{Connection, PgConnection};

use crate::errors::ApiError;
use crate::DatabaseState;

/// Fixed-count, fixed-delay retry used when opening database connections.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy {
            max_attempts: 5,
            delay: Duration::from_secs(2),
        }
    }
}

/// Runs `attempt` until it succeeds or the policy runs out of attempts,
/// sleeping `policy.delay` between tries. The last error is returned.
pub async fn retry<T, E, F, Fut>(policy: RetryPolicy, mut attempt: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut tries = 1;
    loop {
        match attempt().await {
            Ok(value) => return Ok(value),
            Err(err) if tries < max_attempts => {
                warn!(
                    "Attempt {} failed: {}. Retrying in {} seconds...",
                    tries,
                    err,
                    policy.delay.as_secs_f32()
                );
                tokio::time::sleep(policy.delay).await;
                tries += 1;
            }
            Err(err) => return Err(err),
        }
    }
}

/// Opens a fresh connection for a single request.
pub async fn acquire(state: &DatabaseState) -> Result<PgConnection, ApiError> {
    retry(state.retry, || PgConnection::connect_with(&state.options))
        .await
        .map_err(ApiError::Connection)
}

pub async fn release(connection: PgConnection) {
    if let Err(err) = connection.close().await {
        debug!("Error closing database connection: {}", err);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;

    fn instant(max_attempts: u32) -> RetryPolicy {
        RetryPolicy {
            max_attempts,
            delay: Duration::ZERO,
        }
    }

    #[test]
    fn default_policy_is_five_tries_two_seconds_apart() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts, 5);
        assert_eq!(policy.delay, Duration::from_secs(2));
    }

    #[tokio::test]
    async fn stops_at_first_success() {
        let calls = AtomicU32::new(0);
        let ret: Result<u32, String> = retry(instant(5), || async {
            let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
            if n < 3 {
                Err(format!("refused #{n}"))
            } else {
                Ok(n)
            }
        })
        .await;
        assert_eq!(ret, Ok(3));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn gives_up_after_max_attempts_with_last_error() {
        let calls = AtomicU32::new(0);
        let ret: Result<(), String> = retry(instant(5), || async {
            let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
            Err(format!("refused #{n}"))
        })
        .await;
        assert_eq!(ret, Err("refused #5".to_string()));
        assert_eq!(calls.load(Ordering::SeqCst), 5);
    }

    #[tokio::test]
    async fn zero_attempts_still_tries_once() {
        let calls = AtomicU32::new(0);
        let ret: Result<(), &str> = retry(instant(0), || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Err("down")
        })
        .await;
        assert!(ret.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn waits_the_fixed_delay_between_attempts() {
        let start = tokio::time::Instant::now();
        let ret: Result<(), &str> = retry(
            RetryPolicy {
                max_attempts: 3,
                delay: Duration::from_secs(2),
            },
            || async { Err("down") },
        )
        .await;
        assert!(ret.is_err());
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_secs(4));
        assert!(elapsed < Duration::from_secs(6));
    }
}
