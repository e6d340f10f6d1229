//! Bounded retry combinator.
//!
//! Used by the shortening engine to retry code generation on collision
//! with an explicit attempt bound and a typed exhaustion result.

/// Runs `op` up to `max_attempts` times.
///
/// `op` reports one of three outcomes per attempt:
///
/// - `Ok(Some(value))` - success, returned immediately
/// - `Ok(None)` - retryable miss (e.g. a code collision), try again
/// - `Err(e)` - hard failure, aborts the loop immediately
///
/// Returns `Ok(None)` when every attempt missed, letting the caller map
/// exhaustion to its own error type instead of overloading `Err`.
pub async fn retry_bounded<T, E, F, Fut>(max_attempts: usize, mut op: F) -> Result<Option<T>, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Option<T>, E>>,
{
    for _ in 0..max_attempts {
        if let Some(value) = op().await? {
            return Ok(Some(value));
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[tokio::test]
    async fn test_returns_on_first_success() {
        let calls = Cell::new(0u32);

        let result: Result<Option<u32>, ()> = retry_bounded(5, || {
            calls.set(calls.get() + 1);
            async { Ok(Some(42)) }
        })
        .await;

        assert_eq!(result, Ok(Some(42)));
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test]
    async fn test_retries_until_success() {
        let calls = Cell::new(0u32);

        let result: Result<Option<u32>, ()> = retry_bounded(5, || {
            calls.set(calls.get() + 1);
            let n = calls.get();
            async move { Ok(if n == 3 { Some(n) } else { None }) }
        })
        .await;

        assert_eq!(result, Ok(Some(3)));
        assert_eq!(calls.get(), 3);
    }

    #[tokio::test]
    async fn test_exhaustion_returns_none() {
        let calls = Cell::new(0u32);

        let result: Result<Option<u32>, ()> = retry_bounded(5, || {
            calls.set(calls.get() + 1);
            async { Ok(None) }
        })
        .await;

        assert_eq!(result, Ok(None));
        assert_eq!(calls.get(), 5);
    }

    #[tokio::test]
    async fn test_error_aborts_immediately() {
        let calls = Cell::new(0u32);

        let result: Result<Option<u32>, &str> = retry_bounded(5, || {
            calls.set(calls.get() + 1);
            async { Err("store down") }
        })
        .await;

        assert_eq!(result, Err("store down"));
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test]
    async fn test_zero_attempts_is_exhaustion() {
        let result: Result<Option<u32>, ()> = retry_bounded(0, || async { Ok(Some(1)) }).await;
        assert_eq!(result, Ok(None));
    }
}
