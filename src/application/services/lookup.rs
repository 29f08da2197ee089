//! Deadline wrapper for external lookups.

use crate::error::AppError;
use serde_json::json;
use std::future::Future;
use std::time::Duration;

/// Runs a store call, failing with [`AppError::Unavailable`] if it outlives `deadline`.
///
/// `None` disables the deadline. Format checks never go through here; they are
/// local and bounded by the code length.
pub async fn with_deadline<T, F>(
    deadline: Option<Duration>,
    operation: &'static str,
    call: F,
) -> Result<T, AppError>
where
    F: Future<Output = Result<T, AppError>>,
{
    let Some(limit) = deadline else {
        return call.await;
    };

    match tokio::time::timeout(limit, call).await {
        Ok(result) => result,
        Err(_) => {
            let timeout_ms = limit.as_millis() as u64;
            tracing::warn!(operation, timeout_ms, "Store lookup timed out");
            Err(AppError::unavailable(
                "Store lookup timed out",
                json!({ "operation": operation, "timeout_ms": timeout_ms }),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_without_deadline_passes_result_through() {
        let result = with_deadline(None, "noop", async { Ok::<_, AppError>(5) }).await;
        assert_eq!(result.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_errors_pass_through_unchanged() {
        let result: Result<(), AppError> = with_deadline(
            Some(Duration::from_secs(1)),
            "noop",
            async { Err(AppError::internal("boom", json!({}))) },
        )
        .await;
        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_call_becomes_unavailable() {
        let result = with_deadline(Some(Duration::from_millis(50)), "slow", async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok::<_, AppError>(())
        })
        .await;

        let err = result.unwrap_err();
        assert!(err.is_unavailable());
    }
}
