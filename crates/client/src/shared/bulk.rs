use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Worker-pool size used when callers do not pick one
pub const DEFAULT_CONCURRENCY: usize = 5;

/// Outcome of one identifier in a bulk operation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BulkOutcome {
    pub id: String,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Apply `op` to every identifier with at most `concurrency`
/// operations in flight.
///
/// A pool of `min(concurrency, ids.len())` workers pulls identifiers
/// from a shared queue; each occurrence is attempted exactly once,
/// duplicates included. One failure never aborts the batch: it
/// becomes an outcome record with the failure message. The returned
/// outcomes are in completion order, not input order. An empty input
/// returns an empty output without invoking `op`.
pub async fn run_bulk<F, Fut>(ids: Vec<String>, concurrency: usize, op: F) -> Vec<BulkOutcome>
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    if ids.is_empty() {
        return Vec::new();
    }

    let total = ids.len();
    let workers = concurrency.max(1).min(total);
    let queue = Arc::new(Mutex::new(ids.into_iter().collect::<VecDeque<_>>()));
    let results = Arc::new(Mutex::new(Vec::with_capacity(total)));
    let op = Arc::new(op);

    let mut handles = Vec::with_capacity(workers);
    for _ in 0..workers {
        let queue = Arc::clone(&queue);
        let results = Arc::clone(&results);
        let op = Arc::clone(&op);
        handles.push(tokio::spawn(async move {
            loop {
                // Atomic pop; the lock is released before the operation runs
                let next = queue.lock().await.pop_front();
                let id = match next {
                    Some(id) => id,
                    None => break,
                };
                let outcome = match op(id.clone()).await {
                    Ok(()) => BulkOutcome {
                        id,
                        ok: true,
                        error: None,
                    },
                    Err(e) => BulkOutcome {
                        id,
                        ok: false,
                        error: Some(e.to_string()),
                    },
                };
                results.lock().await.push(outcome);
            }
        }));
    }

    for handle in handles {
        if let Err(e) = handle.await {
            tracing::error!("Bulk worker task failed: {}", e);
        }
    }

    match Arc::try_unwrap(results) {
        Ok(mutex) => mutex.into_inner(),
        Err(arc) => arc.lock().await.drain(..).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    #[tokio::test]
    async fn one_failure_never_aborts_the_batch() {
        let ids = vec!["id1".to_string(), "id2".to_string(), "id3".to_string()];
        let outcomes = run_bulk(ids, 2, |id| async move {
            if id == "id2" {
                anyhow::bail!("No encontrado");
            }
            Ok(())
        })
        .await;

        assert_eq!(outcomes.len(), 3);
        for expected in ["id1", "id2", "id3"] {
            let outcome = outcomes
                .iter()
                .find(|o| o.id == expected)
                .expect("every input id appears exactly once");
            if expected == "id2" {
                assert!(!outcome.ok);
                assert_eq!(outcome.error.as_deref(), Some("No encontrado"));
            } else {
                assert!(outcome.ok);
                assert!(outcome.error.is_none());
            }
        }
    }

    #[tokio::test]
    async fn concurrency_limit_is_respected() {
        let in_flight = Arc::new(AtomicUsize::new(0));
        let max_seen = Arc::new(AtomicUsize::new(0));

        let ids: Vec<String> = (0..5).map(|i| format!("id{}", i)).collect();
        let in_flight_op = Arc::clone(&in_flight);
        let max_seen_op = Arc::clone(&max_seen);
        let outcomes = run_bulk(ids, 2, move |_id| {
            let in_flight = Arc::clone(&in_flight_op);
            let max_seen = Arc::clone(&max_seen_op);
            async move {
                let current = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
                max_seen.fetch_max(current, Ordering::SeqCst);
                tokio::time::sleep(std::time::Duration::from_millis(10)).await;
                in_flight.fetch_sub(1, Ordering::SeqCst);
                Ok(())
            }
        })
        .await;

        assert_eq!(outcomes.len(), 5);
        assert!(outcomes.iter().all(|o| o.ok));
        assert!(max_seen.load(Ordering::SeqCst) <= 2);
    }

    #[tokio::test]
    async fn empty_input_never_invokes_the_operation() {
        let invoked = Arc::new(AtomicBool::new(false));
        let invoked_op = Arc::clone(&invoked);
        let outcomes = run_bulk(Vec::new(), DEFAULT_CONCURRENCY, move |_id| {
            let invoked = Arc::clone(&invoked_op);
            async move {
                invoked.store(true, Ordering::SeqCst);
                Ok(())
            }
        })
        .await;

        assert!(outcomes.is_empty());
        assert!(!invoked.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn duplicates_are_processed_independently() {
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_op = Arc::clone(&calls);
        let outcomes = run_bulk(
            vec!["dup".to_string(), "dup".to_string()],
            4,
            move |_id| {
                let calls = Arc::clone(&calls_op);
                async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(())
                }
            },
        )
        .await;

        assert_eq!(outcomes.len(), 2);
        assert!(outcomes.iter().all(|o| o.id == "dup" && o.ok));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
