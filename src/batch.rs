//! Concurrent fan-out over a list of independent work items.
//!
//! Every item gets its own future and all of them are polled concurrently
//! with no cap, so a batch of N repositories issues N simultaneous requests.
//! The call returns once every item has finished; results are returned in
//! input order regardless of completion order. Item failures must be encoded
//! in the output value, the runner itself never fails.

use std::future::Future;

use futures_util::future::join_all;
use log::debug;

/// Run `f` for every item concurrently and return the outputs in input order.
pub async fn run_all<I, O, F, Fut>(items: Vec<I>, f: F) -> Vec<O>
where
    F: Fn(I) -> Fut,
    Fut: Future<Output = O>,
{
    debug!("Processing batch of {} item(s)", items.len());
    join_all(items.into_iter().map(f)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[tokio::test]
    async fn test_run_all_empty() {
        let out: Vec<u32> = run_all(Vec::<u32>::new(), |i| async move { i }).await;
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_run_all_preserves_order_under_reversed_delays() {
        let items: Vec<u64> = (0..8).collect();
        let finished = Arc::new(std::sync::Mutex::new(Vec::new()));

        let out = run_all(items, |i| {
            let finished = finished.clone();
            async move {
                // Earlier items sleep longer, so they complete last
                tokio::time::sleep(Duration::from_millis((8 - i) * 15)).await;
                finished.lock().unwrap().push(i);
                i * 10
            }
        })
        .await;

        assert_eq!(out, vec![0, 10, 20, 30, 40, 50, 60, 70]);
        let completion = finished.lock().unwrap().clone();
        assert_eq!(completion.first(), Some(&7));
        assert_eq!(completion.last(), Some(&0));
    }

    #[tokio::test]
    async fn test_run_all_runs_items_concurrently() {
        let in_flight = Arc::new(AtomicUsize::new(0));
        let peak = Arc::new(AtomicUsize::new(0));

        run_all((0..5).collect::<Vec<_>>(), |_| {
            let in_flight = in_flight.clone();
            let peak = peak.clone();
            async move {
                let now = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
                peak.fetch_max(now, Ordering::SeqCst);
                tokio::time::sleep(Duration::from_millis(20)).await;
                in_flight.fetch_sub(1, Ordering::SeqCst);
            }
        })
        .await;

        assert_eq!(peak.load(Ordering::SeqCst), 5);
    }

    #[tokio::test]
    async fn test_run_all_isolates_failures() {
        let out = run_all(vec!["a", "bad", "c"], |s| async move {
            if s == "bad" {
                Err(format!("{} failed", s))
            } else {
                Ok(s.to_uppercase())
            }
        })
        .await;

        assert_eq!(out.len(), 3);
        assert_eq!(out[0], Ok("A".to_string()));
        assert_eq!(out[1], Err("bad failed".to_string()));
        assert_eq!(out[2], Ok("C".to_string()));
    }
}
