//! Batch scheduling.
//!
//! Runs the lookups for one submission in fixed-size chunks: every lookup in
//! a chunk is dispatched concurrently, the chunk settles completely (failures
//! count as settled), and a fixed pacing delay separates consecutive chunks
//! to respect the upstream rate limit. At most one batch is in flight per
//! session; a second submission while one is running is a no-op.
//!
//! There is no mid-run cancellation: a run always completes its last chunk.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use futures::future::join_all;
use log::{debug, info, warn};

use crate::config::{CHUNK_PACING, LOOKUP_CHUNK_SIZE};
use crate::enrichment::{EnrichmentClient, LookupResult};

/// One completed enrichment pass.
///
/// Holds the submitted identifiers and exactly one result per identifier.
/// A run is discarded when the next submission replaces it; no history is
/// retained across runs.
#[derive(Debug)]
pub struct BatchRun {
    /// Identifiers in submission order.
    pub identifiers: Vec<String>,
    /// One result per identifier, appended in chunk-dispatch order.
    /// Within a chunk, results keep the chunk's identifier order even though
    /// the lookups settle in arbitrary order.
    pub results: Vec<LookupResult>,
}

impl BatchRun {
    /// Number of submitted identifiers.
    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    /// True when nothing was submitted.
    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }
}

/// Session-scoped scheduler state.
///
/// The progress counter is observable concurrently (e.g. from a progress
/// display task) and increases monotonically from zero to the submitted
/// total exactly once per run.
pub struct BatchSession {
    in_flight: AtomicBool,
    completed: Arc<AtomicUsize>,
}

impl Default for BatchSession {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchSession {
    /// Creates an idle session.
    pub fn new() -> Self {
        Self {
            in_flight: AtomicBool::new(false),
            completed: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of lookups settled so far in the current (or last) run.
    pub fn progress(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }

    /// Shared handle to the progress counter.
    pub fn progress_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.completed)
    }

    /// True while a batch is being processed.
    pub fn is_running(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Runs one batch, producing a result for every identifier.
    ///
    /// Returns `None` without doing any work when another batch is already
    /// in flight on this session.
    pub async fn submit(
        &self,
        client: &EnrichmentClient,
        api_key: &str,
        identifiers: &[String],
    ) -> Option<BatchRun> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            warn!(
                "a batch is already in flight; ignoring submission of {} identifiers",
                identifiers.len()
            );
            return None;
        }

        let total = identifiers.len();
        self.completed.store(0, Ordering::SeqCst);

        let mut results = Vec::with_capacity(total);
        for (index, chunk) in identifiers.chunks(LOOKUP_CHUNK_SIZE).enumerate() {
            if index > 0 {
                tokio::time::sleep(CHUNK_PACING).await;
            }

            let settled = join_all(chunk.iter().map(|ip| async move {
                let result = client.lookup(ip, api_key).await;
                let done = self.completed.fetch_add(1, Ordering::SeqCst) + 1;
                debug!("settled {}/{}: {}", done, total, ip);
                result
            }))
            .await;
            results.extend(settled);

            info!(
                "chunk {} settled ({}/{} identifiers)",
                index + 1,
                self.progress(),
                total
            );
        }

        self.in_flight.store(false, Ordering::SeqCst);
        Some(BatchRun {
            identifiers: identifiers.to_vec(),
            results,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_starts_idle() {
        let session = BatchSession::new();
        assert!(!session.is_running());
        assert_eq!(session.progress(), 0);
    }

    #[test]
    fn test_chunk_partitioning_shape() {
        // 12 identifiers -> chunks of 5, 5, 2.
        let identifiers: Vec<String> = (0..12).map(|i| format!("10.0.0.{}", i)).collect();
        let sizes: Vec<usize> = identifiers
            .chunks(LOOKUP_CHUNK_SIZE)
            .map(<[String]>::len)
            .collect();
        assert_eq!(sizes, vec![5, 5, 2]);
    }
}
