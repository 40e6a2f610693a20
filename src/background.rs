//! Background job execution for long-running image processing.
//!
//! Background removal is long relative to a frame, so it runs on a worker
//! thread and reports back over a channel the session drains between input
//! events. Board state is only ever touched on the event thread when a
//! result is applied; the worker sees nothing but the source data URL.

use crate::error::{BoardError, BoardResult};
use crate::imaging;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread;
use tracing::warn;

/// Completed background-removal job for one item.
pub struct JobResult {
    /// Item the job was started for. The item may have been deleted in the
    /// meantime; the session checks before applying.
    pub item_id: String,
    /// Processed PNG data URL, or the failure to surface.
    pub outcome: BoardResult<String>,
}

/// Spawns removal jobs and collects their results.
pub struct BackgroundExecutor {
    results_tx: Sender<JobResult>,
    results_rx: Receiver<JobResult>,
}

impl Default for BackgroundExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl BackgroundExecutor {
    pub fn new() -> Self {
        let (results_tx, results_rx) = channel();
        Self {
            results_tx,
            results_rx,
        }
    }

    /// Start a background-removal job for `item_id`, processing `source`
    /// (the item's unprocessed original data URL).
    pub fn spawn_removal(&self, item_id: String, source: String) {
        let tx = self.results_tx.clone();
        let job_id = item_id.clone();
        let spawned = thread::Builder::new()
            .name("bg-removal".to_string())
            .spawn(move || {
                let outcome = imaging::remove_background_from_data_url(&source);
                // Receiver gone means the session was dropped; nothing to do.
                let _ = tx.send(JobResult {
                    item_id: job_id,
                    outcome,
                });
            });

        // A failed spawn still produces a result so the item's processing
        // flag gets reset.
        if let Err(e) = spawned {
            warn!(error = %e, "failed to spawn background-removal worker");
            let _ = self.results_tx.send(JobResult {
                item_id,
                outcome: Err(BoardError::Processing(format!(
                    "could not start worker: {e}"
                ))),
            });
        }
    }

    /// Take the next finished job, if any. Never blocks.
    pub fn try_recv(&self) -> Option<JobResult> {
        self.results_rx.try_recv().ok()
    }
}
