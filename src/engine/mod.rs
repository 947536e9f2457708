//! Boundary to the external download engine
//!
//! The engine is a separate worker-pool system that owns segment retrieval,
//! retries, and file assembly. This module defines only the hand-off surface:
//! the job shape and a bounded, thread-safe intake queue. Submitting awaits
//! when the intake is full, which is how the engine applies backpressure to
//! the pipeline; the pipeline never spawns or waits on engine workers.

use crate::Error;
use tokio::sync::mpsc;

/// Kind of work handed to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobKind {
    /// Fetch a media list (playlist) and every segment it names
    ListDownload,
}

/// One unit of work for the download engine
///
/// Ownership transfers to the engine at submission; the pipeline neither
/// reads nor mutates a job after `Intake::submit` returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadJob {
    pub kind: JobKind,
    /// Resolved stream URL to download
    pub url: String,
    /// Destination directory for the finished file
    pub dest_path: String,
    /// Filename for the finished file
    pub filename: String,
    /// Ask the engine to skip its converter step
    pub skip_converter: bool,
}

/// Cloneable submission handle to the engine intake queue
#[derive(Clone)]
pub struct Intake {
    tx: mpsc::Sender<DownloadJob>,
}

impl Intake {
    /// Submits a job to the engine, awaiting while the intake is full
    ///
    /// Returns `Error::QueueClosed` if the engine has gone away.
    pub async fn submit(&self, job: DownloadJob) -> Result<(), Error> {
        self.tx.send(job).await.map_err(|_| Error::QueueClosed)
    }
}

/// Creates the bounded intake queue
///
/// The pipeline keeps the `Intake`; the engine (or whatever stands in for it)
/// drains the receiver.
pub fn intake_channel(capacity: usize) -> (Intake, mpsc::Receiver<DownloadJob>) {
    let (tx, rx) = mpsc::channel(capacity);
    (Intake { tx }, rx)
}
