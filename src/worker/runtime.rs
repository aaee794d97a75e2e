//! Dedicated worker thread over `std::sync::mpsc`.

use crate::domain::error::{MusicListError, Result};
use crate::worker::handler::ListingWorker;
use crate::worker::messages::{WorkerMessage, WorkerResponse};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::thread::JoinHandle;
use std::time::Duration;

const WORKER_THREAD_NAME: &str = "musiclist-worker";

/// UI-side handle to the worker thread.
///
/// Dropping the handle closes the request channel and joins the thread.
pub struct WorkerHandle {
    requests: Option<Sender<WorkerMessage>>,
    responses: Receiver<WorkerResponse>,
    thread: Option<JoinHandle<()>>,
}

impl WorkerHandle {
    /// Starts `worker` on its own thread.
    ///
    /// # Errors
    ///
    /// Returns an error if the OS refuses to spawn the thread.
    pub fn spawn(worker: ListingWorker) -> Result<Self> {
        let (request_tx, request_rx) = mpsc::channel::<WorkerMessage>();
        let (response_tx, response_rx) = mpsc::channel::<WorkerResponse>();

        let thread = std::thread::Builder::new()
            .name(WORKER_THREAD_NAME.to_string())
            .spawn(move || {
                tracing::debug!("worker thread started");
                for message in request_rx {
                    let response = worker.handle_message(message);
                    if response_tx.send(response).is_err() {
                        tracing::debug!("response channel closed, stopping worker");
                        break;
                    }
                }
                tracing::debug!("worker thread stopped");
            })?;

        Ok(Self {
            requests: Some(request_tx),
            responses: response_rx,
            thread: Some(thread),
        })
    }

    /// Queues a request for the worker.
    ///
    /// # Errors
    ///
    /// Returns [`MusicListError::Worker`] if the worker thread has stopped.
    pub fn send(&self, message: WorkerMessage) -> Result<()> {
        let sender = self
            .requests
            .as_ref()
            .ok_or_else(|| MusicListError::Worker("worker is shut down".to_string()))?;
        tracing::debug!(message = message.name(), "posting to worker");
        sender
            .send(message)
            .map_err(|_| MusicListError::Worker("worker thread has stopped".to_string()))
    }

    /// Returns a finished response if one is waiting.
    #[must_use]
    pub fn try_recv(&self) -> Option<WorkerResponse> {
        match self.responses.try_recv() {
            Ok(response) => Some(response),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                tracing::warn!("worker response channel disconnected");
                None
            }
        }
    }

    /// Waits up to `timeout` for the next response.
    #[must_use]
    pub fn recv_timeout(&self, timeout: Duration) -> Option<WorkerResponse> {
        match self.responses.recv_timeout(timeout) {
            Ok(response) => Some(response),
            Err(RecvTimeoutError::Timeout) => None,
            Err(RecvTimeoutError::Disconnected) => {
                tracing::warn!("worker response channel disconnected");
                None
            }
        }
    }
}

impl Drop for WorkerHandle {
    fn drop(&mut self) {
        drop(self.requests.take());
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                tracing::warn!("worker thread panicked");
            }
        }
    }
}
