use crate::compare::{ComparisonRequest, ComparisonResult, compare};
use crate::messages::ResponseMessage;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Messages sent to the comparison thread
pub enum CompareMessage {
    Compare {
        generation: u64,
        request: ComparisonRequest,
    },
    /// Stop the comparison thread
    Shutdown,
}

/// Runs comparisons off the UI thread.
///
/// Queued requests are collapsed to the newest one before any work starts,
/// and each result is sent as a single message.
pub struct CompareBackend {
    receiver: Receiver<CompareMessage>,
    response_sender: Sender<ResponseMessage>,
    last: Option<(u64, Arc<ComparisonResult>)>,
}

impl CompareBackend {
    pub fn new(
        receiver: Receiver<CompareMessage>,
        response_sender: Sender<ResponseMessage>,
    ) -> Self {
        Self {
            receiver,
            response_sender,
            last: None,
        }
    }

    pub fn run(&mut self) {
        info!("Compare worker started");

        while let Ok(message) = self.receiver.recv() {
            let CompareMessage::Compare {
                generation,
                request,
            } = message
            else {
                break;
            };

            let Some((generation, request)) = self.newest(generation, request) else {
                break;
            };

            let result = self.compute(&request);
            if self
                .response_sender
                .send(ResponseMessage::Compared { generation, result })
                .is_err()
            {
                warn!("Response channel closed, stopping compare worker");
                break;
            }
        }

        info!("Compare worker stopped");
    }

    /// Drain the queue and keep only the latest request.
    /// Returns `None` if a shutdown was queued.
    fn newest(
        &self,
        mut generation: u64,
        mut request: ComparisonRequest,
    ) -> Option<(u64, ComparisonRequest)> {
        loop {
            match self.receiver.try_recv() {
                Ok(CompareMessage::Compare {
                    generation: newer,
                    request: newer_request,
                }) => {
                    debug!(superseded = generation, by = newer, "Dropping stale comparison");
                    generation = newer;
                    request = newer_request;
                }
                Ok(CompareMessage::Shutdown) => return None,
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => {
                    return Some((generation, request));
                }
            }
        }
    }

    fn compute(&mut self, request: &ComparisonRequest) -> Arc<ComparisonResult> {
        let fingerprint = request.fingerprint();
        if let Some((last_fingerprint, result)) = &self.last
            && *last_fingerprint == fingerprint
        {
            debug!(fingerprint, "Reusing previous comparison");
            return Arc::clone(result);
        }

        let started = Instant::now();
        let result = Arc::new(compare(request));
        info!(
            left_lines = result.stats.left_lines(),
            right_lines = result.stats.right_lines(),
            added = result.stats.added,
            removed = result.stats.removed,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Comparison complete"
        );

        self.last = Some((fingerprint, Arc::clone(&result)));
        result
    }
}

/// Sending side of the comparison thread, owned by the UI.
///
/// Tracks the generation of the latest request the UI still cares about.
pub struct CompareHandle {
    sender: Sender<CompareMessage>,
    generation: u64,
}

impl CompareHandle {
    /// Queue a comparison and return its generation
    pub fn submit(&mut self, request: ComparisonRequest) -> u64 {
        self.generation += 1;
        let generation = self.generation;
        if let Err(e) = self.sender.send(CompareMessage::Compare {
            generation,
            request,
        }) {
            warn!("Failed to send comparison request: {}", e);
        }
        generation
    }

    /// Forget any in-flight comparison; its response will no longer be current
    pub fn invalidate(&mut self) {
        self.generation += 1;
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }
}

impl Drop for CompareHandle {
    fn drop(&mut self) {
        let _ = self.sender.send(CompareMessage::Shutdown);
    }
}

pub fn spawn_compare_backend(response_sender: Sender<ResponseMessage>) -> CompareHandle {
    let (sender, receiver) = mpsc::channel();
    thread::spawn(move || {
        let mut backend = CompareBackend::new(receiver, response_sender);
        backend.run();
    });
    CompareHandle {
        sender,
        generation: 0,
    }
}
