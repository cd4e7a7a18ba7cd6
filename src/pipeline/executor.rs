//! Recognition executor: runs recognition calls on worker tasks.
//!
//! [`dispatch`](RecognitionExecutor::dispatch) spawns the provider call on a
//! tokio task and returns immediately. Results are collected with
//! [`next_delivery`](RecognitionExecutor::next_delivery), which always
//! yields them in dispatch order: pending tasks sit in a FIFO and only the
//! front one is awaited, so a fast second request cannot overtake a slow
//! first one.
//!
//! The worker task owns nothing but the provider handle and the request. It
//! never sees session state; everything it produces comes back as a
//! [`Delivery`].
//!
//! Every dispatch produces exactly one delivery. A provider error, a
//! provider panic and a task that never finished all deliver an absent
//! result (`None`), which the classifier turns into "no response".

use std::collections::VecDeque;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

use futures_util::FutureExt;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{Instrument, debug, instrument, warn};

use crate::providers::RecognitionProvider;
use crate::telemetry;
use crate::types::{ImageHandle, RecognitionRequest, RecognitionResult};

/// A recognition result handed back to the session.
#[derive(Debug, Clone)]
pub struct Delivery {
    pub request: RecognitionRequest,
    /// `None` when no result came back at all.
    pub result: Option<RecognitionResult>,
    /// Time spent in the provider call.
    pub elapsed: Duration,
}

struct Pending {
    request: RecognitionRequest,
    handle: JoinHandle<(Option<RecognitionResult>, Duration)>,
}

pub struct RecognitionExecutor {
    provider: Arc<dyn RecognitionProvider>,
    pending: VecDeque<Pending>,
    next_id: u64,
}

impl RecognitionExecutor {
    pub fn new(provider: Arc<dyn RecognitionProvider>) -> Self {
        Self {
            provider,
            pending: VecDeque::new(),
            next_id: 1,
        }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Start recognizing `image` on a worker task.
    ///
    /// # Panics
    ///
    /// Requires a tokio runtime context.
    #[instrument(skip(self, image), fields(operation = "recognize", request_id = self.next_id))]
    pub fn dispatch(&mut self, image: ImageHandle) -> RecognitionRequest {
        let request = RecognitionRequest {
            id: self.next_id,
            image,
            submitted_at: Instant::now(),
        };
        self.next_id += 1;

        let provider = Arc::clone(&self.provider);
        let image = request.image.clone();
        let request_id = request.id;
        let handle = tokio::spawn(async move {
            let started = Instant::now();
            let outcome = AssertUnwindSafe(provider.recognize(&image))
                .catch_unwind()
                .await;
            let elapsed = started.elapsed();
            metrics::histogram!(telemetry::REQUEST_DURATION_SECONDS)
                .record(elapsed.as_secs_f64());

            let result = match outcome {
                Ok(Ok(result)) => Some(result),
                Ok(Err(e)) => {
                    warn!(
                        provider = provider.name(),
                        request_id,
                        error = %e,
                        "recognition call failed"
                    );
                    None
                }
                Err(_) => {
                    warn!(
                        provider = provider.name(),
                        request_id, "recognition provider panicked"
                    );
                    None
                }
            };
            (result, elapsed)
        }
        .in_current_span());

        debug!(
            provider = self.provider.name(),
            request_id = request.id,
            width = request.image.width,
            height = request.image.height,
            "recognition dispatched"
        );
        self.pending.push_back(Pending {
            request: request.clone(),
            handle,
        });
        request
    }

    /// Wait for the oldest outstanding request to finish.
    ///
    /// Returns `None` immediately when nothing is outstanding. Cancel-safe:
    /// dropping the future before it resolves leaves the request queued.
    pub async fn next_delivery(&mut self) -> Option<Delivery> {
        let front = self.pending.front_mut()?;
        let joined = (&mut front.handle).await;
        let Pending { request, .. } = self.pending.pop_front()?;

        let (result, elapsed) = match joined {
            Ok(done) => done,
            Err(e) => {
                warn!(request_id = request.id, error = %e, "recognition task did not finish");
                (None, request.submitted_at.elapsed())
            }
        };
        Some(Delivery {
            request,
            result,
            elapsed,
        })
    }
}
