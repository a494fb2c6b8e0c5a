//! StreamingGenerationConsumer - Streams a generated draft into the draft field.
//!
//! A run opens the generation stream, decodes it line by line and appends
//! every recovered delta to the [`DraftSink`]. The run is cooperative: the
//! cancellation token is checked before each read and again before each
//! append, so nothing is written once `stop()` has been observed. Text that
//! was already appended stays in the draft whatever the outcome.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures::StreamExt;
use tokio_util::sync::CancellationToken;

use crate::domain::foundation::{GenerationId, StateMachine, Timestamp};
use crate::domain::generation::{
    FrameLine, FrameParser, GenerationError, GenerationReport, GenerationStatus, LineDecoder,
    Termination,
};
use crate::ports::{AccessToken, DraftSink, GenerationRequest, GenerationStream};

#[derive(Debug, Default)]
struct ConsumerState {
    status: GenerationStatus,
    cancel: Option<CancellationToken>,
    last_report: Option<GenerationReport>,
}

/// Counters of the run in progress.
#[derive(Debug, Default)]
struct RunCounters {
    appended_chars: usize,
    applied_deltas: usize,
    skipped_lines: usize,
    saw_end_marker: bool,
}

/// What to do after a line has been handled.
enum LineFlow {
    Continue,
    Cancelled,
}

/// Consumer of the streaming generation endpoint.
///
/// Only one run may be streaming at a time; a second `start` is rejected
/// with `AlreadyStreaming` rather than queued. Finished runs can be followed
/// by a new one.
pub struct StreamingGenerationConsumer {
    stream: Arc<dyn GenerationStream>,
    sink: Arc<dyn DraftSink>,
    parser: FrameParser,
    state: Mutex<ConsumerState>,
}

impl StreamingGenerationConsumer {
    pub fn new(
        stream: Arc<dyn GenerationStream>,
        sink: Arc<dyn DraftSink>,
        parser: FrameParser,
    ) -> Self {
        Self {
            stream,
            sink,
            parser,
            state: Mutex::new(ConsumerState::default()),
        }
    }

    /// Current lifecycle status.
    pub fn status(&self) -> GenerationStatus {
        self.state().status
    }

    /// Report of the most recent finished run.
    pub fn last_report(&self) -> Option<GenerationReport> {
        self.state().last_report.clone()
    }

    /// Streams a draft for `prompt` with a fresh cancellation token.
    pub async fn start(
        &self,
        prompt: &str,
        token: &AccessToken,
    ) -> Result<GenerationReport, GenerationError> {
        self.start_with_cancellation(prompt, token, CancellationToken::new())
            .await
    }

    /// Streams a draft for `prompt`, observing the given cancellation token.
    ///
    /// Returns the run report when the stream completed or was cancelled.
    /// Open and transport failures end the run as `Failed` and are returned
    /// as errors; the report is still available from [`Self::last_report`].
    pub async fn start_with_cancellation(
        &self,
        prompt: &str,
        token: &AccessToken,
        cancel: CancellationToken,
    ) -> Result<GenerationReport, GenerationError> {
        self.begin(cancel.clone())?;

        let id = GenerationId::new();
        let started_at = Timestamp::now();
        let run = ActiveRun::new(self);
        tracing::debug!(generation_id = %id, "generation started");

        let mut counters = RunCounters::default();
        let outcome = self.consume(prompt, token, &cancel, &mut counters).await;

        let (status, termination, error) = match outcome {
            Ok(Termination::Cancelled) => (GenerationStatus::Cancelled, Termination::Cancelled, None),
            Ok(termination) => (GenerationStatus::Completed, termination, None),
            Err(err @ GenerationError::Draft(_)) => {
                (GenerationStatus::Failed, Termination::DraftRejected, Some(err))
            }
            Err(err) => (GenerationStatus::Failed, Termination::TransportError, Some(err)),
        };

        let report = GenerationReport {
            id,
            status,
            appended_chars: counters.appended_chars,
            applied_deltas: counters.applied_deltas,
            skipped_lines: counters.skipped_lines,
            termination,
            started_at,
            finished_at: Timestamp::now(),
        };
        run.finish(report.clone());

        match error {
            Some(err) => {
                tracing::warn!(
                    generation_id = %id,
                    error = %err,
                    appended_chars = report.appended_chars,
                    "generation failed"
                );
                Err(err)
            }
            None => {
                tracing::debug!(
                    generation_id = %id,
                    status = %report.status,
                    appended_chars = report.appended_chars,
                    skipped_lines = report.skipped_lines,
                    elapsed_ms = report.elapsed().num_milliseconds(),
                    "generation finished"
                );
                Ok(report)
            }
        }
    }

    /// Requests cancellation of the running stream.
    ///
    /// Takes effect at the next read or append. Returns false when nothing
    /// is streaming.
    pub fn stop(&self) -> bool {
        let state = self.state();
        match (&state.cancel, state.status.is_streaming()) {
            (Some(cancel), true) => {
                cancel.cancel();
                tracing::debug!("generation stop requested");
                true
            }
            _ => false,
        }
    }

    fn begin(&self, cancel: CancellationToken) -> Result<(), GenerationError> {
        let mut state = self.state();
        if state.status.is_streaming() {
            return Err(GenerationError::AlreadyStreaming);
        }
        if state.status.is_finished() {
            advance(&mut state.status, GenerationStatus::Idle);
        }
        advance(&mut state.status, GenerationStatus::Streaming);
        state.cancel = Some(cancel);
        Ok(())
    }

    async fn consume(
        &self,
        prompt: &str,
        token: &AccessToken,
        cancel: &CancellationToken,
        counters: &mut RunCounters,
    ) -> Result<Termination, GenerationError> {
        if cancel.is_cancelled() {
            return Ok(Termination::Cancelled);
        }

        let request = GenerationRequest::new(prompt);
        let mut chunks = self.stream.open(&request, token).await?;
        let mut decoder = LineDecoder::new();

        loop {
            if cancel.is_cancelled() {
                return Ok(Termination::Cancelled);
            }

            match chunks.next().await {
                Some(Ok(bytes)) => {
                    for line in decoder.feed(&bytes) {
                        if let LineFlow::Cancelled = self.apply_line(&line, cancel, counters)? {
                            return Ok(Termination::Cancelled);
                        }
                    }
                }
                Some(Err(err)) => return Err(err),
                None => break,
            }
        }

        if let Some(line) = decoder.finish() {
            if let LineFlow::Cancelled = self.apply_line(&line, cancel, counters)? {
                return Ok(Termination::Cancelled);
            }
        }

        if counters.saw_end_marker {
            Ok(Termination::EndMarker)
        } else {
            Ok(Termination::TransportClose)
        }
    }

    fn apply_line(
        &self,
        line: &str,
        cancel: &CancellationToken,
        counters: &mut RunCounters,
    ) -> Result<LineFlow, GenerationError> {
        if counters.saw_end_marker {
            return Ok(LineFlow::Continue);
        }

        match self.parser.parse(line) {
            FrameLine::Delta(text) => {
                if cancel.is_cancelled() {
                    return Ok(LineFlow::Cancelled);
                }
                self.sink.append(&text)?;
                counters.appended_chars += text.chars().count();
                counters.applied_deltas += 1;
            }
            FrameLine::Malformed(reason) => {
                counters.skipped_lines += 1;
                tracing::trace!(%line, %reason, "skipping malformed frame");
            }
            FrameLine::Done => counters.saw_end_marker = true,
            FrameLine::Blank | FrameLine::NoContent => {}
        }
        Ok(LineFlow::Continue)
    }

    fn state(&self) -> MutexGuard<'_, ConsumerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Holds the draft for the duration of a run.
///
/// The draft is released before the terminal status is published. A run
/// dropped before `finish` (for example when its task is aborted) is
/// recorded as cancelled.
struct ActiveRun<'a> {
    consumer: &'a StreamingGenerationConsumer,
    finished: bool,
}

impl<'a> ActiveRun<'a> {
    fn new(consumer: &'a StreamingGenerationConsumer) -> Self {
        consumer.sink.begin_stream();
        Self {
            consumer,
            finished: false,
        }
    }

    fn finish(mut self, report: GenerationReport) {
        self.finished = true;
        self.consumer.sink.end_stream();

        let mut state = self.consumer.state();
        advance(&mut state.status, report.status);
        state.cancel = None;
        state.last_report = Some(report);
    }
}

impl Drop for ActiveRun<'_> {
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        self.consumer.sink.end_stream();

        let mut state = self.consumer.state();
        advance(&mut state.status, GenerationStatus::Cancelled);
        state.cancel = None;
    }
}

fn advance(status: &mut GenerationStatus, target: GenerationStatus) {
    match status.transition_to(target) {
        Ok(next) => *status = next,
        Err(err) => {
            tracing::warn!(from = %status, to = %target, %err, "unexpected generation status change");
            *status = target;
        }
    }
}
