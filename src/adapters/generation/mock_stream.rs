//! Mock generation stream for testing.
//!
//! Serves scripted chunk sequences, or chunks pushed through a channel when a
//! test needs to interleave its own actions with the stream.
//!
//! # Example
//!
//! ```ignore
//! let stream = MockGenerationStream::new()
//!     .with_frames(["Hel", "lo "]);
//!
//! let chunks = stream.open(&request, &token).await?;
//! ```

use async_trait::async_trait;
use futures::stream;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc;

use crate::domain::generation::GenerationError;
use crate::ports::{AccessToken, ChunkStream, GenerationRequest, GenerationStream};

/// Builds one delta frame line, terminator included.
pub fn delta_frame(content: &str) -> String {
    let frame = serde_json::json!({ "choices": [{ "delta": { "content": content } }] });
    format!("data: {}\n", frame)
}

/// One scripted item of a mock response.
#[derive(Debug, Clone)]
pub enum MockChunk {
    Bytes(Vec<u8>),
    /// Transport failure at this point of the stream.
    Fail(GenerationError),
}

/// A configured mock response.
#[derive(Debug)]
enum MockResponse {
    Chunks(Vec<MockChunk>),
    Channel(mpsc::UnboundedReceiver<MockChunk>),
    Error(GenerationError),
}

/// Sender half of a channel-driven mock stream.
///
/// Dropping the sender closes the stream.
#[derive(Debug, Clone)]
pub struct MockChunkSender {
    tx: mpsc::UnboundedSender<MockChunk>,
}

impl MockChunkSender {
    /// Pushes raw bytes. Returns false once the consumer is gone.
    pub fn send_bytes(&self, bytes: impl Into<Vec<u8>>) -> bool {
        self.tx.send(MockChunk::Bytes(bytes.into())).is_ok()
    }

    /// Pushes one delta frame.
    pub fn send_frame(&self, content: &str) -> bool {
        self.send_bytes(delta_frame(content))
    }

    /// Pushes a transport failure.
    pub fn send_error(&self, error: GenerationError) -> bool {
        self.tx.send(MockChunk::Fail(error)).is_ok()
    }
}

/// Mock generation endpoint.
#[derive(Debug, Clone, Default)]
pub struct MockGenerationStream {
    /// Responses, consumed in order. An exhausted queue yields an empty stream.
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    /// Call history for verification.
    calls: Arc<Mutex<Vec<GenerationRequest>>>,
    tokens: Arc<Mutex<Vec<String>>>,
}

impl MockGenerationStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mock whose next response is fed through the returned sender.
    pub fn channel() -> (Self, MockChunkSender) {
        Self::new().with_channel()
    }

    /// Adds a response fed through the returned sender.
    pub fn with_channel(self) -> (Self, MockChunkSender) {
        let (tx, rx) = mpsc::unbounded_channel();
        lock(&self.responses).push_back(MockResponse::Channel(rx));
        (self, MockChunkSender { tx })
    }

    /// Adds a response made of raw chunks.
    pub fn with_chunks<I, B>(self, chunks: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: Into<Vec<u8>>,
    {
        let chunks = chunks
            .into_iter()
            .map(|chunk| MockChunk::Bytes(chunk.into()))
            .collect();
        self.with_script(chunks)
    }

    /// Adds a response with one delta frame per chunk.
    pub fn with_frames<'a>(self, contents: impl IntoIterator<Item = &'a str>) -> Self {
        self.with_chunks(contents.into_iter().map(delta_frame))
    }

    /// Adds a response from an explicit script.
    pub fn with_script(self, chunks: Vec<MockChunk>) -> Self {
        lock(&self.responses).push_back(MockResponse::Chunks(chunks));
        self
    }

    /// Adds a response that fails before producing a stream.
    pub fn with_error(self, error: GenerationError) -> Self {
        lock(&self.responses).push_back(MockResponse::Error(error));
        self
    }

    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    pub fn get_calls(&self) -> Vec<GenerationRequest> {
        lock(&self.calls).clone()
    }

    /// Raw tokens seen by `open`, in call order.
    pub fn get_tokens(&self) -> Vec<String> {
        lock(&self.tokens).clone()
    }
}

#[async_trait]
impl GenerationStream for MockGenerationStream {
    async fn open(
        &self,
        request: &GenerationRequest,
        token: &AccessToken,
    ) -> Result<ChunkStream, GenerationError> {
        lock(&self.calls).push(request.clone());
        lock(&self.tokens).push(token.expose().to_string());

        let response = lock(&self.responses).pop_front();
        match response {
            None => Ok(Box::pin(stream::empty())),
            Some(MockResponse::Error(err)) => Err(err),
            Some(MockResponse::Chunks(chunks)) => {
                Ok(Box::pin(stream::iter(chunks.into_iter().map(into_item))))
            }
            Some(MockResponse::Channel(rx)) => {
                let chunks = stream::unfold(rx, |mut rx| async move {
                    let chunk = rx.recv().await?;
                    Some((into_item(chunk), rx))
                });
                Ok(Box::pin(chunks))
            }
        }
    }
}

fn into_item(chunk: MockChunk) -> Result<Vec<u8>, GenerationError> {
    match chunk {
        MockChunk::Bytes(bytes) => Ok(bytes),
        MockChunk::Fail(err) => Err(err),
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    fn request() -> GenerationRequest {
        GenerationRequest::new("Park")
    }

    #[test]
    fn delta_frame_escapes_content() {
        assert_eq!(
            delta_frame("say \"hi\""),
            "data: {\"choices\":[{\"delta\":{\"content\":\"say \\\"hi\\\"\"}}]}\n"
        );
    }

    #[tokio::test]
    async fn scripted_chunks_are_replayed_in_order() {
        let mock = MockGenerationStream::new().with_chunks(["a", "b"]);
        let token = AccessToken::new("t");

        let chunks: Vec<_> = mock.open(&request(), &token).await.unwrap().collect().await;
        assert_eq!(chunks, vec![Ok(b"a".to_vec()), Ok(b"b".to_vec())]);
        assert_eq!(mock.call_count(), 1);
        assert_eq!(mock.get_tokens(), vec!["t".to_string()]);
    }

    #[tokio::test]
    async fn exhausted_queue_yields_empty_stream() {
        let mock = MockGenerationStream::new();
        let mut chunks = mock.open(&request(), &AccessToken::new("t")).await.unwrap();
        assert!(chunks.next().await.is_none());
    }

    #[tokio::test]
    async fn channel_stream_ends_when_sender_drops() {
        let (mock, sender) = MockGenerationStream::channel();
        let mut chunks = mock.open(&request(), &AccessToken::new("t")).await.unwrap();

        assert!(sender.send_bytes("x"));
        assert_eq!(chunks.next().await, Some(Ok(b"x".to_vec())));
        drop(sender);
        assert!(chunks.next().await.is_none());
    }

    #[tokio::test]
    async fn open_error_is_returned() {
        let mock = MockGenerationStream::new().with_error(GenerationError::Authentication);
        let result = mock.open(&request(), &AccessToken::new("t")).await;
        assert!(matches!(result, Err(GenerationError::Authentication)));
    }
}
