//! Incremental byte-to-line decoding for chunked responses.
//!
//! Transport chunks do not respect line or character boundaries. The decoder
//! keeps the tail after the last newline until more bytes arrive, so a frame
//! or a multi-byte character split across two chunks is decoded whole.

/// Buffers raw bytes and yields complete lines.
#[derive(Debug, Default)]
pub struct LineDecoder {
    pending: Vec<u8>,
}

impl LineDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a chunk and returns every line it completes.
    ///
    /// Lines are returned without their terminator; a trailing `\r` is
    /// stripped. Invalid UTF-8 inside a complete line is replaced rather than
    /// rejected.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<String> {
        self.pending.extend_from_slice(chunk);

        let Some(last_newline) = self.pending.iter().rposition(|b| *b == b'\n') else {
            return Vec::new();
        };

        let complete: Vec<u8> = self.pending.drain(..=last_newline).collect();
        String::from_utf8_lossy(&complete)
            .lines()
            .map(str::to_owned)
            .collect()
    }

    /// Flushes whatever is left once the stream has ended.
    pub fn finish(&mut self) -> Option<String> {
        if self.pending.is_empty() {
            return None;
        }
        let rest = std::mem::take(&mut self.pending);
        let line = String::from_utf8_lossy(&rest);
        Some(line.trim_end_matches('\r').to_owned())
    }

    /// Number of buffered bytes not yet returned as a line.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}
