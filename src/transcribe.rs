// src/transcribe.rs
//! Speech-to-text collaborator behind a narrow async interface. The real
//! integration lives outside this crate; the bundled implementation
//! returns a canned transcript for uploaded media.

use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
#[error("transcription failed: {0}")]
pub struct TranscribeError(pub String);

/// External transcription service seam.
#[async_trait]
pub trait Transcriber: Send + Sync {
    async fn transcribe(&self, audio: &[u8]) -> Result<String, TranscribeError>;

    /// Provider name for diagnostics.
    fn provider_name(&self) -> &'static str;
}

/// Placeholder provider standing in for a real STT dependency.
#[derive(Debug, Clone, Default)]
pub struct MockTranscriber;

pub const MOCK_TRANSCRIPT: &str =
    "This is a mock transcript derived from the uploaded media file for analysis.";

#[async_trait]
impl Transcriber for MockTranscriber {
    async fn transcribe(&self, _audio: &[u8]) -> Result<String, TranscribeError> {
        Ok(MOCK_TRANSCRIPT.to_string())
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}

/// One retry, then the failure surfaces. No backoff: the placeholder call
/// is local and a second attempt either works or never will.
pub async fn transcribe_with_retry(
    transcriber: &dyn Transcriber,
    audio: &[u8],
) -> Result<String, TranscribeError> {
    match transcriber.transcribe(audio).await {
        Ok(t) => Ok(t),
        Err(first) => {
            tracing::warn!(
                provider = transcriber.provider_name(),
                error = %first,
                "transcription failed, retrying once"
            );
            transcriber.transcribe(audio).await
        }
    }
}
