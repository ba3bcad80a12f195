//! Best-effort speech synthesis

use std::sync::Arc;

use futures::FutureExt;
use tracing::warn;

use super::Tutor;
use crate::constants::SYNTHESIS_VOICE;

impl Tutor {
    /// Synthesize speech for a line of text. Audio is a non-essential
    /// enhancement: any failure, including full chain exhaustion, degrades to
    /// an empty string instead of an error.
    pub async fn synthesize(&self, text: &str) -> String {
        let line = Arc::new(text.to_string());
        let result = self
            .cascade
            .call_with_retry("speech synthesis", move |model, client| {
                let line = Arc::clone(&line);
                async move { client.generate_audio(model, &line, SYNTHESIS_VOICE).await }.boxed()
            })
            .await;

        match result {
            Ok(audio) => audio,
            Err(err) => {
                warn!(error = %err, "Speech synthesis unavailable, continuing without audio");
                String::new()
            }
        }
    }
}
