//! Interview turns and session grading

use std::sync::Arc;

use futures::FutureExt;

use super::{Tutor, prompts};
use crate::domain::assessment::{Assessment, SpokenTurn, TurnOutcome};
use crate::domain::types::{AudioClip, ChatMessage};
use crate::infrastructure::model::{GenerateRequest, Part, TutorError, parser};

/// Inputs for one interviewer turn. The transcript is borrowed from the
/// caller; audio bytes are encoded into the payload at build time.
#[derive(Debug, Clone, Copy)]
pub struct TurnRequest<'a> {
    pub history: &'a [ChatMessage],
    pub topic: &'a str,
    pub audio: Option<&'a AudioClip>,
    /// Forces the examiner's next utterance instead of letting the model pick
    pub fixed_question: Option<&'a str>,
    /// Suppresses further questions and closes the interview
    pub final_turn: bool,
}

impl Tutor {
    /// Produce the next examiner utterance, transcribing the student's audio
    /// when one is attached.
    pub async fn interview_turn(&self, request: TurnRequest<'_>) -> Result<TurnOutcome, TutorError> {
        let prompt = prompts::interview_turn(
            request.history,
            request.topic,
            request.audio.is_some(),
            request.fixed_question,
            request.final_turn,
        );
        let mut parts = vec![Part::text(prompt)];
        if let Some(clip) = request.audio {
            parts.push(Part::audio(clip));
        }
        let payload = Arc::new(GenerateRequest::new(prompts::EXAMINER_SYSTEM, parts));

        self.cascade
            .call_with_retry("interview turn", move |model, client| {
                let payload = Arc::clone(&payload);
                async move {
                    let raw = client.generate_json(model, &payload).await?;
                    parser::parse_contract::<TurnOutcome>(&raw)
                }
                .boxed()
            })
            .await
    }

    /// Interview turn followed by best-effort synthesis of the reply. The two
    /// stages run sequentially; a synthesis failure is captured as an empty
    /// audio payload and never poisons the turn itself.
    pub async fn interview_turn_spoken(
        &self,
        request: TurnRequest<'_>,
    ) -> Result<SpokenTurn, TutorError> {
        let turn = self.interview_turn(request).await?;
        let audio = self.synthesize(&turn.response).await;
        Ok(SpokenTurn { turn, audio })
    }

    /// Grade a finished session against the ten-point speaking rubric
    /// (content, language, pronunciation, fluency).
    pub async fn grade_session(
        &self,
        transcript: &[ChatMessage],
        topic: &str,
    ) -> Result<Assessment, TutorError> {
        let request = Arc::new(GenerateRequest::text(
            prompts::GRADER_SYSTEM,
            prompts::session_grading(transcript, topic),
        ));

        self.cascade
            .call_with_retry("session grading", move |model, client| {
                let request = Arc::clone(&request);
                async move {
                    let raw = client.generate_json(model, &request).await?;
                    parser::parse_contract::<Assessment>(&raw)
                }
                .boxed()
            })
            .await
    }
}
