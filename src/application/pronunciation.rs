//! Pronunciation analysis task

use std::sync::Arc;

use futures::FutureExt;

use super::{Tutor, prompts};
use crate::domain::assessment::Assessment;
use crate::domain::types::AudioClip;
use crate::infrastructure::model::{GenerateRequest, Part, TutorError, parser};

impl Tutor {
    /// Score a recording of the target sentence against the articulation,
    /// intonation, fluency, and confidence criteria.
    pub async fn analyze_pronunciation(
        &self,
        target: &str,
        clip: &AudioClip,
    ) -> Result<Assessment, TutorError> {
        let parts = vec![
            Part::text(prompts::pronunciation_analysis(target)),
            Part::audio(clip),
        ];
        let request = Arc::new(GenerateRequest::new(prompts::PRONUNCIATION_SYSTEM, parts));

        self.cascade
            .call_with_retry("pronunciation analysis", move |model, client| {
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
