//! Writing analysis task

use std::sync::Arc;

use futures::FutureExt;

use super::{Tutor, prompts};
use crate::domain::assessment::Assessment;
use crate::infrastructure::model::{GenerateRequest, TutorError, parser};

impl Tutor {
    /// Score free text against the four-criterion writing rubric. Returns the
    /// band score, per-criterion breakdown, feedback, itemized corrections,
    /// and an improved rewrite.
    pub async fn analyze_writing(&self, text: &str) -> Result<Assessment, TutorError> {
        let request = Arc::new(GenerateRequest::text(
            prompts::WRITING_SYSTEM,
            prompts::writing_analysis(text),
        ));

        self.cascade
            .call_with_retry("writing analysis", move |model, client| {
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
