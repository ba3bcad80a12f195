// Task-caller behavior when every candidate fails

use lexicoach::{DEFAULT_MODEL, ModelCascade, SUPPORTED_MODELS, Tutor, TutorError};

// 127.0.0.1:9 (discard) refuses connections immediately, so every candidate
// fails without leaving the machine.
fn unreachable_tutor() -> Tutor {
    Tutor::new(
        ModelCascade::new(Some("test-key".to_string()), DEFAULT_MODEL)
            .with_endpoint("http://127.0.0.1:9"),
    )
}

#[tokio::test]
async fn synthesis_degrades_to_empty_on_total_failure() {
    let audio = unreachable_tutor().synthesize("Hello there").await;
    assert_eq!(audio, "");
}

#[tokio::test]
async fn synthesis_degrades_to_empty_without_credential() {
    let tutor = Tutor::new(ModelCascade::new(None, DEFAULT_MODEL));
    assert_eq!(tutor.synthesize("Hello there").await, "");
}

#[tokio::test]
async fn writing_analysis_surfaces_exhaustion() {
    let err = unreachable_tutor()
        .analyze_writing("I has a apple")
        .await
        .expect_err("no candidate is reachable");

    match err {
        TutorError::Exhausted {
            operation,
            attempts,
            ..
        } => {
            assert_eq!(operation, "writing analysis");
            assert_eq!(attempts, SUPPORTED_MODELS.len());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn writing_analysis_fails_fast_without_credential() {
    let tutor = Tutor::new(ModelCascade::new(None, DEFAULT_MODEL));
    let err = tutor
        .analyze_writing("some text")
        .await
        .expect_err("no credential configured");
    assert!(matches!(err, TutorError::MissingApiKey));
}
