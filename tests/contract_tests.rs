// Result-contract parsing: fence stripping plus typed deserialization

use lexicoach::infrastructure::model::{ModelError, parse_contract, parse_json};
use lexicoach::{Assessment, FeedbackCategory, TurnOutcome};
use serde_json::json;

#[test]
fn fenced_json_parses() {
    let value = parse_json("```json\n{\"score\":7}\n```").expect("fenced JSON");
    assert_eq!(value, json!({"score": 7}));
}

#[test]
fn unfenced_json_parses() {
    let value = parse_json("{\"score\":7}").expect("bare JSON");
    assert_eq!(value, json!({"score": 7}));
}

#[test]
fn non_json_is_a_malformed_response() {
    let err = parse_json("not json").expect_err("not parseable");
    assert!(matches!(err, ModelError::MalformedResponse { .. }));
}

#[test]
fn writing_contract_parses_grammar_corrections() {
    let raw = r#"```json
{
  "score": 4.5,
  "breakdown": {"taskResponse": 5, "coherence": 4.5, "lexicalResource": 4.5, "grammar": 4},
  "feedback": "Short but mostly understandable.",
  "detailedErrors": [
    {
      "original": "I has a apple",
      "corrected": "I have an apple",
      "explanation": "Use 'have' with 'I', and 'an' before a vowel sound.",
      "type": "grammar"
    }
  ],
  "improvedVersion": "I have an apple."
}
```"#;

    let assessment: Assessment = parse_contract(raw).expect("valid writing contract");
    assert_eq!(assessment.score, 4.5);
    assert_eq!(
        assessment.breakdown.as_ref().and_then(|b| b.get("grammar")),
        Some(&4.0)
    );
    assert_eq!(assessment.improved_version.as_deref(), Some("I have an apple."));

    let grammar_items: Vec<_> = assessment
        .detailed_errors
        .iter()
        .filter(|item| item.category == FeedbackCategory::Grammar)
        .collect();
    assert!(!grammar_items.is_empty());
    assert!(grammar_items[0].original.contains("has"));
    assert_eq!(grammar_items[0].category.as_str(), "grammar");
}

#[test]
fn minimal_assessment_fills_defaults() {
    let assessment: Assessment =
        parse_contract("{\"score\": 7, \"feedback\": \"Good work.\"}").expect("minimal contract");
    assert_eq!(assessment.score, 7.0);
    assert!(assessment.breakdown.is_none());
    assert!(assessment.detailed_errors.is_empty());
    assert!(assessment.improved_version.is_none());
    assert!(assessment.transcription.is_none());
}

#[test]
fn turn_contract_with_and_without_transcription() {
    let with: TurnOutcome = parse_contract(
        "{\"transcription\": \"I like to travel.\", \"response\": \"Where to?\"}",
    )
    .expect("turn with transcription");
    assert_eq!(with.transcription.as_deref(), Some("I like to travel."));
    assert_eq!(with.response, "Where to?");

    let without: TurnOutcome =
        parse_contract("{\"response\": \"Tell me about your hometown.\"}")
            .expect("turn without transcription");
    assert!(without.transcription.is_none());
}

#[test]
fn missing_required_field_is_malformed() {
    let err = parse_contract::<TurnOutcome>("{\"transcription\": \"hello\"}")
        .expect_err("response field is required");
    assert!(matches!(err, ModelError::MalformedResponse { .. }));
}

#[test]
fn assessment_serializes_camel_case() {
    let raw = r#"{
        "score": 6,
        "feedback": "ok",
        "detailedErrors": [
            {"original": "a", "corrected": "b", "explanation": "c", "type": "vocabulary"}
        ]
    }"#;
    let assessment: Assessment = parse_contract(raw).expect("contract");
    let rendered = serde_json::to_string(&assessment).expect("serialize");
    assert!(rendered.contains("\"detailedErrors\""));
    assert!(rendered.contains("\"type\":\"vocabulary\""));
}
