//! Prompt builders for each tutoring task
//!
//! Each builder spells out the JSON contract for its task; the field names
//! mirror `domain::assessment`. Prompts ask for bare JSON, and the parser
//! still tolerates fenced replies.

use crate::domain::types::{ChatMessage, Speaker};
use std::fmt::Write as _;

pub const WRITING_SYSTEM: &str = "You are an experienced English writing examiner. You assess \
short texts from English learners, score them on a 0-9 band scale, and give corrections the \
student can act on. Reply with JSON only.";

pub const EXAMINER_SYSTEM: &str = "You are a friendly English speaking examiner running a \
practice interview. Keep your utterances short and conversational, one question at a time. \
Reply with JSON only.";

pub const GRADER_SYSTEM: &str = "You are an English speaking examiner grading a finished \
practice session. Be fair but specific; every point deducted must map to something in the \
transcript. Reply with JSON only.";

pub const PRONUNCIATION_SYSTEM: &str = "You are an English pronunciation coach. You compare a \
student's recording against a target sentence and score how intelligibly it was delivered. \
Reply with JSON only.";

/// Prompt for scoring a piece of writing
pub fn writing_analysis(text: &str) -> String {
    format!(
        "Assess the student's writing below.\n\n\
        Score each criterion from 0 to 9: taskResponse, coherence, lexicalResource, grammar. \
        The overall score is their average, rounded to the nearest half band.\n\n\
        Return a JSON object with exactly these fields:\n\
        - \"score\": overall band (number)\n\
        - \"breakdown\": object mapping \"taskResponse\", \"coherence\", \"lexicalResource\" \
        and \"grammar\" to numbers\n\
        - \"feedback\": overall feedback, two to three sentences\n\
        - \"detailedErrors\": array of corrections, each an object with \"original\", \
        \"corrected\", \"explanation\" and \"type\" (one of \"grammar\", \"vocabulary\", \
        \"coherence\")\n\
        - \"improvedVersion\": the full text rewritten at a higher band\n\n\
        Student's writing:\n{text}"
    )
}

/// Prompt for one interviewer turn
pub fn interview_turn(
    history: &[ChatMessage],
    topic: &str,
    has_audio: bool,
    fixed_question: Option<&str>,
    final_turn: bool,
) -> String {
    let mut prompt = format!("Practice interview on the topic: {topic}.\n");

    if history.is_empty() {
        prompt.push_str("\nThe interview is just starting.\n");
    } else {
        let _ = write!(
            prompt,
            "\nConversation so far:\n{}",
            render_transcript(history)
        );
    }

    if has_audio {
        prompt.push_str(
            "\nThe student's latest answer is attached as audio. Transcribe it verbatim \
            before responding.\n",
        );
    }

    if let Some(question) = fixed_question {
        let _ = writeln!(prompt, "\nYour next utterance must be exactly: \"{question}\"");
    } else if final_turn {
        prompt.push_str(
            "\nThis is the final turn. Do not ask another question; close the interview \
            with a short encouraging statement.\n",
        );
    } else {
        prompt.push_str("\nContinue the interview with one natural follow-up question.\n");
    }

    prompt.push_str(
        "\nReturn a JSON object with:\n\
        - \"transcription\": verbatim transcription of the attached audio (omit this field \
        when no audio is attached)\n\
        - \"response\": your next utterance\n",
    );
    prompt
}

/// Prompt for grading a finished speaking session
pub fn session_grading(transcript: &[ChatMessage], topic: &str) -> String {
    format!(
        "Grade the student's performance in the finished practice interview below. \
        Topic: {topic}.\n\n\
        Score four criteria, each from 0 to 2.5: content, language, pronunciation, fluency. \
        The overall score is their sum out of 10.\n\n\
        Return a JSON object with:\n\
        - \"score\": total out of 10\n\
        - \"breakdown\": object mapping \"content\", \"language\", \"pronunciation\" and \
        \"fluency\" to numbers\n\
        - \"feedback\": overall feedback, two to three sentences\n\
        - \"detailedErrors\": array of corrections drawn from the student's lines, each an \
        object with \"original\", \"corrected\", \"explanation\" and \"type\"\n\n\
        Transcript:\n{}",
        render_transcript(transcript)
    )
}

/// Prompt for scoring pronunciation of a target sentence
pub fn pronunciation_analysis(target: &str) -> String {
    format!(
        "The student was asked to read this sentence aloud:\n\"{target}\"\n\n\
        Their recording is attached. Score four criteria, each from 0 to 100: articulation, \
        intonation, fluency, confidence. The overall score is their average.\n\n\
        Return a JSON object with:\n\
        - \"score\": overall score (number)\n\
        - \"breakdown\": object mapping \"articulation\", \"intonation\", \"fluency\" and \
        \"confidence\" to numbers\n\
        - \"feedback\": overall feedback, two to three sentences\n\
        - \"detailedErrors\": array with one entry per mispronounced word, each an object \
        with \"original\" (the word as heard), \"corrected\" (pronunciation guidance), \
        \"explanation\" and \"type\" set to \"pronunciation\"\n\
        - \"transcription\": what the student actually said"
    )
}

/// Render a transcript as labeled lines for inclusion in a prompt
pub fn render_transcript(history: &[ChatMessage]) -> String {
    let mut out = String::new();
    for message in history {
        let label = match message.speaker {
            Speaker::Ai => "Examiner",
            Speaker::User => "Student",
        };
        let _ = writeln!(out, "{label}: {}", message.text);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_history() -> Vec<ChatMessage> {
        vec![
            ChatMessage::new(Speaker::Ai, "Tell me about your hometown."),
            ChatMessage::new(Speaker::User, "I grew up in a small coastal town.")
                .with_audio("UklGRg=="),
        ]
    }

    #[test]
    fn transcript_lines_are_labeled_by_speaker() {
        let rendered = render_transcript(&sample_history());
        assert_eq!(
            rendered,
            "Examiner: Tell me about your hometown.\nStudent: I grew up in a small coastal town.\n"
        );
    }

    #[test]
    fn fixed_question_is_quoted_verbatim() {
        let prompt = interview_turn(&[], "travel", false, Some("Where would you go?"), false);
        assert!(prompt.contains("must be exactly: \"Where would you go?\""));
    }

    #[test]
    fn final_turn_suppresses_questions() {
        let prompt = interview_turn(&sample_history(), "travel", false, None, true);
        assert!(prompt.contains("Do not ask another question"));
        assert!(!prompt.contains("follow-up question"));
    }

    #[test]
    fn audio_note_only_present_with_audio() {
        let with = interview_turn(&[], "travel", true, None, false);
        let without = interview_turn(&[], "travel", false, None, false);
        assert!(with.contains("attached as audio"));
        assert!(!without.contains("attached as audio"));
    }
}
