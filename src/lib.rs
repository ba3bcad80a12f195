//! lexicoach: English tutoring client for the Gemini API
//!
//! The core of the crate is the model fallback cascade: every tutoring task
//! (writing analysis, interview turns, session grading, pronunciation
//! analysis, speech synthesis) runs its model call through
//! [`ModelCascade::call_with_retry`], which tries the student's preferred
//! model and then each fallback in order until one succeeds.

pub mod application;
pub mod cli;
pub mod config;
pub mod constants;
pub mod domain;
pub mod infrastructure;

pub use application::{Tutor, TurnRequest};
pub use cli::{Cli, Command};
pub use config::{ConfigError, Settings};
pub use domain::assessment::{
    Assessment, FeedbackCategory, FeedbackItem, SpokenTurn, TurnOutcome,
};
pub use domain::types::{AudioClip, ChatMessage, Speaker};
pub use infrastructure::model::{
    DEFAULT_MODEL, FALLBACK_ORDER, GeminiClient, ModelCascade, ModelError, ModelId,
    SUPPORTED_MODELS, TutorError, candidate_chain,
};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use std::error::Error;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

pub async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let Cli {
        config,
        model,
        command,
    } = cli;
    let config_path = config.as_deref().map(Path::new);

    match command {
        Command::SetKey { key } => {
            let mut settings = Settings::load(config_path)?;
            settings.api_key = Some(key);
            settings.save(config_path)?;
            println!("API key saved");
            Ok(())
        }
        Command::SetModel { model } => {
            let id = parse_model_arg(&model)?;
            let mut settings = Settings::load(config_path)?;
            settings.model = Some(id.as_str().to_string());
            settings.save(config_path)?;
            println!("Preferred model set to {}", id.as_str());
            Ok(())
        }
        Command::Write { file } => {
            let tutor = build_tutor(config_path, model.as_deref())?;
            let text = read_text(&file)?;
            let assessment = tutor.analyze_writing(&text).await?;
            print_json(&assessment)
        }
        Command::Grade { topic, transcript } => {
            let tutor = build_tutor(config_path, model.as_deref())?;
            let transcript = read_transcript(&transcript)?;
            let assessment = tutor.grade_session(&transcript, &topic).await?;
            print_json(&assessment)
        }
        Command::Pronounce { text, audio } => {
            let tutor = build_tutor(config_path, model.as_deref())?;
            let clip = load_clip(&audio)?;
            let assessment = tutor.analyze_pronunciation(&text, &clip).await?;
            print_json(&assessment)
        }
        Command::Turn {
            topic,
            transcript,
            audio,
            question,
            final_turn,
            speak,
            audio_out,
        } => {
            let tutor = build_tutor(config_path, model.as_deref())?;
            let history = match &transcript {
                Some(path) => read_transcript(path)?,
                None => Vec::new(),
            };
            let clip = match &audio {
                Some(path) => Some(load_clip(path)?),
                None => None,
            };
            let request = TurnRequest {
                history: &history,
                topic: &topic,
                audio: clip.as_ref(),
                fixed_question: question.as_deref(),
                final_turn,
            };

            if speak {
                let spoken = tutor.interview_turn_spoken(request).await?;
                if let Some(path) = &audio_out {
                    if spoken.has_audio() {
                        fs::write(path, BASE64.decode(&spoken.audio)?)?;
                        info!(path = %path.display(), "Wrote synthesized audio");
                    } else {
                        warn!("No audio produced, skipping --audio-out");
                    }
                }
                print_json(&spoken.turn)
            } else {
                let turn = tutor.interview_turn(request).await?;
                print_json(&turn)
            }
        }
        Command::Synth { text, out } => {
            let tutor = build_tutor(config_path, model.as_deref())?;
            let audio = tutor.synthesize(&text).await;
            if audio.is_empty() {
                warn!("Synthesis produced no audio");
            }
            match &out {
                Some(path) if !audio.is_empty() => {
                    fs::write(path, BASE64.decode(&audio)?)?;
                    println!("{}", path.display());
                    Ok(())
                }
                _ => {
                    println!("{audio}");
                    Ok(())
                }
            }
        }
    }
}

pub fn init_tracing() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_level(true)
            .init();
    });
}

fn build_tutor(config_path: Option<&Path>, model_flag: Option<&str>) -> Result<Tutor, Box<dyn Error>> {
    let settings = Settings::load_or_default(config_path);
    let mut cascade = ModelCascade::from_settings(&settings);
    if let Some(value) = model_flag {
        cascade = cascade.with_preferred(parse_model_arg(value)?);
    }
    if !cascade.has_credential() {
        warn!("No API key resolved; model calls will fail until one is configured");
    }
    Ok(Tutor::new(cascade))
}

fn parse_model_arg(value: &str) -> Result<ModelId, Box<dyn Error>> {
    ModelId::parse(value).ok_or_else(|| {
        let supported: Vec<&str> = SUPPORTED_MODELS.iter().map(|m| m.as_str()).collect();
        format!(
            "unsupported model '{value}'; supported models: {}",
            supported.join(", ")
        )
        .into()
    })
}

fn read_text(path: &Path) -> Result<String, Box<dyn Error>> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}

fn read_transcript(path: &Path) -> Result<Vec<ChatMessage>, Box<dyn Error>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn load_clip(path: &Path) -> Result<AudioClip, Box<dyn Error>> {
    let data = fs::read(path)?;
    Ok(AudioClip::new(audio_mime_for(path), data))
}

fn audio_mime_for(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("mp3") => "audio/mpeg",
        Some("ogg") => "audio/ogg",
        Some("m4a" | "mp4") => "audio/mp4",
        Some("webm") => "audio/webm",
        Some("flac") => "audio/flac",
        _ => "audio/wav",
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audio_mime_falls_back_to_wav() {
        assert_eq!(audio_mime_for(Path::new("clip.mp3")), "audio/mpeg");
        assert_eq!(audio_mime_for(Path::new("clip.OGG")), "audio/ogg");
        assert_eq!(audio_mime_for(Path::new("clip")), "audio/wav");
        assert_eq!(audio_mime_for(Path::new("clip.xyz")), "audio/wav");
    }
}
