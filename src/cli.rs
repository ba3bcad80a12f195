use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "lexicoach",
    version,
    about = "English tutoring client for the Gemini API"
)]
pub struct Cli {
    /// Settings file path (default: config/settings.toml)
    #[arg(long)]
    pub config: Option<String>,
    /// Override the preferred model for this invocation
    #[arg(long)]
    pub model: Option<String>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score a piece of writing ("-" reads from stdin)
    Write { file: PathBuf },
    /// Grade a finished speaking session transcript (JSON array of messages)
    Grade {
        #[arg(long)]
        topic: String,
        transcript: PathBuf,
    },
    /// Score pronunciation of a target sentence from a recording
    Pronounce {
        /// The sentence the student was asked to read
        #[arg(long)]
        text: String,
        audio: PathBuf,
    },
    /// Produce one interviewer turn
    Turn {
        #[arg(long)]
        topic: String,
        /// Transcript of the conversation so far (JSON array of messages)
        #[arg(long)]
        transcript: Option<PathBuf>,
        /// The student's recorded answer
        #[arg(long)]
        audio: Option<PathBuf>,
        /// Force the examiner's next utterance
        #[arg(long)]
        question: Option<String>,
        /// Close the interview instead of asking another question
        #[arg(long)]
        final_turn: bool,
        /// Also synthesize the examiner's reply
        #[arg(long)]
        speak: bool,
        /// Where to write the synthesized audio (requires --speak)
        #[arg(long, value_name = "FILE")]
        audio_out: Option<PathBuf>,
    },
    /// Synthesize speech for a line of text
    Synth {
        text: String,
        /// Write decoded audio here instead of printing base64
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Persist the Gemini API key
    SetKey { key: String },
    /// Persist the preferred model
    SetModel { model: String },
}
