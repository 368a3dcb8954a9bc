//! Voice interaction: command parsing, prompt text, speech boundary.
//!
//! The interpreter turns recognized transcripts into a closed set of
//! intents for the session controller; the prompt catalog holds the
//! spoken phrases; the speech trait abstracts the synthesis/recognition
//! engine so the state machine stays correct without one.

mod command;
pub mod prompts;
mod speech;

pub use command::{parse_command, QueryTarget, VoiceCommand};
pub use speech::{NullSpeech, SpeechCapability, DEFAULT_SPEECH_RATE};
