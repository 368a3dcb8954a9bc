//! Voice-command interpretation.
//!
//! Maps free-text transcripts to a closed set of intents via
//! case-normalized substring matching against a fixed Chinese phrase set.
//! Deliberately a keyword matcher, not an NLU model: precision over
//! recall for a small vocabulary spoken in a hands-busy kitchen.
//!
//! Phrases are checked in priority order; the first match wins and an
//! unmatched transcript yields `None` for the caller to ignore.

/// What a `query` command asks about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryTarget {
    /// Remaining cooking time.
    Time,
    /// Current step temperature.
    Temperature,
}

/// An interpreted voice intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceCommand {
    /// Start cooking, or resume when paused.
    Start,
    /// Pause the session clock.
    Pause,
    /// Advance to the next step.
    Next,
    /// Re-speak the current step.
    Repeat,
    /// Ask about time or temperature.
    Query(QueryTarget),
}

const START_PHRASES: &[&str] = &["开始", "继续"];
const PAUSE_PHRASES: &[&str] = &["暂停", "停止"];
const NEXT_PHRASES: &[&str] = &["下一步", "下一个"];
const REPEAT_PHRASES: &[&str] = &["重复", "再说一遍"];
const TIME_PHRASES: &[&str] = &["多久", "还有"];
const TEMPERATURE_PHRASES: &[&str] = &["温度"];

/// Parses a transcript into a command, or `None` when nothing matches.
///
/// # Example
///
/// ```
/// use smart_chef::voice::{parse_command, QueryTarget, VoiceCommand};
///
/// assert_eq!(parse_command("开始烹饪"), Some(VoiceCommand::Start));
/// assert_eq!(parse_command("还有多久"), Some(VoiceCommand::Query(QueryTarget::Time)));
/// assert_eq!(parse_command("随便说点什么"), None);
/// ```
pub fn parse_command(transcript: &str) -> Option<VoiceCommand> {
    let text = transcript.to_lowercase();
    let contains_any = |phrases: &[&str]| phrases.iter().any(|p| text.contains(p));

    if contains_any(START_PHRASES) {
        Some(VoiceCommand::Start)
    } else if contains_any(PAUSE_PHRASES) {
        Some(VoiceCommand::Pause)
    } else if contains_any(NEXT_PHRASES) {
        Some(VoiceCommand::Next)
    } else if contains_any(REPEAT_PHRASES) {
        Some(VoiceCommand::Repeat)
    } else if contains_any(TIME_PHRASES) {
        Some(VoiceCommand::Query(QueryTarget::Time))
    } else if contains_any(TEMPERATURE_PHRASES) {
        Some(VoiceCommand::Query(QueryTarget::Temperature))
    } else {
        None
    }
}
