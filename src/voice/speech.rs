//! Speech capability boundary.
//!
//! Speech synthesis and recognition are runtime capabilities the core
//! consumes but does not implement. Support is detected once and exposed
//! as a boolean; every dependent operation degrades to a silent skip when
//! the capability is absent, so a missing speech engine can never block
//! or fail a session transition.

/// Default speech rate (1.0 = normal speed).
pub const DEFAULT_SPEECH_RATE: f32 = 1.0;

/// A speech synthesis/recognition engine.
///
/// Both directions are single-shot and cancelable: implementations must
/// cancel any in-flight utterance before speaking a new one, and stop any
/// in-flight recognition before starting a new one (at most one of each
/// at a time). `speak` is fire-and-forget — failures are swallowed by the
/// implementation, never surfaced to the caller.
///
/// Recognized transcripts flow back through the embedder, which feeds
/// them to the session controller.
pub trait SpeechCapability {
    /// Whether the runtime supports speech at all (detected once at
    /// initialization).
    fn is_supported(&self) -> bool;

    /// Speaks the text at the given rate, canceling any in-flight
    /// utterance first. No-op when unsupported.
    fn speak(&mut self, text: &str, rate: f32);

    /// Cancels the in-flight utterance, if any.
    fn cancel_speech(&mut self);

    /// Starts a single-shot recognition, stopping any in-flight one.
    fn start_listening(&mut self) {}

    /// Stops the in-flight recognition, if any.
    fn stop_listening(&mut self) {}
}

/// The no-op engine for runtimes without speech support.
///
/// Also the natural test double when prompt output is irrelevant.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSpeech;

impl SpeechCapability for NullSpeech {
    fn is_supported(&self) -> bool {
        false
    }

    fn speak(&mut self, _text: &str, _rate: f32) {}

    fn cancel_speech(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_speech_is_unsupported() {
        let mut speech = NullSpeech;
        assert!(!speech.is_supported());
        // All operations are harmless no-ops.
        speech.speak("开始烹饪", DEFAULT_SPEECH_RATE);
        speech.cancel_speech();
        speech.start_listening();
        speech.stop_listening();
    }
}
