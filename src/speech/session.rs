// Recognition session state machine.
//
// One recognition session is active at a time. States and transitions:
//
//   Idle --start--> Listening --complete--> Idle
//                   Listening --fail------> Error
//   Error --reset--> Idle
//
// A start while already listening is rejected, and a start from Error
// requires an explicit reset first.

use anyhow::{bail, Result};
use tracing::debug;

use super::synthesis::VoiceSettings;
use super::transcribe::Transcriber;

/// States of a recognition session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Listening,
    /// A capture failure, holding the error message until reset.
    Error(String),
}

/// A single-flight recognition session wrapping a transcriber.
pub struct RecognitionSession {
    transcriber: Box<dyn Transcriber>,
    state: SessionState,
}

impl RecognitionSession {
    pub fn new(transcriber: Box<dyn Transcriber>) -> Self {
        Self {
            transcriber,
            state: SessionState::Idle,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Idle -> Listening. Rejected while listening or in error.
    fn start(&mut self) -> Result<()> {
        match &self.state {
            SessionState::Idle => {
                debug!("Recognition session: idle -> listening");
                self.state = SessionState::Listening;
                Ok(())
            }
            SessionState::Listening => bail!("a recognition session is already active"),
            SessionState::Error(message) => {
                bail!("session is in an error state ({message}); reset it first")
            }
        }
    }

    /// Listening -> Idle, yielding the transcript.
    fn complete(&mut self, transcript: String) -> String {
        debug!("Recognition session: listening -> idle");
        self.state = SessionState::Idle;
        transcript
    }

    /// Listening -> Error.
    fn fail(&mut self, message: String) {
        debug!(error = %message, "Recognition session: listening -> error");
        self.state = SessionState::Error(message);
    }

    /// Clear an error back to Idle. No-op in any other state.
    pub fn reset(&mut self) {
        if matches!(self.state, SessionState::Error(_)) {
            debug!("Recognition session: error -> idle");
            self.state = SessionState::Idle;
        }
    }

    /// Run one capture pass and return the transcript.
    pub async fn listen_once(&mut self, settings: &VoiceSettings) -> Result<String> {
        self.start()?;
        match self.transcriber.transcribe(settings).await {
            Ok(transcript) => Ok(self.complete(transcript)),
            Err(e) => {
                self.fail(e.to_string());
                Err(e)
            }
        }
    }
}
