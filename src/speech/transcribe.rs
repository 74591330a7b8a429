// Speech recognition — delegation to a configured capture command.
//
// There is no in-process audio capture or decoding. The transcriber runs
// whatever platform dictation service the user wires up (VISHWAS_STT_CMD),
// passes it the language tag, and reads the transcript from stdout.

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use super::synthesis::VoiceSettings;

/// Trait for producing one transcript from a speech service.
#[async_trait]
pub trait Transcriber: Send + Sync {
    async fn transcribe(&self, settings: &VoiceSettings) -> Result<String>;
}

/// Transcriber that runs an external capture command.
///
/// The command string is split on whitespace (no shell involved); the
/// language tag is appended as the final argument. Stdout, trimmed, is
/// the transcript.
pub struct CommandTranscriber {
    command: String,
}

impl CommandTranscriber {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

#[async_trait]
impl Transcriber for CommandTranscriber {
    async fn transcribe(&self, settings: &VoiceSettings) -> Result<String> {
        let mut parts = self.command.split_whitespace();
        let program = parts.next().context("capture command is empty")?;
        let args: Vec<&str> = parts.collect();

        debug!(command = %self.command, lang = %settings.language, "Delegating speech capture");

        let output = Command::new(program)
            .args(&args)
            .arg(settings.language.tag())
            .output()
            .await
            .with_context(|| format!("failed to run capture command '{program}'"))?;

        if !output.status.success() {
            bail!(
                "capture command '{}' failed: {}",
                program,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        let transcript = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if transcript.is_empty() {
            bail!("capture command produced no transcript");
        }
        Ok(transcript)
    }
}
