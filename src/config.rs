// Central configuration loaded from environment variables.
//
// The .env file is loaded automatically at startup via dotenvy. Nothing
// here is required for plain text analysis; the capture command is only
// needed by operations that listen for speech.

use std::env;

use anyhow::Result;

use crate::speech::synthesis::{Language, VoiceSettings};

/// Which detection engine analyzes messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineBackend {
    /// Fixed trigger phrases, +20 each (default)
    Trigger,
    /// Weighted keyword/pattern detector
    Pattern,
}

impl EngineBackend {
    /// Parse an engine name as used by VISHWAS_ENGINE and --engine.
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "trigger" => Ok(EngineBackend::Trigger),
            "pattern" => Ok(EngineBackend::Pattern),
            other => anyhow::bail!("Unknown engine '{other}'. Supported: trigger, pattern"),
        }
    }
}

pub struct Config {
    /// Which engine analyzes messages (default: Trigger)
    pub engine: EngineBackend,
    /// Voice settings applied to speech calls
    pub voice: VoiceSettings,
    /// External capture command for speech input (VISHWAS_STT_CMD)
    pub stt_command: Option<String>,
    /// Override command for speech output (VISHWAS_TTS_CMD)
    pub tts_command: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything has a default except the capture command, which only
    /// `listen` needs (see require_transcriber).
    pub fn load() -> Result<Self> {
        let engine = match env::var("VISHWAS_ENGINE") {
            Ok(name) => EngineBackend::parse(&name)?,
            Err(_) => EngineBackend::Trigger,
        };

        let language = match env::var("VISHWAS_LANG") {
            Ok(tag) => Language::from_tag(&tag)?,
            Err(_) => Language::English,
        };

        let voice = VoiceSettings {
            rate: env_f32("VISHWAS_VOICE_RATE", 1.0),
            pitch: env_f32("VISHWAS_VOICE_PITCH", 1.0),
            volume: env_f32("VISHWAS_VOICE_VOLUME", 1.0),
            language,
        };

        Ok(Self {
            engine,
            voice,
            stt_command: env::var("VISHWAS_STT_CMD").ok(),
            tts_command: env::var("VISHWAS_TTS_CMD").ok(),
        })
    }

    /// Check that a capture command is configured.
    /// Call this before any operation that listens for speech.
    pub fn require_transcriber(&self) -> Result<&str> {
        match self.stt_command.as_deref() {
            Some(command) if !command.trim().is_empty() => Ok(command),
            _ => anyhow::bail!(
                "VISHWAS_STT_CMD not set. Point it at a platform dictation command\n\
                 that prints the transcript to stdout. Add it to your .env file."
            ),
        }
    }
}

/// Read a float env var, keeping the default on absence or parse failure.
fn env_f32(key: &str, default: f32) -> f32 {
    env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
