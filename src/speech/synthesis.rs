// Speech synthesis — delegation to the platform's text-to-speech service.
//
// Nothing here touches audio. The speaker builds a command line for
// whatever synthesizer the platform ships (`say` on macOS, `espeak` on
// Linux, SAPI via PowerShell on Windows) or for a configured override
// command, and hands it the text.

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

/// Supported speech languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Hindi,
}

impl Language {
    /// The BCP-47 tag handed to platform speech services.
    pub fn tag(&self) -> &'static str {
        match self {
            Language::English => "en-US",
            Language::Hindi => "hi-IN",
        }
    }

    /// Parse a BCP-47 tag as used by VISHWAS_LANG and --lang.
    pub fn from_tag(tag: &str) -> Result<Self> {
        match tag {
            "en-US" | "en" => Ok(Language::English),
            "hi-IN" | "hi" => Ok(Language::Hindi),
            other => bail!("Unsupported language '{other}'. Supported: en-US, hi-IN"),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Per-call voice settings. Passed explicitly into every speech call.
#[derive(Debug, Clone, Copy)]
pub struct VoiceSettings {
    /// Speaking rate multiplier (1.0 = the platform default).
    pub rate: f32,
    /// Pitch multiplier; ignored by synthesizers without a pitch control.
    pub pitch: f32,
    /// Volume multiplier; ignored by synthesizers without a volume control.
    pub volume: f32,
    pub language: Language,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            rate: 1.0,
            pitch: 1.0,
            volume: 1.0,
            language: Language::English,
        }
    }
}

/// Trait for speaking text aloud. Implementations delegate to an
/// external service, so the method is async.
#[async_trait]
pub trait Speaker: Send + Sync {
    async fn speak(&self, text: &str, settings: &VoiceSettings) -> Result<()>;
}

/// Speaker that shells out to the platform synthesizer, or to a
/// configured override command.
///
/// An override command is split on whitespace (no shell involved) and
/// receives the language tag and the text as its final two arguments.
pub struct PlatformSpeaker {
    override_command: Option<String>,
}

impl PlatformSpeaker {
    pub fn new(override_command: Option<String>) -> Self {
        Self { override_command }
    }

    /// Build the (program, args) invocation for this call.
    fn build_command(&self, text: &str, settings: &VoiceSettings) -> Result<(String, Vec<String>)> {
        if let Some(command) = &self.override_command {
            let mut parts = command.split_whitespace().map(str::to_string);
            let program = parts.next().context("VISHWAS_TTS_CMD is empty")?;
            let mut args: Vec<String> = parts.collect();
            args.push(settings.language.tag().to_string());
            args.push(text.to_string());
            return Ok((program, args));
        }
        platform_command(text, settings)
    }
}

#[async_trait]
impl Speaker for PlatformSpeaker {
    async fn speak(&self, text: &str, settings: &VoiceSettings) -> Result<()> {
        let (program, args) = self.build_command(text, settings)?;
        debug!(%program, lang = %settings.language, "Delegating speech synthesis");

        let output = Command::new(&program)
            .args(&args)
            .output()
            .await
            .with_context(|| format!("failed to run speech synthesizer '{program}'"))?;

        if !output.status.success() {
            bail!(
                "speech synthesizer '{}' failed: {}",
                program,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        Ok(())
    }
}

/// Baseline speaking rate in words per minute, used to map the rate
/// multiplier onto synthesizers that take an absolute rate.
#[cfg(any(target_os = "macos", target_os = "linux"))]
const BASE_RATE_WPM: f32 = 175.0;

#[cfg(target_os = "macos")]
fn platform_command(text: &str, settings: &VoiceSettings) -> Result<(String, Vec<String>)> {
    // `say` has no pitch or volume flags; rate is words per minute.
    let mut args = vec![
        "-r".to_string(),
        format!("{:.0}", settings.rate * BASE_RATE_WPM),
    ];
    if settings.language == Language::Hindi {
        args.push("-v".to_string());
        args.push("Lekha".to_string()); // the stock Hindi voice
    }
    args.push(text.to_string());
    Ok(("say".to_string(), args))
}

#[cfg(target_os = "linux")]
fn platform_command(text: &str, settings: &VoiceSettings) -> Result<(String, Vec<String>)> {
    let voice = match settings.language {
        Language::English => "en-us",
        Language::Hindi => "hi",
    };
    let args = vec![
        "-s".to_string(),
        format!("{:.0}", settings.rate * BASE_RATE_WPM),
        "-a".to_string(),
        format!("{:.0}", (settings.volume * 100.0).clamp(0.0, 200.0)),
        "-p".to_string(),
        format!("{:.0}", (settings.pitch * 50.0).clamp(0.0, 99.0)),
        "-v".to_string(),
        voice.to_string(),
        text.to_string(),
    ];
    Ok(("espeak".to_string(), args))
}

#[cfg(target_os = "windows")]
fn platform_command(text: &str, settings: &VoiceSettings) -> Result<(String, Vec<String>)> {
    // SAPI rate runs -10..10 around the default; volume is 0..100.
    let rate = ((settings.rate - 1.0) * 10.0).clamp(-10.0, 10.0) as i32;
    let volume = (settings.volume * 100.0).clamp(0.0, 100.0) as i32;
    let escaped = text.replace('\'', "''");
    let script = format!(
        "Add-Type -AssemblyName System.Speech; \
         $s = New-Object System.Speech.Synthesis.SpeechSynthesizer; \
         $s.Rate = {rate}; $s.Volume = {volume}; \
         $s.Speak('{escaped}')"
    );
    Ok((
        "powershell".to_string(),
        vec!["-NoProfile".to_string(), "-Command".to_string(), script],
    ))
}

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
fn platform_command(_text: &str, _settings: &VoiceSettings) -> Result<(String, Vec<String>)> {
    bail!("No platform synthesizer known for this OS. Set VISHWAS_TTS_CMD.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_tags() {
        assert_eq!(Language::English.tag(), "en-US");
        assert_eq!(Language::Hindi.tag(), "hi-IN");
    }

    #[test]
    fn test_from_tag_accepts_short_forms() {
        assert_eq!(Language::from_tag("en-US").unwrap(), Language::English);
        assert_eq!(Language::from_tag("en").unwrap(), Language::English);
        assert_eq!(Language::from_tag("hi-IN").unwrap(), Language::Hindi);
        assert_eq!(Language::from_tag("hi").unwrap(), Language::Hindi);
    }

    #[test]
    fn test_from_tag_rejects_unknown() {
        assert!(Language::from_tag("fr-FR").is_err());
    }

    #[test]
    fn test_default_settings() {
        let settings = VoiceSettings::default();
        assert_eq!(settings.rate, 1.0);
        assert_eq!(settings.pitch, 1.0);
        assert_eq!(settings.volume, 1.0);
        assert_eq!(settings.language, Language::English);
    }

    #[test]
    fn test_override_command_gets_tag_and_text() {
        let speaker = PlatformSpeaker::new(Some("my-tts --fast".to_string()));
        let settings = VoiceSettings {
            language: Language::Hindi,
            ..VoiceSettings::default()
        };
        let (program, args) = speaker.build_command("namaste", &settings).unwrap();
        assert_eq!(program, "my-tts");
        assert_eq!(args, vec!["--fast", "hi-IN", "namaste"]);
    }

    #[test]
    fn test_empty_override_command_is_rejected() {
        let speaker = PlatformSpeaker::new(Some("   ".to_string()));
        assert!(speaker
            .build_command("hello", &VoiceSettings::default())
            .is_err());
    }
}
