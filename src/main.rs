use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use vishwas::analysis::traits::Analyzer;
use vishwas::config::{Config, EngineBackend};
use vishwas::speech::synthesis::{Speaker, VoiceSettings};

/// Vishwas: voice-enabled scam message detection.
///
/// Analyzes a message for common scam signals and can speak the result
/// aloud or take spoken input via the platform speech services.
#[derive(Parser)]
#[command(name = "vishwas", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a message (or a file of messages) for scam signals
    Analyze {
        /// The message text. Omit when using --file.
        message: Option<String>,

        /// Analyze every non-empty line of this file instead
        #[arg(long)]
        file: Option<String>,

        /// Engine to use: trigger or pattern (overrides VISHWAS_ENGINE)
        #[arg(long)]
        engine: Option<String>,

        /// Print the verdict as JSON
        #[arg(long)]
        json: bool,

        /// Speak the result through the platform synthesizer
        #[arg(long)]
        speak: bool,

        /// Speech language tag: en-US or hi-IN (overrides VISHWAS_LANG)
        #[arg(long)]
        lang: Option<String>,
    },

    /// Capture one spoken message and analyze it
    Listen {
        /// Engine to use: trigger or pattern (overrides VISHWAS_ENGINE)
        #[arg(long)]
        engine: Option<String>,

        /// Speak the result back
        #[arg(long)]
        speak: bool,

        /// Speech language tag: en-US or hi-IN (overrides VISHWAS_LANG)
        #[arg(long)]
        lang: Option<String>,
    },

    /// Speak a piece of text through the platform synthesizer
    Speak {
        text: String,

        /// Speech language tag: en-US or hi-IN (overrides VISHWAS_LANG)
        #[arg(long)]
        lang: Option<String>,
    },

    /// Show the trigger phrases and the weighted lexicon
    Triggers,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("vishwas=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            message,
            file,
            engine,
            json,
            speak,
            lang,
        } => {
            let config = Config::load()?;
            let voice = resolve_voice(&config, lang.as_deref())?;
            let analyzer = create_analyzer(resolve_engine(&config, engine.as_deref())?)?;

            if let Some(path) = file {
                return analyze_file(&path, analyzer.as_ref(), json).await;
            }

            let Some(message) = message else {
                anyhow::bail!("Provide a message to analyze, or --file for a batch.");
            };

            // The classifier itself accepts empty input (Low Risk, score 0);
            // an empty message gets a prompt instead of a verdict.
            if message.trim().is_empty() {
                let prompt = "Please enter a message to analyze";
                println!("{prompt}");
                if speak {
                    speak_text(&config, prompt, &voice).await?;
                }
                return Ok(());
            }

            let verdict = analyzer.analyze(&message);
            info!(engine = analyzer.name(), score = verdict.score, "Message analyzed");

            if json {
                println!("{}", serde_json::to_string_pretty(&verdict)?);
            } else {
                vishwas::output::terminal::display_verdict(&message, &verdict);
            }

            if speak {
                let report = vishwas::output::spoken_report(&verdict);
                speak_text(&config, &report, &voice).await?;
            }
        }

        Commands::Listen { engine, speak, lang } => {
            let config = Config::load()?;
            let voice = resolve_voice(&config, lang.as_deref())?;
            let analyzer = create_analyzer(resolve_engine(&config, engine.as_deref())?)?;

            let capture = config.require_transcriber()?.to_string();
            let transcriber =
                Box::new(vishwas::speech::transcribe::CommandTranscriber::new(capture));
            let mut session = vishwas::speech::session::RecognitionSession::new(transcriber);

            println!("Listening...");
            let transcript = session.listen_once(&voice).await?;
            println!("Heard: \"{transcript}\"");

            let verdict = analyzer.analyze(&transcript);
            vishwas::output::terminal::display_verdict(&transcript, &verdict);

            if speak {
                let report = vishwas::output::spoken_report(&verdict);
                speak_text(&config, &report, &voice).await?;
            }
        }

        Commands::Speak { text, lang } => {
            let config = Config::load()?;
            let voice = resolve_voice(&config, lang.as_deref())?;
            speak_text(&config, &text, &voice).await?;
        }

        Commands::Triggers => {
            println!("\n{}", "=== Trigger engine ===".bold());
            println!(
                "  +{} per phrase present, High at 60, Medium at 30:",
                vishwas::analysis::trigger::TRIGGER_WEIGHT
            );
            for phrase in vishwas::analysis::trigger::TRIGGER_PHRASES {
                println!("    {phrase}");
            }

            println!("\n{}", "=== Pattern engine lexicon ===".bold());
            for (keyword, weight) in vishwas::analysis::pattern::WEIGHTED_KEYWORDS {
                println!("    {keyword:<24} {weight:>4.1}");
            }
            println!(
                "\n  {}",
                "Plus regex checks for numbers, links, all-caps, and exclamations.".dimmed()
            );
        }
    }

    Ok(())
}

/// Pick the engine: the CLI flag wins over VISHWAS_ENGINE.
fn resolve_engine(config: &Config, flag: Option<&str>) -> Result<EngineBackend> {
    match flag {
        Some(name) => EngineBackend::parse(name),
        None => Ok(config.engine),
    }
}

/// Per-call voice settings: the --lang flag wins over VISHWAS_LANG.
fn resolve_voice(config: &Config, lang: Option<&str>) -> Result<VoiceSettings> {
    let mut voice = config.voice;
    if let Some(tag) = lang {
        voice.language = vishwas::speech::synthesis::Language::from_tag(tag)?;
    }
    Ok(voice)
}

/// Create the analyzer for the selected backend.
fn create_analyzer(backend: EngineBackend) -> Result<Box<dyn Analyzer>> {
    match backend {
        EngineBackend::Trigger => {
            info!("Using trigger-phrase engine");
            Ok(Box::new(vishwas::analysis::trigger::TriggerAnalyzer))
        }
        EngineBackend::Pattern => {
            info!("Using weighted pattern engine");
            Ok(Box::new(vishwas::analysis::pattern::PatternAnalyzer::new()?))
        }
    }
}

/// Speak text through the platform synthesizer (or the configured override).
async fn speak_text(config: &Config, text: &str, voice: &VoiceSettings) -> Result<()> {
    let speaker = vishwas::speech::synthesis::PlatformSpeaker::new(config.tts_command.clone());
    speaker.speak(text, voice).await
}

/// Analyze every non-empty line of a file, with a progress bar and a
/// ranked table (or a JSON array with --json).
async fn analyze_file(path: &str, analyzer: &dyn Analyzer, json: bool) -> Result<()> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {path}"))?;

    let messages: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if messages.is_empty() {
        println!("No messages found in {path}.");
        return Ok(());
    }

    let pb = ProgressBar::new(messages.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  Analyzing [{bar:30}] {pos}/{len}")
            .unwrap(),
    );

    let mut results = Vec::with_capacity(messages.len());
    for message in messages {
        let verdict = analyzer.analyze(&message);
        results.push((message, verdict));
        pb.inc(1);
    }
    pb.finish_and_clear();

    info!(count = results.len(), "Batch analyzed");

    if json {
        let verdicts: Vec<_> = results.iter().map(|(_, v)| v).collect();
        println!("{}", serde_json::to_string_pretty(&verdicts)?);
    } else {
        vishwas::output::terminal::display_batch(&results);
    }
    Ok(())
}
