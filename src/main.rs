use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use strumline::{compose_document_with, samples, to_json, SanitizeMode, SongConfig};

#[derive(Parser, Debug)]
#[command(name = "strumline")]
#[command(about = "Turn an ASCII guitar tab into a timed chord/strum/lyric timeline (JSON)")]
#[command(version)]
struct Args {
    /// Tab document to read; stdin when omitted or "-"
    input: Option<PathBuf>,

    /// Song title
    #[arg(short, long)]
    title: Option<String>,

    /// Default tempo for sections without their own
    #[arg(short, long)]
    bpm: Option<u32>,

    /// Per-section tempo as NAME=BPM (repeatable)
    #[arg(short, long = "section-bpm", value_parser = parse_section_bpm)]
    section_bpm: Vec<(String, u32)>,

    /// YAML song config (same keys as front matter)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Text cleanup: monospace, light or off
    #[arg(long)]
    sanitize: Option<SanitizeMode>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Emit the built-in demonstration song instead of reading INPUT
    #[arg(long)]
    sample: bool,
}

fn parse_section_bpm(s: &str) -> Result<(String, u32), String> {
    let (name, bpm) = s
        .rsplit_once('=')
        .ok_or_else(|| format!("expected NAME=BPM, got '{}'", s))?;
    let bpm: u32 = bpm
        .trim()
        .parse()
        .map_err(|e| format!("invalid BPM '{}': {}", bpm, e))?;
    Ok((name.trim().to_string(), bpm))
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("Error reading file '{}'", path.display())),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Error reading stdin")?;
            Ok(buf)
        }
    }
}

/// CLI flags layered over the optional config file.
fn overrides(args: &Args) -> Result<SongConfig> {
    let config = match &args.config {
        Some(path) => {
            let yaml = fs::read_to_string(path)
                .with_context(|| format!("Error reading config '{}'", path.display()))?;
            SongConfig::from_yaml(&yaml)
                .with_context(|| format!("Invalid config '{}'", path.display()))?
        }
        None => SongConfig::default(),
    };

    let flags = SongConfig {
        title: args.title.clone(),
        bpm: args.bpm,
        section_bpm: args.section_bpm.iter().cloned().collect(),
        sanitize: args.sanitize,
    };
    Ok(config.merge(&flags))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();
    info!(?args, "Parsed CLI arguments");

    let song = if args.sample {
        samples::harbor_lights_playback()
    } else {
        let source = read_input(args.input.as_ref())?;
        compose_document_with(&source, &overrides(&args)?)?
    };

    info!(
        title = %song.title,
        duration_ms = song.duration_ms,
        lyrics = song.lyrics.len(),
        "Composed timeline"
    );
    println!("{}", to_json(&song, args.pretty)?);
    Ok(())
}
