//! Command line options and playlist file loading

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context};
use clap::Parser;
use serde::Deserialize;

use crate::model::Track;

#[derive(Parser, Debug)]
#[command(name = "dropbeat-tui", about = "Terminal player with a seekable progress bar")]
pub struct Cli {
    /// TOML playlist file; a demo playlist is used when omitted
    #[arg(short, long)]
    pub playlist: Option<PathBuf>,

    /// Directory for rotating log files
    #[arg(long, default_value = ".logs")]
    pub log_dir: PathBuf,

    /// Start the first track as soon as the player is ready
    #[arg(long)]
    pub autoplay: bool,
}

#[derive(Debug, Deserialize)]
struct PlaylistFile {
    #[serde(default)]
    tracks: Vec<TrackEntry>,
}

#[derive(Debug, Deserialize)]
struct TrackEntry {
    name: String,
    duration_secs: f64,
}

/// Longest track a playlist may declare
const MAX_TRACK_SECS: f64 = 24.0 * 60.0 * 60.0;

pub fn load_playlist(path: &Path) -> anyhow::Result<Vec<Track>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read playlist from {:?}", path))?;
    parse_playlist(&content).with_context(|| format!("Invalid playlist {:?}", path))
}

fn parse_playlist(content: &str) -> anyhow::Result<Vec<Track>> {
    let file: PlaylistFile =
        toml::from_str(content).context("Failed to parse playlist TOML")?;

    file.tracks
        .into_iter()
        .enumerate()
        .map(|(i, entry)| {
            let name = entry.name.trim();
            if name.is_empty() {
                bail!("Track {} has an empty name", i + 1);
            }
            if !(entry.duration_secs.is_finite() && entry.duration_secs > 0.0) {
                bail!("Track {:?} needs a positive duration", name);
            }
            if entry.duration_secs > MAX_TRACK_SECS {
                bail!("Track {:?} is longer than 24 hours", name);
            }
            Ok(Track {
                id: format!("track-{}", i + 1),
                name: name.to_string(),
                duration_secs: entry.duration_secs,
            })
        })
        .collect()
}

pub fn demo_playlist() -> Vec<Track> {
    [
        ("Morning Static", 143.0),
        ("Signal Drift", 211.5),
        ("Low Orbit", 187.0),
        ("Paper Lanterns", 96.0),
        ("Night Bus", 254.0),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (name, duration_secs))| Track {
        id: format!("demo-{}", i + 1),
        name: name.to_string(),
        duration_secs,
    })
    .collect()
}
