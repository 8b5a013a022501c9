// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Session configuration.
//!
//! A session file lists the track descriptors that make up the library and
//! the named playlists (as 1-based library positions) a DJ wants to load.
//! Sessions are stored as YAML by default; files ending in `.toml` are
//! read and written as TOML.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Root configuration for a DJ session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SessionFile {
    /// Session metadata
    #[serde(default)]
    pub session: SessionConfig,
    /// Track descriptors, in library order
    #[serde(default)]
    pub library: Vec<TrackDescriptor>,
    /// Named playlists as lists of 1-based library positions
    #[serde(default)]
    pub playlists: BTreeMap<String, Vec<i64>>,
}

/// On-disk format of a session file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionFormat {
    Yaml,
    Toml,
}

impl SessionFormat {
    /// Pick the format from a file extension, defaulting to YAML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => SessionFormat::Toml,
            _ => SessionFormat::Yaml,
        }
    }
}

impl SessionFile {
    /// Load a session from a YAML or TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read session file: {:?}", path))?;
        match SessionFormat::from_path(path) {
            SessionFormat::Yaml => Self::from_yaml(&contents),
            SessionFormat::Toml => Self::from_toml(&contents),
        }
        .with_context(|| format!("Invalid session file: {:?}", path))
    }

    /// Parse a session from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML session")
    }

    /// Parse a session from a TOML string
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse TOML session")
    }

    /// Serialize to a YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize session to YAML")
    }

    /// Serialize to a TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).context("Failed to serialize session to TOML")
    }

    /// Save the session, choosing the format from the extension
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let text = match SessionFormat::from_path(path) {
            SessionFormat::Yaml => self.to_yaml()?,
            SessionFormat::Toml => self.to_toml()?,
        };
        fs::write(path, text).with_context(|| format!("Failed to write session file: {:?}", path))
    }

    /// Positions of a named playlist
    pub fn playlist(&self, name: &str) -> Option<&[i64]> {
        self.playlists.get(name).map(Vec::as_slice)
    }
}

/// Session-level settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionConfig {
    /// Session name
    #[serde(default = "default_session_name")]
    pub name: String,
    /// Playlist loaded when none is requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_playlist: Option<String>,
}

fn default_session_name() -> String {
    "Untitled Session".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            name: default_session_name(),
            default_playlist: None,
        }
    }
}

/// Description of one library track
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackDescriptor {
    /// Format tag ("MP3", "WAV")
    #[serde(rename = "type")]
    pub type_tag: String,
    /// Track title
    pub title: String,
    /// Credited artists
    #[serde(default)]
    pub artists: Vec<String>,
    /// Duration in seconds
    #[serde(default)]
    pub duration_seconds: u32,
    /// Tempo in BPM
    #[serde(default = "default_bpm")]
    pub bpm: f64,
    /// First format-specific value (bitrate, sample rate)
    #[serde(default)]
    pub extra_param1: i64,
    /// Second format-specific value (tag flag, bit depth)
    #[serde(default)]
    pub extra_param2: i64,
}

fn default_bpm() -> f64 {
    120.0
}

impl TrackDescriptor {
    /// Create a descriptor with default numeric fields
    pub fn new(type_tag: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            type_tag: type_tag.into(),
            title: title.into(),
            artists: Vec::new(),
            duration_seconds: 0,
            bpm: default_bpm(),
            extra_param1: 0,
            extra_param2: 0,
        }
    }

    /// Set artists
    pub fn with_artists<I, S>(mut self, artists: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.artists = artists.into_iter().map(Into::into).collect();
        self
    }

    /// Set duration and tempo
    pub fn with_timing(mut self, duration_seconds: u32, bpm: f64) -> Self {
        self.duration_seconds = duration_seconds;
        self.bpm = bpm;
        self
    }

    /// Set the two format-specific values
    pub fn with_extra(mut self, extra_param1: i64, extra_param2: i64) -> Self {
        self.extra_param1 = extra_param1;
        self.extra_param2 = extra_param2;
        self
    }
}
