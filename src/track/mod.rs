// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Polymorphic audio tracks.
//!
//! Every track format implements the [`Track`] trait. Library masters are
//! stored as `Box<dyn Track>` and playlists are filled with copies produced
//! by [`Track::clone_track`], which always returns a fresh allocation with
//! its lifecycle flags cleared.

pub mod mp3;
pub mod wav;

pub use mp3::Mp3Track;
pub use wav::WavTrack;

use std::fmt;

use thiserror::Error;

use crate::ownership::Owned;

/// Errors raised while constructing a track
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrackError {
    /// A format-specific attribute is out of range
    #[error("invalid {field} for {format} track '{title}': {value}")]
    InvalidAttribute {
        format: TrackFormat,
        title: String,
        field: &'static str,
        value: i64,
    },
}

/// Known track formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackFormat {
    Mp3,
    Wav,
}

impl TrackFormat {
    /// Resolve a descriptor type tag ("MP3", "wav", ...)
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_uppercase().as_str() {
            "MP3" => Some(TrackFormat::Mp3),
            "WAV" => Some(TrackFormat::Wav),
            _ => None,
        }
    }

    /// Canonical type tag
    pub fn tag(&self) -> &'static str {
        match self {
            TrackFormat::Mp3 => "MP3",
            TrackFormat::Wav => "WAV",
        }
    }
}

impl fmt::Display for TrackFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Lifecycle flags of a track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Lifecycle {
    /// Track has been prepared for playback
    pub loaded: bool,
    /// Beat grid has been computed
    pub analyzed: bool,
}

/// Attributes shared by every track format
#[derive(Debug, Clone, PartialEq)]
pub struct TrackCore {
    /// Track title
    pub title: String,
    /// Credited artists, in billing order
    pub artists: Vec<String>,
    /// Duration in seconds
    pub duration_seconds: u32,
    /// Tempo in BPM
    pub bpm: f64,
    lifecycle: Lifecycle,
    beat_count: Option<u32>,
}

impl TrackCore {
    /// Create a new core with cleared lifecycle flags
    pub fn new(
        title: impl Into<String>,
        artists: Vec<String>,
        duration_seconds: u32,
        bpm: f64,
    ) -> Self {
        Self {
            title: title.into(),
            artists,
            duration_seconds,
            bpm,
            lifecycle: Lifecycle::default(),
            beat_count: None,
        }
    }

    /// Current lifecycle flags
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Estimated beat count, once analyzed
    pub fn beat_count(&self) -> Option<u32> {
        self.beat_count
    }

    /// Copy of this core with lifecycle state cleared
    pub fn fresh_copy(&self) -> Self {
        Self {
            lifecycle: Lifecycle::default(),
            beat_count: None,
            ..self.clone()
        }
    }

    fn mark_loaded(&mut self) {
        self.lifecycle.loaded = true;
    }

    fn mark_analyzed(&mut self) {
        let beats = self.duration_seconds as f64 * self.bpm / 60.0;
        self.beat_count = Some(beats.round().max(0.0) as u32);
        self.lifecycle.analyzed = true;
    }
}

/// An audio asset in the library or a playlist
pub trait Track: fmt::Debug {
    /// Shared attributes
    fn core(&self) -> &TrackCore;

    /// Mutable shared attributes
    fn core_mut(&mut self) -> &mut TrackCore;

    /// Format of this track
    fn format(&self) -> TrackFormat;

    /// Human readable summary of the format-specific attributes
    fn details(&self) -> String;

    /// Produce an independently owned copy with cleared lifecycle flags
    fn clone_track(&self) -> Owned<dyn Track>;

    /// Track title
    fn title(&self) -> &str {
        &self.core().title
    }

    /// Credited artists
    fn artists(&self) -> &[String] {
        &self.core().artists
    }

    /// Duration in seconds
    fn duration_seconds(&self) -> u32 {
        self.core().duration_seconds
    }

    /// Tempo in BPM
    fn bpm(&self) -> f64 {
        self.core().bpm
    }

    /// Whether `load` has run
    fn is_loaded(&self) -> bool {
        self.core().lifecycle().loaded
    }

    /// Whether `analyze_beatgrid` has run
    fn is_analyzed(&self) -> bool {
        self.core().lifecycle().analyzed
    }

    /// Estimated number of beats, available after analysis
    fn beat_count(&self) -> Option<u32> {
        self.core().beat_count()
    }

    /// Prepare the track for playback
    fn load(&mut self) {
        self.core_mut().mark_loaded();
    }

    /// Compute the beat grid
    fn analyze_beatgrid(&mut self) {
        self.core_mut().mark_analyzed();
    }
}

/// Format a duration in seconds as `m:ss`
pub fn format_duration(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
