// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Playlists of independently owned tracks.

use std::fmt;

use crate::track::{format_duration, Track};

/// A named, ordered list of tracks owned by the playlist
#[derive(Debug)]
pub struct Playlist {
    name: String,
    tracks: Vec<Box<dyn Track>>,
}

impl Playlist {
    /// Create an empty playlist
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tracks: Vec::new(),
        }
    }

    /// Playlist name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Take ownership of a track and append it
    pub fn add_track(&mut self, track: Box<dyn Track>) {
        self.tracks.push(track);
    }

    /// Remove the first track with this exact title and hand it back
    pub fn remove_track(&mut self, title: &str) -> Option<Box<dyn Track>> {
        let index = self.tracks.iter().position(|t| t.title() == title)?;
        Some(self.tracks.remove(index))
    }

    /// First track with this exact title
    pub fn find_track(&self, title: &str) -> Option<&dyn Track> {
        self.tracks
            .iter()
            .find(|t| t.title() == title)
            .map(|t| t.as_ref())
    }

    /// Track at a 0-based index
    pub fn track(&self, index: usize) -> Option<&dyn Track> {
        self.tracks.get(index).map(|t| t.as_ref())
    }

    /// Titles in playlist order
    pub fn titles(&self) -> Vec<String> {
        self.tracks.iter().map(|t| t.title().to_string()).collect()
    }

    /// Number of tracks
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Whether the playlist has no tracks
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Sum of track durations in seconds
    pub fn total_duration(&self) -> u64 {
        self.tracks.iter().map(|t| t.duration_seconds() as u64).sum()
    }

    /// Iterate over tracks in order
    pub fn iter(&self) -> impl Iterator<Item = &dyn Track> {
        self.tracks.iter().map(|t| t.as_ref())
    }
}

impl Default for Playlist {
    fn default() -> Self {
        Self::new("Untitled")
    }
}

impl fmt::Display for Playlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, track) in self.tracks.iter().enumerate() {
            let artists = if track.artists().is_empty() {
                "Unknown Artist".to_string()
            } else {
                track.artists().join(", ")
            };
            let mut flags = Vec::new();
            if track.is_loaded() {
                flags.push("loaded");
            }
            if track.is_analyzed() {
                flags.push("analyzed");
            }
            let flags = if flags.is_empty() {
                String::new()
            } else {
                format!(" [{}]", flags.join(", "))
            };

            writeln!(
                f,
                "{:>3}. {} - {} ({}, {:.0} BPM, {} {}){}",
                i + 1,
                artists,
                track.title(),
                format_duration(track.duration_seconds() as u64),
                track.bpm(),
                track.format(),
                track.details(),
                flags
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::track::{Mp3Track, TrackCore, WavTrack};

    fn mp3(title: &str, seconds: u32) -> Box<dyn Track> {
        let core = TrackCore::new(title, vec!["DJ".to_string()], seconds, 128.0);
        Box::new(Mp3Track::new(core, 320, true))
    }

    fn wav(title: &str, seconds: u32) -> Box<dyn Track> {
        let core = TrackCore::new(title, Vec::new(), seconds, 140.0);
        Box::new(WavTrack::new(core, 44100, 16))
    }

    #[test]
    fn test_empty_playlist() {
        let playlist = Playlist::new("Empty");
        assert_eq!(playlist.name(), "Empty");
        assert!(playlist.is_empty());
        assert_eq!(playlist.total_duration(), 0);
        assert!(playlist.titles().is_empty());
        assert_eq!(playlist.to_string(), "");
    }

    #[test]
    fn test_add_and_find() {
        let mut playlist = Playlist::new("Mix");
        playlist.add_track(mp3("One", 120));
        playlist.add_track(wav("Two", 200));
        playlist.add_track(mp3("One", 90));

        assert_eq!(playlist.len(), 3);
        assert_eq!(playlist.titles(), vec!["One", "Two", "One"]);
        assert_eq!(playlist.total_duration(), 410);

        let found = playlist.find_track("One").unwrap();
        assert_eq!(found.duration_seconds(), 120);
        assert!(playlist.find_track("one").is_none());
        assert!(playlist.find_track("Ghost").is_none());
        assert_eq!(playlist.track(1).unwrap().title(), "Two");
        assert!(playlist.track(3).is_none());
    }

    #[test]
    fn test_remove_first_match() {
        let mut playlist = Playlist::new("Mix");
        playlist.add_track(mp3("One", 120));
        playlist.add_track(wav("Two", 200));
        playlist.add_track(mp3("One", 90));

        let removed = playlist.remove_track("One").unwrap();
        assert_eq!(removed.duration_seconds(), 120);
        assert_eq!(playlist.titles(), vec!["Two", "One"]);
        assert!(playlist.remove_track("Ghost").is_none());
        assert_eq!(playlist.len(), 2);
    }

    #[test]
    fn test_display_lines() {
        let mut playlist = Playlist::new("Mix");
        let mut track = mp3("One", 125);
        track.load();
        track.analyze_beatgrid();
        playlist.add_track(track);
        playlist.add_track(wav("Two", 200));

        let text = playlist.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "  1. DJ - One (2:05, 128 BPM, MP3 320 kbps, tagged) [loaded, analyzed]"
        );
        assert_eq!(
            lines[1],
            "  2. Unknown Artist - Two (3:20, 140 BPM, WAV 44100 Hz, 16-bit)"
        );
    }

    #[test]
    fn test_iter_order() {
        let mut playlist = Playlist::default();
        playlist.add_track(wav("B", 1));
        playlist.add_track(wav("A", 1));
        let titles: Vec<&str> = playlist.iter().map(|t| t.title()).collect();
        assert_eq!(titles, vec!["B", "A"]);
        assert_eq!(playlist.name(), "Untitled");
    }
}
