// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! DJ library service.
//!
//! Ties the master library, the current playlist and an event sink
//! together behind the operations a DJ front end needs.

use std::fmt::Write as _;

use thiserror::Error;

use crate::config::{SessionFile, TrackDescriptor};
use crate::events::{EventSink, TracingSink};
use crate::library::{project, BuildReport, Library, ProjectionReport};
use crate::playlist::Playlist;
use crate::track::{format_duration, Track};

/// Errors raised by session-level operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The session defines no playlist with this name
    #[error("session has no playlist named '{0}'")]
    UnknownPlaylist(String),
    /// No playlist was requested and the session has no default
    #[error("no playlist requested and the session has no default playlist")]
    NoDefaultPlaylist,
}

/// Library plus the playlist currently being assembled
pub struct LibraryService {
    library: Library,
    playlist: Playlist,
    sink: Box<dyn EventSink>,
}

impl LibraryService {
    /// Create a service that reports to `sink`
    pub fn new(sink: Box<dyn EventSink>) -> Self {
        Self {
            library: Library::new(),
            playlist: Playlist::default(),
            sink,
        }
    }

    /// Replace the library with one built from `descriptors`
    pub fn build_library(&mut self, descriptors: &[TrackDescriptor]) -> BuildReport {
        let (library, report) = Library::build(descriptors, self.sink.as_ref());
        self.library = library;
        report
    }

    /// Replace the current playlist with clones of the requested positions
    pub fn load_playlist_from_indices(&mut self, name: &str, positions: &[i64]) -> ProjectionReport {
        let (playlist, report) = project(&self.library, name, positions, self.sink.as_ref());
        self.playlist = playlist;
        report
    }

    /// Build the library from a session and load one of its playlists.
    ///
    /// With `name` unset the session's default playlist is used.
    pub fn load_session(
        &mut self,
        session: &SessionFile,
        name: Option<&str>,
    ) -> Result<(BuildReport, ProjectionReport), SessionError> {
        let name = name
            .or(session.session.default_playlist.as_deref())
            .ok_or(SessionError::NoDefaultPlaylist)?;
        let positions = session
            .playlist(name)
            .ok_or_else(|| SessionError::UnknownPlaylist(name.to_string()))?;

        let build = self.build_library(&session.library);
        let projection = self.load_playlist_from_indices(name, positions);
        Ok((build, projection))
    }

    /// The master library
    pub fn library(&self) -> &Library {
        &self.library
    }

    /// The current playlist
    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    /// The current playlist, mutably
    pub fn playlist_mut(&mut self) -> &mut Playlist {
        &mut self.playlist
    }

    /// First playlist track with this exact title
    pub fn find_track(&self, title: &str) -> Option<&dyn Track> {
        self.playlist.find_track(title)
    }

    /// Titles of the current playlist, in order
    pub fn track_titles(&self) -> Vec<String> {
        self.playlist.titles()
    }

    /// Text listing of the current playlist
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "=== DJ Library Playlist: {} ===", self.playlist.name());
        if self.playlist.is_empty() {
            out.push_str("Playlist is empty.\n");
            return out;
        }
        out.push_str(&self.playlist.to_string());
        let total = self.playlist.total_duration();
        let _ = writeln!(
            out,
            "Total duration: {} seconds ({})",
            total,
            format_duration(total)
        );
        out
    }
}

impl Default for LibraryService {
    fn default() -> Self {
        Self::new(Box::new(TracingSink))
    }
}
