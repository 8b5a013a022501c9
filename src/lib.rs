// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! DJDECK - DJ track library and playlist assembly.
//!
//! A session file describes a library of MP3 and WAV tracks. The library
//! owns one master per track; playlists are filled with loaded and
//! analyzed clones of the masters picked by 1-based position.

pub mod config;
pub mod events;
pub mod library;
pub mod ownership;
pub mod playlist;
pub mod service;
pub mod track;

pub use config::{SessionFile, TrackDescriptor};
pub use events::{EventSink, LibraryEvent, NullSink, RecordingSink, TracingSink};
pub use library::{BuildReport, Library, ProjectionReport};
pub use ownership::{EmptyAccessError, Owned};
pub use playlist::Playlist;
pub use service::{LibraryService, SessionError};
pub use track::{Mp3Track, Track, TrackFormat, WavTrack};
