// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Library events and the sinks that receive them.
//!
//! Library construction and playlist projection never print. They report
//! progress and non-fatal problems as [`LibraryEvent`]s to an
//! [`EventSink`] supplied by the caller. [`TracingSink`] forwards events to
//! `tracing`; [`RecordingSink`] keeps them for inspection.

use std::fmt;
use std::sync::{Arc, Mutex};

use tracing::{debug, info, warn};

use crate::track::TrackFormat;

/// Events emitted while building a library or loading a playlist
#[derive(Debug, Clone, PartialEq)]
pub enum LibraryEvent {
    /// A master track was created from a descriptor
    TrackCreated {
        /// Library position (1-based)
        position: usize,
        format: TrackFormat,
        title: String,
        details: String,
    },
    /// A descriptor named a type no track format handles
    UnrecognizedDescriptorType {
        /// Index into the descriptor list (0-based)
        descriptor: usize,
        type_tag: String,
        title: String,
    },
    /// A descriptor had a known type but invalid attributes
    InvalidDescriptor {
        descriptor: usize,
        title: String,
        reason: String,
    },
    /// Library construction finished
    LibraryBuilt { built: usize, skipped: usize },
    /// Playlist projection started
    PlaylistLoading { name: String, requested: usize },
    /// A requested position was outside the library
    InvalidPosition { position: i64, library_size: usize },
    /// Cloning a master produced nothing
    CloneFailed { position: i64, title: String },
    /// A clone was added to the playlist
    TrackAdded { position: i64, title: String },
    /// Playlist projection finished
    PlaylistLoaded { name: String, tracks: usize },
}

impl LibraryEvent {
    /// Whether the event reports a skipped entry
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            LibraryEvent::UnrecognizedDescriptorType { .. }
                | LibraryEvent::InvalidDescriptor { .. }
                | LibraryEvent::InvalidPosition { .. }
                | LibraryEvent::CloneFailed { .. }
        )
    }
}

impl fmt::Display for LibraryEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LibraryEvent::TrackCreated {
                position,
                format,
                title,
                details,
            } => write!(f, "{} track #{} created: {} ({})", format, position, title, details),
            LibraryEvent::UnrecognizedDescriptorType {
                descriptor,
                type_tag,
                title,
            } => write!(
                f,
                "skipping descriptor {} '{}': unrecognized type '{}'",
                descriptor, title, type_tag
            ),
            LibraryEvent::InvalidDescriptor {
                descriptor,
                title,
                reason,
            } => write!(f, "skipping descriptor {} '{}': {}", descriptor, title, reason),
            LibraryEvent::LibraryBuilt { built, skipped } => {
                write!(f, "track library built: {} loaded, {} skipped", built, skipped)
            }
            LibraryEvent::PlaylistLoading { name, requested } => {
                write!(f, "loading playlist '{}' ({} requested)", name, requested)
            }
            LibraryEvent::InvalidPosition {
                position,
                library_size,
            } => write!(
                f,
                "invalid track index {} (library has {} tracks)",
                position, library_size
            ),
            LibraryEvent::CloneFailed { position, title } => {
                write!(f, "clone of '{}' at index {} produced no track", title, position)
            }
            LibraryEvent::TrackAdded { position, title } => {
                write!(f, "added '{}' (index {}) to playlist", title, position)
            }
            LibraryEvent::PlaylistLoaded { name, tracks } => {
                write!(f, "playlist loaded: {} ({} tracks)", name, tracks)
            }
        }
    }
}

/// Receiver of library events
pub trait EventSink: Send + Sync {
    /// Handle one event
    fn emit(&self, event: LibraryEvent);
}

/// Forwards events to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&self, event: LibraryEvent) {
        match &event {
            e if e.is_warning() => warn!("{}", e),
            LibraryEvent::TrackCreated { .. } | LibraryEvent::TrackAdded { .. } => {
                debug!("{}", event)
            }
            _ => info!("{}", event),
        }
    }
}

/// Drops every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&self, _event: LibraryEvent) {}
}

/// Collects events in memory.
///
/// Clones share the same buffer, so a clone can be handed to a service
/// while the original is kept for inspection.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<LibraryEvent>>>,
}

impl RecordingSink {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far
    pub fn events(&self) -> Vec<LibraryEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Recorded warnings only
    pub fn warnings(&self) -> Vec<LibraryEvent> {
        self.events().into_iter().filter(|e| e.is_warning()).collect()
    }

    /// Forget recorded events
    pub fn clear(&self) {
        if let Ok(mut events) = self.events.lock() {
            events.clear();
        }
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, event: LibraryEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}
