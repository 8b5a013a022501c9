// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! The master track library.
//!
//! The library owns one master track per recognised descriptor, in input
//! order. Masters are only ever lent out by shared reference; playlists
//! get clones through the [`selector`].

pub mod selector;

pub use selector::{project, ProjectionReport};

use crate::config::TrackDescriptor;
use crate::events::{EventSink, LibraryEvent};
use crate::track::{Mp3Track, Track, TrackCore, TrackError, TrackFormat, WavTrack};

/// Why a descriptor did not make it into the library
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    /// The type tag names no known format
    UnrecognizedType(String),
    /// The format rejected the descriptor's attributes
    Invalid(TrackError),
}

/// A descriptor that was left out of the library
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedDescriptor {
    /// Index into the descriptor list (0-based)
    pub descriptor: usize,
    pub title: String,
    pub reason: SkipReason,
}

/// Outcome of building a library
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BuildReport {
    /// Number of masters created
    pub built: usize,
    /// Descriptors that were skipped, in input order
    pub skipped: Vec<SkippedDescriptor>,
}

impl BuildReport {
    /// Whether every descriptor produced a track
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Build a master track from a descriptor
pub fn track_from_descriptor(descriptor: &TrackDescriptor) -> Result<Box<dyn Track>, SkipReason> {
    let format = TrackFormat::from_tag(&descriptor.type_tag)
        .ok_or_else(|| SkipReason::UnrecognizedType(descriptor.type_tag.clone()))?;

    let core = TrackCore::new(
        descriptor.title.clone(),
        descriptor.artists.clone(),
        descriptor.duration_seconds,
        descriptor.bpm,
    );

    let track: Box<dyn Track> = match format {
        TrackFormat::Mp3 => Box::new(
            Mp3Track::from_raw(core, descriptor.extra_param1, descriptor.extra_param2)
                .map_err(SkipReason::Invalid)?,
        ),
        TrackFormat::Wav => Box::new(
            WavTrack::from_raw(core, descriptor.extra_param1, descriptor.extra_param2)
                .map_err(SkipReason::Invalid)?,
        ),
    };
    Ok(track)
}

/// Ordered collection of master tracks
#[derive(Debug, Default)]
pub struct Library {
    masters: Vec<Box<dyn Track>>,
}

impl Library {
    /// Create an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a library from descriptors, skipping the ones that fail
    pub fn build(descriptors: &[TrackDescriptor], sink: &dyn EventSink) -> (Self, BuildReport) {
        let mut library = Self::new();
        let mut report = BuildReport::default();

        for (index, descriptor) in descriptors.iter().enumerate() {
            match track_from_descriptor(descriptor) {
                Ok(track) => {
                    let position = library.push(track);
                    report.built += 1;
                    if let Some(track) = library.get(position) {
                        sink.emit(LibraryEvent::TrackCreated {
                            position,
                            format: track.format(),
                            title: track.title().to_string(),
                            details: track.details(),
                        });
                    }
                }
                Err(reason) => {
                    let event = match &reason {
                        SkipReason::UnrecognizedType(tag) => {
                            LibraryEvent::UnrecognizedDescriptorType {
                                descriptor: index,
                                type_tag: tag.clone(),
                                title: descriptor.title.clone(),
                            }
                        }
                        SkipReason::Invalid(err) => LibraryEvent::InvalidDescriptor {
                            descriptor: index,
                            title: descriptor.title.clone(),
                            reason: err.to_string(),
                        },
                    };
                    sink.emit(event);
                    report.skipped.push(SkippedDescriptor {
                        descriptor: index,
                        title: descriptor.title.clone(),
                        reason,
                    });
                }
            }
        }

        sink.emit(LibraryEvent::LibraryBuilt {
            built: report.built,
            skipped: report.skipped.len(),
        });
        (library, report)
    }

    /// Append a master and return its 1-based position
    pub fn push(&mut self, track: Box<dyn Track>) -> usize {
        self.masters.push(track);
        self.masters.len()
    }

    /// Master at a 1-based position
    pub fn get(&self, position: usize) -> Option<&dyn Track> {
        let index = position.checked_sub(1)?;
        self.masters.get(index).map(|t| t.as_ref())
    }

    /// Number of masters
    pub fn len(&self) -> usize {
        self.masters.len()
    }

    /// Whether the library is empty
    pub fn is_empty(&self) -> bool {
        self.masters.is_empty()
    }

    /// Iterate over masters in library order
    pub fn iter(&self) -> impl Iterator<Item = &dyn Track> {
        self.masters.iter().map(|t| t.as_ref())
    }

    /// Master titles in library order
    pub fn titles(&self) -> Vec<String> {
        self.masters.iter().map(|t| t.title().to_string()).collect()
    }
}
