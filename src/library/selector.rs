// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Projection of library positions into a playlist.
//!
//! Each requested position is checked against the library, the master is
//! cloned, the clone is loaded and analyzed, and ownership of the clone is
//! handed to the playlist. Bad positions are reported and skipped; they
//! never abort the projection.

use super::Library;
use crate::events::{EventSink, LibraryEvent};
use crate::playlist::Playlist;

/// Outcome of a projection
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProjectionReport {
    /// Number of clones added to the playlist
    pub added: usize,
    /// Requested positions outside the library, in request order
    pub invalid_positions: Vec<i64>,
    /// Positions whose master produced an empty clone
    pub failed_clones: Vec<i64>,
}

impl ProjectionReport {
    /// Whether every requested position produced a track
    pub fn is_complete(&self) -> bool {
        self.invalid_positions.is_empty() && self.failed_clones.is_empty()
    }
}

/// Convert a 1-based position into a library index
fn library_index(position: i64, len: usize) -> Option<usize> {
    let index = usize::try_from(position.checked_sub(1)?).ok()?;
    (index < len).then_some(index)
}

/// Build a new playlist named `name` from 1-based library positions.
///
/// Playlist order equals request order; duplicates yield separate clones.
pub fn project(
    library: &Library,
    name: &str,
    positions: &[i64],
    sink: &dyn EventSink,
) -> (Playlist, ProjectionReport) {
    let mut playlist = Playlist::new(name);
    let mut report = ProjectionReport::default();

    sink.emit(LibraryEvent::PlaylistLoading {
        name: name.to_string(),
        requested: positions.len(),
    });

    for &position in positions {
        let Some(master) = library_index(position, library.len())
            .and_then(|index| library.get(index + 1))
        else {
            sink.emit(LibraryEvent::InvalidPosition {
                position,
                library_size: library.len(),
            });
            report.invalid_positions.push(position);
            continue;
        };

        let mut clone = master.clone_track();
        match clone.get_mut() {
            Ok(track) => {
                track.load();
                track.analyze_beatgrid();
            }
            Err(_) => {
                sink.emit(LibraryEvent::CloneFailed {
                    position,
                    title: master.title().to_string(),
                });
                report.failed_clones.push(position);
                continue;
            }
        }

        if let Some(track) = clone.release() {
            sink.emit(LibraryEvent::TrackAdded {
                position,
                title: track.title().to_string(),
            });
            playlist.add_track(track);
            report.added += 1;
        }
    }

    sink.emit(LibraryEvent::PlaylistLoaded {
        name: name.to_string(),
        tracks: playlist.len(),
    });
    (playlist, report)
}
