// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! MP3 tracks.

use super::{Track, TrackCore, TrackError, TrackFormat};
use crate::ownership::Owned;

/// A compressed MP3 track
#[derive(Debug, Clone, PartialEq)]
pub struct Mp3Track {
    core: TrackCore,
    /// Bitrate in kbps
    bitrate_kbps: u32,
    /// Whether the file carries ID3 tags
    has_tags: bool,
}

impl Mp3Track {
    /// Create a new MP3 track
    pub fn new(core: TrackCore, bitrate_kbps: u32, has_tags: bool) -> Self {
        Self {
            core,
            bitrate_kbps,
            has_tags,
        }
    }

    /// Build from raw descriptor values.
    ///
    /// `bitrate` must be positive; `tag_flag` is true when non-zero.
    pub fn from_raw(core: TrackCore, bitrate: i64, tag_flag: i64) -> Result<Self, TrackError> {
        let bitrate_kbps = u32::try_from(bitrate)
            .ok()
            .filter(|b| *b > 0)
            .ok_or_else(|| TrackError::InvalidAttribute {
                format: TrackFormat::Mp3,
                title: core.title.clone(),
                field: "bitrate",
                value: bitrate,
            })?;
        Ok(Self::new(core, bitrate_kbps, tag_flag != 0))
    }

    /// Bitrate in kbps
    pub fn bitrate_kbps(&self) -> u32 {
        self.bitrate_kbps
    }

    /// Whether ID3 tags are present
    pub fn has_tags(&self) -> bool {
        self.has_tags
    }
}

impl Track for Mp3Track {
    fn core(&self) -> &TrackCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut TrackCore {
        &mut self.core
    }

    fn format(&self) -> TrackFormat {
        TrackFormat::Mp3
    }

    fn details(&self) -> String {
        let tags = if self.has_tags { "tagged" } else { "untagged" };
        format!("{} kbps, {}", self.bitrate_kbps, tags)
    }

    fn clone_track(&self) -> Owned<dyn Track> {
        let copy = Mp3Track {
            core: self.core.fresh_copy(),
            ..self.clone()
        };
        Owned::new(Box::new(copy))
    }
}
