// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Uncompressed WAV tracks.

use super::{Track, TrackCore, TrackError, TrackFormat};
use crate::ownership::Owned;

/// An uncompressed PCM track
#[derive(Debug, Clone, PartialEq)]
pub struct WavTrack {
    core: TrackCore,
    /// Sample rate in Hz
    sample_rate: u32,
    /// Bits per sample
    bit_depth: u16,
}

impl WavTrack {
    /// Create a new WAV track
    pub fn new(core: TrackCore, sample_rate: u32, bit_depth: u16) -> Self {
        Self {
            core,
            sample_rate,
            bit_depth,
        }
    }

    /// Build from raw descriptor values, rejecting non-positive rates and depths
    pub fn from_raw(core: TrackCore, sample_rate: i64, bit_depth: i64) -> Result<Self, TrackError> {
        let invalid = |field: &'static str, value: i64| TrackError::InvalidAttribute {
            format: TrackFormat::Wav,
            title: core.title.clone(),
            field,
            value,
        };

        let rate = u32::try_from(sample_rate)
            .ok()
            .filter(|r| *r > 0)
            .ok_or_else(|| invalid("sample rate", sample_rate))?;
        let depth = u16::try_from(bit_depth)
            .ok()
            .filter(|d| *d > 0)
            .ok_or_else(|| invalid("bit depth", bit_depth))?;

        Ok(Self::new(core, rate, depth))
    }

    /// Sample rate in Hz
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Bits per sample
    pub fn bit_depth(&self) -> u16 {
        self.bit_depth
    }
}

impl Track for WavTrack {
    fn core(&self) -> &TrackCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut TrackCore {
        &mut self.core
    }

    fn format(&self) -> TrackFormat {
        TrackFormat::Wav
    }

    fn details(&self) -> String {
        format!("{} Hz, {}-bit", self.sample_rate, self.bit_depth)
    }

    fn clone_track(&self) -> Owned<dyn Track> {
        let copy = WavTrack {
            core: self.core.fresh_copy(),
            ..self.clone()
        };
        Owned::new(Box::new(copy))
    }
}
