// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A fixed-capacity, planar `f32` audio buffer.
//!
//! Every granule decodes exactly 576 samples per channel, so the buffer is always sized in
//! multiples of that quantity and "rendered" (extended with silence, then overwritten in place)
//! one granule at a time rather than grown dynamically.

use bitflags::bitflags;

bitflags! {
    /// A bitmask of the channels present in a stream. MPEG audio only ever uses one or two of
    /// these, but the type mirrors the real channel-position mask used elsewhere in the
    /// ecosystem so a future multichannel codec could reuse this module unchanged.
    pub struct Channels: u32 {
        const FRONT_LEFT  = 0x0000_0001;
        const FRONT_RIGHT = 0x0000_0002;
    }
}

/// Describes the shape of a decoded audio signal: how many channels it has and at what rate.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SignalSpec {
    pub rate: u32,
    pub channels: Channels,
}

impl SignalSpec {
    pub fn new(rate: u32, channels: Channels) -> Self {
        SignalSpec { rate, channels }
    }

    pub fn n_channels(&self) -> usize {
        self.channels.bits().count_ones() as usize
    }
}

/// A planar, interleaved-free buffer of decoded `f32` PCM samples for up to two channels.
pub struct AudioBuffer {
    spec: SignalSpec,
    planes: [Vec<f32>; 2],
    n_frames: usize,
}

impl AudioBuffer {
    /// Creates a buffer with enough capacity for `capacity` frames (not yet rendered).
    pub fn new(capacity: usize, spec: SignalSpec) -> Self {
        let n_channels = spec.n_channels();
        AudioBuffer {
            spec,
            planes: [Vec::with_capacity(capacity), if n_channels > 1 { Vec::with_capacity(capacity) } else { Vec::new() }],
            n_frames: 0,
        }
    }

    pub fn spec(&self) -> &SignalSpec {
        &self.spec
    }

    /// Number of frames (per-channel samples) currently rendered into the buffer.
    pub fn frames(&self) -> usize {
        self.n_frames
    }

    /// Discards all rendered frames, retaining the underlying allocation.
    pub fn clear(&mut self) {
        for plane in self.planes.iter_mut() {
            plane.clear();
        }
        self.n_frames = 0;
    }

    /// Extends every channel plane by `n_frames` frames of silence, growing the buffer so a
    /// decoder can then overwrite the newly reserved region in place. Mirrors the render step a
    /// granule decode performs after requantization determines how many samples are non-zero.
    pub fn render_reserved(&mut self, n_frames: usize) {
        for ch in 0..self.spec.n_channels() {
            self.planes[ch].resize(self.planes[ch].len() + n_frames, 0.0);
        }
        self.n_frames += n_frames;
    }

    /// Returns a mutable slice over the full rendered region of one channel.
    pub fn chan_mut(&mut self, channel: usize) -> &mut [f32] {
        &mut self.planes[channel]
    }

    /// Returns an immutable slice over the full rendered region of one channel.
    pub fn chan(&self, channel: usize) -> &[f32] {
        &self.planes[channel]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_reserved_extends_every_plane() {
        let spec = SignalSpec::new(44_100, Channels::FRONT_LEFT | Channels::FRONT_RIGHT);
        let mut buf = AudioBuffer::new(1152, spec);
        buf.render_reserved(576);
        assert_eq!(buf.frames(), 576);
        assert_eq!(buf.chan(0).len(), 576);
        assert_eq!(buf.chan(1).len(), 576);
        buf.chan_mut(0)[0] = 1.0;
        assert_eq!(buf.chan(0)[0], 1.0);
    }

    #[test]
    fn clear_resets_frame_count_but_keeps_capacity() {
        let spec = SignalSpec::new(44_100, Channels::FRONT_LEFT);
        let mut buf = AudioBuffer::new(576, spec);
        buf.render_reserved(576);
        buf.clear();
        assert_eq!(buf.frames(), 0);
        assert_eq!(buf.chan(0).len(), 0);
    }
}
