// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Types shared across the header parser and the Layer III decoder.
//!
//! Only MPEG version 1 is modelled: MPEG version 2 and 2.5 streams, and Layer I/II frames, are
//! rejected by the header parser before any of these types come into play.

use mp3lite_core::audio::{AudioBuffer, Channels};
use mp3lite_core::errors::Result;
use mp3lite_core::io::BitReaderLtr;

/// The channel-coding mode carried by a joint-stereo frame's mode-extension bits.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct JointStereoMode {
    pub mid_side: bool,
    pub intensity: bool,
}

/// The channel arrangement of a frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ChannelMode {
    Stereo,
    JointStereo(JointStereoMode),
    DualMono,
    Mono,
}

impl ChannelMode {
    /// Number of audio channels implied by this mode.
    pub fn count(&self) -> usize {
        match self {
            ChannelMode::Mono => 1,
            _ => 2,
        }
    }

    pub fn channels(&self) -> Channels {
        match self.count() {
            1 => Channels::FRONT_LEFT,
            _ => Channels::FRONT_LEFT | Channels::FRONT_RIGHT,
        }
    }
}

/// De-emphasis curve indicated by the header. This decoder does not apply de-emphasis (see
/// `FrameHeader::emphasis`'s documentation) but still parses and exposes the flag.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Emphasis {
    None,
    Fifty15,
    CcitJ17,
}

/// A fully parsed 4-byte MPEG-1 Layer III frame header.
#[derive(Copy, Clone, Debug)]
pub struct FrameHeader {
    pub bitrate: u32,
    pub sample_rate: u32,
    /// Index of `sample_rate` into the MPEG-1 sample rate table (0 = 44100, 1 = 48000,
    /// 2 = 32000). Used to select the scale factor band tables.
    pub sample_rate_idx: usize,
    pub channel_mode: ChannelMode,
    pub emphasis: Emphasis,
    pub is_copyrighted: bool,
    pub is_original: bool,
    pub has_padding: bool,
    pub has_crc: bool,
    /// Total frame length in bytes, including the 4-byte header and, if present, the 2-byte CRC.
    pub frame_len: usize,
}

impl FrameHeader {
    pub fn n_channels(&self) -> usize {
        self.channel_mode.count()
    }

    pub fn is_intensity_stereo(&self) -> bool {
        matches!(self.channel_mode, ChannelMode::JointStereo(JointStereoMode { intensity: true, .. }))
    }

    pub fn is_mid_side_stereo(&self) -> bool {
        matches!(self.channel_mode, ChannelMode::JointStereo(JointStereoMode { mid_side: true, .. }))
    }

    /// Length of the side information in bytes: 17 for mono, 32 otherwise (MPEG-1 only).
    pub fn side_info_len(&self) -> usize {
        if self.channel_mode == ChannelMode::Mono { 17 } else { 32 }
    }

    /// Number of samples produced per channel by one frame. MPEG-1 Layer III always has two
    /// granules of 576 samples each.
    pub fn samples_per_frame(&self) -> usize {
        2 * 576
    }
}

/// A decodable audio layer. Only Layer III is implemented; the trait exists so the frame
/// driver is not hard-wired to a single decode function.
pub trait Layer {
    fn decode(
        &mut self,
        reader: &mut BitReaderLtr<'_>,
        header: &FrameHeader,
        out: &mut AudioBuffer,
    ) -> Result<()>;
}
