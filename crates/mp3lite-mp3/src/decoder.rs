// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The frame loop driving a complete decode: frame synchronization, header parsing, and the
//! error recovery policy a malformed or truncated stream is decoded under.
//!
//! [`Mp3Decoder`] mirrors the packet-oriented decode loop a container demuxer would normally
//! drive: each call to [`Mp3Decoder::decode_next`] synchronizes to (and parses) the next frame
//! header, decodes it, and hands back a reference to an internally owned [`AudioBuffer`] holding
//! that frame's 1152 samples per channel. The caller (here, `mp3lite-cli`) is expected to copy
//! or consume those samples before the next call, which clears and re-renders the same buffer.

use mp3lite_core::audio::{AudioBuffer, SignalSpec};
use mp3lite_core::errors::{Error, Result};
use mp3lite_core::io::ReadBytes;

use crate::common::FrameHeader;
use crate::header::read_frame_header;
use crate::layer3::Layer3;
use crate::synthesis::SynthesisState;

/// Drives a complete MPEG-1 Layer III decode of a byte stream, one frame at a time.
///
/// Holds every piece of state that must persist across frames: the bit reservoir and hybrid
/// filter overlap-add state (inside [`Layer3`]), the polyphase synthesis filterbank's circular
/// buffer (inside [`SynthesisState`]), and the output buffer itself, which is sized from the
/// first frame's header and reused for every frame after that.
pub struct Mp3Decoder {
    layer3: Layer3,
    synth: SynthesisState,
    buf: Option<AudioBuffer>,
    header: Option<FrameHeader>,
}

impl Default for Mp3Decoder {
    fn default() -> Self {
        Mp3Decoder { layer3: Layer3::new(), synth: SynthesisState::new(), buf: None, header: None }
    }
}

impl Mp3Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The signal's sample rate and channel layout, once the first frame has been decoded.
    pub fn signal_spec(&self) -> Option<&SignalSpec> {
        self.buf.as_ref().map(|b| b.spec())
    }

    /// The most recently parsed frame header, once at least one frame has been synchronized to.
    pub fn current_frame_header(&self) -> Option<&FrameHeader> {
        self.header.as_ref()
    }

    /// Synchronizes to, parses, and decodes the next frame.
    ///
    /// Returns `Ok(None)` once the stream ends cleanly (no more sync words, or a frame header
    /// begins but the stream ends before it can be completed) — the caller should treat this as
    /// the end of decoding rather than an error. A [`Error::Unsupported`] stream feature is
    /// fatal and propagated; every other decode error is already handled internally by
    /// [`Layer3::decode_frame`] per its own recovery policy (an underflowing bit reservoir
    /// yields a silent frame, a corrupt channel/granule is discarded) and so never reaches here.
    pub fn decode_next<B: ReadBytes>(&mut self, reader: &mut B) -> Result<Option<&AudioBuffer>> {
        let header = match read_frame_header(reader) {
            Ok(header) => header,
            Err(Error::TruncatedStream) => return Ok(None),
            Err(e) => return Err(e),
        };

        if self.buf.is_none() {
            let spec = SignalSpec::new(header.sample_rate, header.channel_mode.channels());
            self.buf = Some(AudioBuffer::new(header.samples_per_frame(), spec));
        }

        let buf = self.buf.as_mut().expect("buffer initialized above");
        buf.clear();

        match self.layer3.decode_frame(reader, &header, &mut self.synth, buf) {
            Ok(()) => {
                self.header = Some(header);
                Ok(Some(buf))
            }
            Err(Error::TruncatedStream) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mp3lite_core::io::BufReader;

    #[test]
    fn empty_stream_decodes_nothing() {
        let data: [u8; 0] = [];
        let mut reader = BufReader::new(&data);
        let mut decoder = Mp3Decoder::new();
        assert!(decoder.decode_next(&mut reader).unwrap().is_none());
    }

    #[test]
    fn header_with_no_body_ends_cleanly() {
        // A well-formed 128kbps/44100Hz/stereo/no-CRC header with nothing following it: there
        // isn't even enough data for the side information, let alone a granule's main data.
        let data = 0xFFFB_9000u32.to_be_bytes();
        let mut reader = BufReader::new(&data);
        let mut decoder = Mp3Decoder::new();
        assert!(decoder.decode_next(&mut reader).unwrap().is_none());
    }

    #[test]
    fn garbage_without_a_sync_word_ends_cleanly() {
        let data = [0x00u8; 16];
        let mut reader = BufReader::new(&data);
        let mut decoder = Mp3Decoder::new();
        assert!(decoder.decode_next(&mut reader).unwrap().is_none());
    }
}
