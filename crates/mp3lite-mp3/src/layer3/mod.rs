// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! MPEG-1 Layer III decoding: side info and scale factors, Huffman-coded spectral data,
//! requantization, joint stereo, the hybrid (IMDCT) filter, and frequency inversion. The final
//! polyphase synthesis stage lives in [`crate::synthesis`] since it is shared structurally with
//! (if never actually invoked by) Layers I and II.

pub mod bitstream;
pub mod common;
pub mod huffman_tables;
pub mod hybrid_synthesis;
pub mod requantize;
pub mod stereo;

use mp3lite_core::audio::AudioBuffer;
use mp3lite_core::errors::{Error, Result};
use mp3lite_core::io::{BitReaderLtr, ReadBitsLtr, ReadBytes};

use crate::common::{FrameHeader, Layer};
use bitstream::{read_scale_factors, read_side_info, FrameData};
use hybrid_synthesis::{antialias, frequency_inversion, hybrid_synthesis, reorder, Overlap};
use requantize::{read_huffman_samples, requantize};
use stereo::process_stereo;

/// The MPEG-1 bit reservoir: main data for one frame's granules may begin up to 511 bytes
/// before that frame's own main data partition, borrowing unused capacity from earlier frames
/// (ISO/IEC 11172-3 section 2.4.2.3). The reservoir keeps the tail of every frame's main data
/// bytes around so later frames can reach back into it.
pub struct BitReservoir {
    buf: Vec<u8>,
}

impl Default for BitReservoir {
    fn default() -> Self {
        BitReservoir { buf: Vec::with_capacity(2048) }
    }
}

impl BitReservoir {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `new_bytes` of main data from `reader` into the reservoir, then returns a byte
    /// buffer covering everything from `main_data_begin` bytes before the newly read data
    /// through to the end of it.
    pub fn fill<B: ReadBytes>(
        &mut self,
        reader: &mut B,
        main_data_begin: usize,
        new_bytes: usize,
    ) -> Result<Vec<u8>> {
        let mut incoming = vec![0u8; new_bytes];
        reader.read_buf_exact(&mut incoming)?;
        self.buf.extend_from_slice(&incoming);

        if main_data_begin > self.buf.len() - new_bytes {
            return Err(Error::ReservoirUnderflow {
                wanted: main_data_begin,
                have: self.buf.len() - new_bytes,
            });
        }

        let start = self.buf.len() - new_bytes - main_data_begin;
        Ok(self.buf[start..].to_vec())
    }

    /// Drops everything in the reservoir except the trailing `keep` bytes, called after a
    /// frame's main data has been fully decoded (or abandoned) so the reservoir doesn't grow
    /// without bound.
    pub fn trim(&mut self, keep: usize) {
        if self.buf.len() > keep {
            let drop_at = self.buf.len() - keep;
            self.buf.drain(..drop_at);
        }
    }
}

/// The Layer III decoder. Holds the bit reservoir and the hybrid filter's per-channel
/// overlap-add state, both of which persist across frames.
pub struct Layer3 {
    reservoir: BitReservoir,
    overlap: [Overlap; 2],
}

impl Default for Layer3 {
    fn default() -> Self {
        Layer3 { reservoir: BitReservoir::new(), overlap: [Overlap::default(), Overlap::default()] }
    }
}

impl Layer3 {
    pub fn new() -> Self {
        Self::default()
    }

    fn decode_granule(
        &mut self,
        bs: &mut BitReaderLtr<'_>,
        fd: &mut FrameData,
        gr: usize,
        header: &FrameHeader,
    ) -> Result<()> {
        for ch in 0..header.n_channels() {
            let start_pos = bs.position();
            read_scale_factors(bs, gr, ch, fd)?;
            let part2_bits_read = (bs.position() - start_pos) as u32;

            let channel = &mut fd.granules[gr].channels[ch];
            let part2_3_length = u64::from(channel.part2_3_length);

            match read_huffman_samples(bs, channel, header.sample_rate_idx, part2_bits_read) {
                Ok(()) => (),
                Err(Error::HuffmanDecodeError(msg)) | Err(Error::InternalInvariantViolation(msg)) => {
                    // A corrupt symbol here only ever poisons this one channel's contribution
                    // to this one granule; every other channel/granule in the frame, and every
                    // later frame, decodes normally.
                    log::warn!("granule {gr} channel {ch}: {msg}, discarding");
                    channel.samples = [0.0; 576];
                    channel.n_samples = 0;
                }
                Err(e) => return Err(e),
            }

            // Resync to the granule's declared bit length regardless of whether decoding
            // succeeded, so a corrupt or short Huffman decode doesn't misalign every channel
            // and granule that follows it in this frame.
            let end_pos = start_pos + part2_3_length;
            let cur_pos = bs.position();
            if end_pos > cur_pos {
                if bs.ignore_bits((end_pos - cur_pos) as u32).is_err() {
                    log::warn!("granule {gr} channel {ch}: part2_3_length ran past main data");
                }
            }
        }
        Ok(())
    }
}

impl Layer for Layer3 {
    fn decode(
        &mut self,
        reader: &mut BitReaderLtr<'_>,
        _header: &FrameHeader,
        _out: &mut AudioBuffer,
    ) -> Result<()> {
        // Layer III frames carry their own main-data-begin back-reference into the bit
        // reservoir, so decoding a frame cannot be driven purely from a single in-place
        // `BitReaderLtr` the way Layer I/II could be. `decode_frame` below is the real entry
        // point; callers reach it through `crate::decoder`, which owns the byte-oriented
        // `ReadBytes` stream this layer actually needs.
        let _ = reader;
        Err(Error::InternalInvariantViolation(
            "Layer3::decode requires byte-stream access; use decode_frame",
        ))
    }
}

impl Layer3 {
    /// Decodes one complete MPEG-1 Layer III frame: side info, bit-reservoir-backed main data,
    /// both granules' scale factors and Huffman-coded spectral data, requantization, joint
    /// stereo, the hybrid filter, frequency inversion, and polyphase synthesis, writing 1152
    /// interleaved time-domain samples per channel into `out`.
    pub fn decode_frame<B: ReadBytes>(
        &mut self,
        reader: &mut B,
        header: &FrameHeader,
        synth: &mut crate::synthesis::SynthesisState,
        out: &mut AudioBuffer,
    ) -> Result<()> {
        // The 16-bit CRC, if present, sits between the header and the side information; its
        // value is never verified (spec non-goal), but the two bytes must still be consumed so
        // the reader stays aligned with the frame's declared `frame_len`.
        if header.has_crc {
            let mut crc = [0u8; 2];
            reader.read_buf_exact(&mut crc)?;
        }

        let side_info_len = header.side_info_len();
        let mut side_info_bytes = vec![0u8; side_info_len];
        reader.read_buf_exact(&mut side_info_bytes)?;

        let mut side_bs = BitReaderLtr::new(&side_info_bytes);
        let mut fd = read_side_info(&mut side_bs, header)?;

        let main_data_len =
            header.frame_len - 4 - usize::from(header.has_crc) * 2 - side_info_len;

        let main_data = match self.reservoir.fill(reader, fd.main_data_begin as usize, main_data_len)
        {
            Ok(buf) => buf,
            Err(Error::ReservoirUnderflow { .. }) => {
                // Not enough history yet (e.g. the first few frames of a stream): nothing
                // useful can be decoded from this frame, but the reservoir itself is still
                // valid and growing. Render silence so output framing stays in lock-step with
                // the input stream rather than skipping the frame entirely.
                log::warn!("reservoir underflow, emitting silence for this frame");
                out.render_reserved(header.samples_per_frame());
                self.reservoir.trim(511);
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        let mut bs = BitReaderLtr::new(&main_data);

        for gr in 0..2 {
            self.decode_granule(&mut bs, &mut fd, gr, header)?;

            for ch in 0..header.n_channels() {
                let channel = &mut fd.granules[gr].channels[ch];
                requantize(channel, header.sample_rate_idx);
                reorder(channel);
            }

            process_stereo(&mut fd.granules[gr], header, header.sample_rate_idx);

            // Grown once per granule (not once per channel): `render_reserved` extends every
            // plane in lock-step, so the new 576-frame window lands at the same offset in both.
            out.render_reserved(576);

            for ch in 0..header.n_channels() {
                let channel = &mut fd.granules[gr].channels[ch];
                antialias(channel);
                hybrid_synthesis(channel, &mut self.overlap[ch]);
                frequency_inversion(channel);

                let plane = out.chan_mut(ch);
                let start = plane.len() - 576;
                crate::synthesis::synthesize(&channel.samples, &mut synth.state[ch], &mut plane[start..]);
            }
        }

        self.reservoir.trim(511);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{ChannelMode, Emphasis};
    use mp3lite_core::audio::SignalSpec;
    use mp3lite_core::io::BufReader;

    /// A CRC-protected mono frame whose side info is all-zero (so every granule/channel decodes
    /// to silence without needing any real main-data content) at 32kbps/44100Hz, where
    /// `frame_len` (104 bytes) includes the 4-byte header this test doesn't feed through
    /// `decode_frame` itself (that's `read_frame_header`'s job). Regression test for a bug where
    /// the 2-byte CRC following the header was accounted for in length arithmetic but never
    /// actually consumed from the reader, silently misaligning every CRC-protected frame.
    #[test]
    fn decode_frame_consumes_the_crc_bytes_when_present() {
        let header = FrameHeader {
            bitrate: 32_000,
            sample_rate: 44_100,
            sample_rate_idx: 0,
            channel_mode: ChannelMode::Mono,
            emphasis: Emphasis::None,
            is_copyrighted: false,
            is_original: false,
            has_padding: false,
            has_crc: true,
            frame_len: 104,
        };

        let crc_len = 2;
        let side_info_len = header.side_info_len();
        let main_data_len = header.frame_len - 4 - crc_len - side_info_len;
        let body = vec![0u8; crc_len + side_info_len + main_data_len];

        let mut reader = BufReader::new(&body);
        let mut layer3 = Layer3::new();
        let mut synth = crate::synthesis::SynthesisState::new();
        let spec = SignalSpec::new(header.sample_rate, header.channel_mode.channels());
        let mut out = AudioBuffer::new(header.samples_per_frame(), spec);

        layer3.decode_frame(&mut reader, &header, &mut synth, &mut out).unwrap();

        assert_eq!(reader.pos(), body.len(), "decode_frame must consume exactly the CRC, side info, and main data bytes");
        assert_eq!(out.frames(), header.samples_per_frame());
        assert!(out.chan(0).iter().all(|&v| v == 0.0));
    }

    /// A stream's first frame with `main_data_begin > 0` references bit-reservoir history that
    /// does not exist yet. Per spec.md §7's recovery policy, this must not be treated as fatal:
    /// the frame renders as silence and the reservoir keeps growing so later frames (once enough
    /// history has accumulated) decode normally.
    #[test]
    fn first_frame_reservoir_underflow_emits_silence_and_does_not_error() {
        let header = FrameHeader {
            bitrate: 32_000,
            sample_rate: 44_100,
            sample_rate_idx: 0,
            channel_mode: ChannelMode::Mono,
            emphasis: Emphasis::None,
            is_copyrighted: false,
            is_original: false,
            has_padding: false,
            has_crc: false,
            frame_len: 104,
        };

        let side_info_len = header.side_info_len();
        let main_data_len = header.frame_len - 4 - side_info_len;

        // main_data_begin = 10, as a 9-bit big-endian field at the start of side info; no
        // reservoir history exists yet on the very first frame, so this is unsatisfiable.
        let mut side_info = vec![0u8; side_info_len];
        side_info[0] = 0b0000_0101; // top 8 bits of the 9-bit value 10
        side_info[1] = 0b0000_0000; // 9th bit is 0; rest of side info is zeroed

        let mut body = side_info;
        body.extend(std::iter::repeat(0u8).take(main_data_len));

        let mut reader = BufReader::new(&body);
        let mut layer3 = Layer3::new();
        let mut synth = crate::synthesis::SynthesisState::new();
        let spec = SignalSpec::new(header.sample_rate, header.channel_mode.channels());
        let mut out = AudioBuffer::new(header.samples_per_frame(), spec);

        layer3.decode_frame(&mut reader, &header, &mut synth, &mut out).unwrap();

        assert_eq!(out.frames(), header.samples_per_frame());
        assert!(out.chan(0).iter().all(|&v| v == 0.0));
    }
}
