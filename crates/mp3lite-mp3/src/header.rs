// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Frame synchronization and header parsing.

use mp3lite_core::errors::{decode_error, unsupported_error, Result};
use mp3lite_core::io::ReadBytes;

use crate::common::*;

/// The length in bytes of an MPEG frame header word.
pub const MPEG_HEADER_LEN: usize = 4;

/// The maximum length in bytes of an MPEG-1 Layer III frame, including the header.
pub const MAX_MPEG_FRAME_SIZE: u64 = 2881;

/// Bit-rate lookup table for MPEG version 1 layer 3, indexed by the 4-bit bitrate index.
const BIT_RATES_MPEG1_L3: [u32; 15] = [
    0, 32_000, 40_000, 48_000, 56_000, 64_000, 80_000, 96_000, 112_000, 128_000, 160_000, 192_000,
    224_000, 256_000, 320_000,
];

/// Quickly check if a header sync word may plausibly be a valid MPEG-1 Layer III header, without
/// fully decoding it. Used to disambiguate a genuine sync word from incidental `0xFFE` bit
/// patterns in arbitrary data.
#[inline]
pub fn check_header(header: u32) -> bool {
    // Version must be MPEG-1 (0b11).
    if (header >> 19) & 0x3 != 0b11 {
        return false;
    }
    // Layer must be Layer III (0b01).
    if (header >> 17) & 0x3 != 0b01 {
        return false;
    }
    // Bitrate index 0xf is reserved/invalid.
    if (header >> 12) & 0xf == 0xf {
        return false;
    }
    // Sample rate index 0x3 is reserved.
    if (header >> 10) & 0x3 == 0x3 {
        return false;
    }
    true
}

/// Returns true if the provided 32-bit word begins with the 11-bit frame sync pattern.
#[inline(always)]
pub fn is_frame_header_word_synced(sync: u32) -> bool {
    (sync & 0xffe0_0000) == 0xffe0_0000
}

/// Synchronizes the provided reader to the end of the next frame header, and returns the header
/// word as a `u32`.
pub fn sync_frame<B: ReadBytes>(reader: &mut B) -> Result<u32> {
    let mut sync = 0u32;

    loop {
        while !is_frame_header_word_synced(sync) {
            sync = (sync << 8) | u32::from(reader.read_u8()?);
        }

        // Random data can look like a sync word. A quick structural check increases confidence
        // that this is genuinely the start of a frame before committing to it.
        if check_header(sync) {
            break;
        }

        sync = (sync << 8) | u32::from(reader.read_u8()?);
    }

    Ok(sync)
}

/// Parses a 32-bit MPEG audio frame header word, rejecting anything that is not an MPEG-1
/// Layer III frame.
///
/// ```text
/// 0b1111_1111 0b111v_vlly 0brrrr_hhpx 0bmmmm_coee
/// where:
///     vv   = version, ll = layer      , y = crc
///     rrrr = bitrate, hh = sample rate, p = padding , x  = private bit
///     mmmm = mode   , c  = copyright  , o = original, ee = emphasis
/// ```
pub fn parse_frame_header(header: u32) -> Result<FrameHeader> {
    match (header & 0x18_0000) >> 19 {
        0b11 => (),
        0b10 | 0b00 => return unsupported_error("mpa: only MPEG version 1 is supported"),
        _ => return decode_error("mpa: invalid MPEG version"),
    };

    match (header & 0x6_0000) >> 17 {
        0b01 => (),
        0b10 | 0b11 => return unsupported_error("mpa: only Layer III is supported"),
        _ => return decode_error("mpa: invalid MPEG layer"),
    };

    let bitrate = match (header & 0xf000) >> 12 {
        // "Free" bit-rate. Not a mandatory feature of MP3 decoders.
        0b0000 => return unsupported_error("mpa: free bit-rate is not supported"),
        0b1111 => return decode_error("mpa: invalid bit-rate"),
        i => BIT_RATES_MPEG1_L3[i as usize],
    };

    let (sample_rate, sample_rate_idx) = match (header & 0xc00) >> 10 {
        0b00 => (44_100, 0),
        0b01 => (48_000, 1),
        0b10 => (32_000, 2),
        _ => return decode_error("mpa: invalid sample rate"),
    };

    let channel_mode = match (header & 0xc0) >> 6 {
        0b00 => ChannelMode::Stereo,
        0b10 => ChannelMode::DualMono,
        0b11 => ChannelMode::Mono,
        0b01 => ChannelMode::JointStereo(JointStereoMode {
            mid_side: header & 0x20 != 0x0,
            intensity: header & 0x10 != 0x0,
        }),
        _ => unreachable!(),
    };

    let emphasis = match header & 0x3 {
        0b01 => Emphasis::Fifty15,
        0b11 => Emphasis::CcitJ17,
        _ => Emphasis::None,
    };

    let is_copyrighted = header & 0x8 != 0x0;
    let is_original = header & 0x4 != 0x0;
    let has_padding = header & 0x200 != 0;
    let has_crc = header & 0x1_0000 == 0;

    // Frame size per ISO/IEC 11172-3 section 2.4.3.1: for Layer III at MPEG-1, the "slot" size is
    // one byte and the scaling factor is 144.
    let frame_size_slots = (144 * bitrate / sample_rate) as usize + usize::from(has_padding);

    Ok(FrameHeader {
        bitrate,
        sample_rate,
        sample_rate_idx,
        channel_mode,
        emphasis,
        is_copyrighted,
        is_original,
        has_padding,
        has_crc,
        frame_len: frame_size_slots,
    })
}

/// Synchronizes the stream to the start of the next MPEG audio frame header, then reads and
/// parses it.
#[inline]
pub fn read_frame_header<B: ReadBytes>(reader: &mut B) -> Result<FrameHeader> {
    parse_frame_header(sync_frame(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mp3lite_core::io::BufReader;

    #[test]
    fn parses_128kbps_44100hz_stereo_header() {
        // 0xFFFA9000: MPEG-1, Layer III, CRC protected, bitrate index 9 (128kbps), 44100Hz, no
        // padding, stereo, no copyright/original, no emphasis.
        let header = parse_frame_header(0xFFFA_9000).unwrap();
        assert_eq!(header.bitrate, 128_000);
        assert_eq!(header.sample_rate, 44_100);
        assert_eq!(header.channel_mode, ChannelMode::Stereo);
        assert!(header.has_crc);
        assert!(!header.has_padding);
        assert_eq!(header.frame_len, 417);
        assert_eq!(header.side_info_len(), 32);
    }

    #[test]
    fn rejects_layer_1() {
        // Same header with the layer bits changed to 0b11 (Layer I).
        assert!(parse_frame_header(0xFFFE_9000).is_err());
    }

    #[test]
    fn sync_skips_garbage_bytes() {
        let mut data = vec![0x00, 0x11, 0x22];
        data.extend_from_slice(&0xFFFA_9000u32.to_be_bytes());
        let mut reader = BufReader::new(&data);
        let word = sync_frame(&mut reader).unwrap();
        assert_eq!(word, 0xFFFA_9000);
    }
}
