// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Side information and scale factor parsing, per ISO/IEC 11172-3 section 2.4.1.7.

use mp3lite_core::errors::Result;
use mp3lite_core::io::ReadBitsLtr;

use crate::common::FrameHeader;
use crate::layer3::common::BlockType;

/// Per-channel, per-granule side information plus the scale factors and Huffman-decoded
/// spectral data that are later filled in from the main data partition.
#[derive(Clone, Default)]
pub struct GranuleChannel {
    pub part2_3_length: u32,
    pub big_values: u32,
    pub global_gain: u8,
    pub scalefac_compress: u32,
    pub block_type: BlockTypeBits,
    pub table_select: [u32; 3],
    pub subblock_gain: [u32; 3],
    pub region0_count: u32,
    pub region1_count: u32,
    pub preflag: bool,
    pub scalefac_scale: bool,
    pub count1table_select: bool,

    /// Long-block scale factors, indexed by scale factor band (0..=20 used, 21 allocated to
    /// match the largest `SFB_LONG_BANDS` row).
    pub scalefac_l: [u8; 21],
    /// Short-block scale factors, indexed `[window][band]`.
    pub scalefac_s: [[u8; 13]; 3],

    /// Requantized, reordered, stereo-processed spectral samples. Filled in by later decode
    /// stages; empty immediately after side info / scale factor parsing.
    pub samples: [f32; 576],
    /// Number of spectral lines actually produced by Huffman decoding (`big_values * 2 +
    /// count1 * 4`, capped at 576).
    pub n_samples: usize,
}

/// The raw block-switching bits, decoded into a `BlockType` once the full granule is known to
/// need one (a long block needs no window-switching info at all).
#[derive(Copy, Clone, Default)]
pub struct BlockTypeBits {
    pub window_switching: bool,
    pub block_type_raw: u32,
    pub mixed_block_flag: bool,
}

impl BlockTypeBits {
    pub fn resolve(&self) -> BlockType {
        if !self.window_switching {
            return BlockType::Long;
        }
        match self.block_type_raw {
            0b01 => BlockType::Start,
            0b10 => BlockType::Short { is_mixed: self.mixed_block_flag },
            0b11 => BlockType::End,
            // A window-switched granule with block_type == 0b00 is reserved; treat it as a long
            // block rather than fail the whole frame over it.
            _ => BlockType::Long,
        }
    }
}

/// One granule's two (or, for mono, one) channels.
#[derive(Clone, Default)]
pub struct Granule {
    pub channels: [GranuleChannel; 2],
}

/// The fully parsed side information for one frame: the bit reservoir back-reference plus two
/// granules of per-channel decoding parameters.
#[derive(Clone, Default)]
pub struct FrameData {
    /// Number of bytes of main data belonging to this frame that are carried over from
    /// preceding frames' bit reservoirs.
    pub main_data_begin: u32,
    /// Scale factor selection information: `scfsi[channel][band_group]`, true if the granule 1
    /// scale factors for that band group are copied from granule 0 rather than transmitted
    /// again.
    pub scfsi: [[bool; 4]; 2],
    pub granules: [Granule; 2],
}

/// Reads the side information block that immediately follows the frame header (and CRC, if
/// present). Does not touch the main data partition.
pub fn read_side_info<B: ReadBitsLtr>(bs: &mut B, header: &FrameHeader) -> Result<FrameData> {
    let n_channels = header.n_channels();
    let mut fd = FrameData::default();

    let main_data_begin_bits = 9;
    fd.main_data_begin = bs.read_bits_leq32(main_data_begin_bits)?;

    // Private bits: 5 for mono, 3 for stereo. Not used by this decoder.
    bs.ignore_bits(if n_channels == 1 { 5 } else { 3 })?;

    for ch in 0..n_channels {
        for band_group in 0..4 {
            fd.scfsi[ch][band_group] = bs.read_bit()?;
        }
    }

    for gr in 0..2 {
        for ch in 0..n_channels {
            let channel = &mut fd.granules[gr].channels[ch];

            channel.part2_3_length = bs.read_bits_leq32(12)?;
            channel.big_values = bs.read_bits_leq32(9)?;
            channel.global_gain = bs.read_bits_leq32(8)? as u8;
            channel.scalefac_compress = bs.read_bits_leq32(4)?;

            channel.block_type.window_switching = bs.read_bit()?;

            if channel.block_type.window_switching {
                channel.block_type.block_type_raw = bs.read_bits_leq32(2)?;
                channel.block_type.mixed_block_flag = bs.read_bit()?;

                for tsel in channel.table_select.iter_mut().take(2) {
                    *tsel = bs.read_bits_leq32(5)?;
                }
                for gain in channel.subblock_gain.iter_mut() {
                    *gain = bs.read_bits_leq32(3)?;
                }

                // Window-switched granules never use a regular region split; these defaults
                // match what every encoder in practice emits for them.
                channel.region0_count =
                    if channel.block_type.block_type_raw == 0b01 { 7 } else { 8 };
                channel.region1_count = 20 - channel.region0_count;
            }
            else {
                for tsel in channel.table_select.iter_mut() {
                    *tsel = bs.read_bits_leq32(5)?;
                }
                channel.region0_count = bs.read_bits_leq32(4)?;
                channel.region1_count = bs.read_bits_leq32(3)?;
            }

            channel.preflag = bs.read_bit()?;
            channel.scalefac_scale = bs.read_bit()?;
            channel.count1table_select = bs.read_bit()?;
        }
    }

    Ok(fd)
}

/// Reads the scale factors for one granule/channel from the main data partition, honouring
/// `scfsi` reuse for granule 1.
///
/// Per ISO/IEC 11172-3 section 2.4.3.4.7, a mixed block (`block_type == Short { is_mixed: true
/// }`) reads 8 long-block-style scale factor bands followed by short-block bands 3..12; any
/// other short block reads bands 0..12 in short-block form; a long or start/end block reads
/// bands 0..21 in long-block form.
pub fn read_scale_factors<B: ReadBitsLtr>(
    bs: &mut B,
    gr: usize,
    ch: usize,
    fd: &mut FrameData,
) -> Result<()> {
    // The four (slen1, slen2) bit-widths used to encode scale factor values, indexed by
    // scalefac_compress (ISO/IEC 11172-3 Table B.9).
    const SCALEFAC_SIZES: [(u32, u32); 16] = [
        (0, 0),
        (0, 1),
        (0, 2),
        (0, 3),
        (3, 0),
        (1, 1),
        (1, 2),
        (1, 3),
        (2, 1),
        (2, 2),
        (2, 3),
        (3, 1),
        (3, 2),
        (3, 3),
        (4, 2),
        (4, 3),
    ];

    let (slen1, slen2) = {
        let compress = fd.granules[gr].channels[ch].scalefac_compress as usize;
        SCALEFAC_SIZES[compress.min(15)]
    };

    let block_type = fd.granules[gr].channels[ch].block_type.resolve();
    let is_mixed = matches!(block_type, BlockType::Short { is_mixed: true });
    let is_short = matches!(block_type, BlockType::Short { .. });

    if is_short && !is_mixed {
        for band in 0..6 {
            fd.granules[gr].channels[ch].scalefac_s[0][band] = bs.read_bits_leq32(slen1)? as u8;
            fd.granules[gr].channels[ch].scalefac_s[1][band] = bs.read_bits_leq32(slen1)? as u8;
            fd.granules[gr].channels[ch].scalefac_s[2][band] = bs.read_bits_leq32(slen1)? as u8;
        }
        for band in 6..12 {
            fd.granules[gr].channels[ch].scalefac_s[0][band] = bs.read_bits_leq32(slen2)? as u8;
            fd.granules[gr].channels[ch].scalefac_s[1][band] = bs.read_bits_leq32(slen2)? as u8;
            fd.granules[gr].channels[ch].scalefac_s[2][band] = bs.read_bits_leq32(slen2)? as u8;
        }
    }
    else if is_mixed {
        for band in 0..8 {
            fd.granules[gr].channels[ch].scalefac_l[band] = bs.read_bits_leq32(slen1)? as u8;
        }
        for band in 3..6 {
            fd.granules[gr].channels[ch].scalefac_s[0][band] = bs.read_bits_leq32(slen1)? as u8;
            fd.granules[gr].channels[ch].scalefac_s[1][band] = bs.read_bits_leq32(slen1)? as u8;
            fd.granules[gr].channels[ch].scalefac_s[2][band] = bs.read_bits_leq32(slen1)? as u8;
        }
        for band in 6..12 {
            fd.granules[gr].channels[ch].scalefac_s[0][band] = bs.read_bits_leq32(slen2)? as u8;
            fd.granules[gr].channels[ch].scalefac_s[1][band] = bs.read_bits_leq32(slen2)? as u8;
            fd.granules[gr].channels[ch].scalefac_s[2][band] = bs.read_bits_leq32(slen2)? as u8;
        }
    }
    else if gr == 0 {
        for band in 0..11 {
            fd.granules[0].channels[ch].scalefac_l[band] = bs.read_bits_leq32(slen1)? as u8;
        }
        for band in 11..21 {
            fd.granules[0].channels[ch].scalefac_l[band] = bs.read_bits_leq32(slen2)? as u8;
        }
    }
    else {
        // Granule 1 of a long block: each of the four scfsi band groups is either copied
        // verbatim from granule 0 or freshly transmitted.
        let groups: [(usize, usize, u32); 4] =
            [(0, 6, slen1), (6, 11, slen1), (11, 16, slen2), (16, 21, slen2)];

        for (group_idx, (start, end, slen)) in groups.into_iter().enumerate() {
            if fd.scfsi[ch][group_idx] {
                let copied: Vec<u8> =
                    (start..end).map(|band| fd.granules[0].channels[ch].scalefac_l[band]).collect();
                for (band, value) in (start..end).zip(copied) {
                    fd.granules[1].channels[ch].scalefac_l[band] = value;
                }
            }
            else {
                for band in start..end {
                    fd.granules[1].channels[ch].scalefac_l[band] = bs.read_bits_leq32(slen)? as u8;
                }
            }
        }
    }

    Ok(())
}
