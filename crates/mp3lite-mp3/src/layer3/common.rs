// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scale factor band boundary tables and the block-type enumeration, per ISO/IEC 11172-3
//! Table B.8 (reproduced here indexed by `sample_rate_idx`: 0 = 44100 Hz, 1 = 48000 Hz,
//! 2 = 32000 Hz).

/// The window arrangement of a granule's spectral data.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BlockType {
    /// A normal, full-length transform window.
    Long,
    /// A long window immediately preceding a sequence of short windows.
    Start,
    /// Three short transform windows. `is_mixed` is true when scale factor bands 0..7 still use
    /// the long-block layout (mixed block).
    Short { is_mixed: bool },
    /// A long window immediately following a sequence of short windows.
    End,
}

/// Cumulative scale factor band boundaries, in spectral line index, for long (or mixed-block
/// long-region) windows. Each row has 23 entries: 22 band boundaries plus the terminal 576.
pub const SFB_LONG_BANDS: [[usize; 23]; 3] = [
    // 44100 Hz
    [0, 4, 8, 12, 16, 20, 24, 30, 36, 44, 52, 62, 74, 90, 110, 134, 162, 196, 238, 288, 342, 418, 576],
    // 48000 Hz
    [0, 4, 8, 12, 16, 20, 24, 30, 36, 42, 50, 60, 72, 88, 106, 128, 156, 190, 230, 276, 330, 384, 576],
    // 32000 Hz
    [0, 4, 8, 12, 16, 20, 24, 30, 36, 44, 54, 66, 82, 102, 126, 156, 194, 240, 296, 364, 448, 550, 576],
];

/// Cumulative scale factor band boundaries, in per-window spectral line index, for short
/// windows. Each row has 14 entries: 13 band boundaries plus the terminal 192 (the number of
/// spectral lines in a single 1/3-length short window).
pub const SFB_SHORT_BANDS: [[usize; 14]; 3] = [
    // 44100 Hz
    [0, 4, 8, 12, 16, 22, 30, 40, 52, 66, 84, 106, 136, 192],
    // 48000 Hz
    [0, 4, 8, 12, 16, 22, 28, 38, 50, 64, 80, 100, 126, 192],
    // 32000 Hz
    [0, 4, 8, 12, 16, 22, 30, 42, 58, 78, 104, 138, 180, 192],
];

/// The spectral-line index at which a mixed block switches from the long-block layout (scale
/// factor bands 0..7) to the short-block layout (scale factor bands 3..12, one third-length
/// window at a time). All three sample rates place this boundary at `SFB_LONG_BANDS[_][8]`,
/// which happens to be 36 in every row.
pub const SFB_MIXED_SWITCH: usize = 36;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_switch_matches_long_band_eight_at_every_sample_rate() {
        for row in SFB_LONG_BANDS.iter() {
            assert_eq!(row[8], SFB_MIXED_SWITCH);
        }
    }

    #[test]
    fn bands_are_monotonic_and_terminate_at_region_length() {
        for row in SFB_LONG_BANDS.iter() {
            assert!(row.windows(2).all(|w| w[0] < w[1]));
            assert_eq!(*row.last().unwrap(), 576);
        }
        for row in SFB_SHORT_BANDS.iter() {
            assert!(row.windows(2).all(|w| w[0] < w[1]));
            assert_eq!(*row.last().unwrap(), 192);
        }
    }
}
