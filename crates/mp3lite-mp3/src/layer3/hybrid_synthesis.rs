// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Reordering, anti-aliasing, the hybrid (IMDCT) synthesis filter, and frequency inversion: the
//! stages of ISO/IEC 11172-3 section 2.4.3.4.9 that turn 576 requantized frequency-domain lines
//! into 576 time-domain samples per granule.

use crate::layer3::common::{BlockType, SFB_MIXED_SWITCH};
use crate::layer3::bitstream::GranuleChannel;

/// The anti-aliasing butterfly coefficients, ISO/IEC 11172-3 Table B.9. Each pair `(cs[i],
/// ca[i])` mixes one pair of lines straddling an 18-line subband boundary.
const ANTIALIAS_CS: [f32; 8] =
    [0.857_493, 0.881_742, 0.949_629, 0.983_315, 0.995_518, 0.999_161, 0.999_899, 0.999_983];
const ANTIALIAS_CA: [f32; 8] =
    [-0.514_496, -0.471_732, -0.313_377, -0.181_913, -0.094_574, -0.040_966, -0.014_990, -0.003_967];

lazy_static::lazy_static! {
    static ref WINDOW_LONG: [f32; 36] = {
        let mut w = [0.0f32; 36];
        for (i, v) in w.iter_mut().enumerate() {
            *v = (std::f64::consts::PI / 36.0 * (i as f64 + 0.5)).sin() as f32;
        }
        w
    };
    static ref WINDOW_START: [f32; 36] = {
        let mut w = [0.0f32; 36];
        for i in 0..18 {
            w[i] = (std::f64::consts::PI / 36.0 * (i as f64 + 0.5)).sin() as f32;
        }
        for v in w.iter_mut().take(24).skip(18) {
            *v = 1.0;
        }
        for i in 24..30 {
            w[i] = (std::f64::consts::PI / 12.0 * (i as f64 - 18.0 + 0.5)).sin() as f32;
        }
        w
    };
    static ref WINDOW_SHORT: [f32; 12] = {
        let mut w = [0.0f32; 12];
        for (i, v) in w.iter_mut().enumerate() {
            *v = (std::f64::consts::PI / 12.0 * (i as f64 + 0.5)).sin() as f32;
        }
        w
    };
    static ref WINDOW_END: [f32; 36] = {
        let mut w = [0.0f32; 36];
        for i in 6..12 {
            w[i] = (std::f64::consts::PI / 12.0 * (i as f64 - 6.0 + 0.5)).sin() as f32;
        }
        for v in w.iter_mut().take(30).skip(12) {
            *v = 1.0;
        }
        for i in 30..36 {
            w[i] = (std::f64::consts::PI / 36.0 * (i as f64 + 0.5)).sin() as f32;
        }
        w
    };
}

/// Reorders a short (or the short portion of a mixed) block's spectral lines from the
/// bitstream's native per-frequency-then-window interleaving into window-major order: every
/// window's frequencies become contiguous, so later stages (stereo, the per-window hybrid
/// filter) can address one window's worth of a scale factor band as a plain slice.
///
/// The raw Huffman-decoded short region is interleaved line-by-line as `(frequency, window)`
/// with window varying fastest; scale factor band boundaries are irrelevant to this
/// transposition; they only determine which samples downstream stages treat as grouped.
pub fn reorder(channel: &mut GranuleChannel) {
    let block_type = channel.block_type.resolve();
    let is_mixed = matches!(block_type, BlockType::Short { is_mixed: true });
    if !matches!(block_type, BlockType::Short { .. }) {
        return;
    }

    let switch = if is_mixed { SFB_MIXED_SWITCH } else { 0 };
    let win_len = (576 - switch) / 3;

    let mut reordered = [0.0f32; 576];
    reordered[..switch].copy_from_slice(&channel.samples[..switch]);

    for freq in 0..win_len {
        for window in 0..3 {
            let raw_idx = switch + freq * 3 + window;
            let out_idx = switch + window * win_len + freq;
            if raw_idx < 576 && out_idx < 576 {
                reordered[out_idx] = channel.samples[raw_idx];
            }
        }
    }

    channel.samples = reordered;
}

/// Applies the 8-line butterfly anti-aliasing filter across each of the 31 boundaries between
/// adjacent 18-line (hybrid filter input) subbands. Skipped entirely for pure short blocks,
/// which have no such boundaries to smooth (ISO/IEC 11172-3 section 2.4.3.4.9.1).
pub fn antialias(channel: &mut GranuleChannel) {
    if matches!(channel.block_type.resolve(), BlockType::Short { is_mixed: false }) {
        return;
    }

    // A mixed block only has its first two 18-line subbands in long-block form; anti-aliasing
    // applies to every boundary up to (and including) the one just past subband index 1.
    let n_subbands =
        if matches!(channel.block_type.resolve(), BlockType::Short { is_mixed: true }) { 2 } else { 32 };

    for sb in 0..n_subbands.saturating_sub(1) {
        for i in 0..8 {
            let li = sb * 18 + 17 - i;
            let ui = (sb + 1) * 18 + i;
            if ui >= 576 {
                break;
            }
            let lower = channel.samples[li];
            let upper = channel.samples[ui];
            channel.samples[li] = lower * ANTIALIAS_CS[i] - upper * ANTIALIAS_CA[i];
            channel.samples[ui] = upper * ANTIALIAS_CS[i] + lower * ANTIALIAS_CA[i];
        }
    }
}

/// Direct (O(N^2)) inverse modified discrete cosine transform producing `2 * n` time-domain
/// values from `n` frequency-domain inputs, per ISO/IEC 11172-3 equation 2.4.3.4.9.3-1.
fn imdct<const N: usize, const OUT: usize>(input: &[f32; N]) -> [f32; OUT] {
    debug_assert_eq!(OUT, 2 * N);
    let mut out = [0.0f32; OUT];
    for (i, o) in out.iter_mut().enumerate() {
        let mut acc = 0.0f64;
        for (k, &x) in input.iter().enumerate() {
            let angle = std::f64::consts::PI / (2.0 * N as f64)
                * (2.0 * i as f64 + 1.0 + N as f64 / 2.0)
                * (2.0 * k as f64 + 1.0);
            acc += f64::from(x) * angle.cos();
        }
        *o = acc as f32;
    }
    out
}

/// Per-channel overlap-add state for the hybrid synthesis filter: the trailing 18 samples of
/// each of the 32 subbands' previous windowed IMDCT output.
#[derive(Clone)]
pub struct Overlap {
    bands: [[f32; 18]; 32],
}

impl Default for Overlap {
    fn default() -> Self {
        Overlap { bands: [[0.0; 18]; 32] }
    }
}

/// Runs the hybrid synthesis filter (windowed IMDCT + overlap-add) over all 32 subbands of one
/// granule channel, consuming `channel.samples` in place and updating `overlap` for the next
/// granule.
pub fn hybrid_synthesis(channel: &mut GranuleChannel, overlap: &mut Overlap) {
    let block_type = channel.block_type.resolve();
    let is_mixed = matches!(block_type, BlockType::Short { is_mixed: true });
    let is_short = matches!(block_type, BlockType::Short { .. });

    let switch = if is_mixed { SFB_MIXED_SWITCH } else { 0 };
    let win_len = (576 - switch) / 3;

    let mut output = [0.0f32; 576];

    for sb in 0..32 {
        let base = sb * 18;
        let use_long = !is_short || (is_mixed && sb < 2);

        let windowed: [f32; 36] = if use_long {
            let mut input = [0.0f32; 18];
            input.copy_from_slice(&channel.samples[base..base + 18]);
            let transformed: [f32; 36] = imdct::<18, 36>(&input);

            let window: &[f32; 36] = match block_type {
                BlockType::Start => &WINDOW_START,
                BlockType::End => &WINDOW_END,
                _ => &WINDOW_LONG,
            };

            let mut w = [0.0f32; 36];
            for i in 0..36 {
                w[i] = transformed[i] * window[i];
            }
            w
        }
        else {
            // Three 6-line short windows, each transformed and windowed independently, then
            // overlapped with each other at a 6-sample stride before the outer overlap-add.
            //
            // `reorder` has already transposed the short region into window-major order: each
            // window's frequencies are contiguous within `switch + window * win_len`. Subband
            // `sb` (past the mixed-block long-region switch, if any) owns the 6 consecutive
            // per-window frequencies starting at `local_sb * 6`.
            let local_sb = sb - switch / 18;
            let freq_base = local_sb * 6;

            let mut combined = [0.0f32; 36];
            for win in 0..3 {
                let mut input = [0.0f32; 6];
                for (k, v) in input.iter_mut().enumerate() {
                    *v = channel.samples[switch + win * win_len + freq_base + k];
                }
                let transformed: [f32; 12] = imdct::<6, 12>(&input);

                let offset = 6 + win * 6;
                for i in 0..12 {
                    combined[offset + i] += transformed[i] * WINDOW_SHORT[i];
                }
            }
            combined
        };

        for i in 0..18 {
            output[base + i] = windowed[i] + overlap.bands[sb][i];
        }
        overlap.bands[sb].copy_from_slice(&windowed[18..36]);
    }

    channel.samples = output;
}

/// Negates every odd-indexed sample of every odd subband, undoing the frequency inversion
/// introduced by the polyphase analysis filterbank at the encoder (ISO/IEC 11172-3 section
/// 2.4.3.4.9.4).
pub fn frequency_inversion(channel: &mut GranuleChannel) {
    for sb in (1..32).step_by(2) {
        for i in (1..18).step_by(2) {
            channel.samples[sb * 18 + i] = -channel.samples[sb * 18 + i];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_window_is_symmetric() {
        for i in 0..18 {
            assert!((WINDOW_LONG[i] - WINDOW_LONG[35 - i]).abs() < 1e-5);
        }
    }

    #[test]
    fn imdct_of_silence_is_silence() {
        let input = [0.0f32; 18];
        let out: [f32; 36] = imdct::<18, 36>(&input);
        assert!(out.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn antialias_coefficients_are_unit_norm() {
        for i in 0..8 {
            let norm = ANTIALIAS_CS[i] * ANTIALIAS_CS[i] + ANTIALIAS_CA[i] * ANTIALIAS_CA[i];
            assert!((norm - 1.0).abs() < 1e-3, "index {i}: norm {norm}");
        }
    }
}
