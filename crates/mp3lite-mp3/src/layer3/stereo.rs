// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Joint stereo processing: mid/side (M/S) and intensity stereo, per ISO/IEC 11172-3
//! section 2.4.3.4.9.2. Runs on requantized spectral lines, after short/mixed blocks have
//! already been transposed into window-major order by `reorder`.
//!
//! M/S and intensity coding apply to disjoint, non-overlapping line ranges: intensity covers the
//! top of the spectrum (the scale factor bands the encoder left silent in the right channel,
//! intending them to be rebuilt from the left channel and a position), M/S covers everything
//! below that bound. A per-line mask built by [`process_intensity`] keeps the two passes from
//! touching each other's lines.

use crate::common::FrameHeader;
use crate::layer3::bitstream::{Granule, GranuleChannel};
use crate::layer3::common::{BlockType, SFB_LONG_BANDS, SFB_MIXED_SWITCH, SFB_SHORT_BANDS};

lazy_static::lazy_static! {
    /// `tan(i * pi / 12)` for intensity position `i` in 0..=6. Position 7 means "intensity
    /// stereo is not in effect for this band" and is handled separately.
    static ref IS_RATIO: [f32; 7] = {
        let mut table = [0.0f32; 7];
        for (i, v) in table.iter_mut().enumerate() {
            *v = (std::f64::consts::PI / 12.0 * i as f64).tan() as f32;
        }
        table
    };
}

/// Applies the M/S transform to every line *not* covered by `intensity_mask`.
fn process_mid_side(left: &mut GranuleChannel, right: &mut GranuleChannel, intensity_mask: &[bool; 576]) {
    let inv_sqrt2 = std::f32::consts::FRAC_1_SQRT_2;
    let n = left.n_samples.max(right.n_samples).min(576);

    for i in 0..n {
        if intensity_mask[i] {
            continue;
        }
        let m = left.samples[i];
        let s = right.samples[i];
        left.samples[i] = (m + s) * inv_sqrt2;
        right.samples[i] = (m - s) * inv_sqrt2;
    }
}

/// Restores the right channel's magnitude in every scale factor band intensity coding covers,
/// and returns a mask marking every line it touched.
///
/// The intensity region is bounded from the top of the spectrum down: per ISO/IEC 11172-3
/// section 2.4.3.4.9.2, the encoder leaves the right channel silent from the first zero band
/// found scanning downward from the highest scale factor band, and intensity-codes everything
/// from there up. Scanning from the bottom instead (testing each band for all-zero content in
/// isolation) would misclassify a legitimately silent low-frequency band as an intensity band.
fn process_intensity(
    left: &mut GranuleChannel,
    right: &mut GranuleChannel,
    sample_rate_idx: usize,
) -> [bool; 576] {
    let mut mask = [false; 576];
    let block_type = right.block_type.resolve();

    match block_type {
        BlockType::Short { is_mixed } => {
            let switch = if is_mixed { SFB_MIXED_SWITCH } else { 0 };
            let bands = SFB_SHORT_BANDS[sample_rate_idx];
            let win_len = (576 - switch) / 3;

            let start_sfb = if is_mixed { 3 } else { 0 };
            let region_base = bands[start_sfb];
            let n_sfb = bands.len() - 1;

            for window in 0..3 {
                let line_range = |sfb: usize| {
                    let (wstart, wend) = (
                        (bands[sfb] - region_base).min(win_len),
                        (bands[sfb + 1] - region_base).min(win_len),
                    );
                    let start = switch + window * win_len + wstart;
                    let end = (switch + window * win_len + wend).min(576);
                    (start, end)
                };

                // Scan from the top-most band of this window downward for the first band with
                // any real right-channel content; everything above that band is intensity.
                let mut bound = n_sfb;
                for sfb in (start_sfb..n_sfb).rev() {
                    let (start, end) = line_range(sfb);
                    if start >= end {
                        continue;
                    }
                    if right.samples[start..end].iter().any(|&v| v != 0.0) {
                        break;
                    }
                    bound = sfb;
                }

                for sfb in bound..n_sfb {
                    let (start, end) = line_range(sfb);
                    if start >= end {
                        continue;
                    }
                    mask[start..end].fill(true);
                    apply_intensity_band(left, right, start, end, right.scalefac_s[window][sfb]);
                }
            }
        }
        _ => {
            let bands = SFB_LONG_BANDS[sample_rate_idx];
            let n_sfb = bands.len() - 1;

            let mut bound = n_sfb;
            for sfb in (0..n_sfb).rev() {
                let (start, end) = (bands[sfb], bands[sfb + 1].min(576));
                if start >= end {
                    continue;
                }
                if right.samples[start..end].iter().any(|&v| v != 0.0) {
                    break;
                }
                bound = sfb;
            }

            for sfb in bound..n_sfb {
                let (start, end) = (bands[sfb], bands[sfb + 1].min(576));
                if start >= end {
                    continue;
                }
                mask[start..end].fill(true);
                apply_intensity_band(left, right, start, end, right.scalefac_l.get(sfb).copied().unwrap_or(0));
            }
        }
    }

    mask
}

fn apply_intensity_band(
    left: &mut GranuleChannel,
    right: &mut GranuleChannel,
    start: usize,
    end: usize,
    position: u8,
) {
    let position = position as usize;
    if position >= 7 {
        return;
    }

    let ratio = IS_RATIO[position];
    for i in start..end {
        let l = left.samples[i];
        right.samples[i] = l * ratio / (1.0 + ratio);
        left.samples[i] = l / (1.0 + ratio);
    }
}

/// Applies whichever joint stereo processing (if any) `header` indicates to one granule's two
/// channels. A no-op for mono, plain stereo, and dual mono.
pub fn process_stereo(granule: &mut Granule, header: &FrameHeader, sample_rate_idx: usize) {
    if header.n_channels() != 2 {
        return;
    }

    let (left, right) = granule.channels.split_at_mut(1);
    let left = &mut left[0];
    let right = &mut right[0];

    let intensity_mask = if header.is_intensity_stereo() {
        process_intensity(left, right, sample_rate_idx)
    }
    else {
        [false; 576]
    };

    if header.is_mid_side_stereo() {
        process_mid_side(left, right, &intensity_mask);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_ratio_position_zero_is_zero() {
        assert!((IS_RATIO[0]).abs() < 1e-6);
    }

    #[test]
    fn mid_side_round_trips() {
        let mut left = GranuleChannel::default();
        let mut right = GranuleChannel::default();
        left.samples[0] = 1.0;
        right.samples[0] = 0.5;
        left.n_samples = 576;
        right.n_samples = 576;

        let (orig_l, orig_r) = (left.samples[0], right.samples[0]);
        let no_intensity = [false; 576];
        process_mid_side(&mut left, &mut right, &no_intensity);
        process_mid_side(&mut left, &mut right, &no_intensity);

        // Applying the involution twice scales by 2 (it is its own inverse only up to the
        // normalization factor cancelling out over two applications).
        assert!((left.samples[0] - 2.0 * orig_l).abs() < 1e-4);
        assert!((right.samples[0] - 2.0 * orig_r).abs() < 1e-4);
    }

    #[test]
    fn mid_side_leaves_intensity_lines_untouched() {
        let mut left = GranuleChannel::default();
        let mut right = GranuleChannel::default();
        left.n_samples = 576;
        right.n_samples = 576;
        left.samples[500] = 3.0;
        right.samples[500] = 7.0;

        let mut mask = [false; 576];
        mask[500] = true;
        process_mid_side(&mut left, &mut right, &mask);

        assert_eq!(left.samples[500], 3.0);
        assert_eq!(right.samples[500], 7.0);
    }

    #[test]
    fn intensity_bound_is_found_top_down_not_bottom_up() {
        // A long-block right channel that is silent in a genuinely-voiced low band (sfb 0) but
        // has real content in a higher band, and is silent again above that. Scanning bottom-up
        // would wrongly treat sfb 0 as an intensity band; scanning top-down must not.
        let mut left = GranuleChannel::default();
        let mut right = GranuleChannel::default();
        left.n_samples = 576;
        right.n_samples = 576;

        let bands = SFB_LONG_BANDS[0];
        // sfb 0 stays silent in the right channel (a real, quiet low band).
        // sfb 5 carries real right-channel content.
        right.samples[bands[5]] = 2.0;
        left.samples[bands[5]] = 2.0;
        left.samples[bands[0]] = 9.0;

        let mask = process_intensity(&mut left, &mut right, 0);

        // sfb 0 must NOT be intensity-reconstructed: the right channel there must stay zero and
        // the left channel must be untouched.
        assert_eq!(right.samples[bands[0]], 0.0);
        assert_eq!(left.samples[bands[0]], 9.0);
        assert!(!mask[bands[0]]);

        // Everything above sfb 5 is the intensity region.
        assert!(mask[bands[6]]);
    }
}
