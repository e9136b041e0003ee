// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Huffman-coded spectral sample decoding and requantization, per ISO/IEC 11172-3 section
//! 2.4.3.4.6 and Annex C.

use mp3lite_core::errors::Result;
use mp3lite_core::io::ReadBitsLtr;

use crate::layer3::bitstream::GranuleChannel;
use crate::layer3::common::{BlockType, SFB_LONG_BANDS, SFB_MIXED_SWITCH, SFB_SHORT_BANDS};
use crate::layer3::huffman_tables::{big_values_table, quads_table};

/// The 22-entry pre-emphasis table applied to the upper scale factor bands when `preflag` is
/// set (ISO/IEC 11172-3 Table B.6). The trailing zero is never actually indexed (band 21 only
/// exists as the terminal boundary) but is kept so the table's length matches the number of
/// long-block scale factor bands.
const PRETAB: [u8; 22] = [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 3, 3, 3, 2, 0];

lazy_static::lazy_static! {
    /// `x^(4/3)` for every representable Huffman-decoded magnitude, including the linbits
    /// escape range. 8192 comfortably covers `big_values` magnitudes combined with a 13-bit
    /// escape (`15 + 8191 = 8206`).
    static ref POW43: Vec<f32> = (0..8207).map(|i: u32| (i as f32).powf(4.0 / 3.0)).collect();
}

fn pow43(value: u32) -> f32 {
    POW43.get(value as usize).copied().unwrap_or_else(|| (value as f32).powf(4.0 / 3.0))
}

/// Reads one escape-extended Huffman value: if the decoded magnitude is 15 (the maximum
/// representable by any big_values table) and the table allows escapes, reads `linbits` more
/// bits and adds them.
fn read_escaped<B: ReadBitsLtr>(bs: &mut B, value: u32, linbits: u32) -> Result<u32> {
    if value == 15 && linbits > 0 {
        Ok(15 + bs.read_bits_leq32(linbits)?)
    }
    else {
        Ok(value)
    }
}

fn read_signed_magnitude<B: ReadBitsLtr>(bs: &mut B, magnitude: u32) -> Result<f32> {
    if magnitude == 0 {
        return Ok(0.0);
    }
    let sign = bs.read_bit()?;
    let value = pow43(magnitude);
    Ok(if sign { -value } else { value })
}

/// Decodes the Huffman-coded spectral samples of one granule channel into `channel.samples`,
/// setting `channel.n_samples` to the number of lines actually produced.
///
/// The `big_values` region is split into up to three sub-regions (region0/1/2), each using its
/// own Huffman table; any remaining lines up to `part2_3_length`'s worth of bits are decoded
/// with the count1 ("quadruple") table, four lines at a time, until the budget of side-info
/// reported bits is exhausted or 576 lines have been produced.
pub fn read_huffman_samples<B: ReadBitsLtr>(
    bs: &mut B,
    channel: &mut GranuleChannel,
    sample_rate_idx: usize,
    part2_bits_read: u32,
) -> Result<()> {
    channel.samples = [0.0; 576];

    let region_boundaries =
        region_boundaries(channel, sample_rate_idx);

    let big_values_lines = (channel.big_values * 2) as usize;
    let mut line = 0usize;
    let mut region = 0usize;

    while line < big_values_lines && line < 576 {
        while region < region_boundaries.len() - 1 && line >= region_boundaries[region + 1] {
            region += 1;
        }
        let table_select = channel.table_select[region];
        let table = big_values_table(table_select);

        let (x, y) = table.decode(bs)?;
        let x = read_escaped(bs, x, table.linbits)?;
        let y = read_escaped(bs, y, table.linbits)?;

        channel.samples[line] = read_signed_magnitude(bs, x)?;
        if line + 1 < 576 {
            channel.samples[line + 1] = read_signed_magnitude(bs, y)?;
        }
        line += 2;
    }

    let count1_table = quads_table(channel.count1table_select);
    let budget_bits = i64::from(channel.part2_3_length) - i64::from(part2_bits_read);
    let mut bits_spent: i64 = 0;

    while line + 4 <= 576 {
        let start_pos = bs.position();
        if budget_bits >= 0 && bits_spent >= budget_bits {
            break;
        }

        let (nibble, _) = count1_table.decode(bs)?;
        let v = (nibble >> 3) & 1;
        let w = (nibble >> 2) & 1;
        let x = (nibble >> 1) & 1;
        let y = nibble & 1;

        channel.samples[line] = read_signed_magnitude(bs, v)?;
        channel.samples[line + 1] = read_signed_magnitude(bs, w)?;
        channel.samples[line + 2] = read_signed_magnitude(bs, x)?;
        channel.samples[line + 3] = read_signed_magnitude(bs, y)?;
        line += 4;

        bits_spent += (bs.position() - start_pos) as i64;
    }

    channel.n_samples = line;

    Ok(())
}

/// The big_values region boundaries (in spectral line index) for this channel.
///
/// Window-switched (short/mixed) granules only ever have two regions: `table_select[0]` covers
/// lines `0..36`, `table_select[1]` covers everything from there to the end of big_values.
/// `table_select[2]` is never read from the bitstream for these granules and must never be
/// indexed. Normal long blocks use the three regions implied by `region0_count`/`region1_count`.
fn region_boundaries(channel: &GranuleChannel, sample_rate_idx: usize) -> Vec<usize> {
    let block_type = channel.block_type.resolve();

    if matches!(block_type, BlockType::Short { .. }) {
        return vec![0, 36, 576];
    }

    let bands = &SFB_LONG_BANDS[sample_rate_idx];
    let r0_end_band = (channel.region0_count + 1) as usize;
    let r1_end_band = r0_end_band + (channel.region1_count + 1) as usize;

    let r0_end = bands.get(r0_end_band).copied().unwrap_or(576);
    let r1_end = bands.get(r1_end_band).copied().unwrap_or(576);

    vec![0, r0_end, r1_end, 576]
}

/// Requantizes a granule channel's Huffman-decoded magnitudes in place, applying the scale
/// factors, global gain, pre-emphasis and, for short/mixed blocks, the subblock gain.
///
/// `x_r = sign(x) * |x|^(4/3) * 2^((global_gain - 210) / 4 - (scalefac_scale ? 2 : 1) *
/// (scalefac + preflag * pretab) - subblock_gain_term)`, matching ISO/IEC 11172-3 section
/// 2.4.3.4.7, except the `|x|^(4/3)` factor is already folded into `samples` by
/// [`read_huffman_samples`].
pub fn requantize(channel: &mut GranuleChannel, sample_rate_idx: usize) {
    let block_type = channel.block_type.resolve();
    let scale_step: f32 = if channel.scalefac_scale { 2.0 } else { 1.0 };
    let global_gain_term = (f64::from(channel.global_gain) - 210.0) / 4.0;

    match block_type {
        BlockType::Short { is_mixed } => {
            let switch = if is_mixed { SFB_MIXED_SWITCH } else { 0 };

            if is_mixed {
                requantize_long_range(channel, sample_rate_idx, 0, switch, scale_step, global_gain_term);
            }

            requantize_short_range(channel, sample_rate_idx, switch, scale_step, global_gain_term);
        }
        _ => {
            requantize_long_range(channel, sample_rate_idx, 0, 576, scale_step, global_gain_term);
        }
    }
}

fn requantize_long_range(
    channel: &mut GranuleChannel,
    sample_rate_idx: usize,
    from: usize,
    to: usize,
    scale_step: f32,
    global_gain_term: f64,
) {
    let bands = SFB_LONG_BANDS[sample_rate_idx];
    for sfb in 0..bands.len() - 1 {
        let (start, end) = (bands[sfb], bands[sfb + 1].min(576));
        if start >= to || end <= from {
            continue;
        }
        let scalefac = channel.scalefac_l.get(sfb).copied().unwrap_or(0);
        let preemph = if channel.preflag { PRETAB.get(sfb).copied().unwrap_or(0) } else { 0 };
        let exponent = global_gain_term - f64::from(scale_step) * f64::from(scalefac + preemph);
        let gain = 2f64.powf(exponent) as f32;

        for i in start.max(from)..end.min(to).min(576) {
            channel.samples[i] *= gain;
        }
    }
}

fn requantize_short_range(
    channel: &mut GranuleChannel,
    sample_rate_idx: usize,
    switch: usize,
    scale_step: f32,
    global_gain_term: f64,
) {
    // Requantization runs on the raw Huffman-decoded order, before `reorder` transposes the
    // short region into window-major form: line `switch + f*3 + w` holds per-window frequency
    // `f` of window `w`. `sfb` is tracked incrementally since `f` (and so the scale factor band
    // it falls in) only ever increases.
    let bands = SFB_SHORT_BANDS[sample_rate_idx];
    let win_len = (576 - switch) / 3;

    let is_mixed = switch > 0;
    let start_sfb = if is_mixed { 3 } else { 0 };
    let region_base = bands[start_sfb];

    let mut sfb = start_sfb;
    for freq in 0..win_len {
        let abs_freq = region_base + freq;
        while sfb + 1 < bands.len() - 1 && bands[sfb + 1] <= abs_freq {
            sfb += 1;
        }

        for window in 0..3 {
            let idx = switch + freq * 3 + window;
            if idx >= 576 {
                continue;
            }

            let scalefac = channel.scalefac_s[window].get(sfb).copied().unwrap_or(0);
            let subgain = f64::from(channel.subblock_gain[window]) * 8.0;
            let exponent =
                global_gain_term - f64::from(scale_step) * f64::from(scalefac) - subgain / 4.0;
            let gain = 2f64.powf(exponent) as f32;

            channel.samples[idx] *= gain;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pow43_matches_float_powf() {
        assert!((pow43(8) - 8f32.powf(4.0 / 3.0)).abs() < 1e-3);
        assert!((pow43(0) - 0.0).abs() < 1e-6);
    }

    #[test]
    fn pretab_has_22_entries_with_trailing_zero() {
        assert_eq!(PRETAB.len(), 22);
        assert_eq!(PRETAB[21], 0);
    }
}
