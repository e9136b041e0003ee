// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Converts decoded float PCM into signed 16-bit samples, interleaved ready for a WAVE writer.
//!
//! The synthesis filterbank's output is normalized to roughly `[-1.0, 1.0]` full scale; this
//! module is the only place that re-scales it to 16-bit integer range.

use mp3lite_core::audio::AudioBuffer;

/// Converts one float sample (full scale `[-1.0, 1.0]`) to a clamped, round-half-to-even signed
/// 16-bit sample.
pub fn f32_to_i16(sample: f32) -> i16 {
    let scaled = f64::from(sample) * 32_768.0;
    round_half_to_even(scaled).clamp(-32_768.0, 32_767.0) as i16
}

fn round_half_to_even(x: f64) -> f64 {
    let floor = x.floor();
    let diff = x - floor;
    match diff.partial_cmp(&0.5) {
        Some(std::cmp::Ordering::Less) => floor,
        Some(std::cmp::Ordering::Greater) => floor + 1.0,
        _ => {
            // Exactly halfway: round to the nearest even integer.
            if (floor as i64) % 2 == 0 { floor } else { floor + 1.0 }
        }
    }
}

/// Converts a decoded frame's rendered frames into interleaved signed 16-bit PCM (`L, R, L, R,
/// ...` for stereo, or a single channel's samples in sequence for mono).
pub fn interleave(buf: &AudioBuffer) -> Vec<i16> {
    let n_channels = buf.spec().n_channels();
    let n_frames = buf.frames();
    let mut out = Vec::with_capacity(n_frames * n_channels);

    for i in 0..n_frames {
        for ch in 0..n_channels {
            out.push(f32_to_i16(buf.chan(ch)[i]));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_out_of_range_samples() {
        assert_eq!(f32_to_i16(2.0), 32_767);
        assert_eq!(f32_to_i16(-2.0), -32_768);
    }

    #[test]
    fn silence_is_silence() {
        assert_eq!(f32_to_i16(0.0), 0);
    }

    #[test]
    fn rounds_half_to_even() {
        // 0.5 / 32768.0 scales back up to exactly 0.5, which should round down to 0 (even).
        assert_eq!(f32_to_i16(0.5 / 32_768.0), 0);
        // 1.5 / 32768.0 scales back up to exactly 1.5, which should round up to 2 (even).
        assert_eq!(f32_to_i16(1.5 / 32_768.0), 2);
    }
}
