// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A minimal RIFF/WAVE writer for 16-bit PCM: `fmt ` chunk tag 1 (PCM) followed by a `data`
//! chunk, with the RIFF and data sizes backfilled once every sample has been written.

use std::io::{self, Seek, SeekFrom, Write};

/// Writes one 16-bit PCM WAVE file to a seekable sink.
pub struct WaveWriter<W: Write + Seek> {
    writer: W,
    data_size_offset: u64,
    data_bytes_written: u32,
}

impl<W: Write + Seek> WaveWriter<W> {
    /// Writes the RIFF header and `fmt `/`data` chunk headers, then returns a writer ready for
    /// [`WaveWriter::write_samples`]. `data`'s size field is written as a placeholder and
    /// backfilled by [`WaveWriter::finish`].
    pub fn new(mut writer: W, num_channels: u16, sample_rate: u32) -> io::Result<Self> {
        const BITS_PER_SAMPLE: u16 = 16;
        const WAVE_FORMAT_PCM: u16 = 1;

        let block_align = num_channels * (BITS_PER_SAMPLE / 8);
        let byte_rate = sample_rate * u32::from(block_align);

        writer.write_all(b"RIFF")?;
        writer.write_all(&0u32.to_le_bytes())?; // backfilled in finish()
        writer.write_all(b"WAVE")?;

        writer.write_all(b"fmt ")?;
        writer.write_all(&16u32.to_le_bytes())?;
        writer.write_all(&WAVE_FORMAT_PCM.to_le_bytes())?;
        writer.write_all(&num_channels.to_le_bytes())?;
        writer.write_all(&sample_rate.to_le_bytes())?;
        writer.write_all(&byte_rate.to_le_bytes())?;
        writer.write_all(&block_align.to_le_bytes())?;
        writer.write_all(&BITS_PER_SAMPLE.to_le_bytes())?;

        writer.write_all(b"data")?;
        let data_size_offset = writer.stream_position()?;
        writer.write_all(&0u32.to_le_bytes())?;

        Ok(WaveWriter { writer, data_size_offset, data_bytes_written: 0 })
    }

    /// Appends interleaved signed 16-bit little-endian samples.
    pub fn write_samples(&mut self, samples: &[i16]) -> io::Result<()> {
        for &sample in samples {
            self.writer.write_all(&sample.to_le_bytes())?;
        }
        self.data_bytes_written += (samples.len() * 2) as u32;
        Ok(())
    }

    /// Backfills the RIFF and `data` chunk sizes now that every sample has been written.
    pub fn finish(mut self) -> io::Result<()> {
        let riff_size = 36 + self.data_bytes_written;

        self.writer.seek(SeekFrom::Start(4))?;
        self.writer.write_all(&riff_size.to_le_bytes())?;

        self.writer.seek(SeekFrom::Start(self.data_size_offset))?;
        self.writer.write_all(&self.data_bytes_written.to_le_bytes())?;

        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn writes_well_formed_header_and_backfills_sizes() {
        let mut out = Cursor::new(Vec::new());
        {
            let mut wav = WaveWriter::new(&mut out, 2, 44_100).unwrap();
            wav.write_samples(&[1, -1, 2, -2]).unwrap();
            wav.finish().unwrap();
        }

        let bytes = out.into_inner();
        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WAVE");
        assert_eq!(&bytes[12..16], b"fmt ");
        assert_eq!(&bytes[36..40], b"data");

        let data_size = u32::from_le_bytes(bytes[40..44].try_into().unwrap());
        assert_eq!(data_size, 8);

        let riff_size = u32::from_le_bytes(bytes[4..8].try_into().unwrap());
        assert_eq!(riff_size, 36 + 8);
    }
}
