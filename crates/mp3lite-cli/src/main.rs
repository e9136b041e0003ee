// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#![warn(rust_2018_idioms)]
#![forbid(unsafe_code)]

mod wav;

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use mp3lite_core::io::BufReader;
use mp3lite_mp3::decoder::Mp3Decoder;
use mp3lite_mp3::pcm;

use wav::WaveWriter;

/// Decodes an MP3 file to a WAVE file of the same name.
#[derive(Parser)]
#[command(name = "mp3lite", version)]
struct Cli {
    /// Path to the input MP3 file. The output path is this path with its extension replaced
    /// with `.wav`.
    input: PathBuf,
}

fn run(input: &PathBuf) -> Result<(), String> {
    let data = std::fs::read(input).map_err(|e| format!("failed to read {}: {e}", input.display()))?;
    let mut reader = BufReader::new(&data);

    let output_path = input.with_extension("wav");
    let output_file = File::create(&output_path)
        .map_err(|e| format!("failed to create {}: {e}", output_path.display()))?;
    let mut output = BufWriter::new(output_file);

    let mut decoder = Mp3Decoder::new();
    let mut writer: Option<WaveWriter<&mut BufWriter<File>>> = None;
    let mut n_frames = 0u64;

    loop {
        let buf = match decoder.decode_next(&mut reader) {
            Ok(Some(buf)) => buf,
            Ok(None) => break,
            Err(e) => return Err(format!("decode error: {e}")),
        };

        if writer.is_none() {
            let spec = *buf.spec();
            info!("{}: {} Hz, {} channel(s)", input.display(), spec.rate, spec.n_channels());
            writer = Some(
                WaveWriter::new(&mut output, spec.n_channels() as u16, spec.rate)
                    .map_err(|e| format!("failed to write WAVE header: {e}"))?,
            );
        }

        let samples = pcm::interleave(buf);
        writer
            .as_mut()
            .expect("writer initialized above")
            .write_samples(&samples)
            .map_err(|e| format!("failed to write samples: {e}"))?;

        n_frames += 1;
    }

    match writer {
        Some(writer) => {
            writer.finish().map_err(|e| format!("failed to finalize {}: {e}", output_path.display()))?;
            info!("decoded {n_frames} frames to {}", output_path.display());
            Ok(())
        }
        None => Err(format!("{}: no decodable MPEG-1 Layer III frames found", input.display())),
    }
}

fn main() -> ExitCode {
    pretty_env_logger::init();

    let cli = Cli::parse();

    match run(&cli.input) {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            error!("{msg}");
            ExitCode::FAILURE
        }
    }
}
