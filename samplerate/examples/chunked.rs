// SPDX-FileCopyrightText: 2026 Contributors to the samplerate-rs project.
// SPDX-License-Identifier: Apache-2.0

//! Chunked streaming conversion example.
//!
//! Synthesises a sine tone at the input rate and converts it chunk by chunk
//! through a [`samplerate::Session`], demonstrating continuity across chunk
//! boundaries and the end-of-input flush.
//!
//! ```sh
//! cargo run --example chunked -- --input-rate 48000 --output-rate 44100
//! ```

use clap::Parser;
use samplerate::{ConverterType, Session};
use tracing::info;

#[derive(Parser)]
#[command(about = "Convert a synthesised tone between sample rates, chunk by chunk")]
struct Args {
    /// Input sample rate in Hz.
    #[arg(long, default_value_t = 48_000)]
    input_rate: u32,

    /// Output sample rate in Hz.
    #[arg(long, default_value_t = 44_100)]
    output_rate: u32,

    /// Tone frequency in Hz.
    #[arg(long, default_value_t = 440.0)]
    frequency: f32,

    /// Frames per chunk fed to the session.
    #[arg(long, default_value_t = 1024)]
    chunk_frames: usize,

    /// Total input frames to synthesise.
    #[arg(long, default_value_t = 48_000)]
    total_frames: usize,
}

/// Initializes the tracing subscriber, respecting `RUST_LOG`.
fn setup_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing::level_filters::LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();
}

fn main() -> Result<(), samplerate::Error> {
    setup_logging();
    let args = Args::parse();

    let ratio = f64::from(args.output_rate) / f64::from(args.input_rate);
    let channels = 2;
    let mut session = Session::new(ConverterType::SincFastest, channels, args.chunk_frames)?;
    info!(
        ratio,
        converter = ?ConverterType::SincFastest,
        "converting {} Hz -> {} Hz",
        args.input_rate,
        args.output_rate
    );

    let step = args.frequency * 2.0 * std::f32::consts::PI / args.input_rate as f32;
    let mut chunk = Vec::with_capacity(args.chunk_frames * channels);
    let mut produced_frames = 0usize;
    let mut consumed_frames = 0usize;

    while consumed_frames < args.total_frames {
        let frames = args.chunk_frames.min(args.total_frames - consumed_frames);
        chunk.clear();
        for frame in 0..frames {
            let sample = (step * (consumed_frames + frame) as f32).sin() * 0.5;
            // Same tone on both channels.
            chunk.push(sample);
            chunk.push(sample);
        }
        consumed_frames += frames;

        let last = consumed_frames >= args.total_frames;
        let output = session.process(&chunk, ratio, last)?;
        produced_frames += output.len() / channels;
    }

    info!(
        input_frames = consumed_frames,
        output_frames = produced_frames,
        "conversion finished"
    );
    session.close()
}
