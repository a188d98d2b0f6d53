// SPDX-FileCopyrightText: 2026 Contributors to the samplerate-rs project.
// SPDX-License-Identifier: Apache-2.0

//! One-shot conversion of a complete buffer, libsamplerate's "simple API".

use crate::engine::EngineState;
use crate::{ConverterType, Error, Result, is_valid_ratio};

/// Extra output frames beyond `input frames x ceil(ratio)`, absorbing the
/// end-of-input flush overshoot on very small inputs.
const OUTPUT_MARGIN_FRAMES: usize = 32;

/// Converts one complete block of interleaved samples in a single call.
///
/// The input is treated as a self-contained unit: a transient converter
/// state is created, run once with the end-of-input flag set (flushing all
/// produced output within this call) and destroyed again. Nothing persists
/// between calls, so `simple` must not be used for audio arriving in
/// chunks - that is what [`crate::Session`] is for.
///
/// The output buffer is sized at `input frames x ceil(ratio) x channels`
/// plus a fixed safety margin, and the result is trimmed to exactly the
/// frames the converter generated. A trailing partial frame in `input` is
/// ignored.
///
/// # Errors
///
/// - [`Error::InvalidRatio`] if `ratio` is outside `[1/256, 256]`; checked
///   before any allocation or converter work.
/// - [`Error::Initialization`] if `channels` is zero or the converter state
///   cannot be created.
/// - [`Error::Process`] if the converter reports a failure.
///
/// # Examples
///
/// ```
/// use samplerate::{ConverterType, simple};
///
/// # fn main() -> Result<(), samplerate::Error> {
/// let input = vec![0.1f32, -0.5, 0.3, 0.4, 0.1];
/// let output = simple(&input, 1.5, 1, ConverterType::Linear)?;
/// assert_eq!(output.len(), 8);
/// # Ok(())
/// # }
/// ```
pub fn simple(
    input: &[f32],
    ratio: f64,
    channels: usize,
    converter: ConverterType,
) -> Result<Vec<f32>> {
    if !is_valid_ratio(ratio) {
        return Err(Error::InvalidRatio { ratio });
    }
    if channels == 0 {
        return Err(Error::Initialization);
    }

    let input_frames = input.len() / channels;
    let output_frames = input_frames * (ratio.ceil() as usize) + OUTPUT_MARGIN_FRAMES;

    let mut input_buffer = input.to_vec();
    let mut output_buffer = vec![0.0f32; output_frames * channels];

    // The state is dropped on the error path as well, so a failing step
    // never leaks the converter.
    let mut engine = EngineState::new(converter, channels)?;
    let outcome = engine.run_step(
        &mut input_buffer,
        input_frames,
        &mut output_buffer,
        output_frames,
        ratio,
        true,
    )?;
    engine.destroy()?;

    output_buffer.truncate(outcome.frames_generated * channels);
    Ok(output_buffer)
}
