// SPDX-FileCopyrightText: 2026 Contributors to the samplerate-rs project.
// SPDX-License-Identifier: Apache-2.0

//! Streaming conversion session, libsamplerate's "full API".

use crate::engine::EngineState;
use crate::{ConverterType, Error, Result, is_valid_ratio};

/// A stateful sample rate conversion stream.
///
/// A session owns one converter state plus fixed-capacity input and output
/// buffers. The interpolation memory lives in the converter state, not in
/// the individual [`Session::process`] call, so successive chunks of a
/// continuous signal convert into a continuous result and the ratio may
/// vary between calls without audible steps.
///
/// Buffers are allocated once at construction and never grow or shrink;
/// input larger than the capacity is rejected, not split. The session is
/// `Send` but not `Sync` - one logical owner at a time, one session per
/// concurrent stream.
///
/// # Examples
///
/// ```
/// use samplerate::{ConverterType, Session};
///
/// # fn main() -> Result<(), samplerate::Error> {
/// let mut session = Session::new(ConverterType::Linear, 2, 100)?;
/// let input = vec![0.1f32, -0.5, 0.2, -0.3];
/// let output = session.process(&input, 2.0, false)?;
/// assert_eq!(output.len() % session.channels(), 0);
/// session.close()?;
/// # Ok(())
/// # }
/// ```
pub struct Session {
    engine: EngineState,
    channels: usize,
    input_buffer: Vec<f32>,
    output_buffer: Vec<f32>,
}

impl Session {
    /// Creates a session for `converter` over `channels` interleaved
    /// channels, with room for `buffer_frames` frames of input (and output)
    /// per call.
    ///
    /// The conversion ratio starts at `1.0` until the first
    /// [`Session::process`] call supplies one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Initialization`] if `channels` or `buffer_frames`
    /// is zero, or if the C library rejects the configuration. No partial
    /// state remains on failure.
    pub fn new(converter: ConverterType, channels: usize, buffer_frames: usize) -> Result<Self> {
        if channels == 0 || buffer_frames == 0 {
            return Err(Error::Initialization);
        }
        let engine = EngineState::new(converter, channels)?;
        Ok(Self {
            engine,
            channels,
            input_buffer: vec![0.0; buffer_frames * channels],
            output_buffer: vec![0.0; buffer_frames * channels],
        })
    }

    /// Converts one chunk of interleaved samples at `ratio`.
    ///
    /// The input is copied into the session's buffer, so the caller's slice
    /// may be reused immediately. The returned samples are a fresh
    /// allocation of exactly the frames the converter generated; the
    /// internal buffers are never handed out.
    ///
    /// `end_of_input` marks the final chunk: the converter flushes samples
    /// still held in its interpolation memory, possibly emitting a short
    /// last block below the nominal ratio. A flushed session must be
    /// [`Session::reset`] before it is fed again.
    ///
    /// The converter may consume fewer input frames than supplied (for
    /// instance when the output buffer fills at a high ratio); the
    /// unconsumed remainder is discarded, matching the converter's own
    /// contract that each call presents new input.
    ///
    /// # Errors
    ///
    /// - [`Error::BufferTooLarge`] if `input` exceeds the buffer capacity;
    ///   the session state is untouched.
    /// - [`Error::InvalidRatio`] if `ratio` is outside `[1/256, 256]`;
    ///   checked before the converter runs, the session state is untouched.
    /// - [`Error::Process`] if the converter reports a failure; the session
    ///   may be partially advanced and is not rolled back.
    pub fn process(&mut self, input: &[f32], ratio: f64, end_of_input: bool) -> Result<Vec<f32>> {
        if input.len() > self.input_buffer.len() {
            return Err(Error::BufferTooLarge {
                len: input.len(),
                capacity: self.input_buffer.len(),
            });
        }
        self.input_buffer[..input.len()].copy_from_slice(input);

        if !is_valid_ratio(ratio) {
            return Err(Error::InvalidRatio { ratio });
        }

        let input_frames = input.len() / self.channels;
        let output_frames = self.output_buffer.len() / self.channels;
        let outcome = self.engine.run_step(
            &mut self.input_buffer,
            input_frames,
            &mut self.output_buffer,
            output_frames,
            ratio,
            end_of_input,
        )?;

        if outcome.frames_consumed < input_frames {
            tracing::debug!(
                supplied = input_frames,
                consumed = outcome.frames_consumed,
                "conversion step left input frames unconsumed, discarding the remainder"
            );
        }

        Ok(self.output_buffer[..outcome.frames_generated * self.channels].to_vec())
    }

    /// Clears the converter's interpolation memory.
    ///
    /// The converter choice, channel count and buffer capacity are
    /// unchanged and nothing is reallocated. Required between an
    /// end-of-input flush and further [`Session::process`] calls.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Reset`] with the converter's message if the C
    /// library reports a failure; the state should not be reused then.
    pub fn reset(&mut self) -> Result<()> {
        self.engine.reset()
    }

    /// Applies `ratio` as an immediate step change.
    ///
    /// [`Session::process`] normally transitions smoothly between the ratio
    /// of consecutive calls; this bypasses the smoothing for the next call.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRatio`] for a ratio outside `[1/256, 256]`
    /// (checked before the converter is touched), or [`Error::Process`] if
    /// the C library rejects it.
    pub fn set_ratio(&mut self, ratio: f64) -> Result<()> {
        if !is_valid_ratio(ratio) {
            return Err(Error::InvalidRatio { ratio });
        }
        self.engine.set_ratio(ratio)
    }

    /// The channel count fixed at construction.
    ///
    /// Answers from the session's own record; the converter state is not
    /// queried.
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// The converter's last recorded error code (`0` = no error).
    ///
    /// See [`crate::error_text`] for the matching message.
    pub fn error_no(&self) -> i32 {
        self.engine.error_no()
    }

    /// Destroys the converter state and releases the buffers.
    ///
    /// Dropping the session performs the same teardown; `close` makes the
    /// disposal point explicit and surfaces teardown failures. Because it
    /// consumes the session, use after disposal is a compile error rather
    /// than a runtime one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Destroy`] if the C library reports the state did
    /// not exist.
    pub fn close(self) -> Result<()> {
        self.engine.destroy()
    }
}
