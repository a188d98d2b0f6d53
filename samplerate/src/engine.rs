// SPDX-FileCopyrightText: 2026 Contributors to the samplerate-rs project.
// SPDX-License-Identifier: Apache-2.0

//! RAII ownership of the raw libsamplerate conversion state.
//!
//! [`EngineState`] is the only place in the crate that talks to
//! `src_new`/`src_process`/`src_delete`. It owns exactly one `SRC_STATE`,
//! the per-stream interpolation memory that gives chunked conversion its
//! continuity, and guarantees the state is released on every exit path.
//!
//! Domain checks (ratio, buffer capacity) are deliberately *not* performed
//! here: callers guard those at the public boundary before a step runs.

use std::os::raw::{c_int, c_long};

use crate::{ConverterType, Error, Result};

/// Outcome of one conversion step.
#[derive(Debug, Clone, Copy)]
pub(crate) struct StepOutcome {
    /// Frames the converter consumed from the supplied input.
    pub(crate) frames_consumed: usize,
    /// Frames the converter wrote to the output buffer.
    pub(crate) frames_generated: usize,
}

/// Exclusive owner of one `SRC_STATE`.
///
/// Created with a fixed converter and channel count, mutated in place by
/// every [`EngineState::run_step`]/[`EngineState::reset`] call and destroyed
/// on drop (or via the consuming [`EngineState::destroy`]). The pointer is
/// never shared, so a destroyed state is unreachable by construction.
///
/// libsamplerate states are not thread-safe: `EngineState` is `Send` but
/// not `Sync`.
pub(crate) struct EngineState {
    state: *mut libsamplerate_sys::SRC_STATE,
}

// Safety: the state pointer is exclusively owned and the C library attaches
// no thread affinity to it, so moving it between threads is sound. No Sync:
// concurrent calls into the same state are not.
unsafe impl Send for EngineState {}

impl EngineState {
    /// Creates a fresh conversion state for `converter` with `channels`
    /// interleaved channels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Initialization`] if `channels` is zero or the C
    /// library rejects the configuration.
    pub(crate) fn new(converter: ConverterType, channels: usize) -> Result<Self> {
        if channels == 0 {
            return Err(Error::Initialization);
        }
        let mut error_code: c_int = 0;
        let state = unsafe {
            libsamplerate_sys::src_new(converter.to_c(), channels as c_int, &mut error_code)
        };
        if state.is_null() {
            tracing::debug!(code = error_code, "src_new failed");
            return Err(Error::Initialization);
        }
        Ok(Self { state })
    }

    /// Runs one conversion step.
    ///
    /// Feeds up to `input_frames` frames from `input` and writes at most
    /// `output_frames` frames to `output`, converting at `ratio`. With
    /// `end_of_input` set the converter also flushes samples still held in
    /// its interpolation memory, so a step may generate output even for an
    /// empty input; the final block may fall short of the nominal ratio.
    ///
    /// The converter may consume fewer frames than supplied when the output
    /// buffer fills up; the caller decides what to do with the remainder.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Process`] carrying the numeric code and message of a
    /// non-zero `src_process` result.
    pub(crate) fn run_step(
        &mut self,
        input: &mut [f32],
        input_frames: usize,
        output: &mut [f32],
        output_frames: usize,
        ratio: f64,
        end_of_input: bool,
    ) -> Result<StepOutcome> {
        debug_assert!(input_frames <= input.len());
        debug_assert!(output_frames <= output.len());
        let mut data = libsamplerate_sys::SRC_DATA {
            data_in: input.as_mut_ptr(),
            data_out: output.as_mut_ptr(),
            input_frames: input_frames as c_long,
            output_frames: output_frames as c_long,
            input_frames_used: 0,
            output_frames_gen: 0,
            end_of_input: end_of_input as c_int,
            src_ratio: ratio,
        };
        let code = unsafe { libsamplerate_sys::src_process(self.state, &mut data) };
        if code != 0 {
            return Err(Error::process(code));
        }
        Ok(StepOutcome {
            frames_consumed: data.input_frames_used as usize,
            frames_generated: data.output_frames_gen as usize,
        })
    }

    /// Clears the interpolation memory, keeping the converter choice and
    /// channel configuration. Frees nothing.
    pub(crate) fn reset(&mut self) -> Result<()> {
        let code = unsafe { libsamplerate_sys::src_reset(self.state) };
        if code != 0 {
            return Err(Error::reset(code));
        }
        Ok(())
    }

    /// Applies `ratio` as a step change, bypassing the smooth transition
    /// `src_process` otherwise performs between consecutive calls.
    pub(crate) fn set_ratio(&mut self, ratio: f64) -> Result<()> {
        let code = unsafe { libsamplerate_sys::src_set_ratio(self.state, ratio) };
        if code != 0 {
            return Err(Error::process(code));
        }
        Ok(())
    }

    /// The last error code the converter recorded (`0` = no error).
    pub(crate) fn error_no(&self) -> i32 {
        (unsafe { libsamplerate_sys::src_error(self.state) }) as i32
    }

    /// Destroys the state immediately, consuming the owner.
    ///
    /// Dropping performs the same teardown; this form surfaces it at an
    /// explicit disposal point.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Destroy`] if the C library reports the state did
    /// not exist.
    pub(crate) fn destroy(mut self) -> Result<()> {
        let state = std::mem::replace(&mut self.state, std::ptr::null_mut());
        let leftover = unsafe { libsamplerate_sys::src_delete(state) };
        if leftover.is_null() { Ok(()) } else { Err(Error::Destroy) }
    }
}

impl Drop for EngineState {
    /// Releases the conversion state when the owner goes out of scope.
    fn drop(&mut self) {
        if !self.state.is_null() {
            // src_delete returns null on success; there is no caller to
            // report a failure to on this path.
            let leftover = unsafe { libsamplerate_sys::src_delete(self.state) };
            if !leftover.is_null() {
                tracing::error!("failed to delete samplerate converter state");
            }
            self.state = std::ptr::null_mut();
        }
    }
}
