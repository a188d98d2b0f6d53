// SPDX-FileCopyrightText: 2026 Contributors to the samplerate-rs project.
// SPDX-License-Identifier: Apache-2.0

//! Error types for sample rate conversion.
//!
//! This module defines the error values returned by conversion operations,
//! mapping libsamplerate's C-level result codes to an idiomatic Rust enum.

use std::ffi::CStr;
use std::os::raw::c_int;

/// Convenience result type using [`Error`] as the error variant.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur during sample rate conversion.
///
/// Domain violations (ratio, buffer capacity) are detected by this crate
/// before the converter runs and leave the session untouched. Converter
/// failures carry the numeric libsamplerate code together with the
/// `src_strerror` message.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The converter state could not be created (invalid channel count or
    /// buffer capacity, or the C library rejected the configuration).
    /// No partial state remains after this failure.
    #[error("could not initialize samplerate converter state")]
    Initialization,

    /// A conversion ratio outside the legal domain `[1/256, 256]`.
    ///
    /// Detected before the converter is invoked; the session state is
    /// unchanged.
    #[error("conversion ratio {ratio} is outside the [1/256, 256] range")]
    InvalidRatio {
        /// The rejected ratio.
        ratio: f64,
    },

    /// Input larger than the session's fixed input buffer.
    ///
    /// The session state is unchanged; convert in smaller chunks or
    /// construct a session with a larger buffer.
    #[error("input of {len} samples exceeds the buffer capacity of {capacity}")]
    BufferTooLarge {
        /// Number of samples supplied.
        len: usize,
        /// Input buffer capacity in samples.
        capacity: usize,
    },

    /// The converter reported a non-zero result code during a conversion
    /// step. The session may be partially advanced and is not rolled back.
    #[error("error code: {code}; {message}")]
    Process {
        /// Raw libsamplerate result code.
        code: i32,
        /// `src_strerror` text for the code.
        message: String,
    },

    /// The converter failed to reset its interpolation memory. The state
    /// should not be reused.
    #[error("could not reset samplerate converter state: {message}")]
    Reset {
        /// Raw libsamplerate result code.
        code: i32,
        /// `src_strerror` text for the code.
        message: String,
    },

    /// The converter state could not be torn down.
    #[error("could not delete samplerate converter state; it did not exist")]
    Destroy,

    /// Metadata lookup for a converter code libsamplerate does not know.
    #[error("unknown samplerate converter")]
    UnknownConverter,
}

impl Error {
    /// Wraps a non-zero `src_process`/`src_set_ratio` result code.
    pub(crate) fn process(code: c_int) -> Error {
        Error::Process {
            code,
            message: error_text(code),
        }
    }

    /// Wraps a non-zero `src_reset` result code.
    pub(crate) fn reset(code: c_int) -> Error {
        Error::Reset {
            code,
            message: error_text(code),
        }
    }
}

/// Returns libsamplerate's message for a numeric result code.
///
/// Code `0` always maps to `"No error."`. Codes the library does not know
/// are described as such rather than failing.
pub fn error_text(code: i32) -> String {
    let text = unsafe { libsamplerate_sys::src_strerror(code as c_int) };
    if text.is_null() {
        return format!("unknown error code {code}");
    }
    unsafe { CStr::from_ptr(text) }.to_string_lossy().into_owned()
}
