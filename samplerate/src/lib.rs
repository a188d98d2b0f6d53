// SPDX-FileCopyrightText: 2026 Contributors to the samplerate-rs project.
// SPDX-License-Identifier: Apache-2.0

//! # samplerate - audio sample rate conversion
//!
//! Safe, idiomatic Rust bindings for libsamplerate (Secret Rabbit Code),
//! converting interleaved multi-channel 32-bit float audio between arbitrary
//! sample rates. This crate wraps the raw C FFI ([`libsamplerate_sys`]) with
//! RAII resource management and Rust error handling.
//!
//! ## Overview
//!
//! Two usage modes are offered:
//!
//! - **One-shot** ([`simple`]): convert one complete, self-contained buffer
//!   in a single call.
//! - **Streaming** ([`Session`]): convert audio arriving in successive
//!   chunks. The session owns the converter's interpolation memory, so
//!   consecutive chunks are stitched together without discontinuities and
//!   the conversion ratio may change between calls.
//!
//! ### Key Concepts
//!
//! - **Frame**: one sample per channel, one playback instant of interleaved
//!   audio.
//! - **Ratio**: output sample rate divided by input sample rate. The legal
//!   domain is `[1/256, 256]` ([`is_valid_ratio`]); values outside it are
//!   rejected before the converter runs, never clamped.
//! - **Converter**: the resampling algorithm ([`ConverterType`]), chosen at
//!   session construction and fixed for its lifetime.
//! - **End of input**: flag on the final [`Session::process`] call, telling
//!   the converter to flush samples still held in its interpolation memory.
//!
//! ## Examples
//!
//! ### One-shot conversion
//!
//! ```
//! use samplerate::{ConverterType, simple};
//!
//! # fn main() -> Result<(), samplerate::Error> {
//! // Mono input, upsampled by a factor of two.
//! let input = vec![0.0f32, 0.25, 0.5, 0.25, 0.0];
//! let output = simple(&input, 2.0, 1, ConverterType::Linear)?;
//! assert!(output.len() > input.len());
//! # Ok(())
//! # }
//! ```
//!
//! ### Streaming conversion
//!
//! ```
//! use samplerate::{ConverterType, Session};
//!
//! # fn main() -> Result<(), samplerate::Error> {
//! // Stereo session with room for 4096 input frames per call.
//! let mut session = Session::new(ConverterType::SincFastest, 2, 4096)?;
//!
//! let chunk = vec![0.0f32; 2 * 1024];
//! let converted = session.process(&chunk, 44100.0 / 48000.0, false)?;
//! drop(converted);
//!
//! // Final chunk: flush the interpolation memory.
//! let tail = session.process(&[], 44100.0 / 48000.0, true)?;
//! drop(tail);
//! session.close()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Sample formats
//!
//! The conversion core works on interleaved `f32` frames only. The
//! [`convert`] module provides explicit 16/32-bit integer PCM conversions
//! for use before and after resampling.
//!
//! ## Thread Safety
//!
//! A [`Session`] is `Send` but not `Sync`: the underlying converter state is
//! not thread-safe, so each concurrent stream needs its own session.
//! Every operation runs to completion on the caller's thread.

mod converter;
mod engine;
mod error;
mod ratio;
mod session;
mod simple;

pub mod convert;

pub use converter::{ConverterType, converter_description, converter_name, version};
pub use error::{Error, Result, error_text};
pub use ratio::{MAX_RATIO, MIN_RATIO, is_valid_ratio};
pub use session::Session;
pub use simple::simple;
