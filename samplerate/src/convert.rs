// SPDX-FileCopyrightText: 2026 Contributors to the samplerate-rs project.
// SPDX-License-Identifier: Apache-2.0

//! Interleaved sample format conversion helpers.
//!
//! The conversion core operates on 32-bit float frames only. These helpers
//! bring 16- and 32-bit integer PCM to and from that representation before
//! and after resampling, using libsamplerate's own array conversions so
//! scaling, rounding and saturation match the C library exactly.

use std::os::raw::c_int;

/// Converts 16-bit PCM samples to floats in `[-1.0, 1.0)`.
pub fn short_to_float(input: &[i16]) -> Vec<f32> {
    let mut output = vec![0.0f32; input.len()];
    unsafe {
        libsamplerate_sys::src_short_to_float_array(
            input.as_ptr(),
            output.as_mut_ptr(),
            input.len() as c_int,
        );
    }
    output
}

/// Converts floats to 16-bit PCM, saturating outside `[-1.0, 1.0]`.
pub fn float_to_short(input: &[f32]) -> Vec<i16> {
    let mut output = vec![0i16; input.len()];
    unsafe {
        libsamplerate_sys::src_float_to_short_array(
            input.as_ptr(),
            output.as_mut_ptr(),
            input.len() as c_int,
        );
    }
    output
}

/// Converts 32-bit PCM samples to floats in `[-1.0, 1.0)`.
pub fn int_to_float(input: &[i32]) -> Vec<f32> {
    let mut output = vec![0.0f32; input.len()];
    unsafe {
        libsamplerate_sys::src_int_to_float_array(
            input.as_ptr(),
            output.as_mut_ptr(),
            input.len() as c_int,
        );
    }
    output
}

/// Converts floats to 32-bit PCM, saturating outside `[-1.0, 1.0]`.
pub fn float_to_int(input: &[f32]) -> Vec<i32> {
    let mut output = vec![0i32; input.len()];
    unsafe {
        libsamplerate_sys::src_float_to_int_array(
            input.as_ptr(),
            output.as_mut_ptr(),
            input.len() as c_int,
        );
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_round_trip_is_lossless() {
        let samples: Vec<i16> = vec![i16::MIN, -1234, 0, 1234, i16::MAX];
        let floats = short_to_float(&samples);
        assert_eq!(float_to_short(&floats), samples);
    }

    #[test]
    fn float_to_short_saturates_at_the_rails() {
        let clipped = float_to_short(&[2.0, -2.0]);
        assert_eq!(clipped, vec![i16::MAX, i16::MIN]);
    }

    #[test]
    fn int_round_trip_is_lossless() {
        let samples: Vec<i32> = vec![i32::MIN, -123_456, 0, 123_456, i32::MAX];
        let floats = int_to_float(&samples);
        assert_eq!(float_to_int(&floats), samples);
    }
}
