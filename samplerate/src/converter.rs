// SPDX-FileCopyrightText: 2026 Contributors to the samplerate-rs project.
// SPDX-License-Identifier: Apache-2.0

//! Converter variants and library metadata.
//!
//! libsamplerate ships five converters, a small fixed set identified by C
//! integer codes. [`ConverterType`] models that set as an enum; the
//! name/description lookups answer straight from the C library so the
//! strings always match the linked version.

use std::ffi::CStr;
use std::os::raw::c_int;

use crate::{Error, Result};

/// The resampling algorithm used by a conversion.
///
/// Chosen when a [`crate::Session`] is constructed (or per [`crate::simple`]
/// call) and fixed for the lifetime of the session. The discriminants are
/// libsamplerate's converter codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConverterType {
    /// Band-limited sinc interpolation, best quality.
    SincBestQuality = 0,
    /// Band-limited sinc interpolation, medium quality.
    SincMediumQuality = 1,
    /// Band-limited sinc interpolation, fastest of the sinc converters.
    SincFastest = 2,
    /// Zero order hold interpolator, very fast, poor quality.
    ZeroOrderHold = 3,
    /// Linear interpolator, very fast, poor quality.
    Linear = 4,
}

impl ConverterType {
    /// Returns the variant for a raw libsamplerate converter code.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownConverter`] for codes outside `0..=4`.
    pub fn from_code(code: i32) -> Result<Self> {
        match code {
            0 => Ok(ConverterType::SincBestQuality),
            1 => Ok(ConverterType::SincMediumQuality),
            2 => Ok(ConverterType::SincFastest),
            3 => Ok(ConverterType::ZeroOrderHold),
            4 => Ok(ConverterType::Linear),
            _ => Err(Error::UnknownConverter),
        }
    }

    /// The converter's name, e.g. `"Linear Interpolator"`.
    pub fn name(self) -> Result<String> {
        converter_name(self as i32)
    }

    /// The converter's one-line description.
    pub fn description(self) -> Result<String> {
        converter_description(self as i32)
    }

    pub(crate) fn to_c(self) -> c_int {
        self as c_int
    }
}

/// Returns the name of the converter with the given raw code.
///
/// # Errors
///
/// Returns [`Error::UnknownConverter`] if libsamplerate does not recognize
/// the code.
pub fn converter_name(code: i32) -> Result<String> {
    let name = unsafe { libsamplerate_sys::src_get_name(code as c_int) };
    if name.is_null() {
        return Err(Error::UnknownConverter);
    }
    Ok(unsafe { CStr::from_ptr(name) }.to_string_lossy().into_owned())
}

/// Returns the description of the converter with the given raw code.
///
/// # Errors
///
/// Returns [`Error::UnknownConverter`] if libsamplerate does not recognize
/// the code.
pub fn converter_description(code: i32) -> Result<String> {
    let description = unsafe { libsamplerate_sys::src_get_description(code as c_int) };
    if description.is_null() {
        return Err(Error::UnknownConverter);
    }
    Ok(unsafe { CStr::from_ptr(description) }
        .to_string_lossy()
        .into_owned())
}

/// Returns the version string of the linked libsamplerate,
/// e.g. `"libsamplerate-0.1.9 (c) 2002-2008 Erik de Castro Lopo"`.
pub fn version() -> String {
    let version = unsafe { libsamplerate_sys::src_get_version() };
    // src_get_version returns a static string, never null.
    unsafe { CStr::from_ptr(version) }
        .to_string_lossy()
        .into_owned()
}
