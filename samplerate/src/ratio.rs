// SPDX-FileCopyrightText: 2026 Contributors to the samplerate-rs project.
// SPDX-License-Identifier: Apache-2.0

//! Conversion ratio domain checks.

/// Largest supported conversion ratio (libsamplerate's `SRC_MAX_RATIO`).
pub const MAX_RATIO: f64 = 256.0;

/// Smallest supported conversion ratio.
pub const MIN_RATIO: f64 = 1.0 / 256.0;

/// Returns `true` iff `ratio` is a valid conversion ratio.
///
/// The legal domain is `[1/256, 256]` (output rate divided by input rate).
/// Every conversion path checks this before invoking the converter; values
/// outside the domain are rejected, never clamped. `NaN` is invalid.
pub fn is_valid_ratio(ratio: f64) -> bool {
    (MIN_RATIO..=MAX_RATIO).contains(&ratio)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_the_legal_domain() {
        assert!(is_valid_ratio(5.0));
        assert!(is_valid_ratio(1.0));
        assert!(is_valid_ratio(MIN_RATIO));
        assert!(is_valid_ratio(MAX_RATIO));
    }

    #[test]
    fn rejects_out_of_domain_values() {
        assert!(!is_valid_ratio(-1.0));
        assert!(!is_valid_ratio(0.0));
        assert!(!is_valid_ratio(257.0));
        assert!(!is_valid_ratio(MIN_RATIO / 2.0));
        assert!(!is_valid_ratio(MAX_RATIO + f64::EPSILON * 512.0));
        assert!(!is_valid_ratio(f64::NAN));
    }
}
