// SPDX-FileCopyrightText: 2026 Contributors to the samplerate-rs project.
// SPDX-License-Identifier: Apache-2.0

//! Basic integration tests for the samplerate bindings.
//!
//! These tests exercise the public surface end to end against the real
//! converter: metadata lookups, ratio validation, the streaming session
//! lifecycle and the one-shot path.
//!
//! # Test Coverage
//!
//! - Converter name/description/version metadata
//! - Ratio domain validation
//! - Session construction, processing, reset and teardown
//! - Boundary errors (oversized input, out-of-domain ratios)
//! - One-shot conversion, including exact linear-converter output
//! - Equivalence of the one-shot and single-step streaming paths
//!
//! Exact sample expectations are asserted for the linear converter only;
//! sinc output depends on the linked library's filter tables, so those
//! tests assert shape instead of golden samples.

use samplerate::{
    ConverterType, Error, Session, converter_description, converter_name, error_text,
    is_valid_ratio, simple, version,
};

/// Ensures logging is initialized only once across all tests.
static LOG_ONCE: std::sync::Once = std::sync::Once::new();

/// Initializes logging (respects the RUST_LOG environment variable).
fn setup_test() {
    LOG_ONCE.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::builder()
                    .with_default_directive(tracing::level_filters::LevelFilter::INFO.into())
                    .from_env_lossy(),
            )
            .init();
    });
}

/// Compares interleaved sample vectors with a tolerance small enough to
/// pin the linear converter's arithmetic.
fn assert_samples_eq(actual: &[f32], expected: &[f32]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "sample count mismatch: {actual:?} vs {expected:?}"
    );
    for (index, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            (a - e).abs() <= 1e-6,
            "sample {index} differs: {a} vs {e} (actual {actual:?})"
        );
    }
}

#[test]
fn converter_names_and_descriptions() {
    setup_test();
    assert_eq!(
        ConverterType::Linear.name().unwrap(),
        "Linear Interpolator"
    );
    assert!(
        ConverterType::Linear
            .description()
            .unwrap()
            .starts_with("Linear interpolator")
    );
    assert_eq!(
        ConverterType::ZeroOrderHold.name().unwrap(),
        "ZOH Interpolator"
    );
    for converter in [
        ConverterType::SincBestQuality,
        ConverterType::SincMediumQuality,
        ConverterType::SincFastest,
    ] {
        assert!(converter.name().unwrap().contains("Sinc"));
        assert!(!converter.description().unwrap().is_empty());
    }
}

#[test]
fn unknown_converter_codes_are_rejected() {
    setup_test();
    assert!(matches!(
        converter_name(5),
        Err(Error::UnknownConverter)
    ));
    assert!(matches!(
        converter_description(5),
        Err(Error::UnknownConverter)
    ));
    assert!(matches!(
        ConverterType::from_code(5),
        Err(Error::UnknownConverter)
    ));
    assert_eq!(
        ConverterType::from_code(4).unwrap(),
        ConverterType::Linear
    );
}

#[test]
fn library_version_string() {
    setup_test();
    assert!(version().contains("libsamplerate-"));
}

#[test]
fn ratio_domain() {
    setup_test();
    assert!(is_valid_ratio(5.0));
    assert!(!is_valid_ratio(-1.0));
    assert!(!is_valid_ratio(257.0));
}

#[test]
fn session_init_reset_and_close() {
    setup_test();
    let mut session = Session::new(ConverterType::SincFastest, 2, 100).unwrap();
    assert_eq!(session.channels(), 2);
    session.reset().unwrap();
    session.close().unwrap();
}

#[test]
fn session_rejects_degenerate_configurations() {
    setup_test();
    assert!(matches!(
        Session::new(ConverterType::Linear, 0, 100),
        Err(Error::Initialization)
    ));
    assert!(matches!(
        Session::new(ConverterType::Linear, 2, 0),
        Err(Error::Initialization)
    ));
}

#[test]
fn process_linear_is_deterministic() {
    setup_test();
    let mut session = Session::new(ConverterType::Linear, 2, 100).unwrap();

    let input = vec![0.1f32, -0.5, 0.2, -0.3];
    let output = session.process(&input, 2.0, false).unwrap();

    // The first half of the output repeats the first input frame before
    // interpolation begins.
    let expected = vec![0.1f32, -0.5, 0.1, -0.5, 0.1, -0.5, 0.15, -0.4];
    assert_samples_eq(&output, &expected);

    session.close().unwrap();
}

#[test]
fn process_with_end_of_input_flushes() {
    setup_test();
    let mut session = Session::new(ConverterType::SincFastest, 2, 100).unwrap();

    let input = vec![0.1f32, -0.5, 0.2, -0.3];
    let output = session.process(&input, 2.0, true).unwrap();

    // Two frames at ratio 2.0 flush to roughly four; the exact count is the
    // library's, but the flush must produce whole stereo frames and the
    // session must report no pending error.
    assert!(!output.is_empty());
    assert_eq!(output.len() % 2, 0);
    assert!(output.len() <= 100 * 2);
    assert_eq!(session.error_no(), 0);

    session.close().unwrap();
}

#[test]
fn process_rejects_oversized_input_without_touching_the_converter() {
    setup_test();
    let mut session = Session::new(ConverterType::Linear, 1, 100).unwrap();

    let input = vec![0.0f32; 150];
    let result = session.process(&input, 1.5, true);
    assert!(matches!(
        result,
        Err(Error::BufferTooLarge { len: 150, capacity: 100 })
    ));
    assert_eq!(session.error_no(), 0);

    // The session is still usable after the rejection.
    let output = session.process(&[0.5f32; 50], 1.0, false).unwrap();
    assert!(output.len() <= 100);
    session.close().unwrap();
}

#[test]
fn process_rejects_invalid_ratio_before_the_converter_runs() {
    setup_test();
    let mut session = Session::new(ConverterType::Linear, 1, 100).unwrap();

    let input = vec![0.0f32; 100];
    let result = session.process(&input, -5.0, true);
    assert!(matches!(result, Err(Error::InvalidRatio { .. })));
    assert_eq!(session.error_no(), 0);
    session.close().unwrap();
}

#[test]
fn channel_count_is_stable_across_processing() {
    setup_test();
    let mut session = Session::new(ConverterType::Linear, 2, 100).unwrap();
    assert_eq!(session.channels(), 2);
    session.process(&[0.1f32, 0.2, 0.3, 0.4], 0.5, false).unwrap();
    assert_eq!(session.channels(), 2);
    session.close().unwrap();
}

#[test]
fn set_ratio_validates_and_applies() {
    setup_test();
    let mut session = Session::new(ConverterType::Linear, 1, 10).unwrap();
    session.set_ratio(25.0).unwrap();
    assert!(matches!(
        session.set_ratio(-5.0),
        Err(Error::InvalidRatio { .. })
    ));
    session.close().unwrap();
}

#[test]
fn simple_linear_upsampling() {
    setup_test();
    let input = vec![0.1f32, -0.5, 0.3, 0.4, 0.1];
    let expected = vec![
        0.1f32, 0.1, -0.1, -0.5, 0.033_333_343, 0.333_333_34, 0.4, 0.2,
    ];

    let output = simple(&input, 1.5, 1, ConverterType::Linear).unwrap();
    assert_samples_eq(&output, &expected);
}

#[test]
fn simple_linear_downsampling() {
    setup_test();
    let mut input = Vec::new();
    for _ in 0..10 {
        input.extend_from_slice(&[0.1f32, -0.5, 0.3, 0.4, 0.1]);
    }
    let mut expected = Vec::new();
    for _ in 0..5 {
        expected.extend_from_slice(&[0.1f32, -0.5, 0.4, 0.1, 0.3]);
    }

    let output = simple(&input, 0.5, 1, ConverterType::Linear).unwrap();
    assert_samples_eq(&output, &expected);
}

#[test]
fn simple_rejects_invalid_ratio() {
    setup_test();
    let input = vec![0.1f32, 0.9];
    let result = simple(&input, -5.3, 1, ConverterType::Linear);
    assert!(matches!(
        result,
        Err(Error::InvalidRatio { ratio }) if ratio == -5.3
    ));
}

#[test]
fn simple_rejects_zero_channels() {
    setup_test();
    let result = simple(&[0.1f32, 0.2], 1.0, 0, ConverterType::Linear);
    assert!(matches!(result, Err(Error::Initialization)));
}

#[test]
fn one_shot_matches_single_step_streaming() {
    setup_test();
    let input = vec![0.1f32, -0.5, 0.2, -0.3, 0.4, 0.0, -0.2, 0.3];

    for converter in [ConverterType::Linear, ConverterType::ZeroOrderHold] {
        let one_shot = simple(&input, 2.0, 2, converter).unwrap();

        let mut session = Session::new(converter, 2, 100).unwrap();
        let streamed = session.process(&input, 2.0, true).unwrap();
        session.close().unwrap();

        assert_samples_eq(&streamed, &one_shot);
    }
}

#[test]
fn error_reporting() {
    setup_test();
    let session = Session::new(ConverterType::SincFastest, 2, 100).unwrap();
    assert_eq!(session.error_no(), 0);
    assert_eq!(error_text(0), "No error.");
    session.close().unwrap();
}
