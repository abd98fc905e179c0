//! Coefficient Layout Tests
//!
//! Run with: cargo test --features std --test coefficient_tests

use biquad_iir::dsp::coefficients::CoefficientSet;
use biquad_iir::error::ConfigError;
use biquad_iir::types::Coefficient;
use fixed::types::I17F15;

// =============================================================================
// Raw Table Tests
// =============================================================================

#[test]
fn test_raw_row_roundtrip_keeps_reserved_word() {
    let row = [1_234, -5_678, 910, 0x5A5A, -1_112, 1_314];
    let set = CoefficientSet::from_raw(row);
    assert_eq!(set.to_raw(), row);
}

#[test]
fn test_raw_row_field_positions() {
    let set = CoefficientSet::from([1, 2, 3, 4, 5, 6]);
    assert_eq!(set.a0().to_bits(), 1);
    assert_eq!(set.a1_half().to_bits(), 2);
    assert_eq!(set.a2().to_bits(), 3);
    assert_eq!(set.b1_half().to_bits(), 5);
    assert_eq!(set.b2().to_bits(), 6);
}

#[test]
fn test_reserved_word_is_carried_but_not_a_tap() {
    let a = CoefficientSet::from_raw([1, 2, 3, 0, 5, 6]);
    let b = CoefficientSet::from_raw([1, 2, 3, 99, 5, 6]);
    assert_eq!(a.a0(), b.a0());
    assert_eq!(a.b2(), b.b2());
    // The reserved word is carried, so the sets themselves differ
    assert_ne!(a, b);
}

// =============================================================================
// Constant Tests
// =============================================================================

#[test]
fn test_zero_set() {
    assert!(CoefficientSet::ZERO.is_zero());
    assert_eq!(CoefficientSet::default(), CoefficientSet::ZERO);
    assert_eq!(CoefficientSet::ZERO.to_raw(), [0; 6]);
}

#[test]
fn test_zero_ignores_reserved_word() {
    assert!(CoefficientSet::from_raw([0, 0, 0, 7, 0, 0]).is_zero());
    assert!(!CoefficientSet::from_raw([0, 0, 0, 0, 1, 0]).is_zero());
}

#[test]
fn test_invert_is_negative_one() {
    assert_eq!(CoefficientSet::INVERT.a0(), Coefficient::from_num(-1));
    assert_eq!(CoefficientSet::INVERT.a2(), Coefficient::ZERO);
}

// =============================================================================
// Halved Tap Tests
// =============================================================================

#[test]
fn test_from_f32_halves_first_taps() {
    let set = CoefficientSet::from_f32(0.5, 1.5, 0.0, -1.2, 0.25).unwrap();
    assert_eq!(set.to_raw(), [16_384, 24_576, 0, 0, -19_661, 8_192]);
}

#[test]
fn test_full_taps_are_reconstructed() {
    let set = CoefficientSet::from_f32(0.5, 1.5, 0.0, -1.2, 0.25).unwrap();
    assert_eq!(set.a1(), I17F15::from_num(1.5));
    assert_eq!(set.b1().to_bits(), -39_322);
}

#[test]
fn test_full_tap_range_reaches_minus_two() {
    let set = CoefficientSet::from_f32(0.0, -2.0, 0.0, -2.0, 0.0).unwrap();
    assert_eq!(set.a1(), I17F15::from_num(-2));
    assert_eq!(set.b1(), I17F15::from_num(-2));
}

#[test]
fn test_new_takes_halved_values_verbatim() {
    let half = Coefficient::from_num(0.75);
    let zero = Coefficient::ZERO;
    let set = CoefficientSet::new(zero, half, zero, half, zero);
    assert_eq!(set.a1_half(), half);
    assert_eq!(set.a1(), I17F15::from_num(1.5));
}

// =============================================================================
// Range Check Tests
// =============================================================================

#[test]
fn test_from_f32_rejects_unity_gain() {
    assert_eq!(
        CoefficientSet::from_f32(1.0, 0.0, 0.0, 0.0, 0.0),
        Err(ConfigError::CoefficientOutOfRange)
    );
}

#[test]
fn test_from_f32_clamps_near_unity_gain() {
    let set = CoefficientSet::from_f32(0.999_99, 0.0, 0.0, 0.0, 0.0).unwrap();
    assert_eq!(set.a0(), Coefficient::MAX);
    assert_eq!(set.a0().to_bits(), 0x7FFF);
}

#[test]
fn test_from_f32_clamps_near_full_tap_of_two() {
    let set = CoefficientSet::from_f32(0.5, 1.999_99, 0.0, 1.999_99, 0.0).unwrap();
    assert_eq!(set.a1_half().to_bits(), 0x7FFF);
    assert_eq!(set.b1_half().to_bits(), 0x7FFF);
}

#[test]
fn test_from_f32_rejects_full_tap_of_two() {
    assert_eq!(
        CoefficientSet::from_f32(0.0, 2.0, 0.0, 0.0, 0.0),
        Err(ConfigError::CoefficientOutOfRange)
    );
    assert_eq!(
        CoefficientSet::from_f32(0.0, 0.0, 0.0, 2.5, 0.0),
        Err(ConfigError::CoefficientOutOfRange)
    );
}

#[test]
fn test_from_f32_rejects_out_of_range_second_taps() {
    assert!(CoefficientSet::from_f32(0.0, 0.0, -1.5, 0.0, 0.0).is_err());
    assert!(CoefficientSet::from_f32(0.0, 0.0, 0.0, 0.0, 1.0).is_err());
}

#[test]
fn test_from_f32_rejects_non_finite() {
    assert!(CoefficientSet::from_f32(f32::NAN, 0.0, 0.0, 0.0, 0.0).is_err());
    assert!(CoefficientSet::from_f32(0.0, f32::INFINITY, 0.0, 0.0, 0.0).is_err());
}
