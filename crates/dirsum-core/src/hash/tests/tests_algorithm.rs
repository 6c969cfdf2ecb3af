//! Tests for algorithm naming and digest widths

use rstest::rstest;

use crate::hash::Algorithm;

#[rstest]
#[case(Algorithm::Md5, "md5")]
#[case(Algorithm::Sha256, "sha256")]
fn test_display_uses_command_line_name(#[case] alg: Algorithm, #[case] expected: &str) {
    assert_eq!(alg.name(), expected);
    assert_eq!(alg.to_string(), expected);
}

#[rstest]
#[case(Algorithm::Md5, 32)]
#[case(Algorithm::Sha256, 64)]
fn test_hex_len(#[case] alg: Algorithm, #[case] expected: usize) {
    assert_eq!(alg.hex_len(), expected);
}
