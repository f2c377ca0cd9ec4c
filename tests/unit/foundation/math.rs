use super::*;

#[test]
fn saturate_clamps_and_zeroes_nan() {
    assert_eq!(saturate(-0.5), 0.0);
    assert_eq!(saturate(1.5), 1.0);
    assert_eq!(saturate(0.25), 0.25);
    assert_eq!(saturate(f32::NAN), 0.0);
    assert_eq!(saturate(f32::INFINITY), 1.0);
}

#[test]
fn frac_matches_shader_semantics_for_negatives() {
    assert!((frac(-0.25) - 0.75).abs() < 1e-12);
    assert!((frac(3.5) - 0.5).abs() < 1e-12);
}

#[test]
fn unit_from_u32_stays_below_one() {
    assert_eq!(unit_from_u32(0), 0.0);
    assert!(unit_from_u32(u32::MAX) < 1.0);
}

#[test]
fn pcg_hash_is_stable() {
    assert_eq!(pcg_hash(0), pcg_hash(0));
    assert_ne!(pcg_hash(1), pcg_hash(2));
}
