use super::*;
use crate::foundation::core::Resolution;

fn res() -> Resolution {
    Resolution::new(8, 8).unwrap()
}

fn step(alpha: f32) -> Texture<Vec4> {
    Texture::from_fn(res(), |x, _| {
        let v = if x < 4 { 0.2 } else { 0.6 };
        Vec3::splat(v).extend(alpha)
    })
    .unwrap()
}

#[test]
fn flat_field_is_unchanged() {
    let t = Texture::filled(res(), Vec4::new(0.3, 0.5, 0.7, 1.0)).unwrap();
    let out = sharpen(&t, None).unwrap();
    for px in out.data() {
        assert!((*px - Vec3::new(0.3, 0.5, 0.7)).abs().max_element() < 1e-5);
    }
}

#[test]
fn zero_alpha_is_identity() {
    let t = step(0.0);
    let out = sharpen(&t, None).unwrap();
    for (a, b) in out.data().iter().zip(t.data()) {
        assert!((*a - b.truncate()).abs().max_element() < 1e-6);
    }
}

#[test]
fn full_alpha_steepens_edges() {
    let out = sharpen(&step(1.0), None).unwrap();
    let dark = out.load(3, 4);
    let bright = out.load(4, 4);
    assert!(dark.x < 0.19, "{dark:?}");
    assert!(bright.x > 0.61, "{bright:?}");
    // Far from the edge nothing moves.
    assert!((out.load(0, 4).x - 0.2).abs() < 1e-5);
}

#[test]
fn output_stays_in_unit_range() {
    let t = Texture::from_fn(res(), |x, y| {
        let v = if (x + y) % 2 == 0 { 1.0 } else { 0.0 };
        Vec4::new(v, 1.0 - v, v, 1.0)
    })
    .unwrap();
    let out = sharpen(&t, None).unwrap();
    for px in out.data() {
        assert!(px.cmpge(Vec3::ZERO).all() && px.cmple(Vec3::ONE).all());
    }
}

#[test]
fn cross_weight_vanishes_at_extremes() {
    assert_eq!(cross_weight(Vec3::ZERO, Vec3::ZERO), Vec3::ZERO);
    assert_eq!(cross_weight(Vec3::ZERO, Vec3::ONE), Vec3::ZERO);
    let w = cross_weight(Vec3::splat(0.5), Vec3::splat(0.5));
    let expected = -1.0 / (8.0 - 3.0 * SHARPEN_CONTRAST);
    assert!((w.x - expected).abs() < 1e-6);
}

#[test]
fn pooled_and_sequential_agree() {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(3)
        .build()
        .unwrap();
    let t = step(0.7);
    assert_eq!(sharpen(&t, None).unwrap(), sharpen(&t, Some(&pool)).unwrap());
}
