use super::*;

fn grid() -> impl Iterator<Item = Vec3> {
    let steps = [0.0f32, 0.1, 0.25, 0.5, 0.73, 0.9, 1.0];
    steps.into_iter().flat_map(move |r| {
        steps
            .into_iter()
            .flat_map(move |g| steps.into_iter().map(move |b| Vec3::new(r, g, b)))
    })
}

#[test]
fn round_trip_is_exact_within_tolerance() {
    for rgb in grid() {
        let back = ycbcr_to_rgb(rgb_to_ycbcr(rgb));
        assert!(
            (back - rgb).abs().max_element() <= 1e-5,
            "round trip drifted for {rgb:?}: {back:?}"
        );
    }
}

#[test]
fn grays_have_zero_chroma() {
    for v in [0.0f32, 0.3, 1.0] {
        let ycc = rgb_to_ycbcr(Vec3::splat(v));
        assert!((ycc.x - v).abs() < 1e-6);
        assert!(ycc.y.abs() < 1e-6);
        assert!(ycc.z.abs() < 1e-6);
    }
}

#[test]
fn inverse_matches_published_coefficients() {
    let r = ycbcr_to_rgb(Vec3::new(0.0, 0.0, 1.0));
    assert!((r.x - 1.403).abs() < 1e-3);
    assert!((r.y + 0.714).abs() < 1e-3);
    let b = ycbcr_to_rgb(Vec3::new(0.0, 1.0, 0.0));
    assert!((b.z - 1.770).abs() < 1e-3);
    assert!((b.y + 0.344).abs() < 1e-3);
}

#[test]
fn luma_weights_sum_to_one() {
    assert!((luma(Vec3::ONE) - 1.0).abs() < 1e-6);
}
