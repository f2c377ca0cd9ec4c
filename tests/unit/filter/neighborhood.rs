use super::*;
use crate::foundation::core::{Resolution, Vec3};

fn res() -> Resolution {
    Resolution::new(5, 5).unwrap()
}

fn center_uv() -> Vec2 {
    res().pixel_center_uv(2, 2)
}

#[test]
fn flat_field_has_zero_contrast_and_tight_bounds() {
    let px = Vec4::new(0.2, 0.4, 0.6, 0.3);
    let t = Texture::filled(res(), px).unwrap();
    let nb = analyze_neighborhood(&t, center_uv(), res().texel_size());

    assert!(nb.contrast < 1e-4);
    assert!((nb.center - px).abs().max_element() < 1e-6);
    assert!((nb.max - nb.min).abs().max_element() < 1e-6);
    let ycc = rgb_to_ycbcr(px.truncate());
    assert!((nb.min.truncate() - ycc).abs().max_element() < 1e-6);
    assert!((nb.min.w - 0.3).abs() < 1e-6);
}

#[test]
fn bright_neighbour_widens_bounds_and_contrast() {
    let t = Texture::from_fn(res(), |x, y| {
        if (x, y) == (3, 2) {
            Vec4::new(1.0, 1.0, 1.0, 0.1)
        } else {
            Vec4::new(0.0, 0.0, 0.0, 0.5)
        }
    })
    .unwrap();
    let nb = analyze_neighborhood(&t, center_uv(), res().texel_size());

    assert!((nb.max.x - 1.0).abs() < 1e-5);
    assert!(nb.min.x.abs() < 1e-6);
    assert!((nb.contrast - 1.0).abs() < 1e-5);
    assert!((nb.min.w - 0.1).abs() < 1e-6);
    assert!((nb.max.w - 0.5).abs() < 1e-6);
    assert_eq!(nb.center, Vec4::new(0.0, 0.0, 0.0, 0.5));
}

#[test]
fn contrast_is_compressed_luma_spread() {
    let t = Texture::from_fn(res(), |x, _| {
        let v = if x >= 3 { 0.25 } else { 0.0 };
        Vec3::splat(v).extend(1.0)
    })
    .unwrap();
    let nb = analyze_neighborhood(&t, center_uv(), res().texel_size());
    let spread = nb.max.x - nb.min.x;
    assert!((spread - 0.25).abs() < 1e-5);
    assert!((nb.contrast - 0.25f32.powf(0.75)).abs() < 1e-4);
}

#[test]
fn stencil_has_nine_taps_with_scaled_diagonals() {
    assert_eq!(NEIGHBORHOOD_OFFSETS.len(), 9);
    assert_eq!(NEIGHBORHOOD_OFFSETS[0], Vec2::ZERO);
    for off in &NEIGHBORHOOD_OFFSETS[5..] {
        assert_eq!(off.x.abs(), DIAGONAL_SCALE);
        assert_eq!(off.y.abs(), DIAGONAL_SCALE);
    }
}
