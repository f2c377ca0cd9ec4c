use super::*;

#[test]
fn resolution_rejects_zero_dimensions() {
    assert!(Resolution::new(0, 4).is_err());
    assert!(Resolution::new(4, 0).is_err());
    assert!(Resolution::new(1, 1).is_ok());
}

#[test]
fn pixel_center_uv_is_half_texel_inset() {
    let r = Resolution::new(4, 2).unwrap();
    assert_eq!(r.pixel_center_uv(0, 0), Vec2::new(0.125, 0.25));
    assert_eq!(r.pixel_center_uv(3, 1), Vec2::new(0.875, 0.75));
    assert_eq!(r.texel_size(), Vec2::new(0.25, 0.5));
}

#[test]
fn frame_index_next_saturates() {
    assert_eq!(FrameIndex(3).next(), FrameIndex(4));
    assert_eq!(FrameIndex(u64::MAX).next(), FrameIndex(u64::MAX));
    assert_eq!(FrameIndex((1u64 << 32) + 7).as_u32(), 7);
}

#[test]
fn pixel_count_rejects_hand_built_zero_resolution() {
    let r = Resolution {
        width: 5,
        height: 0,
    };
    assert!(r.pixel_count().is_err());
    assert_eq!(Resolution::new(5, 3).unwrap().pixel_count().unwrap(), 15);
}
