use super::*;

fn res() -> Resolution {
    Resolution::new(3, 2).unwrap()
}

#[test]
fn starts_zeroed_on_slot_zero() {
    let h = HistoryBuffer::new(res()).unwrap();
    assert_eq!(h.active_index(), 0);
    assert!(h.previous().color.data().iter().all(|c| *c == Vec4::ZERO));
    assert!(h.previous().depth.data().iter().all(|d| *d == 0.0));
}

#[test]
fn commit_writes_other_slot_then_flips() {
    let mut h = HistoryBuffer::new(res()).unwrap();
    let a = Texture::filled(res(), Vec4::splat(0.25)).unwrap();
    let d = Texture::filled(res(), 0.5f32).unwrap();

    h.commit(a.clone(), d.clone()).unwrap();
    assert_eq!(h.active_index(), 1);
    assert_eq!(h.previous().color, a);
    assert_eq!(h.previous().depth, d);

    // The slot about to be written still holds the older generation.
    assert!(h.write_slot().color.data().iter().all(|c| *c == Vec4::ZERO));

    let b = Texture::filled(res(), Vec4::splat(0.75)).unwrap();
    h.commit(b.clone(), d).unwrap();
    assert_eq!(h.active_index(), 0);
    assert_eq!(h.previous().color, b);
    assert_eq!(h.write_slot().color, a);
}

#[test]
fn commit_rejects_wrong_resolution() {
    let mut h = HistoryBuffer::new(res()).unwrap();
    let other = Resolution::new(2, 2).unwrap();
    let err = h
        .commit(
            Texture::filled(other, Vec4::ONE).unwrap(),
            Texture::filled(res(), 0.0f32).unwrap(),
        )
        .unwrap_err();
    assert!(err.to_string().contains("history color is 2x2"));
    assert_eq!(h.active_index(), 0);
}

#[test]
fn reset_clears_both_slots() {
    let mut h = HistoryBuffer::new(res()).unwrap();
    h.commit(
        Texture::filled(res(), Vec4::ONE).unwrap(),
        Texture::filled(res(), 1.0f32).unwrap(),
    )
    .unwrap();
    h.reset();
    assert_eq!(h.active_index(), 0);
    assert_eq!(h, HistoryBuffer::new(res()).unwrap());
}
