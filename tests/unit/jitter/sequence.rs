use super::*;

fn res() -> Resolution {
    Resolution::new(64, 32).unwrap()
}

#[test]
fn every_pattern_is_deterministic() {
    for p in JitterPattern::ALL {
        let a = Jitter::new(p, 1.0, res());
        let b = Jitter::new(p, 1.0, res());
        for (x, y, f) in [(0u32, 0u32, 0u64), (3, 7, 11), (63, 31, 4095), (17, 2, 1 << 40)] {
            assert_eq!(
                a.offset(x, y, FrameIndex(f)),
                b.offset(x, y, FrameIndex(f)),
                "{p} not deterministic"
            );
            assert_eq!(a.offset(x, y, FrameIndex(f)), a.offset(x, y, FrameIndex(f)));
        }
    }
}

#[test]
fn grid_is_always_zero() {
    let j = Jitter::new(JitterPattern::Grid, 1.0, res());
    for f in 0..16 {
        assert_eq!(j.offset(5, 9, FrameIndex(f)), Vec2::ZERO);
    }
}

#[test]
fn sobol_repeats_every_1024_frames() {
    let j = Jitter::new(JitterPattern::Sobol, 1.0, res());
    for (x, y) in [(0u32, 0u32), (1, 2), (40, 13)] {
        for f in [0u64, 1, 77, 1023, 5000] {
            assert_eq!(
                j.offset(x, y, FrameIndex(f)),
                j.offset(x, y, FrameIndex(f + SOBOL_PERIOD))
            );
        }
    }
}

#[test]
fn sobol_values_vary_within_a_period() {
    let j = Jitter::new(JitterPattern::Sobol, 1.0, res());
    let offs = j.offsets(3, 4, FrameIndex(0), 16);
    let distinct = offs
        .iter()
        .filter(|o| (**o - offs[0]).length() > 1e-6)
        .count();
    assert!(distinct >= 8);
    for o in j.offsets(3, 4, FrameIndex(0), 64) {
        let raw = o / res().texel_size();
        assert!((0.0..1.0).contains(&raw.x));
        assert!((raw.x + raw.y - 1.0).abs() < 1e-5);
    }
}

#[test]
fn halton_of_zero_is_zero() {
    for base in [2u32, 3, 5, 7] {
        assert_eq!(halton(0, base), 0.0);
    }
}

#[test]
fn halton_is_bounded_to_unit_interval() {
    for base in [2u32, 3] {
        for i in (0u32..5000).chain([u32::MAX, u32::MAX - 1, 1 << 31]) {
            let h = halton(i, base);
            assert!((0.0..1.0).contains(&h), "halton({i}, {base}) = {h}");
        }
    }
}

#[test]
fn halton_matches_known_prefix() {
    assert_eq!(halton(1, 2), 0.5);
    assert_eq!(halton(2, 2), 0.25);
    assert_eq!(halton(3, 2), 0.75);
    assert!((halton(1, 3) - 1.0 / 3.0).abs() < 1e-6);
    assert!((halton(2, 3) - 2.0 / 3.0).abs() < 1e-6);
    assert!((halton(3, 3) - 1.0 / 9.0).abs() < 1e-6);
}

#[test]
fn halton_stops_after_eight_digits() {
    // 2^8 has a ninth binary digit set and nothing below it.
    assert_eq!(halton(1 << 8, 2), 0.0);
    assert_eq!(halton((1 << 8) + 1, 2), 0.5);
}

#[test]
fn random_pairs_sum_to_one() {
    let j = Jitter::new(JitterPattern::Random, 1.0, res());
    for f in 0..32 {
        let raw = j.raw(11, 6, FrameIndex(f));
        assert!((0.0..1.0).contains(&raw.x));
        assert!((raw.x + raw.y - 1.0).abs() < 1e-6);
    }
}

#[test]
fn poisson_samples_stay_on_the_disk_table_radius() {
    let j = Jitter::new(JitterPattern::PoissonDisk, 1.0, res());
    let max_r = POISSON_DISK_32
        .iter()
        .map(|[x, y]| Vec2::new(*x, *y).length())
        .fold(0.0f32, f32::max);
    for f in 0..64 {
        let raw = j.raw(f as u32 % 7, 3, FrameIndex(f));
        assert!(raw.length() <= max_r + 1e-5);
    }
}

#[test]
fn poisson_rotation_preserves_sample_length() {
    let j = Jitter::new(JitterPattern::PoissonDisk, 1.0, res());
    let raw = j.raw(9, 4, FrameIndex(12));
    let matches_table = POISSON_DISK_32
        .iter()
        .any(|[x, y]| (Vec2::new(*x, *y).length() - raw.length()).abs() < 1e-4);
    assert!(matches_table);
}

#[test]
fn offsets_scale_with_strength_and_texel_size() {
    let full = Jitter::new(JitterPattern::Halton, 1.0, res());
    let half = Jitter::new(JitterPattern::Halton, 0.5, res());
    let f = FrameIndex(5);
    let raw = full.raw(2, 1, f);
    assert_eq!(full.offset(2, 1, f), raw * res().texel_size());
    assert_eq!(half.offset(2, 1, f), raw * res().texel_size() * 0.5);
    let off = Jitter::new(JitterPattern::Halton, 0.0, res());
    assert_eq!(off.offset(2, 1, f), Vec2::ZERO);
}
