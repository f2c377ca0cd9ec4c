use super::*;

#[test]
fn parses_names_and_aliases() {
    assert_eq!("grid".parse::<JitterPattern>().unwrap(), JitterPattern::Grid);
    assert_eq!(" OFF ".parse::<JitterPattern>().unwrap(), JitterPattern::Grid);
    assert_eq!("white".parse::<JitterPattern>().unwrap(), JitterPattern::Random);
    assert_eq!("Halton".parse::<JitterPattern>().unwrap(), JitterPattern::Halton);
    assert_eq!(
        "poisson".parse::<JitterPattern>().unwrap(),
        JitterPattern::PoissonDisk
    );
    assert_eq!("sobol".parse::<JitterPattern>().unwrap(), JitterPattern::Sobol);
}

#[test]
fn rejects_unknown_and_empty() {
    assert!("bayer".parse::<JitterPattern>().is_err());
    assert!("  ".parse::<JitterPattern>().is_err());
}

#[test]
fn default_is_sobol() {
    assert_eq!(JitterPattern::default(), JitterPattern::Sobol);
}

#[test]
fn serde_uses_snake_case_and_accepts_aliases() {
    let s = serde_json::to_string(&JitterPattern::PoissonDisk).unwrap();
    assert_eq!(s, "\"poisson_disk\"");
    let p: JitterPattern = serde_json::from_str("\"poisson\"").unwrap();
    assert_eq!(p, JitterPattern::PoissonDisk);
    let g: JitterPattern = serde_json::from_str("\"none\"").unwrap();
    assert_eq!(g, JitterPattern::Grid);
}

#[test]
fn names_round_trip_through_from_str() {
    for p in JitterPattern::ALL {
        assert_eq!(p.name().parse::<JitterPattern>().unwrap(), p);
        assert_eq!(p.to_string(), p.name());
    }
}
