use jam_utils::{derive_seed, seed_from_str};

#[test]
fn test_seed_from_str() {
    assert_eq!(seed_from_str("moons"), seed_from_str("moons"));
    assert_ne!(seed_from_str("moons"), seed_from_str("umbrellas"));
    assert_eq!(
        seed_from_str(""),
        *blake3::hash(b"").as_bytes()
    );
}

#[test]
fn test_derive_seed() {
    let seed = seed_from_str("moons");
    assert_eq!(derive_seed(&seed, 3), derive_seed(&seed, 3));
    assert_ne!(derive_seed(&seed, 0), derive_seed(&seed, 1));
    assert_ne!(derive_seed(&seed, 0), seed);
}
