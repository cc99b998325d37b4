/// Derives a 32 byte instance seed from any string, e.g. a CLI argument.
pub fn seed_from_str(input: &str) -> [u8; 32] {
    blake3::hash(input.as_bytes()).into()
}

/// Seed for the `index`-th instance generated from `seed`.
pub fn derive_seed(seed: &[u8; 32], index: u64) -> [u8; 32] {
    let mut hasher = blake3::Hasher::new();
    hasher.update(seed);
    hasher.update(&index.to_le_bytes());
    hasher.finalize().into()
}
