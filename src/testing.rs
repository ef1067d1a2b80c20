/// Test-only source of randomness.
///
/// Does a bit of a song and dance to ensure that the seed is different for
/// each call site, but is otherwise deterministic so that failures reproduce.
#[track_caller]
pub(crate) fn test_rng() -> rand_xorshift::XorShiftRng {
    use std::hash::{Hash, Hasher};
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    std::panic::Location::caller().hash(&mut hasher);
    let hc64 = hasher.finish();
    let seed_vec = hc64.to_le_bytes().into_iter().chain(0u8..8).collect::<Vec<u8>>();
    let seed: [u8; 16] = seed_vec.as_slice().try_into().unwrap();
    rand::SeedableRng::from_seed(seed)
}
