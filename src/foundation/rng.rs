use rand::SeedableRng;
use rand::rngs::StdRng;

/// Random source shared by every effect instance of a session.
pub type FrameRng = StdRng;

/// Seeded when `seed` is set, otherwise drawn from the OS.
pub(crate) fn frame_rng(seed: Option<u64>) -> FrameRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
