//! Per-trial RNG stream derivation.
//!
//! Every trial draws from its own `ChaCha8Rng`, seeded by an HMAC-SHA256
//! digest over the user seed and a (herb, patch, trial) domain tag. Streams
//! are therefore independent by construction: trials never share mutable
//! RNG state, and a batch can be split across workers without coordination.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::data::Herb;
use crate::patches::PatchLocation;

/// Derive the seed for one trial's RNG stream.
#[must_use]
pub fn derive_trial_seed(user_seed: u64, herb: Herb, patch: PatchLocation, trial: u32) -> u64 {
    let mut mac = Hmac::<Sha256>::new_from_slice(&user_seed.to_le_bytes())
        .expect("64-bit seed is valid key");
    mac.update(herb.key().as_bytes());
    mac.update(b"/");
    mac.update(patch.key().as_bytes());
    mac.update(&trial.to_le_bytes());
    let digest = mac.finalize().into_bytes();
    let seed_bytes: [u8; 8] = digest[..8].try_into().expect("digest slice length");
    u64::from_le_bytes(seed_bytes)
}
