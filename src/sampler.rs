use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Master seed every render derives its streams from unless overridden on
/// the command line.
pub const DEFAULT_SEED: u64 = 1234;

/// A uniform [0, 1) sample stream owned by exactly one worker. Streams for
/// different work items are derived from one master seed, so a render is
/// reproducible bit-for-bit for any worker count, and no stream is ever
/// shared or reached through ambient state: the estimator receives the
/// stream as an explicit `&mut` argument.
pub struct Sampler {
    rng: StdRng,
}

impl Sampler {
    /// Derives the stream for work item `index` (here: a pixel row) from the
    /// master seed, decorrelating neighboring indices with a SplitMix64
    /// step before seeding the generator.
    pub fn derived(master_seed: u64, index: u64) -> Sampler {
        let seed = split_mix64(master_seed ^ index.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Sampler {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn uniform(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    pub fn uniform2(&mut self) -> (f64, f64) {
        (self.uniform(), self.uniform())
    }
}

fn split_mix64(x: u64) -> u64 {
    let mut z = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
