//! Xorshift32 random streams
//!
//! One stream drives seeding and the per-generation seed. Each cell's
//! evaluation gets its own stream derived from (generation seed, cell index),
//! so the evaluate pass gives the same grid serially or on the thread pool.

/// Fallback for a zero seed; xorshift never leaves the all-zero state.
const ZERO_SEED_REPLACEMENT: u32 = 0x9E37_79B9;

/// Xorshift32 random number generator
#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

#[derive(Debug, Clone)]
pub struct RandomSource {
    state: u32,
}

impl RandomSource {
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { ZERO_SEED_REPLACEMENT } else { seed },
        }
    }

    /// Stream for one cell within one generation.
    pub fn for_cell(generation_seed: u32, index: usize) -> Self {
        // murmur3 finalizer over the combined key
        let mut h = generation_seed ^ (index as u32).wrapping_mul(0x85EB_CA6B);
        h ^= h >> 16;
        h = h.wrapping_mul(0x7FEB_352D);
        h ^= h >> 15;
        h = h.wrapping_mul(0x846C_A68B);
        h ^= h >> 16;
        Self::new(h)
    }

    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        xorshift32(&mut self.state)
    }

    /// Uniform integer in [0, bound); 0 when `bound` is 0.
    #[inline]
    pub fn below(&mut self, bound: u32) -> u32 {
        ((self.next_u32() as u64 * bound as u64) >> 32) as u32
    }

    #[inline]
    pub fn coin(&mut self) -> bool {
        self.next_u32() & 1 == 1
    }
}
