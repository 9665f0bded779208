/// Xorshift pseudo-random generator driving the magic-number search.
///
/// The state is a single `u32`. 64-bit draws are assembled from the low
/// 16 bits of four successive 32-bit draws, which keeps candidate magic
/// numbers identical from run to run for a given seed.
pub struct PRNG {
    state: u32,
}

impl PRNG {
    /// Seed used for every generation run. Changing it changes every
    /// emitted magic constant.
    pub const DEFAULT_SEED: u32 = 1804289383;

    pub const fn new(seed: u32) -> Self {
        PRNG { state: seed }
    }

    /// Next 32-bit xorshift state.
    #[inline]
    pub const fn random_u32(&mut self) -> u32 {
        let mut num = self.state;

        num ^= num << 13;
        num ^= num >> 17;
        num ^= num << 5;

        self.state = num;
        num
    }

    /// 64 bits spliced together from four 16-bit slices.
    #[inline]
    pub const fn random_u64(&mut self) -> u64 {
        let n1 = (self.random_u32() & 0xFFFF) as u64;
        let n2 = (self.random_u32() & 0xFFFF) as u64;
        let n3 = (self.random_u32() & 0xFFFF) as u64;
        let n4 = (self.random_u32() & 0xFFFF) as u64;

        n1 | (n2 << 16) | (n3 << 32) | (n4 << 48)
    }

    /// Candidate magic numbers work best with few set bits.
    #[inline]
    pub const fn random_sparse_u64(&mut self) -> u64 {
        self.random_u64() & self.random_u64() & self.random_u64()
    }
}

impl Default for PRNG {
    fn default() -> Self {
        PRNG::new(Self::DEFAULT_SEED)
    }
}
