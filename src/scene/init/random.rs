//! xorshift32 - the scene's deterministic RNG
//!
//! Seeded per scene so initial placement and spin jitter replay exactly
//! under the same seed and input sequence.

#[inline]
pub(super) fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Uniform in [0, 1)
#[inline]
pub(super) fn rand_unit(state: &mut u32) -> f32 {
    // Top 24 bits keep the value exactly representable in f32
    (xorshift32(state) >> 8) as f32 / (1u32 << 24) as f32
}

/// Uniform in [-1, 1)
#[inline]
pub(super) fn rand_symmetric(state: &mut u32) -> f32 {
    rand_unit(state) * 2.0 - 1.0
}

/// Uniform in [0, max)
#[inline]
pub(super) fn rand_range(state: &mut u32, max: f32) -> f32 {
    rand_unit(state) * max
}
