/// Base of a single limb. Two limbs multiply well inside an `i64` accumulator.
pub const RADIX: u32 = 10_000;

/// Decimal digits held by one limb, `RADIX == 10^LIMB_DIGITS`.
pub const LIMB_DIGITS: usize = 4;

/// Largest decimal digit count a product may have.
pub const MAX_DIGITS: usize = 30_009;

/// Magnitudes up to this value are served from the small-value cache.
pub const MAX_CONSTANT: usize = 16;
