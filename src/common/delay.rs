use std::time::Duration;

const FNV_OFFSET_BASIS: u64 = 0xcbf29ce484222325;
const FNV_PRIME: u64 = 0x100000001b3;

/// Streaming 64-bit FNV-1a.
#[derive(Debug, Clone, Copy)]
pub struct Fnv64a {
    state: u64,
}

impl Fnv64a {
    pub fn new() -> Self {
        Self { state: FNV_OFFSET_BASIS }
    }

    pub fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.state ^= byte as u64;
            self.state = self.state.wrapping_mul(FNV_PRIME);
        }
    }

    pub fn finish(&self) -> u64 {
        self.state
    }
}

pub fn fnv1a64(bytes: &[u8]) -> u64 {
    let mut h = Fnv64a::new();
    h.write(bytes);
    h.finish()
}

/// Derives a delay in `[0, max)` from the seed and an optional context.
///
/// The seed is always hashed first and the context is appended only when
/// present, so `(seed, None)` and `(seed, Some(b""))` map to the same value.
/// The hash is reduced modulo `max` in nanoseconds, which keeps the result
/// identical to any other FNV-1a based implementation working in nanoseconds.
///
/// `max` must be non-zero; a zero `max` yields `Duration::ZERO`.
pub fn delay(seed: &[u8], context: Option<&[u8]>, max: Duration) -> Duration {
    let max_nanos = u64::try_from(max.as_nanos()).unwrap_or(u64::MAX);
    if max_nanos == 0 {
        return Duration::ZERO;
    }
    let mut h = Fnv64a::new();
    h.write(seed);
    if let Some(context) = context {
        h.write(context);
    }
    Duration::from_nanos(h.finish() % max_nanos)
}
