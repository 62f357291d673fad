use rand::Rng;

/// Source of the presentation-only figures (load, queue position, score steps).
/// Injected so tests can pin the values.
pub trait RandomSource: Send + Sync {
    /// Uniform integer in `low..=high`.
    fn between(&self, low: i64, high: i64) -> i64;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn between(&self, low: i64, high: i64) -> i64 {
        if low >= high {
            return low;
        }
        rand::thread_rng().gen_range(low..=high)
    }
}
