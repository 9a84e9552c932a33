use crate::common::config::ReplayConfig;
use crate::common::delay::{delay, fnv1a64};
use crate::traits::injector::Injector;
use anyhow::{bail, Result};
use parking_lot::Mutex;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

/// Injector that sleeps for a seed-derived duration on every call.
///
/// The zero-bias decisions come from a PRNG seeded with the FNV-1a hash of
/// the seed, so they form a reproducible stream as long as calls are
/// consumed in the same order.
#[derive(Debug)]
pub struct ActiveInjector {
    config: ReplayConfig,
    random: Mutex<ChaCha8Rng>,
}

impl ActiveInjector {
    pub fn new(config: ReplayConfig) -> Result<Self> {
        config.validate()?;
        let random = Mutex::new(ChaCha8Rng::seed_from_u64(fnv1a64(&config.seed)));
        Ok(Self { config, random })
    }

    pub fn config(&self) -> &ReplayConfig {
        &self.config
    }

    fn forced_zero(&self) -> bool {
        if self.config.zero_bias == 0.0 {
            return false;
        }
        let sample: f64 = self.random.lock().random();
        sample < self.config.zero_bias
    }

    fn trace(&self, t: Duration, context: Option<&[u8]>) {
        if self.config.debug {
            log::info!(
                "t={:?} (seed={}, context={})",
                t,
                String::from_utf8_lossy(&self.config.seed),
                context.map(String::from_utf8_lossy).unwrap_or_default()
            );
        }
    }
}

impl Injector for ActiveInjector {
    /// Restarts the zero-bias stream from the beginning.
    fn init(&mut self) -> Result<()> {
        if self.config.seed.is_empty() {
            bail!("cannot initialize an active injector without a seed");
        }
        *self.random.get_mut() = ChaCha8Rng::seed_from_u64(fnv1a64(&self.config.seed));
        Ok(())
    }

    fn delay_for(&self, context: Option<&[u8]>) -> Duration {
        if self.forced_zero() {
            return Duration::ZERO;
        }
        delay(&self.config.seed, context, self.config.max)
    }

    fn inject(&self, context: Option<&[u8]>) {
        let t = self.delay_for(context);
        self.trace(t, context);
        if !t.is_zero() {
            std::thread::sleep(t);
        }
    }

    async fn inject_async(&self, context: Option<&[u8]>) {
        let t = self.delay_for(context);
        self.trace(t, context);
        if !t.is_zero() {
            tokio::time::sleep(t).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn injector(zero_bias: f64) -> ActiveInjector {
        let config = ReplayConfig::new("seed", Duration::from_millis(10))
            .with_zero_bias(zero_bias)
            .with_debug(true);
        ActiveInjector::new(config).unwrap()
    }

    #[test]
    fn test_new_keeps_config() {
        let gr = injector(0.25);
        assert_eq!(gr.config().seed, b"seed".to_vec());
        assert_eq!(gr.config().max, Duration::from_millis(10));
        assert_eq!(gr.config().zero_bias, 0.25);
        assert!(gr.config().debug);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        assert!(ActiveInjector::new(ReplayConfig::new("", Duration::from_millis(10))).is_err());
        assert!(ActiveInjector::new(ReplayConfig::new("seed", Duration::ZERO)).is_err());
        let config = ReplayConfig::new("seed", Duration::from_millis(10)).with_zero_bias(1.01);
        assert!(ActiveInjector::new(config).is_err());
    }

    #[test]
    fn test_fixed_seed_and_no_context_is_stable() {
        let gr = injector(0.0);
        let duration = gr.delay_for(None);
        for _ in 0..100 {
            assert_eq!(gr.delay_for(None), duration, "Unstable output");
        }
    }

    #[test]
    fn test_fixed_seed_and_variable_context() {
        let gr = injector(0.0);
        let duration = gr.delay_for(None);
        let matched = (0..100)
            .filter(|i| gr.delay_for(Some(format!("i={}", i).as_bytes())) == duration)
            .count();
        assert_eq!(matched, 0, "matched should be zero");
    }

    #[test]
    fn test_init_restarts_bias_stream() {
        let mut gr = injector(0.5);
        let contexts: Vec<String> = (0..200).map(|i| format!("i={}", i)).collect();
        let first: Vec<Duration> = contexts.iter().map(|c| gr.delay_for(Some(c.as_bytes()))).collect();
        gr.init().unwrap();
        let second: Vec<Duration> = contexts.iter().map(|c| gr.delay_for(Some(c.as_bytes()))).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_same_seed_gives_same_bias_stream() {
        let a = injector(0.5);
        let b = injector(0.5);
        for i in 0..500 {
            let ctx = format!("i={}", i);
            assert_eq!(a.delay_for(Some(ctx.as_bytes())), b.delay_for(Some(ctx.as_bytes())));
        }
    }

    #[test]
    fn test_full_bias_never_sleeps() {
        let gr = injector(1.0);
        let start = Instant::now();
        for i in 0..1000 {
            let ctx = format!("i={}", i);
            assert_eq!(gr.delay_for(Some(ctx.as_bytes())), Duration::ZERO);
            gr.inject(Some(ctx.as_bytes()));
        }
        assert!(start.elapsed() < Duration::from_millis(500));
    }

    #[test]
    fn test_inject_sleeps_for_computed_delay() {
        let gr = injector(0.0);
        let expected = gr.delay_for(Some(b"sleep"));
        let start = Instant::now();
        gr.inject(Some(b"sleep"));
        assert!(start.elapsed() >= expected);
    }
}
