use crate::traits::injector::Injector;
use anyhow::Result;
use std::time::Duration;

/// Injector that does nothing. Used whenever no seed is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NopInjector;

impl NopInjector {
    pub fn new() -> Self {
        Self
    }
}

impl Injector for NopInjector {
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    fn delay_for(&self, _context: Option<&[u8]>) -> Duration {
        Duration::ZERO
    }

    fn inject(&self, _context: Option<&[u8]>) {}

    async fn inject_async(&self, _context: Option<&[u8]>) {}
}
