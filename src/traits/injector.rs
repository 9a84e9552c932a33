use std::time::Duration;
use anyhow::Result;

/// Capability shared by every injector variant.
///
/// `inject` blocks the calling thread; `inject_async` suspends the calling
/// task instead. Both take the same decision as `delay_for`.
#[trait_variant::make(Injector: Send)]
pub trait UnsendInjector {
    fn init(&mut self) -> Result<()>;
    fn delay_for(&self, context: Option<&[u8]>) -> Duration;
    fn inject(&self, context: Option<&[u8]>);
    async fn inject_async(&self, context: Option<&[u8]>);
}
