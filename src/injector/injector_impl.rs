use crate::injector::active_injector::ActiveInjector;
use crate::injector::nop_injector::NopInjector;
use crate::traits::injector::Injector;
use anyhow::Result;
use std::time::Duration;

#[derive(Debug)]
pub enum InjectorImpl {
    Active(ActiveInjector),
    Nop(NopInjector),
}

impl InjectorImpl {
    pub fn is_active(&self) -> bool {
        matches!(self, InjectorImpl::Active(_))
    }
}

impl Default for InjectorImpl {
    fn default() -> Self {
        InjectorImpl::Nop(NopInjector)
    }
}

impl From<ActiveInjector> for InjectorImpl {
    fn from(injector: ActiveInjector) -> Self {
        InjectorImpl::Active(injector)
    }
}

impl From<NopInjector> for InjectorImpl {
    fn from(injector: NopInjector) -> Self {
        InjectorImpl::Nop(injector)
    }
}

impl Injector for InjectorImpl {
    fn init(&mut self) -> Result<()> {
        match self {
            InjectorImpl::Active(a) => a.init(),
            InjectorImpl::Nop(n) => n.init(),
        }
    }

    fn delay_for(&self, context: Option<&[u8]>) -> Duration {
        match self {
            InjectorImpl::Active(a) => a.delay_for(context),
            InjectorImpl::Nop(n) => n.delay_for(context),
        }
    }

    fn inject(&self, context: Option<&[u8]>) {
        match self {
            InjectorImpl::Active(a) => a.inject(context),
            InjectorImpl::Nop(n) => n.inject(context),
        }
    }

    async fn inject_async(&self, context: Option<&[u8]>) {
        match self {
            InjectorImpl::Active(a) => a.inject_async(context).await,
            InjectorImpl::Nop(n) => n.inject_async(context).await,
        }
    }
}
