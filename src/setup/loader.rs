use crate::common::config::ReplayConfig;
use crate::injector::{
    active_injector::ActiveInjector,
    injector_impl::InjectorImpl,
    nop_injector::NopInjector,
};
use crate::traits::injector::Injector;
use anyhow::Result;

/// Builds the injector matching `config`, falling back to a no-op injector
/// whenever injection is disabled or cannot be set up.
pub fn load_injector(config: &ReplayConfig) -> InjectorImpl {
    if !config.is_enabled() {
        if config.debug {
            log::info!("GRSEED is not set. Disabling replay.");
        } else {
            log::debug!("GRSEED is not set. Disabling replay.");
        }
        return InjectorImpl::Nop(NopInjector);
    }
    match load_active_injector(config) {
        Ok(injector) => {
            log::debug!(
                "Using active injector (max={:?}, zbias={})",
                config.max,
                config.zero_bias
            );
            injector
        }
        Err(e) => {
            log::warn!("Error while initializing: {:#}", e);
            InjectorImpl::Nop(NopInjector)
        }
    }
}

fn load_active_injector(config: &ReplayConfig) -> Result<InjectorImpl> {
    let mut injector = InjectorImpl::Active(ActiveInjector::new(config.clone())?);
    injector.init()?;
    Ok(injector)
}

/// Same as [`load_injector`], for a configuration that may have failed to resolve.
pub fn load_injector_or_nop(config: Result<ReplayConfig>) -> InjectorImpl {
    match config {
        Ok(config) => load_injector(&config),
        Err(e) => {
            log::warn!("{:#}. Disabling replay.", e);
            InjectorImpl::Nop(NopInjector)
        }
    }
}
