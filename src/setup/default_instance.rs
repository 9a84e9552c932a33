use crate::common::config::load_replay_config;
use crate::injector::injector_impl::InjectorImpl;
use crate::setup::loader::load_injector_or_nop;
use crate::traits::injector::Injector;
use anyhow::{anyhow, Result};
use std::sync::OnceLock;

static DEFAULT_INJECTOR: OnceLock<InjectorImpl> = OnceLock::new();

/// Resolves the configuration from the environment and publishes the
/// resulting injector. Only the first call does any work.
pub fn init_from_env() -> &'static InjectorImpl {
    DEFAULT_INJECTOR.get_or_init(|| load_injector_or_nop(load_replay_config()))
}

/// Publishes an injector built by the caller.
pub fn install(injector: InjectorImpl) -> Result<()> {
    DEFAULT_INJECTOR
        .set(injector)
        .map_err(|_| anyhow!("default injector is already initialized"))
}

pub fn default_injector() -> Option<&'static InjectorImpl> {
    DEFAULT_INJECTOR.get()
}

/// Injects a delay through the default injector.
///
/// Before the default injector is published this only logs a warning.
pub fn inject(context: Option<&[u8]>) {
    match DEFAULT_INJECTOR.get() {
        Some(injector) => injector.inject(context),
        None => log::warn!("Replayer called before initialization"),
    }
}

pub async fn inject_async(context: Option<&[u8]>) {
    match DEFAULT_INJECTOR.get() {
        Some(injector) => injector.inject_async(context).await,
        None => log::warn!("Replayer called before initialization"),
    }
}
