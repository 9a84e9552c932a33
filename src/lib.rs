#![allow(clippy::async_fn_in_trait)]
pub mod common;
pub mod injector;
pub mod setup;
pub mod traits;

pub use common::config::ReplayConfig;
pub use injector::{
    active_injector::ActiveInjector,
    injector_impl::InjectorImpl,
    nop_injector::NopInjector,
};
pub use setup::default_instance::{default_injector, init_from_env, inject, inject_async, install};
pub use traits::injector::{Injector, UnsendInjector};
