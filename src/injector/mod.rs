pub mod active_injector;
pub mod nop_injector;
pub mod injector_impl;
