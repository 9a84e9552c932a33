pub mod loader;
pub mod default_instance;
