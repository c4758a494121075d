pub mod config;
pub mod precision;

pub use config::ModuleConfig;
pub use precision::Precision;
