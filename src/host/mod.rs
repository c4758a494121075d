pub mod host_fns;
pub mod logging;

pub use host_fns::{HostFunction, HostFunctions};
