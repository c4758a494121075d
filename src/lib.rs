//! Lua native module exposing `square` and `cube` as globals.
//!
//! Built with the `module` feature this crate exports `luaopen_power`, so
//! `require "power"` binds both functions into `_G` and evaluates to `true`.

pub mod arith;
pub mod error;
pub mod host;
pub mod model;

use std::path::Path;

use mlua::Lua;

pub use error::PowerError;
pub use host::{HostFunction, HostFunctions};
pub use model::{ModuleConfig, Precision};

/// Load the layered config, set up logging once per process, then register.
pub fn open(lua: &Lua) -> Result<(), PowerError> {
    let user_path = model::config::user_config_path().filter(|path| path.is_file());
    open_from(lua, user_path.as_deref())
}

/// Same as [`open`], with the user config file given explicitly.
pub fn open_from(lua: &Lua, user_config: Option<&Path>) -> Result<(), PowerError> {
    let config = ModuleConfig::load_from(user_config)?;
    host::logging::init(&config.log)?;
    open_with(lua, &config)
}

/// Register the host functions using an explicit config.
pub fn open_with(lua: &Lua, config: &ModuleConfig) -> Result<(), PowerError> {
    HostFunctions::new(config.precision()).register_all(lua)?;
    tracing::info!(
        precision = config.precision().label(),
        "power loaded: {}",
        HostFunctions::names().collect::<Vec<_>>().join(", ")
    );
    Ok(())
}

#[cfg(feature = "module")]
#[mlua::lua_module]
fn power(lua: &Lua) -> mlua::Result<mlua::Value> {
    open(lua)?;
    Ok(mlua::Value::Nil)
}
