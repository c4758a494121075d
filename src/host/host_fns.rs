use mlua::Lua;

use crate::arith;
use crate::error::PowerError;
use crate::model::precision::Precision;

/// A numeric function exposed to Lua under a fixed global name.
#[derive(Debug, Clone, Copy)]
pub struct HostFunction {
    pub name: &'static str,
    single: fn(f32) -> f32,
    native: fn(f64) -> f64,
}

impl HostFunction {
    pub fn call(&self, x: f64, precision: Precision) -> f64 {
        precision.eval(x, self.single, self.native)
    }
}

static HOST_FUNCTIONS: [HostFunction; 2] = [
    HostFunction {
        name: "square",
        single: arith::square::<f32>,
        native: arith::square::<f64>,
    },
    HostFunction {
        name: "cube",
        single: arith::cube::<f32>,
        native: arith::cube::<f64>,
    },
];

/// Registry binding every [`HostFunction`] into a Lua state's globals.
#[derive(Debug, Default, Clone, Copy)]
pub struct HostFunctions {
    precision: Precision,
}

impl HostFunctions {
    pub fn new(precision: Precision) -> Self {
        Self { precision }
    }

    pub fn names() -> impl Iterator<Item = &'static str> {
        HOST_FUNCTIONS.iter().map(|function| function.name)
    }

    /// Look up a descriptor by its Lua global name.
    pub fn get(name: &str) -> Option<&'static HostFunction> {
        HOST_FUNCTIONS.iter().find(|function| function.name == name)
    }

    /// Bind each function as a global, replacing any existing value of that name.
    pub fn register_all(&self, lua: &Lua) -> Result<(), PowerError> {
        let globals = lua.globals();

        for function in HOST_FUNCTIONS.iter().copied() {
            let precision = self.precision;
            let callable = lua
                .create_function(move |_, x: f64| {
                    let result = function.call(x, precision);
                    tracing::trace!(name = function.name, x, result, "host call");
                    Ok(result)
                })
                .map_err(|source| PowerError::Register {
                    name: function.name,
                    source,
                })?;

            globals
                .set(function.name, callable)
                .map_err(|source| PowerError::Register {
                    name: function.name,
                    source,
                })?;

            tracing::debug!(
                name = function.name,
                precision = precision.label(),
                "registered host function"
            );
        }

        Ok(())
    }
}
