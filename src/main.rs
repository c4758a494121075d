use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use mlua::{Lua, MultiValue, Table, Value};

fn main() -> Result<()> {
    // Log to stderr; stdout belongs to the script.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter("power=info")
        .init();

    let script = std::env::args_os().nth(1).map(PathBuf::from);
    let (chunk_name, source) = match &script {
        Some(path) => {
            let source = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            (format!("@{}", path.display()), source)
        }
        None => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("failed to read script from stdin")?;
            ("=stdin".to_string(), source)
        }
    };

    tracing::info!("running {chunk_name}");
    let lua = Lua::new();
    run_script(&lua, &source, &chunk_name)
}

fn run_script(lua: &Lua, source: &str, chunk_name: &str) -> Result<()> {
    install_preload(lua).map_err(lua_error)?;
    lua.load(source)
        .set_name(chunk_name)
        .exec()
        .map_err(lua_error)
}

/// Make `require "power"` resolve to the statically linked module.
fn install_preload(lua: &Lua) -> mlua::Result<()> {
    let package: Table = lua.globals().get("package")?;
    let preload: Table = package.get("preload")?;
    let loader = lua.create_function(|lua, _: MultiValue| {
        power::open(lua)?;
        Ok(Value::Nil)
    })?;
    preload.set("power", loader)
}

// mlua errors are not `Send + Sync` without mlua's `send` feature, which module builds cannot use.
fn lua_error(err: mlua::Error) -> anyhow::Error {
    anyhow!("{err}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_requires_module_and_calls_globals() {
        let lua = Lua::new();
        run_script(
            &lua,
            r#"
            assert(require "power" == true)
            result = square(-2) + cube(-2)
            "#,
            "=test",
        )
        .unwrap();

        let result: f64 = lua.globals().get("result").unwrap();
        assert_eq!(result, -4.0);
    }

    #[test]
    fn script_errors_become_anyhow_errors() {
        let lua = Lua::new();
        let err = run_script(&lua, "error('boom')", "=test").unwrap_err();
        assert!(err.to_string().contains("boom"));
    }
}
