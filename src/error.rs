use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that can occur while loading the module into a Lua state.
#[derive(Debug, Error)]
pub enum PowerError {
    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {origin}: {source}")]
    ConfigParse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid log filter {filter:?}: {source}")]
    LogFilter {
        filter: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("failed to create log directory {}: {source}", path.display())]
    LogDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot determine a log directory")]
    NoLogDir,

    #[error("failed to register `{name}`: {source}")]
    Register {
        name: &'static str,
        #[source]
        source: mlua::Error,
    },

    #[error(transparent)]
    Lua(#[from] mlua::Error),
}

impl From<PowerError> for mlua::Error {
    fn from(err: PowerError) -> Self {
        match err {
            PowerError::Lua(err) => err,
            other => mlua::Error::external(other),
        }
    }
}
