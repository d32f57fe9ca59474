pub mod model;

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

pub use model::{ApiConfig, TlsSettings};

/// Default location of the API config file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "rpc_api.conf";

/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
pub const CONFIG_PATH_ENV: &str = "CALC_API_CONF";

/// Placeholder accepted for `SSL_KEY` / `SSL_CRT` meaning "not configured".
pub const PATH_PLACEHOLDER: &str = "none";

/// Config file to load: `CALC_API_CONF` when set, else the default path.
pub fn config_path() -> PathBuf {
    resolve_config_path(env::var_os(CONFIG_PATH_ENV))
}

fn resolve_config_path(overridden: Option<OsString>) -> PathBuf {
    overridden
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}
