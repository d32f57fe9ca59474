use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use thiserror::Error;

use super::PATH_PLACEHOLDER;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: expected `name=value`, got `{content}`")]
    Malformed { line: usize, content: String },

    #[error("line {line}: apiport `{value}` is not a valid port")]
    InvalidPort { line: usize, value: String },

    #[error("missing required parameter `{0}`")]
    Missing(&'static str),

    #[error("SSL enabled but no key or cert specified")]
    TlsPathsMissing,
}

/// Key and certificate used when TLS is terminated by the service itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlsSettings {
    pub key_path: PathBuf,
    pub cert_path: PathBuf,
}

/// Immutable API configuration, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    pub tls: Option<TlsSettings>,
}

/// Values as they appear in the file; nothing is defaulted here.
#[derive(Debug, Default)]
struct RawConfig {
    host: Option<String>,
    port: Option<u16>,
    ssl: Option<bool>,
    ssl_key: Option<String>,
    ssl_crt: Option<String>,
}

impl RawConfig {
    fn parse(content: &str) -> Result<Self, ConfigError> {
        let mut raw = RawConfig::default();

        for (idx, line) in content.lines().enumerate() {
            let line_no = idx + 1;
            let line = match line.find('#') {
                Some(pos) => &line[..pos],
                None => line,
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let (name, value) = line.split_once('=').ok_or_else(|| ConfigError::Malformed {
                line: line_no,
                content: line.to_string(),
            })?;
            let (name, value) = (name.trim(), value.trim());

            match name {
                "apiport" => {
                    let port = value.parse().map_err(|_| ConfigError::InvalidPort {
                        line: line_no,
                        value: value.to_string(),
                    })?;
                    raw.port = Some(port);
                }
                "apihost" => raw.host = Some(value.to_string()),
                "SSL" => raw.ssl = Some(value.eq_ignore_ascii_case("YES")),
                "SSL_KEY" => raw.ssl_key = Some(value.to_string()),
                "SSL_CRT" => raw.ssl_crt = Some(value.to_string()),
                other => debug!("ignoring unknown config parameter `{other}`"),
            }
        }

        Ok(raw)
    }
}

impl ApiConfig {
    /// Parse the `key=value` config format and validate it.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let raw = RawConfig::parse(content)?;

        let tls = match raw.ssl {
            None => return Err(ConfigError::Missing("SSL")),
            Some(false) => None,
            Some(true) => {
                let key = raw.ssl_key.ok_or(ConfigError::Missing("SSL_KEY"))?;
                let crt = raw.ssl_crt.ok_or(ConfigError::Missing("SSL_CRT"))?;
                if key == PATH_PLACEHOLDER || crt == PATH_PLACEHOLDER {
                    return Err(ConfigError::TlsPathsMissing);
                }
                Some(TlsSettings {
                    key_path: PathBuf::from(key),
                    cert_path: PathBuf::from(crt),
                })
            }
        };

        Ok(Self {
            host: raw.host.ok_or(ConfigError::Missing("apihost"))?,
            port: raw.port.ok_or(ConfigError::Missing("apiport"))?,
            tls,
        })
    }

    /// Read and validate the config file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let conf = Self::parse(&content)?;
        info!(
            "loaded {} (host={} port={} tls={})",
            path.display(),
            conf.host,
            conf.port,
            conf.tls.is_some()
        );
        Ok(conf)
    }

    pub fn scheme(&self) -> &'static str {
        if self.tls.is_some() { "https" } else { "http" }
    }
}
