//! Where the API lives.

use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_BASE_PATH: &str = "/";
pub const DEFAULT_SCHEMES: &[&str] = &["https"];

pub const HOST_ENV: &str = "KUBERMATIC_HOST";
pub const BASE_PATH_ENV: &str = "KUBERMATIC_BASE_PATH";
pub const SCHEMES_ENV: &str = "KUBERMATIC_SCHEMES";

/// Host, base path and schemes of an API installation.
///
/// ## Examples
///
/// ```rust
/// use kubermatic_runtime::TransportConfig;
///
/// let config = TransportConfig::default()
///     .with_host("kkp.example.com")
///     .with_schemes(["https"]);
/// assert_eq!(config.base_path(), "/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    host: String,
    base_path: String,
    schemes: Vec<String>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            base_path: DEFAULT_BASE_PATH.to_string(),
            schemes: DEFAULT_SCHEMES.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

impl TransportConfig {
    /// Defaults overridden by `KUBERMATIC_HOST`, `KUBERMATIC_BASE_PATH` and
    /// `KUBERMATIC_SCHEMES` (comma separated).
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(host) = lookup(HOST_ENV).filter(|v| !v.trim().is_empty()) {
            config = config.with_host(host.trim());
        }
        if let Some(base_path) = lookup(BASE_PATH_ENV).filter(|v| !v.trim().is_empty()) {
            config = config.with_base_path(base_path.trim());
        }
        if let Some(schemes) = lookup(SCHEMES_ENV) {
            let schemes: Vec<String> = schemes
                .split(',')
                .map(|s| s.trim().to_ascii_lowercase())
                .filter(|s| !s.is_empty())
                .collect();
            if !schemes.is_empty() {
                config = config.with_schemes(schemes);
            }
        }
        config
    }

    /// Splits `scheme://host[:port][/base]` into a configuration.
    pub fn from_url(raw: &str) -> Result<Self, ConfigError> {
        let url = Url::parse(raw)?;
        let host = url
            .host_str()
            .ok_or_else(|| ConfigError::missing_field("host"))?;
        let host = match url.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        };
        Ok(Self::default()
            .with_host(host)
            .with_base_path(url.path())
            .with_schemes([url.scheme()]))
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Sets the base path, adding the leading slash when missing.
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        let base_path = base_path.into();
        self.base_path = if base_path.starts_with('/') {
            base_path
        } else {
            format!("/{base_path}")
        };
        self
    }

    pub fn with_schemes<I, S>(mut self, schemes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.schemes = schemes.into_iter().map(Into::into).collect();
        self
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn schemes(&self) -> &[String] {
        &self.schemes
    }

    /// Picks the scheme for an operation.
    ///
    /// Configured schemes win over the ones the operation declares, so a
    /// transport pointed at a plain `http` endpoint keeps working. Within
    /// either list `https` is preferred.
    pub fn pick_scheme<'a>(&'a self, offered: &[&'a str]) -> Option<&'a str> {
        let configured: Vec<&str> = self.schemes.iter().map(String::as_str).collect();
        prefer_https(&configured).or_else(|| prefer_https(offered))
    }

    /// `scheme://host/base/`, always ending in a slash so paths append cleanly.
    pub fn base_url(&self, scheme: &str) -> Result<Url, ConfigError> {
        if self.host.is_empty() {
            return Err(ConfigError::missing_field("host"));
        }
        let base_path = self.base_path.trim_end_matches('/');
        Ok(Url::parse(&format!("{scheme}://{}{base_path}/", self.host))?)
    }
}

fn prefer_https<'a>(schemes: &[&'a str]) -> Option<&'a str> {
    schemes
        .iter()
        .find(|scheme| **scheme == "https")
        .or_else(|| schemes.first())
        .copied()
}
