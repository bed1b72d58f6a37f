use std::fmt;

use url::Url;

use crate::error::RemoteError;

/// Base address of the remote service. All routes are resolved against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoint {
    base: Url,
}

impl ApiEndpoint {
    /// Environment variable that overrides the configured address. Read by
    /// the client's endpoint resolution.
    pub const ENV_VAR: &'static str = "DIASCREEN_API_URL";

    /// Parse a base address. A bare `host:port` is taken as plain HTTP.
    pub fn parse(raw: &str) -> Result<Self, RemoteError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(RemoteError::Endpoint("address is empty".to_string()));
        }

        let with_scheme = if trimmed.contains("://") {
            trimmed.to_string()
        } else {
            format!("http://{trimmed}")
        };

        let mut base = Url::parse(&with_scheme)
            .map_err(|e| RemoteError::Endpoint(format!("{trimmed}: {e}")))?;

        if !matches!(base.scheme(), "http" | "https") {
            return Err(RemoteError::Endpoint(format!(
                "{trimmed}: unsupported scheme '{}'",
                base.scheme()
            )));
        }
        if base.host_str().is_none() {
            return Err(RemoteError::Endpoint(format!("{trimmed}: missing host")));
        }

        // Url::join replaces the last path segment unless the base ends in '/'.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        Ok(Self { base })
    }

    pub fn url(&self, route: &str) -> Result<Url, RemoteError> {
        self.base
            .join(route.trim_start_matches('/'))
            .map_err(|e| RemoteError::Endpoint(format!("{route}: {e}")))
    }

    pub fn as_str(&self) -> &str {
        self.base.as_str()
    }
}

impl fmt::Display for ApiEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.base.as_str())
    }
}
