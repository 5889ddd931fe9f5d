// Emby server connection settings

use crate::errors::ClientError;
use std::env;

/// Connection settings for an Emby server
///
/// The host is normalized on construction: a missing trailing slash is
/// appended and a missing scheme defaults to `http://` (Emby servers on
/// a LAN usually run plain HTTP).
#[derive(Debug, Clone)]
pub struct EmbyConfig {
    host: String,
    api_key: Option<String>,
}

impl EmbyConfig {
    /// Build from explicit values
    ///
    /// An empty or whitespace host is an error; a missing API key is
    /// allowed and simply disables token auth.
    pub fn new(host: &str, api_key: Option<&str>) -> Result<Self, ClientError> {
        if host.trim().is_empty() {
            return Err(ClientError::MissingHost);
        }
        Ok(Self {
            host: normalize_host(host),
            api_key: api_key
                .map(str::to_string)
                .filter(|key| !key.is_empty()),
        })
    }

    /// Build from explicit values, falling back to the `EMBY_HOST` and
    /// `EMBY_API_KEY` environment variables for anything not given
    pub fn from_env_or(host: Option<&str>, api_key: Option<&str>) -> Result<Self, ClientError> {
        let host = match host {
            Some(host) => host.to_string(),
            None => env::var("EMBY_HOST").map_err(|_| ClientError::MissingHost)?,
        };
        let api_key = api_key
            .map(str::to_string)
            .or_else(|| env::var("EMBY_API_KEY").ok());
        Self::new(&host, api_key.as_deref())
    }

    /// Normalized base URL, always scheme-prefixed and slash-terminated
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Token for the `X-Emby-Token` header, when configured
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }
}

fn normalize_host(host: &str) -> String {
    let mut host = host.to_string();
    if !host.ends_with('/') {
        host.push('/');
    }
    if !host.starts_with("http") {
        host = format!("http://{}", host);
    }
    host
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_gains_trailing_slash() {
        let config = EmbyConfig::new("http://emby.local:8096", None).unwrap();
        assert_eq!(config.host(), "http://emby.local:8096/");
    }

    #[test]
    fn test_host_gains_scheme() {
        let config = EmbyConfig::new("emby.local:8096/", None).unwrap();
        assert_eq!(config.host(), "http://emby.local:8096/");
    }

    #[test]
    fn test_https_host_kept() {
        let config = EmbyConfig::new("https://emby.local/", Some("k")).unwrap();
        assert_eq!(config.host(), "https://emby.local/");
        assert_eq!(config.api_key(), Some("k"));
    }

    #[test]
    fn test_already_normalized_host_unchanged() {
        let config = EmbyConfig::new("http://10.0.0.2:8096/", None).unwrap();
        assert_eq!(config.host(), "http://10.0.0.2:8096/");
    }

    #[test]
    fn test_empty_host_is_an_error() {
        assert!(matches!(
            EmbyConfig::new("", None),
            Err(ClientError::MissingHost)
        ));
        assert!(matches!(
            EmbyConfig::new("   ", None),
            Err(ClientError::MissingHost)
        ));
    }

    #[test]
    fn test_empty_api_key_treated_as_absent() {
        let config = EmbyConfig::new("emby.local", Some("")).unwrap();
        assert_eq!(config.api_key(), None);
    }
}
