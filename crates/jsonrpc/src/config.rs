//! Transport client configuration.

use std::sync::Arc;

use reqwest::header::HeaderValue;
use url::Url;

use crate::{AppId, ConfigError, IdGenerator, UuidGenerator};

/// Everything a [`crate::Client`] needs: where to send requests, who is
/// calling, and optionally which HTTP transport and id generator to use.
///
/// ```
/// use jsonrpc::ClientConfig;
///
/// let config = ClientConfig::new("https://example.com/rpc", "my-app-id")
///     .unwrap()
///     .with_transport(reqwest::Client::new());
/// assert_eq!(config.endpoint().as_str(), "https://example.com/rpc");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub(crate) endpoint: Url,
    pub(crate) app_id: AppId,
    pub(crate) user_agent: HeaderValue,
    pub(crate) transport: Option<reqwest::Client>,
    pub(crate) id_generator: Arc<dyn IdGenerator>,
}

impl ClientConfig {
    /// Validates `endpoint` and `app_id` and builds a configuration that uses
    /// the shared default transport and random UUID request ids.
    pub fn new(endpoint: &str, app_id: impl Into<String>) -> Result<Self, ConfigError> {
        let url = Url::parse(endpoint).map_err(|source| ConfigError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            source,
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme {
                scheme: url.scheme().to_string(),
            });
        }

        let app_id = AppId::new(app_id).ok_or(ConfigError::EmptyAppId)?;
        let user_agent =
            HeaderValue::from_str(&app_id.user_agent()).map_err(ConfigError::InvalidAppId)?;

        Ok(Self {
            endpoint: url,
            app_id,
            user_agent,
            transport: None,
            id_generator: Arc::new(UuidGenerator),
        })
    }

    /// Replaces the default network transport, e.g. to set timeouts, a proxy,
    /// or a TLS policy.
    #[must_use]
    pub fn with_transport(mut self, transport: reqwest::Client) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Replaces the random UUID request id generator.
    #[must_use]
    pub fn with_id_generator(mut self, generator: Arc<dyn IdGenerator>) -> Self {
        self.id_generator = generator;
        self
    }

    /// Returns the endpoint requests are posted to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Returns the calling application's id.
    pub fn app_id(&self) -> &AppId {
        &self.app_id
    }

    /// Returns `true` when a custom transport has been injected.
    pub fn has_custom_transport(&self) -> bool {
        self.transport.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SequentialIdGenerator;

    const TEST_APP_ID: &str = "test_application_id";

    #[test]
    fn new_config_keeps_endpoint_and_app_id() {
        let config = ClientConfig::new("https://example.com/endpoint", TEST_APP_ID).unwrap();
        assert_eq!(config.endpoint().as_str(), "https://example.com/endpoint");
        assert_eq!(config.app_id().as_str(), TEST_APP_ID);
        assert_eq!(config.user_agent, "Yahoo AppID: test_application_id");
        assert!(!config.has_custom_transport());
    }

    #[test]
    fn transport_can_be_replaced() {
        let config = ClientConfig::new("https://example.com/endpoint", TEST_APP_ID)
            .unwrap()
            .with_transport(reqwest::Client::new());
        assert!(config.has_custom_transport());
    }

    #[test]
    fn id_generator_can_be_replaced() {
        let config = ClientConfig::new("https://example.com/endpoint", TEST_APP_ID)
            .unwrap()
            .with_id_generator(Arc::new(SequentialIdGenerator::new("t")));
        assert_eq!(config.id_generator.next_id().as_str(), "t-1");
    }

    #[test]
    fn relative_endpoint_is_rejected() {
        let err = ClientConfig::new("/DAService/V2/parse", TEST_APP_ID).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEndpoint { .. }), "{err:?}");
    }

    #[test]
    fn non_http_endpoint_is_rejected() {
        let err = ClientConfig::new("ftp://example.com/rpc", TEST_APP_ID).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedScheme { ref scheme } if scheme == "ftp"));
    }

    #[test]
    fn empty_app_id_is_rejected() {
        let err = ClientConfig::new("https://example.com/rpc", "").unwrap_err();
        assert!(matches!(err, ConfigError::EmptyAppId));
    }

    #[test]
    fn app_id_with_newline_is_rejected() {
        let err = ClientConfig::new("https://example.com/rpc", "bad\nid").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidAppId(_)));
    }
}
