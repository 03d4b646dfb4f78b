use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

/// Connection settings for a [`Client`](crate::Client).
///
/// # Example
///
/// ```rust
/// use schemaregistry::ConnectionConfig;
///
/// let config = ConnectionConfig::new("http://localhost:8081")
///     .basic_auth("api-key", Some("api-secret"))
///     .header("X-Tenant-Id", "tenant-42")
///     .timeout(std::time::Duration::from_secs(10));
///
/// let client = schemaregistry::Client::builder()
///     .connection(config)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Registry base URL. `http://` is assumed when no scheme is given.
    pub url: String,
    /// Custom HTTP headers sent with every request.
    pub headers: HashMap<String, String>,
    /// HTTP basic-auth credentials.
    pub basic_auth: Option<BasicAuth>,
    /// Request timeout. Unset means the HTTP client's default.
    pub timeout: Option<Duration>,
}

impl ConnectionConfig {
    /// Create a new connection config with the given registry URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: HashMap::new(),
            basic_auth: None,
            timeout: None,
        }
    }

    /// Set HTTP basic-auth credentials.
    pub fn basic_auth(mut self, username: impl Into<String>, password: Option<&str>) -> Self {
        self.basic_auth = Some(BasicAuth {
            username: username.into(),
            password: password.map(str::to_string),
        });
        self
    }

    /// Add a custom HTTP header.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// HTTP basic-auth credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicAuth {
    pub username: String,
    pub password: Option<String>,
}

impl fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}

/// Normalize a registry base URL: trim whitespace and trailing slashes, and
/// default the scheme to `http`.
pub(crate) fn normalize_base_url(url: &str) -> Option<String> {
    let url = url.trim().trim_end_matches('/');
    if url.is_empty() {
        return None;
    }
    if url.contains("://") {
        Some(url.to_string())
    } else {
        Some(format!("http://{}", url))
    }
}
