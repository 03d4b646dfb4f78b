use super::{Method, Request, Response, Transport};
use crate::config::BasicAuth;
use crate::errors::SchemaRegistryError;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

/// Reqwest-backed [`Transport`].
///
/// Connection pooling, TLS and timeouts are whatever the wrapped
/// `reqwest::Client` provides.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    basic_auth: Option<BasicAuth>,
    headers: HashMap<String, String>,
}

/// Configuration used to construct a ReqwestTransport from client settings.
#[derive(Default)]
pub(crate) struct TransportConfig {
    pub basic_auth: Option<BasicAuth>,
    pub headers: HashMap<String, String>,
    pub timeout: Option<Duration>,
    pub http_client: Option<reqwest::Client>,
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::with_client(reqwest::Client::new())
    }
}

impl ReqwestTransport {
    /// Create a transport with a default reqwest client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing reqwest client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client,
            basic_auth: None,
            headers: HashMap::new(),
        }
    }

    pub(crate) fn from_config(config: TransportConfig) -> crate::Result<Self> {
        let client = match (config.http_client, config.timeout) {
            (Some(client), _) => client,
            (None, Some(timeout)) => reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .map_err(|e| SchemaRegistryError::Builder(format!("http client: {}", e)))?,
            (None, None) => reqwest::Client::new(),
        };

        Ok(Self {
            client,
            basic_auth: config.basic_auth,
            headers: config.headers,
        })
    }

    fn build(&self, request: Request) -> reqwest::RequestBuilder {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut req = self.client.request(method, request.url.as_str());

        for (key, value) in &request.headers {
            req = req.header(key.as_str(), value.as_str());
        }

        for (key, value) in &self.headers {
            req = req.header(key.as_str(), value.as_str());
        }

        if let Some(ref auth) = self.basic_auth {
            req = req.basic_auth(&auth.username, auth.password.as_deref());
        }

        if let Some(body) = request.body {
            req = req.body(body);
        }

        req
    }
}

impl Transport for ReqwestTransport {
    fn execute(
        &self,
        request: Request,
    ) -> Pin<Box<dyn Future<Output = crate::Result<Response>> + Send + '_>> {
        Box::pin(async move {
            let response = self.build(request).send().await?;
            let status = response.status().as_u16();

            // Non-UTF-8 header values are dropped; the registry never sends them.
            let headers = response
                .headers()
                .iter()
                .filter_map(|(k, v)| {
                    v.to_str()
                        .ok()
                        .map(|v| (k.as_str().to_string(), v.to_string()))
                })
                .collect();

            let body = response.bytes().await?.to_vec();

            Ok(Response {
                status,
                headers,
                body,
            })
        })
    }
}
