use crate::config::{normalize_base_url, BasicAuth, ConnectionConfig};
use crate::error_codes::SCHEMA_NOT_FOUND;
use crate::errors::{ResourceErrorPayload, SchemaRegistryError};
use crate::interpreter::{interpret, Verdict, CONTENT_TYPE_HEADER, CONTENT_TYPE_SCHEMA_JSON};
use crate::schema::{
    decode, encode, Schema, SchemaIdResponse, SchemaOnlyRequest, SchemaOnlyResponse,
};
use crate::transport::{DynTransport, Method, Request, Transport};
use crate::validation::{check_subject, VersionId};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

const ACCEPT: &str =
    "application/vnd.schemaregistry.v1+json, application/vnd.schemaregistry+json, application/json";

// ---------------------------------------------------------------------------
// Client builder
// ---------------------------------------------------------------------------

/// Builder for constructing a registry [`Client`].
pub struct ClientBuilder {
    url: Option<String>,
    headers: HashMap<String, String>,
    basic_auth: Option<BasicAuth>,
    timeout: Option<Duration>,
    transport: Option<DynTransport>,
    #[cfg(feature = "reqwest-transport")]
    http_client: Option<reqwest::Client>,
}

impl ClientBuilder {
    fn new() -> Self {
        Self {
            url: None,
            headers: HashMap::new(),
            basic_auth: None,
            timeout: None,
            transport: None,
            #[cfg(feature = "reqwest-transport")]
            http_client: None,
        }
    }

    /// Set the registry URL.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Apply a shared [`ConnectionConfig`].
    pub fn connection(mut self, config: ConnectionConfig) -> Self {
        self.url = Some(config.url);
        self.headers.extend(config.headers);
        self.basic_auth = config.basic_auth.or(self.basic_auth);
        self.timeout = config.timeout.or(self.timeout);
        self
    }

    /// Add a custom HTTP header.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set HTTP basic-auth credentials.
    pub fn basic_auth(mut self, username: impl Into<String>, password: Option<&str>) -> Self {
        self.basic_auth = Some(BasicAuth {
            username: username.into(),
            password: password.map(str::to_string),
        });
        self
    }

    /// Set the request timeout. Ignored when a custom HTTP client or
    /// transport is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Provide a custom reqwest HTTP client.
    #[cfg(feature = "reqwest-transport")]
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Provide a custom transport. Headers, credentials and timeout set on
    /// the builder are then the transport's responsibility.
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Build the client.
    pub fn build(self) -> crate::Result<Client> {
        let url = self
            .url
            .ok_or_else(|| SchemaRegistryError::Builder("url is required".into()))?;
        let base_url = normalize_base_url(&url)
            .ok_or_else(|| SchemaRegistryError::Builder("url must not be empty".into()))?;

        let transport: DynTransport = match self.transport {
            Some(transport) => transport,
            #[cfg(feature = "reqwest-transport")]
            None => Arc::new(crate::transport::ReqwestTransport::from_config(
                crate::transport::http::TransportConfig {
                    basic_auth: self.basic_auth,
                    headers: self.headers,
                    timeout: self.timeout,
                    http_client: self.http_client,
                },
            )?),
            #[cfg(not(feature = "reqwest-transport"))]
            None => {
                return Err(SchemaRegistryError::Builder(
                    "a transport is required when the reqwest-transport feature is disabled"
                        .into(),
                ))
            }
        };

        Ok(Client {
            base_url,
            transport,
        })
    }
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// A schema registry client.
///
/// The client holds no mutable state; clones share the transport and can be
/// used concurrently.
///
/// # Example
///
/// ```rust,ignore
/// use schemaregistry::Client;
///
/// let client = Client::builder()
///     .url("http://localhost:8081")
///     .build()?;
///
/// for subject in client.list_subjects().await? {
///     println!("{subject}: {:?}", client.list_versions(&subject).await?);
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    base_url: String,
    transport: DynTransport,
}

impl Client {
    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a client directly from a base URL and a transport.
    pub fn with_transport(url: &str, transport: impl Transport + 'static) -> crate::Result<Self> {
        Self::builder().url(url).transport(transport).build()
    }

    /// The normalized registry base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // -----------------------------------------------------------------------
    // Subject operations
    // -----------------------------------------------------------------------

    /// List all subjects.
    pub async fn list_subjects(&self) -> crate::Result<Vec<String>> {
        let subjects: Vec<String> = self.call(Method::Get, "/subjects".to_string(), None).await?;
        tracing::debug!(count = subjects.len(), "listed subjects");
        Ok(subjects)
    }

    /// List the versions registered under `subject`.
    pub async fn list_versions(&self, subject: &str) -> crate::Result<Vec<i32>> {
        check_subject(subject)?;
        let path = format!("{}/versions", subject_path(subject));
        let versions: Vec<i32> = self.call(Method::Get, path, None).await?;
        tracing::debug!(subject = %subject, count = versions.len(), "listed versions");
        Ok(versions)
    }

    /// Delete `subject` and return the versions that were removed.
    pub async fn delete_subject(&self, subject: &str) -> crate::Result<Vec<i32>> {
        check_subject(subject)?;
        self.call(Method::Delete, subject_path(subject), None).await
    }

    /// Delete one version of `subject` and return its number.
    pub async fn delete_subject_version(
        &self,
        subject: &str,
        version: impl Into<VersionId>,
    ) -> crate::Result<i32> {
        check_subject(subject)?;
        let version = version.into();
        version.check()?;
        self.call(Method::Delete, version_path(subject, version), None)
            .await
    }

    // -----------------------------------------------------------------------
    // Schema operations
    // -----------------------------------------------------------------------

    /// Check whether `schema` is registered under `subject`.
    ///
    /// Returns `Ok(Some(record))` when it is and `Ok(None)` when the registry
    /// answers within its contract with the "schema not found" code (40403),
    /// whatever the HTTP status.
    /// Every other failure is an error, including a "not found" body served
    /// as plain `application/json`.
    pub async fn is_registered(&self, subject: &str, schema: &str) -> crate::Result<Option<Schema>> {
        check_subject(subject)?;
        let path = subject_path(subject);
        let body = encode(&SchemaOnlyRequest { schema })?;

        match self.send(Method::Post, path, Some(body)).await? {
            Verdict::Success(body) => {
                let record: Schema = match decode(&body) {
                    Ok(record) => record,
                    Err(err) => {
                        return match serde_json::from_slice::<ResourceErrorPayload>(&body) {
                            Ok(payload) if payload.error_code == SCHEMA_NOT_FOUND.code => Ok(None),
                            _ => Err(err),
                        };
                    }
                };
                tracing::debug!(
                    subject = %record.subject,
                    id = record.id,
                    version = record.version,
                    "schema is registered"
                );
                Ok(Some(record))
            }
            Verdict::Rejected(err) if err.is_schema_not_found() => {
                tracing::debug!(subject = %subject, "schema is not registered");
                Ok(None)
            }
            verdict => verdict.into_result().map(|_| None),
        }
    }

    /// Register `schema` under `subject` and return its registry-wide id.
    ///
    /// Registering a schema that already exists returns the existing id.
    pub async fn register_new_schema(&self, subject: &str, schema: &str) -> crate::Result<i32> {
        check_subject(subject)?;
        let path = format!("{}/versions", subject_path(subject));
        let body = encode(&SchemaOnlyRequest { schema })?;
        let resp: SchemaIdResponse = self.call(Method::Post, path, Some(body)).await?;
        tracing::debug!(subject = %subject, id = resp.id, "schema registered");
        Ok(resp.id)
    }

    /// Fetch a schema document by its registry-wide id.
    pub async fn get_schema_by_id(&self, id: i32) -> crate::Result<String> {
        let resp: SchemaOnlyResponse = self
            .call(Method::Get, format!("/schemas/ids/{}", id), None)
            .await?;
        Ok(resp.schema)
    }

    /// Fetch the schema registered under `subject` at `version`.
    pub async fn get_schema_by_subject(
        &self,
        subject: &str,
        version: impl Into<VersionId>,
    ) -> crate::Result<Schema> {
        check_subject(subject)?;
        let version = version.into();
        version.check()?;
        self.call(Method::Get, version_path(subject, version), None)
            .await
    }

    /// Fetch the most recent schema registered under `subject`.
    pub async fn get_latest_schema(&self, subject: &str) -> crate::Result<Schema> {
        self.get_schema_by_subject(subject, VersionId::Latest).await
    }

    // -----------------------------------------------------------------------
    // Request plumbing
    // -----------------------------------------------------------------------

    async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        path: String,
        body: Option<Vec<u8>>,
    ) -> crate::Result<T> {
        let body = self.send(method, path, body).await?.into_result()?;
        decode(&body)
    }

    async fn send(&self, method: Method, path: String, body: Option<Vec<u8>>) -> crate::Result<Verdict> {
        let mut headers = vec![("Accept".to_string(), ACCEPT.to_string())];
        if body.is_some() {
            headers.push((
                CONTENT_TYPE_HEADER.to_string(),
                CONTENT_TYPE_SCHEMA_JSON.to_string(),
            ));
        }

        tracing::debug!(method = %method, path = %path, "sending registry request");
        let request = Request {
            method,
            url: format!("{}{}", self.base_url, path),
            path: path.clone(),
            headers,
            body,
        };

        let response = self.transport.execute(request).await?;
        Ok(interpret(method, &path, response))
    }
}

fn subject_path(subject: &str) -> String {
    format!("/subjects/{}", urlencoding::encode(subject))
}

fn version_path(subject: &str, version: VersionId) -> String {
    format!("{}/versions/{}", subject_path(subject), version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_paths_are_escaped() {
        assert_eq!(subject_path("mysubject"), "/subjects/mysubject");
        assert_eq!(subject_path("a/b c"), "/subjects/a%2Fb%20c");
    }

    #[test]
    fn version_paths() {
        assert_eq!(version_path("s", VersionId::Number(3)), "/subjects/s/versions/3");
        assert_eq!(version_path("s", VersionId::Latest), "/subjects/s/versions/latest");
    }

    #[cfg(feature = "reqwest-transport")]
    #[test]
    fn builder_normalizes_url() {
        let client = Client::builder().url("localhost:8081/").build().unwrap();
        assert_eq!(client.base_url(), "http://localhost:8081");
    }

    #[test]
    fn builder_requires_url() {
        let err = Client::builder().build().unwrap_err();
        assert_eq!(err.to_string(), "builder error: url is required");
    }
}
