#[cfg(feature = "reqwest-transport")]
pub(crate) mod http;

#[cfg(feature = "reqwest-transport")]
pub use self::http::ReqwestTransport;

use std::fmt::{self, Debug};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// HTTP method for transport requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    /// The method name as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully formed HTTP request, ready to be executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    /// Absolute URL: the client's base URL followed by `path`.
    pub url: String,
    /// Operation path relative to the base URL (e.g., `/subjects`).
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl Request {
    /// Returns the first header with the given name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

/// A complete HTTP response with its body fully read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl Response {
    /// Create an empty response with the given status.
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Add a header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set the `Content-Type` header.
    pub fn content_type(self, value: impl Into<String>) -> Self {
        self.header("Content-Type", value)
    }

    /// Set the body.
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Returns the first header with the given name (case-insensitive).
    pub fn header_value(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    /// Returns `true` for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

fn find_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}

/// The HTTP executor the client is built on.
///
/// This trait is object-safe and uses `Pin<Box<dyn Future>>` for async support.
/// The default implementation uses reqwest (enabled via the `reqwest-transport` feature).
///
/// Implementations execute exactly one request and either return the
/// response, whatever its status, or fail with
/// [`SchemaRegistryError::Transport`](crate::SchemaRegistryError::Transport)
/// when no response could be obtained. They must not retry and must not
/// interpret registry semantics.
///
/// # Example
///
/// ```rust,no_run
/// use schemaregistry::transport::{Request, Response, Transport};
/// use std::pin::Pin;
///
/// #[derive(Debug)]
/// struct EmptyRegistry;
///
/// impl Transport for EmptyRegistry {
///     fn execute(
///         &self,
///         _request: Request,
///     ) -> Pin<Box<dyn std::future::Future<Output = schemaregistry::Result<Response>> + Send + '_>> {
///         Box::pin(async move {
///             Ok(Response::new(200)
///                 .content_type("application/vnd.schemaregistry.v1+json")
///                 .body("[]"))
///         })
///     }
/// }
/// ```
pub trait Transport: Send + Sync + Debug {
    /// Execute one request and return its response.
    fn execute(
        &self,
        request: Request,
    ) -> Pin<Box<dyn Future<Output = crate::Result<Response>> + Send + '_>>;
}

/// A cloneable, type-erased transport handle.
pub type DynTransport = Arc<dyn Transport>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_lookup_is_case_insensitive() {
        let resp = Response::new(200).content_type("application/json");
        assert_eq!(resp.header_value("content-type"), Some("application/json"));
        assert_eq!(resp.header_value("CONTENT-TYPE"), Some("application/json"));
        assert_eq!(resp.header_value("accept"), None);
    }

    #[test]
    fn success_range() {
        assert!(Response::new(200).is_success());
        assert!(Response::new(204).is_success());
        assert!(!Response::new(199).is_success());
        assert!(!Response::new(300).is_success());
        assert!(!Response::new(404).is_success());
    }

    #[test]
    fn method_names() {
        assert_eq!(Method::Get.to_string(), "GET");
        assert_eq!(Method::Post.as_str(), "POST");
        assert_eq!(Method::Delete.as_str(), "DELETE");
    }
}
