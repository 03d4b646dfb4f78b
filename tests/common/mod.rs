//! Scripted in-process transport: checks each request against expectations
//! and answers with a canned response.

#![allow(dead_code)]

use schemaregistry::{Client, Method, Request, Response, SchemaRegistryError, Transport};
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

pub const TEST_HOST: &str = "testhost:1337";
pub const TEST_URL: &str = "http://testhost:1337";

pub type RequestLog = Arc<Mutex<Vec<Request>>>;

#[derive(Debug)]
pub struct ScriptedTransport {
    method: Option<Method>,
    path: Option<String>,
    body: Option<serde_json::Value>,
    response: Response,
    requests: RequestLog,
}

impl ScriptedTransport {
    pub fn new(response: Response) -> Self {
        Self {
            method: None,
            path: None,
            body: None,
            response,
            requests: Arc::default(),
        }
    }

    pub fn expect_method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn expect_path(mut self, path: &str) -> Self {
        self.path = Some(path.to_string());
        self
    }

    pub fn expect_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn requests(&self) -> RequestLog {
        Arc::clone(&self.requests)
    }

    pub fn into_client(self) -> (Client, RequestLog) {
        let log = self.requests();
        let client = Client::with_transport(TEST_URL, self).unwrap();
        (client, log)
    }
}

impl Transport for ScriptedTransport {
    fn execute(
        &self,
        request: Request,
    ) -> Pin<Box<dyn Future<Output = schemaregistry::Result<Response>> + Send + '_>> {
        Box::pin(async move {
            if let Some(method) = self.method {
                assert_eq!(request.method, method, "method is wrong");
            }
            assert!(
                request.url.starts_with(&format!("http://{}/", TEST_HOST)),
                "expected host `{}`, got `{}`",
                TEST_HOST,
                request.url
            );
            if let Some(ref path) = self.path {
                assert_eq!(&request.path, path, "path is wrong");
                assert_eq!(request.url, format!("{}{}", TEST_URL, path));
            }
            if let Some(ref expected) = self.body {
                let sent: serde_json::Value =
                    serde_json::from_slice(request.body.as_deref().unwrap_or_default()).unwrap();
                assert_eq!(&sent, expected, "request body is wrong");
            }
            self.requests.lock().unwrap().push(request);
            Ok(self.response.clone())
        })
    }
}

/// A transport whose requests never reach a server.
#[derive(Debug, Default)]
pub struct UnreachableTransport;

impl Transport for UnreachableTransport {
    fn execute(
        &self,
        _request: Request,
    ) -> Pin<Box<dyn Future<Output = schemaregistry::Result<Response>> + Send + '_>> {
        Box::pin(async move {
            Err(SchemaRegistryError::Transport(
                "dns error: failed to lookup address information".into(),
            ))
        })
    }
}

pub fn json_response(status: u16, body: serde_json::Value, content_type: &str) -> Response {
    Response::new(status)
        .content_type(content_type)
        .body(body.to_string())
}

pub fn http_success(
    method: Method,
    path: &str,
    req_body: Option<serde_json::Value>,
    resp_body: serde_json::Value,
    content_type: &str,
) -> (Client, RequestLog) {
    let mut transport = ScriptedTransport::new(json_response(200, resp_body, content_type))
        .expect_method(method)
        .expect_path(path);
    if let Some(body) = req_body {
        transport = transport.expect_body(body);
    }
    transport.into_client()
}

pub fn http_error(status: u16, error_code: i32, message: &str, content_type: &str) -> Client {
    let body = serde_json::json!({ "error_code": error_code, "message": message });
    ScriptedTransport::new(json_response(status, body, content_type))
        .into_client()
        .0
}
