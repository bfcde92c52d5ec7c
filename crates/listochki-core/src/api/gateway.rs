//! HTTP gateway for the worksheet catalog backend.
//!
//! One `Gateway` owns the base address and the transport. Every request goes
//! through [`Gateway::request`], which logs a failed call once and hands the
//! same error back to the caller. There are no retries and no timeout.

use std::sync::Arc;

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{header, Client, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};

use super::envelope::unwrap_results;
use super::TransportFailure;

pub type Result<T> = std::result::Result<T, TransportFailure>;

/// Characters escaped when a value is placed in a single path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'\\');

/// Percent-encode `value` so it stays one path segment.
pub fn encode_segment(value: &str) -> String {
    utf8_percent_encode(value, SEGMENT).to_string()
}

/// Query parameters, in the order they are sent.
pub type Query = Vec<(&'static str, String)>;

/// How the caller wants the response body handed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseType {
    #[default]
    Json,
    Text,
    Binary,
}

#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub query: Query,
    pub response_type: ResponseType,
}

impl RequestOptions {
    pub fn json(query: Query) -> Self {
        Self {
            query,
            response_type: ResponseType::Json,
        }
    }

    pub fn text() -> Self {
        Self {
            query: Query::new(),
            response_type: ResponseType::Text,
        }
    }

    pub fn binary() -> Self {
        Self {
            query: Query::new(),
            response_type: ResponseType::Binary,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub query: Query,
    pub response_type: ResponseType,
}

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub url: String,
    pub body: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Text(String),
    Binary(Vec<u8>),
}

/// The network seam. `HttpTransport` talks to a real server; tests plug in
/// an in-memory implementation.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform one attempt. Non-2xx answers are returned as responses, not
    /// errors; only a missing response is an error here.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// reqwest-backed transport.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let accept = match request.response_type {
            ResponseType::Json => "application/json",
            ResponseType::Text | ResponseType::Binary => "*/*",
        };

        let response = self
            .client
            .request(request.method, &request.url)
            .query(&request.query)
            .header(header::ACCEPT, accept)
            .send()
            .await?;

        let status = response.status().as_u16();
        let url = response.url().to_string();
        let body = response.bytes().await?.to_vec();

        Ok(HttpResponse { status, url, body })
    }
}

#[derive(Clone)]
pub struct Gateway {
    base_url: Arc<str>,
    transport: Arc<dyn Transport>,
}

impl Gateway {
    /// Create a gateway over HTTP for the given base address.
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self::with_transport(base_url, Arc::new(HttpTransport::new()?)))
    }

    pub fn with_transport(base_url: &str, transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url: Arc::from(base_url.trim_end_matches('/')),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a backend path. Pure string construction.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Build `{prefix}{slug}/{suffix}` with `slug` encoded as one segment.
    ///
    /// `.` and `..` cannot be escaped (URL parsers treat `%2E%2E` as `..`),
    /// and no backend slug looks like that, so they fail as `NotFound`
    /// without a request.
    pub fn slug_path(&self, prefix: &str, slug: &str, suffix: &str) -> Result<String> {
        if slug == "." || slug == ".." {
            let url = format!("{}{}{}/{}", self.base_url, prefix, slug, suffix);
            error!(url = %url, "API error: slug is a dot segment");
            return Err(TransportFailure::NotFound { url });
        }
        Ok(format!("{}{}/{}", prefix, encode_segment(slug), suffix))
    }

    /// Issue a request and decode the body according to the response type.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> Result<ResponseBody> {
        let url = self.url_for(path);
        debug!(%method, url = %url, params = options.query.len(), "API request");

        let result = self.dispatch(method, url.clone(), options).await;
        if let Err(ref e) = result {
            error!(url = %url, status = ?e.status(), error = %e, "API error");
        }
        result
    }

    async fn dispatch(
        &self,
        method: Method,
        url: String,
        options: RequestOptions,
    ) -> Result<ResponseBody> {
        let response_type = options.response_type;
        let response = self
            .transport
            .send(HttpRequest {
                method,
                url,
                query: options.query,
                response_type,
            })
            .await?;

        let response = Self::check_response(response)?;

        match response_type {
            ResponseType::Json => serde_json::from_slice(&response.body)
                .map(ResponseBody::Json)
                .map_err(|e| TransportFailure::invalid(&response.url, e)),
            ResponseType::Text => String::from_utf8(response.body)
                .map(ResponseBody::Text)
                .map_err(|e| TransportFailure::invalid(&response.url, e)),
            ResponseType::Binary => Ok(ResponseBody::Binary(response.body)),
        }
    }

    /// Check if response is successful, returning an error with body if not.
    fn check_response(response: HttpResponse) -> Result<HttpResponse> {
        if (200..300).contains(&response.status) {
            Ok(response)
        } else {
            let body = String::from_utf8_lossy(&response.body);
            Err(TransportFailure::from_status(response.status, &response.url, &body))
        }
    }

    async fn get_value(&self, path: &str, query: Query) -> Result<Value> {
        match self.request(Method::GET, path, RequestOptions::json(query)).await? {
            ResponseBody::Json(value) => Ok(value),
            _ => Err(TransportFailure::invalid(&self.url_for(path), "expected a JSON body")),
        }
    }

    fn decode<T: DeserializeOwned>(&self, path: &str, value: Value) -> Result<T> {
        serde_json::from_value(value).map_err(|e| {
            let url = self.url_for(path);
            error!(url = %url, error = %e, "API response does not match the expected shape");
            TransportFailure::invalid(&url, e)
        })
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str, query: Query) -> Result<T> {
        let value = self.get_value(path, query).await?;
        self.decode(path, value)
    }

    /// GET a list endpoint, unwrapping the pagination envelope if present.
    pub async fn get_list<T: DeserializeOwned>(&self, path: &str, query: Query) -> Result<Vec<T>> {
        let value = self.get_value(path, query).await?;
        self.decode(path, unwrap_results(value))
    }

    pub async fn get_text(&self, path: &str) -> Result<String> {
        match self.request(Method::GET, path, RequestOptions::text()).await? {
            ResponseBody::Text(text) => Ok(text),
            _ => Err(TransportFailure::invalid(&self.url_for(path), "expected a text body")),
        }
    }

    pub async fn get_bytes(&self, path: &str) -> Result<Vec<u8>> {
        match self.request(Method::GET, path, RequestOptions::binary()).await? {
            ResponseBody::Binary(bytes) => Ok(bytes),
            _ => Err(TransportFailure::invalid(&self.url_for(path), "expected a binary body")),
        }
    }
}
