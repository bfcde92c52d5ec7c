//! In-memory transport for tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Notify;

use super::gateway::{Gateway, HttpRequest, HttpResponse, Result, Transport};

pub const BASE_URL: &str = "http://test.local";

/// Holds every request until released, so tests can observe in-flight state.
#[derive(Default)]
pub struct Gate {
    pub started: Notify,
    pub release: Notify,
}

#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<HashMap<String, (u16, Vec<u8>)>>,
    requests: Mutex<Vec<HttpRequest>>,
    gate: Option<Arc<Gate>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn gated() -> (Arc<Self>, Arc<Gate>) {
        let gate = Arc::new(Gate::default());
        let mock = Self {
            gate: Some(Arc::clone(&gate)),
            ..Self::default()
        };
        (Arc::new(mock), gate)
    }

    pub fn gateway(self: &Arc<Self>) -> Gateway {
        Gateway::with_transport(BASE_URL, Arc::clone(self) as Arc<dyn Transport>)
    }

    pub fn respond(&self, path: &str, status: u16, body: impl Into<Vec<u8>>) {
        self.responses
            .lock()
            .unwrap()
            .insert(path.to_string(), (status, body.into()));
    }

    pub fn respond_json(&self, path: &str, body: Value) {
        self.respond(path, 200, body.to_string());
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn count(&self, path: &str) -> usize {
        let url = format!("{BASE_URL}{path}");
        self.requests().iter().filter(|r| r.url == url).count()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let url = request.url.clone();
        let path = url.strip_prefix(BASE_URL).unwrap_or(&url).to_string();
        self.requests.lock().unwrap().push(request);

        if let Some(gate) = &self.gate {
            gate.started.notify_one();
            gate.release.notified().await;
        }

        let (status, body) = self
            .responses
            .lock()
            .unwrap()
            .get(&path)
            .cloned()
            .unwrap_or((404, br#"{"detail": "Not found."}"#.to_vec()));

        Ok(HttpResponse { status, url, body })
    }
}
