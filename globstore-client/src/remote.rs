//! HTTP client implementing `Store` against a globstore server
//!
//! Transport failures (connect refused, timeout) surface as
//! `Error::ConnectionLost` so callers can tell "the server is gone" apart
//! from "the value is absent"; the two are never conflated.

use crate::config::ConnectConfig;
use async_trait::async_trait;
use globstore_core::wire::{
    ChildrenRequest, GetRequest, GetResponse, KillRequest, NextRequest, NextResponse, SetRequest,
};
use globstore_core::{ChildEntry, ChildPage, Error, Result, Store, Subscript, Value};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::time::Duration;

pub use globstore_core::wire::NAMESPACE_HEADER;

/// Remote store speaking the globstore JSON protocol.
#[derive(Clone)]
pub struct RemoteStore {
    client: Client,
    base_url: String,
    namespace: Option<String>,
    credentials: Option<(String, String)>,
}

impl fmt::Debug for RemoteStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteStore")
            .field("base_url", &self.base_url)
            .field("namespace", &self.namespace)
            .field("has_credentials", &self.credentials.is_some())
            .finish()
    }
}

impl RemoteStore {
    /// Create a client for the server root (e.g. `http://localhost:8090`).
    ///
    /// Trailing slashes are stripped.
    pub fn new(base_url: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            namespace: None,
            credentials: None,
        }
    }

    /// Create a client from a parsed connection file: base URL from ip+port,
    /// namespace as a request header, username/password as basic auth.
    pub fn connect(config: &ConnectConfig) -> Self {
        let mut store = Self::new(&config.base_url());
        store.namespace = Some(config.namespace.clone());
        store.credentials = Some((config.username.clone(), config.password.clone()));
        store
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Probe `GET /health`; `Ok(())` means the server is reachable.
    pub async fn ping(&self) -> Result<()> {
        let url = format!("{}/health", self.base_url);
        let resp = self
            .decorate(self.client.get(&url))
            .send()
            .await
            .map_err(map_network_error)?;
        if resp.status().is_success() {
            Ok(())
        } else {
            Err(map_status(resp.status(), resp.text().await.unwrap_or_default()))
        }
    }

    fn decorate(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let req = match &self.namespace {
            Some(ns) => req.header(NAMESPACE_HEADER, ns),
            None => req,
        };
        match &self.credentials {
            Some((user, pass)) => req.basic_auth(user, Some(pass)),
            None => req,
        }
    }

    async fn post<Req: Serialize, Resp: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &Req,
    ) -> Result<Resp> {
        let url = format!("{}/globstore/{}", self.base_url, endpoint);
        tracing::debug!(%url, "remote store request");
        let resp = self
            .decorate(self.client.post(&url).json(body))
            .send()
            .await
            .map_err(map_network_error)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(map_status(status, body));
        }
        resp.json::<Resp>()
            .await
            .map_err(|e| Error::remote(format!("invalid response body: {e}")))
    }
}

/// Map a reqwest transport error. Timeouts and failed connects are
/// `ConnectionLost` (retryable); anything else is a generic remote error.
fn map_network_error(e: reqwest::Error) -> Error {
    if e.is_timeout() {
        Error::connection_lost(format!("request timed out: {e}"))
    } else if e.is_connect() {
        Error::connection_lost(format!("connection failed: {e}"))
    } else {
        Error::remote(e.to_string())
    }
}

/// Map a non-2xx status plus body text back to a core error. The server's
/// JSON error body carries the message; fall back to the status line.
fn map_status(status: StatusCode, body: String) -> Error {
    let message = serde_json::from_str::<globstore_core::wire::ErrorBody>(&body)
        .map(|b| b.error)
        .unwrap_or_else(|_| {
            if body.is_empty() {
                format!("status {status}")
            } else {
                body
            }
        });
    match status {
        StatusCode::BAD_REQUEST => Error::invalid_path(message),
        StatusCode::NOT_FOUND => Error::not_found(message),
        _ => Error::remote(message),
    }
}

#[async_trait]
impl Store for RemoteStore {
    async fn set(&self, global: &str, path: &[Subscript], value: Value) -> Result<()> {
        let req = SetRequest {
            global: global.to_string(),
            path: path.to_vec(),
            value,
        };
        let _: globstore_core::wire::SetResponse = self.post("set", &req).await?;
        Ok(())
    }

    async fn get(&self, global: &str, path: &[Subscript]) -> Result<Option<Value>> {
        let req = GetRequest {
            global: global.to_string(),
            path: path.to_vec(),
        };
        let resp: GetResponse = self.post("get", &req).await?;
        Ok(resp.value)
    }

    async fn kill(&self, global: &str, path: &[Subscript]) -> Result<()> {
        let req = KillRequest {
            global: global.to_string(),
            path: path.to_vec(),
        };
        let _: globstore_core::wire::KillResponse = self.post("kill", &req).await?;
        Ok(())
    }

    async fn next_after(
        &self,
        global: &str,
        prefix: &[Subscript],
        after: Option<&Subscript>,
    ) -> Result<Option<ChildEntry>> {
        let req = NextRequest {
            global: global.to_string(),
            prefix: prefix.to_vec(),
            after: after.cloned(),
        };
        let resp: NextResponse = self.post("next", &req).await?;
        Ok(resp.into_entry())
    }

    async fn children_page(
        &self,
        global: &str,
        prefix: &[Subscript],
        after: Option<&Subscript>,
        limit: usize,
    ) -> Result<ChildPage> {
        let req = ChildrenRequest {
            global: global.to_string(),
            prefix: prefix.to_vec(),
            after: after.cloned(),
            limit: Some(limit),
        };
        self.post("children", &req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let store = RemoteStore::new("http://localhost:8090///");
        assert_eq!(store.base_url(), "http://localhost:8090");
    }

    #[test]
    fn test_debug_hides_password() {
        let cfg = ConnectConfig {
            ip: "127.0.0.1".into(),
            port: 8090,
            namespace: "USER".into(),
            username: "demo".into(),
            password: "hunter2".into(),
        };
        let debug = format!("{:?}", RemoteStore::connect(&cfg));
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("has_credentials: true"));
    }

    #[test]
    fn test_map_status_uses_error_body() {
        let body = r#"{"error":"Invalid path: empty","status":400,"@type":"err:store/InvalidPath"}"#;
        let err = map_status(StatusCode::BAD_REQUEST, body.to_string());
        assert!(matches!(err, Error::InvalidPath(msg) if msg == "Invalid path: empty"));
    }

    #[test]
    fn test_map_status_fallbacks() {
        let err = map_status(StatusCode::NOT_FOUND, String::new());
        assert!(matches!(err, Error::NotFound(_)));
        let err = map_status(StatusCode::INTERNAL_SERVER_ERROR, "boom".to_string());
        assert!(matches!(err, Error::Remote(msg) if msg == "boom"));
    }

    #[test]
    fn test_network_error_is_retryable() {
        // shape check only; building a real reqwest::Error needs a transport
        assert!(Error::connection_lost("x").is_retryable());
        assert!(!Error::remote("x").is_retryable());
    }
}
