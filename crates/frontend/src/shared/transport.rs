//! HTTP access to the backend.
//!
//! One request surface for every endpoint: JSON bodies for the CRUD
//! routes, a single-file multipart form for the CSV upload. Non-2xx
//! responses become typed failures carrying the server detail when the
//! error envelope provides one. No retries happen here; retry policy
//! belongs to callers.

use contracts::envelope::error_detail;
use contracts::error::TransportError;
use gloo_net::http::Request;
use serde_json::Value;
use wasm_bindgen::JsValue;

use crate::shared::api_utils::api_url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

/// Request body, distinguished by payload kind.
pub enum Payload {
    Json(Value),
    File(web_sys::File),
}

/// Issues requests against the configured backend. Implemented over
/// `fetch` in the browser, mocked in tests.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Payload>,
    ) -> Result<Value, TransportError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HttpTransport;

impl Transport for HttpTransport {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Payload>,
    ) -> Result<Value, TransportError> {
        let url = api_url(path);
        log::debug!("{} {}", method.as_str(), url);

        let builder = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Delete => Request::delete(&url),
        }
        .header("Accept", "application/json");

        let request = match body {
            None => builder
                .build()
                .map_err(|e| TransportError::Network(e.to_string()))?,
            Some(Payload::Json(value)) => builder
                .json(&value)
                .map_err(|e| TransportError::Network(e.to_string()))?,
            Some(Payload::File(file)) => {
                let form = web_sys::FormData::new()
                    .and_then(|f| f.append_with_blob("file", &file).map(|_| f))
                    .map_err(|e| TransportError::Network(format!("{e:?}")))?;
                builder
                    .body(JsValue::from(form))
                    .map_err(|e| TransportError::Network(e.to_string()))?
            }
        };

        let response = request
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        if !response.ok() {
            let message = error_detail(&text).unwrap_or_else(|| {
                if text.is_empty() {
                    response.status_text()
                } else {
                    text
                }
            });
            return Err(TransportError::Http { status, message });
        }

        // DELETE acks may come back with an empty body.
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| TransportError::Decode(e.to_string()))
    }
}
