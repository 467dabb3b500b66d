//! The HTTP capability the client is built on.
//!
//! [`HttpTransport`] performs one round trip: it sends a fully assembled
//! [`HttpRequest`] and returns the status and the whole body. Everything else
//! (headers, serialization, error normalization) lives in the core, so tests and
//! embedders can swap the transport without touching request semantics.
//! [`ReqwestTransport`] is the default implementation.

use async_trait::async_trait;
use hyper::ext::ReasonPhrase;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};

use crate::client::error::{ApiError, Result};

/// A request ready to go on the wire.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: HttpBody,
}

/// Body of an outgoing request, already serialized by the core.
#[derive(Debug, Clone, PartialEq)]
pub enum HttpBody {
    Empty,
    Bytes(Vec<u8>),
    /// Passed through untouched; the transport sets the boundary header.
    Multipart(MultipartForm),
}

impl HttpBody {
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(bytes) => Some(bytes.as_slice()),
            _ => None,
        }
    }
}

/// One field of a multipart form.
#[derive(Debug, Clone, PartialEq)]
pub enum MultipartPart {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        file_name: String,
        mime_type: Option<String>,
        bytes: Vec<u8>,
    },
}

/// An opaque multipart/form-data payload built by the caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultipartForm {
    parts: Vec<MultipartPart>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts.push(MultipartPart::Text {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn file(
        mut self,
        name: impl Into<String>,
        file_name: impl Into<String>,
        mime_type: Option<&str>,
        bytes: Vec<u8>,
    ) -> Self {
        self.parts.push(MultipartPart::File {
            name: name.into(),
            file_name: file_name.into(),
            mime_type: mime_type.map(str::to_string),
            bytes,
        });
        self
    }

    pub fn parts(&self) -> &[MultipartPart] {
        &self.parts
    }

    fn into_reqwest(self) -> Result<reqwest::multipart::Form> {
        let mut form = reqwest::multipart::Form::new();
        for part in self.parts {
            form = match part {
                MultipartPart::Text { name, value } => form.text(name, value),
                MultipartPart::File {
                    name,
                    file_name,
                    mime_type,
                    bytes,
                } => {
                    let mut file = reqwest::multipart::Part::bytes(bytes).file_name(file_name);
                    if let Some(mime) = mime_type {
                        file = file.mime_str(&mime).map_err(|e| {
                            ApiError::InvalidRequest(format!("invalid mime type {}: {}", mime, e))
                        })?;
                    }
                    form.part(name, file)
                }
            };
        }
        Ok(form)
    }
}

/// A received response with its body fully read.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Performs a single HTTP round trip.
///
/// Implementations return [`ApiError`] only for failures that happen before a
/// response exists; any status code, success or not, is an `Ok` response.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// [`HttpTransport`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a preconfigured client (timeouts, proxies, TLS roots).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let mut builder = self
            .client
            .request(request.method, request.url.as_str())
            .headers(request.headers);

        builder = match request.body {
            HttpBody::Empty => builder,
            HttpBody::Bytes(bytes) => builder.body(bytes),
            HttpBody::Multipart(form) => builder.multipart(form.into_reqwest()?),
        };

        let response = builder.send().await.map_err(ApiError::transport_from)?;

        let status = response.status();
        let status_text = reason_text(status, response.extensions().get::<ReasonPhrase>());
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(ApiError::transport_from)?
            .to_vec();

        Ok(HttpResponse {
            status: status.as_u16(),
            status_text,
            headers,
            body,
        })
    }
}

/// The server's reason phrase when it sent a non-canonical one, else the
/// canonical reason for the code, else empty.
fn reason_text(status: StatusCode, phrase: Option<&ReasonPhrase>) -> String {
    match phrase {
        Some(phrase) => String::from_utf8_lossy(phrase.as_bytes()).into_owned(),
        None => status.canonical_reason().unwrap_or_default().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn custom_reason_phrase_is_kept() {
        let phrase = ReasonPhrase::from_static(b"Recipe Locked");
        assert_eq!(
            reason_text(StatusCode::CONFLICT, Some(&phrase)),
            "Recipe Locked"
        );
    }

    #[test]
    fn canonical_reason_is_the_fallback() {
        assert_eq!(reason_text(StatusCode::NOT_FOUND, None), "Not Found");
        let unknown = StatusCode::from_u16(599).unwrap();
        assert_eq!(reason_text(unknown, None), "");
    }
}
