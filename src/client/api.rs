//! Request assembly and response normalization shared by every resource.
//!
//! [`ApiCore`] owns the base URL, the bearer token and the injected
//! [`HttpTransport`]. A call goes through three steps:
//!
//! 1. [`ApiCore::build_request`] joins the path onto the base URL, layers the
//!    computed headers over the caller's, and serializes the body
//! 2. [`ApiCore::execute`] hands the request to the transport and turns any
//!    non-success status into [`ApiError::Http`]
//! 3. [`ApiCore::request`] decodes the body (empty text decodes as `{}`)
//!
//! Apart from the token, the core keeps no state between calls.

use std::fmt;
use std::sync::Arc;

use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, ACCEPT_LANGUAGE, AUTHORIZATION, CONTENT_TYPE,
};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::client::auth::TokenStore;
use crate::client::error::{ApiError, Result};
use crate::client::query::QueryParams;
use crate::client::transport::{
    HttpBody, HttpRequest, HttpResponse, HttpTransport, MultipartForm, ReqwestTransport,
};

/// Used when no base URL (or an empty one) is configured.
pub const DEFAULT_BASE_URL: &str = "https://demo.mealie.io";

const JSON_CONTENT_TYPE: &str = "application/json";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Construction-time options for a client.
#[derive(Clone, Default, PartialEq)]
pub struct ClientOptions {
    pub base_url: Option<String>,
    pub token: Option<String>,
    pub debug: bool,
}

impl fmt::Debug for ClientOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientOptions")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("debug", &self.debug)
            .finish()
    }
}

impl ClientOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Reads `MEALIE_BASE_URL`, `MEALIE_API_TOKEN` and `MEALIE_DEBUG`.
    ///
    /// Unset or empty variables leave the corresponding option at its default.
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());

        Self {
            base_url: var("MEALIE_BASE_URL"),
            token: var("MEALIE_API_TOKEN"),
            debug: var("MEALIE_DEBUG")
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        }
    }
}

/// Resolved configuration of one client instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    debug: bool,
}

impl ClientConfig {
    pub fn new(base_url: Option<&str>, debug: bool) -> Self {
        let base_url = base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
            .to_string();

        Self { base_url, debug }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn debug(&self) -> bool {
        self.debug
    }
}

/// Body of a call before serialization.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// Sent as `application/json`.
    Json(Value),
    /// Sent as `application/x-www-form-urlencoded`.
    Form(Vec<(String, String)>),
    /// Forwarded untouched, without a `Content-Type` from us.
    Multipart(MultipartForm),
}

impl RequestBody {
    pub fn json<T: Serialize + ?Sized>(body: &T) -> Result<Self> {
        serde_json::to_value(body)
            .map(Self::Json)
            .map_err(ApiError::Encode)
    }

    pub fn is_multipart(&self) -> bool {
        matches!(self, Self::Multipart(_))
    }
}

/// Per-call options: method, extra headers, body and locale.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Option<RequestBody>,
    pub accept_language: Option<String>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::new(Method::GET)
    }
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            headers: Vec::new(),
            body: None,
            accept_language: None,
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn body(mut self, body: RequestBody) -> Self {
        self.body = Some(body);
        self
    }

    pub fn json(self, body: Value) -> Self {
        self.body(RequestBody::Json(body))
    }

    pub fn multipart(self, form: MultipartForm) -> Self {
        self.body(RequestBody::Multipart(form))
    }

    /// Sets `Accept-Language` for this call only.
    pub fn accept_language(mut self, tag: Option<&str>) -> Self {
        self.accept_language = tag.map(str::to_string);
        self
    }
}

/// The transport core shared by every resource client.
pub struct ApiCore {
    config: ClientConfig,
    pub(crate) token: TokenStore,
    transport: Arc<dyn HttpTransport>,
}

impl fmt::Debug for ApiCore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiCore")
            .field("config", &self.config)
            .field("authenticated", &self.token.get().is_some())
            .finish_non_exhaustive()
    }
}

impl ApiCore {
    pub fn new(options: ClientOptions) -> Self {
        Self::with_transport(options, Arc::new(ReqwestTransport::new()))
    }

    pub fn with_transport(options: ClientOptions, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            config: ClientConfig::new(options.base_url.as_deref(), options.debug),
            token: TokenStore::new(options.token),
            transport,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    /// Assembles the wire request for `path` without sending it.
    pub fn build_request(&self, path: &str, options: RequestOptions) -> Result<HttpRequest> {
        if !path.starts_with('/') {
            return Err(ApiError::InvalidRequest(format!(
                "path must start with '/': {}",
                path
            )));
        }

        let mut headers = HeaderMap::new();
        for (name, value) in &options.headers {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                ApiError::InvalidRequest(format!("invalid header name {}: {}", name, e))
            })?;
            let value = HeaderValue::from_str(value).map_err(|e| {
                ApiError::InvalidRequest(format!("invalid value for header {}: {}", name, e))
            })?;
            headers.append(name, value);
        }

        if let Some(tag) = options.accept_language.as_deref() {
            let value = HeaderValue::from_str(tag).map_err(|e| {
                ApiError::InvalidRequest(format!("invalid Accept-Language {}: {}", tag, e))
            })?;
            headers.insert(ACCEPT_LANGUAGE, value);
        }

        let body = match options.body {
            None => {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
                HttpBody::Empty
            }
            Some(RequestBody::Json(value)) => {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
                HttpBody::Bytes(serde_json::to_vec(&value).map_err(ApiError::Encode)?)
            }
            Some(RequestBody::Form(fields)) => {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));
                HttpBody::Bytes(encode_form(&fields).into_bytes())
            }
            Some(RequestBody::Multipart(form)) => {
                headers.remove(CONTENT_TYPE);
                HttpBody::Multipart(form)
            }
        };

        if let Some(token) = self.token.get() {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| ApiError::InvalidRequest(format!("invalid bearer token: {}", e)))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        Ok(HttpRequest {
            method: options.method,
            url: format!("{}{}", self.config.base_url(), path),
            headers,
            body,
        })
    }

    /// Sends the request and fails on any status outside `200..300`.
    pub async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        if self.config.debug() {
            tracing::debug!(method = %request.method, url = %request.url, "mealie request");
        }

        let response = self.transport.send(request).await?;

        if !response.is_success() {
            return Err(ApiError::http(
                response.status,
                response.status_text.clone(),
                &response.text(),
            ));
        }

        Ok(response)
    }

    /// Performs one call and decodes the JSON response as `T`.
    pub async fn request<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T> {
        let request = self.build_request(path, options)?;
        let response = self.execute(request).await?;
        decode_body(&response)
    }

    /// Performs one call and returns the raw body, for binary endpoints.
    pub async fn request_bytes(&self, path: &str, options: RequestOptions) -> Result<Vec<u8>> {
        let request = self.build_request(path, options)?;
        let response = self.execute(request).await?;
        Ok(response.body)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request(path, RequestOptions::new(Method::GET)).await
    }

    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &QueryParams,
    ) -> Result<T> {
        let path = format!("{}{}", path, query.to_query_string());
        self.request(&path, RequestOptions::new(Method::GET)).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_json(Method::POST, path, body).await
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_json(Method::PUT, path, body).await
    }

    pub async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_json(Method::PATCH, path, body).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request(path, RequestOptions::new(Method::DELETE)).await
    }

    async fn send_json<T, B>(&self, method: Method, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let options = RequestOptions::new(method).body(RequestBody::json(body)?);
        self.request(path, options).await
    }
}

/// Decodes a success body, treating empty text as `{}`.
///
/// Whitespace is not empty: a body of `" "` is a decode error.
pub(crate) fn decode_body<T: DeserializeOwned>(response: &HttpResponse) -> Result<T> {
    let text = response.text();
    let decoded = if text.is_empty() {
        serde_json::from_value(Value::Object(serde_json::Map::new()))
    } else {
        serde_json::from_str(&text)
    };

    decoded.map_err(|source| ApiError::Decode {
        status: response.status,
        body: text,
        source,
    })
}

fn encode_form(fields: &[(String, String)]) -> String {
    fields
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    struct Unreachable;

    #[async_trait]
    impl HttpTransport for Unreachable {
        async fn send(&self, _request: HttpRequest) -> Result<HttpResponse> {
            Err(ApiError::transport("unreachable"))
        }
    }

    fn core(options: ClientOptions) -> ApiCore {
        ApiCore::with_transport(options, Arc::new(Unreachable))
    }

    fn header<'a>(request: &'a HttpRequest, name: &str) -> Option<&'a str> {
        request.headers.get(name).and_then(|v| v.to_str().ok())
    }

    #[test]
    fn base_url_defaults_and_strips_trailing_slash() {
        assert_eq!(ClientConfig::new(None, false).base_url(), DEFAULT_BASE_URL);
        assert_eq!(ClientConfig::new(Some(""), false).base_url(), DEFAULT_BASE_URL);
        assert_eq!(
            ClientConfig::new(Some("https://x.io/"), false).base_url(),
            "https://x.io"
        );
    }

    #[test]
    fn rejects_relative_paths() {
        let err = core(ClientOptions::new())
            .build_request("api/recipes", RequestOptions::default())
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidRequest(_)));
    }

    #[test]
    fn json_body_sets_content_type() {
        let request = core(ClientOptions::new().base_url("https://x.io"))
            .build_request(
                "/api/foods",
                RequestOptions::new(Method::POST).json(json!({"name": "Cherry Tomatoes"})),
            )
            .unwrap();

        assert_eq!(request.url, "https://x.io/api/foods");
        assert_eq!(header(&request, "content-type"), Some(JSON_CONTENT_TYPE));
        assert_eq!(
            request.body.as_bytes(),
            Some(br#"{"name":"Cherry Tomatoes"}"#.as_slice())
        );
    }

    #[test]
    fn multipart_body_has_no_content_type() {
        let form = MultipartForm::new().text("extension", "png");
        let request = core(ClientOptions::new())
            .build_request(
                "/api/recipes/x/image",
                RequestOptions::new(Method::PUT)
                    .header("Content-Type", "text/plain")
                    .multipart(form.clone()),
            )
            .unwrap();

        assert!(request.headers.get(CONTENT_TYPE).is_none());
        assert_eq!(request.body, HttpBody::Multipart(form));
    }

    #[test]
    fn form_body_is_url_encoded() {
        let request = core(ClientOptions::new())
            .build_request(
                "/api/auth/token",
                RequestOptions::new(Method::POST).body(RequestBody::Form(vec![
                    ("username".into(), "chef@example.com".into()),
                    ("password".into(), "p&ss word".into()),
                ])),
            )
            .unwrap();

        assert_eq!(header(&request, "content-type"), Some(FORM_CONTENT_TYPE));
        assert_eq!(
            request.body.as_bytes(),
            Some(b"username=chef%40example.com&password=p%26ss%20word".as_slice())
        );
    }

    #[test]
    fn computed_headers_win_over_caller_headers() {
        let request = core(ClientOptions::new().token("abc"))
            .build_request(
                "/api/users/self",
                RequestOptions::default()
                    .header("Authorization", "Basic nope")
                    .header("X-Trace", "1"),
            )
            .unwrap();

        assert_eq!(header(&request, "authorization"), Some("Bearer abc"));
        assert_eq!(header(&request, "x-trace"), Some("1"));
    }

    #[test]
    fn accept_language_only_when_requested() {
        let core = core(ClientOptions::new());
        let plain = core
            .build_request("/api/app/about", RequestOptions::default())
            .unwrap();
        assert!(plain.headers.get(ACCEPT_LANGUAGE).is_none());

        let localized = core
            .build_request(
                "/api/app/about",
                RequestOptions::default().accept_language(Some("de-DE")),
            )
            .unwrap();
        assert_eq!(header(&localized, "accept-language"), Some("de-DE"));
    }

    #[test]
    fn invalid_header_is_rejected() {
        let err = core(ClientOptions::new())
            .build_request(
                "/api/app/about",
                RequestOptions::default().header("bad header", "x"),
            )
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidRequest(_)));
    }

    #[test]
    fn empty_success_body_decodes_as_empty_object() {
        let response = HttpResponse {
            status: 200,
            status_text: "OK".into(),
            headers: HeaderMap::new(),
            body: Vec::new(),
        };
        let value: Value = decode_body(&response).unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn malformed_success_body_is_a_decode_error() {
        let response = HttpResponse {
            status: 200,
            status_text: "OK".into(),
            headers: HeaderMap::new(),
            body: b"<html>".to_vec(),
        };
        let err = decode_body::<Value>(&response).unwrap_err();
        assert!(err.is_decode());
        assert_eq!(err.http_status(), Some(200));
    }

    #[test]
    fn whitespace_success_body_is_a_decode_error() {
        let response = HttpResponse {
            status: 200,
            status_text: "OK".into(),
            headers: HeaderMap::new(),
            body: b"  \n".to_vec(),
        };
        let err = decode_body::<Value>(&response).unwrap_err();
        assert!(err.is_decode());
    }

    #[test]
    fn debug_output_hides_the_token() {
        let options = ClientOptions::new().token("super-secret-token");
        assert!(!format!("{:?}", options).contains("super-secret-token"));

        let request = core(options)
            .build_request("/api/users/self", RequestOptions::default())
            .unwrap();
        assert!(request.headers[AUTHORIZATION].is_sensitive());
        assert!(!format!("{:?}", request).contains("super-secret-token"));
        assert_eq!(header(&request, "authorization"), Some("Bearer super-secret-token"));
    }
}
