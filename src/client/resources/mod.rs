//! Resource clients.
//!
//! Each resource is a thin borrowed handle over [`ApiCore`]: methods build a
//! path, optionally a query string, and make exactly one call. Handles are
//! obtained from [`MealieClient`](crate::MealieClient) and accept a per-call
//! locale that is sent as `Accept-Language`:
//!
//! ```no_run
//! # async fn example(client: &mealie_client::MealieClient) -> mealie_client::Result<()> {
//! let recipe = client.recipes().locale("de-DE").get("pfannkuchen").await?;
//! # Ok(())
//! # }
//! ```

/// Adds `locale` to a resource handle wrapping a [`Scope`].
macro_rules! localized {
    ($handle:ident) => {
        impl<'a> $handle<'a> {
            pub(crate) fn new(core: &'a $crate::client::api::ApiCore) -> Self {
                Self {
                    scope: $crate::client::resources::Scope::new(core),
                }
            }

            /// Sends `Accept-Language: <tag>` with calls made through this handle.
            pub fn locale(mut self, tag: &'a str) -> Self {
                self.scope = self.scope.with_locale(tag);
                self
            }
        }
    };
}

pub mod about;
pub mod groups;
pub mod households;
pub mod ingredients;
pub mod mealplans;
pub mod organizers;
pub mod recipes;
pub mod shopping;
pub mod users;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::client::api::{ApiCore, RequestBody, RequestOptions};
use crate::client::error::Result;
use crate::client::query::QueryParams;
use crate::client::transport::MultipartForm;

/// Percent-encodes one path segment (a slug or an id).
pub(crate) fn segment(value: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(value)
}

/// What every resource handle holds: the core and an optional locale.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Scope<'a> {
    core: &'a ApiCore,
    locale: Option<&'a str>,
}

impl<'a> Scope<'a> {
    pub(crate) fn new(core: &'a ApiCore) -> Self {
        Self { core, locale: None }
    }

    pub(crate) fn with_locale(mut self, tag: &'a str) -> Self {
        self.locale = Some(tag);
        self
    }

    fn options(&self, method: Method) -> RequestOptions {
        RequestOptions::new(method).accept_language(self.locale)
    }

    /// A call without a body.
    pub(crate) async fn call<T: DeserializeOwned>(&self, method: Method, path: &str) -> Result<T> {
        self.core.request(path, self.options(method)).await
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.call(Method::GET, path).await
    }

    pub(crate) async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &QueryParams,
    ) -> Result<T> {
        let path = format!("{}{}", path, query.to_query_string());
        self.core.request(&path, self.options(Method::GET)).await
    }

    pub(crate) async fn get_bytes(&self, path: &str) -> Result<Vec<u8>> {
        self.core.request_bytes(path, self.options(Method::GET)).await
    }

    pub(crate) async fn send<T, B>(&self, method: Method, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let options = self.options(method).body(RequestBody::json(body)?);
        self.core.request(path, options).await
    }

    pub(crate) async fn send_multipart<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        form: MultipartForm,
    ) -> Result<T> {
        self.core
            .request(path, self.options(method).multipart(form))
            .await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.call(Method::DELETE, path).await
    }

    pub(crate) async fn delete_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &QueryParams,
    ) -> Result<T> {
        let path = format!("{}{}", path, query.to_query_string());
        self.core.request(&path, self.options(Method::DELETE)).await
    }
}
