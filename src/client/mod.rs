//! # Mealie HTTP Client
//!
//! This module provides a typed HTTP client for the Mealie API, handling
//! authentication, request assembly, error normalization and the per-resource
//! endpoints.
//!
//! ## Modules
//!
//! - [`api`] - Transport core: configuration, headers, body encoding, outcome normalization
//! - [`transport`] - Injectable HTTP capability and its `reqwest` implementation
//! - [`query`] - Query string serializers
//! - [`auth`] - Bearer token storage and the login call
//! - [`error`] - The [`ApiError`] type
//! - [`resources`] - Per-resource handles (recipes, foods, households, ...)
//! - [`types`] - Request and response shapes
//!
//! ## Quick Start
//!
//! ```no_run
//! use mealie_client::{ClientOptions, MealieClient, RecipeQuery};
//!
//! # async fn example() -> mealie_client::Result<()> {
//! let client = MealieClient::new(ClientOptions::new().base_url("http://localhost:9000"));
//!
//! client.authenticate("changeme@example.com", "MyPassword").await?;
//!
//! let recipes = client.recipes().list(&RecipeQuery::new().search("pasta")).await?;
//! println!("Found {} recipes", recipes.total);
//! # Ok(())
//! # }
//! ```

pub mod auth;
#[allow(clippy::module_inception)]
pub mod client;
pub mod api;
pub mod error;
pub mod query;
pub mod resources;
pub mod transport;
pub mod types;

pub use self::client::MealieClient;
pub use self::api::{
    ApiCore, ClientConfig, ClientOptions, RequestBody, RequestOptions, DEFAULT_BASE_URL,
};
pub use self::error::{ApiError, ResponseBody, Result};
pub use self::query::{
    build_query_string, NullPosition, OrderDirection, PaginationQuery, QueryParams, QueryValue,
};
pub use self::resources::mealplans::MealPlanQuery;
pub use self::resources::organizers::OrganizerKind;
pub use self::resources::recipes::{ImageSize, RecipeQuery};
pub use self::transport::{
    HttpBody, HttpRequest, HttpResponse, HttpTransport, MultipartForm, ReqwestTransport,
};
pub use self::types::*;
