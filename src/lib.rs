//! # Mealie Client Library
//!
//! A typed client for the Mealie recipe manager's HTTP API. Method calls are
//! translated into HTTP requests, and responses (or failures) come back as typed
//! values or a single [`ApiError`].
//!
//! ## Layers
//!
//! - The **transport core** ([`client::api`]) owns the base URL and bearer token,
//!   assembles headers and bodies, and normalizes every outcome
//! - The **query serializer** ([`client::query`]) turns typed options into a
//!   query string
//! - **Resource clients** ([`client::resources`]) are thin handles that make one
//!   call each through the core
//!
//! ## Quick Start
//!
//! ```no_run
//! use mealie_client::{ClientOptions, MealieClient, PaginationQuery};
//!
//! # async fn example() -> mealie_client::Result<()> {
//! let client = MealieClient::new(
//!     ClientOptions::new()
//!         .base_url("http://localhost:9000")
//!         .token("my-long-lived-api-token"),
//! );
//!
//! let about = client.about().info().await?;
//! println!("Mealie {}", about.version);
//!
//! let foods = client.foods().list(&PaginationQuery::new().search("tomato")).await?;
//! for food in foods.items {
//!     println!("- {}", food.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;

pub use client::*;
