use std::sync::Arc;

use crate::client::api::{ApiCore, ClientOptions, RequestOptions};
use crate::client::error::Result;
use crate::client::resources::{
    about::AboutApi,
    groups::GroupsApi,
    households::HouseholdsApi,
    ingredients::{FoodsApi, UnitsApi},
    mealplans::MealPlansApi,
    organizers::{OrganizerKind, OrganizersApi},
    recipes::RecipesApi,
    shopping::{ShoppingItemsApi, ShoppingListsApi},
    users::UsersApi,
};
use crate::client::transport::HttpTransport;
use crate::client::types::AuthToken;

/// Client for one Mealie server.
///
/// Holds the transport core and hands out resource handles that borrow it.
/// All methods take `&self`, so a client can be wrapped in an `Arc` and shared
/// across tasks.
#[derive(Debug)]
pub struct MealieClient {
    core: ApiCore,
}

impl MealieClient {
    /// Builds a client backed by `reqwest`.
    pub fn new(options: ClientOptions) -> Self {
        Self {
            core: ApiCore::new(options),
        }
    }

    /// Builds a client that sends requests through `transport`.
    pub fn with_transport(options: ClientOptions, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            core: ApiCore::with_transport(options, transport),
        }
    }

    /// Shorthand for a client with only a base URL.
    pub fn from_base_url(base_url: impl Into<String>) -> Self {
        Self::new(ClientOptions::new().base_url(base_url))
    }

    pub fn core(&self) -> &ApiCore {
        &self.core
    }

    pub fn base_url(&self) -> &str {
        self.core.base_url()
    }

    pub async fn authenticate(&self, username: &str, password: &str) -> Result<AuthToken> {
        self.core.authenticate(username, password).await
    }

    pub async fn refresh_token(&self) -> Result<AuthToken> {
        self.core.refresh_token().await
    }

    pub fn is_authenticated(&self) -> bool {
        self.core.is_authenticated()
    }

    pub fn set_token(&self, token: impl Into<String>) {
        self.core.set_token(token);
    }

    pub fn clear_token(&self) {
        self.core.clear_token();
    }

    pub fn token(&self) -> Option<String> {
        self.core.token()
    }

    pub fn token_preview(&self) -> Option<String> {
        self.core.token.preview()
    }

    /// Raw access to any endpoint not covered by a resource handle.
    pub async fn request<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T> {
        self.core.request(path, options).await
    }

    pub fn about(&self) -> AboutApi<'_> {
        AboutApi::new(&self.core)
    }

    pub fn users(&self) -> UsersApi<'_> {
        UsersApi::new(&self.core)
    }

    pub fn recipes(&self) -> RecipesApi<'_> {
        RecipesApi::new(&self.core)
    }

    pub fn foods(&self) -> FoodsApi<'_> {
        FoodsApi::new(&self.core)
    }

    pub fn units(&self) -> UnitsApi<'_> {
        UnitsApi::new(&self.core)
    }

    pub fn categories(&self) -> OrganizersApi<'_> {
        OrganizersApi::new(&self.core, OrganizerKind::Categories)
    }

    pub fn tags(&self) -> OrganizersApi<'_> {
        OrganizersApi::new(&self.core, OrganizerKind::Tags)
    }

    pub fn tools(&self) -> OrganizersApi<'_> {
        OrganizersApi::new(&self.core, OrganizerKind::Tools)
    }

    pub fn households(&self) -> HouseholdsApi<'_> {
        HouseholdsApi::new(&self.core)
    }

    pub fn shopping_lists(&self) -> ShoppingListsApi<'_> {
        ShoppingListsApi::new(&self.core)
    }

    pub fn shopping_items(&self) -> ShoppingItemsApi<'_> {
        ShoppingItemsApi::new(&self.core)
    }

    pub fn mealplans(&self) -> MealPlansApi<'_> {
        MealPlansApi::new(&self.core)
    }

    pub fn groups(&self) -> GroupsApi<'_> {
        GroupsApi::new(&self.core)
    }
}
