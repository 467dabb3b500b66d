//! The current user, ratings and favorites.

use reqwest::Method;
use serde_json::Value;

use crate::client::error::Result;
use crate::client::resources::{segment, Scope};
use crate::client::types::{UserOut, UserRating, UserRatingUpdate, UserRatings};

#[derive(Debug, Clone, Copy)]
pub struct UsersApi<'a> {
    scope: Scope<'a>,
}

localized!(UsersApi);

impl UsersApi<'_> {
    /// The user the bearer token belongs to.
    pub async fn me(&self) -> Result<UserOut> {
        self.scope.get("/api/users/self").await
    }

    pub async fn ratings(&self) -> Result<UserRatings> {
        self.scope.get("/api/users/self/ratings").await
    }

    pub async fn rating_for(&self, recipe_id: &str) -> Result<UserRating> {
        self.scope
            .get(&format!("/api/users/self/ratings/{}", segment(recipe_id)))
            .await
    }

    pub async fn favorites(&self) -> Result<UserRatings> {
        self.scope.get("/api/users/self/favorites").await
    }

    pub async fn set_rating(
        &self,
        user_id: &str,
        slug: &str,
        update: &UserRatingUpdate,
    ) -> Result<Value> {
        let path = format!(
            "/api/users/{}/ratings/{}",
            segment(user_id),
            segment(slug)
        );
        self.scope.send(Method::POST, &path, update).await
    }

    pub async fn add_favorite(&self, user_id: &str, slug: &str) -> Result<Value> {
        let path = format!(
            "/api/users/{}/favorites/{}",
            segment(user_id),
            segment(slug)
        );
        self.scope.call(Method::POST, &path).await
    }

    pub async fn remove_favorite(&self, user_id: &str, slug: &str) -> Result<Value> {
        let path = format!(
            "/api/users/{}/favorites/{}",
            segment(user_id),
            segment(slug)
        );
        self.scope.delete(&path).await
    }
}
