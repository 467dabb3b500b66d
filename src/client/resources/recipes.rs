//! Recipe search, CRUD, import and images.

use reqwest::Method;
use serde_json::Value;

use crate::client::error::Result;
use crate::client::query::{PaginationQuery, QueryParams};
use crate::client::resources::{segment, Scope};
use crate::client::transport::MultipartForm;
use crate::client::types::{
    CreateRecipe, Pagination, Recipe, RecipeDuplicate, RecipeSuggestionResponse, RecipeSummary,
    ScrapeRecipe, UpdateImageResponse,
};

/// Filters for `GET /api/recipes`.
///
/// Organizer and food filters take ids or slugs and are sent comma-joined.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeQuery {
    pub pagination: PaginationQuery,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub tools: Vec<String>,
    pub foods: Vec<String>,
    pub households: Vec<String>,
    pub require_all_categories: Option<bool>,
    pub require_all_tags: Option<bool>,
    pub require_all_tools: Option<bool>,
    pub require_all_foods: Option<bool>,
    /// Restrict results to one cookbook, by id or slug
    pub cookbook: Option<String>,
}

impl RecipeQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pagination(mut self, pagination: PaginationQuery) -> Self {
        self.pagination = pagination;
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.pagination.search = Some(search.into());
        self
    }

    pub fn categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn tools<I, S>(mut self, tools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tools = tools.into_iter().map(Into::into).collect();
        self
    }

    pub fn foods<I, S>(mut self, foods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.foods = foods.into_iter().map(Into::into).collect();
        self
    }

    pub fn cookbook(mut self, cookbook: impl Into<String>) -> Self {
        self.cookbook = Some(cookbook.into());
        self
    }

    pub fn to_params(&self) -> QueryParams {
        self.pagination
            .to_params()
            .push("categories", self.categories.as_slice())
            .push("tags", self.tags.as_slice())
            .push("tools", self.tools.as_slice())
            .push("foods", self.foods.as_slice())
            .push("households", self.households.as_slice())
            .push("requireAllCategories", self.require_all_categories)
            .push("requireAllTags", self.require_all_tags)
            .push("requireAllTools", self.require_all_tools)
            .push("requireAllFoods", self.require_all_foods)
            .push("cookbook", self.cookbook.as_deref())
    }
}

/// Variants of the recipe image served by the media endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageSize {
    #[default]
    Original,
    Min,
    Tiny,
}

impl ImageSize {
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Original => "original.webp",
            Self::Min => "min-original.webp",
            Self::Tiny => "tiny-original.webp",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RecipesApi<'a> {
    scope: Scope<'a>,
}

localized!(RecipesApi);

impl RecipesApi<'_> {
    pub async fn list(&self, query: &RecipeQuery) -> Result<Pagination<RecipeSummary>> {
        self.scope.get_query("/api/recipes", &query.to_params()).await
    }

    pub async fn get(&self, slug: &str) -> Result<Recipe> {
        self.scope
            .get(&format!("/api/recipes/{}", segment(slug)))
            .await
    }

    /// Creates an empty recipe and returns its slug.
    pub async fn create(&self, name: &str) -> Result<String> {
        let body = CreateRecipe {
            name: name.to_string(),
        };
        self.scope.send(Method::POST, "/api/recipes", &body).await
    }

    /// Scrapes a recipe from a web page and returns the new slug.
    pub async fn create_from_url(&self, url: &str, include_tags: bool) -> Result<String> {
        let body = ScrapeRecipe {
            url: url.to_string(),
            include_tags,
        };
        self.scope
            .send(Method::POST, "/api/recipes/create/url", &body)
            .await
    }

    /// Replaces the whole recipe.
    pub async fn update(&self, slug: &str, recipe: &Recipe) -> Result<Recipe> {
        self.scope
            .send(
                Method::PUT,
                &format!("/api/recipes/{}", segment(slug)),
                recipe,
            )
            .await
    }

    /// Updates only the fields present in `changes`.
    pub async fn patch(&self, slug: &str, changes: &Value) -> Result<Recipe> {
        self.scope
            .send(
                Method::PATCH,
                &format!("/api/recipes/{}", segment(slug)),
                changes,
            )
            .await
    }

    pub async fn delete(&self, slug: &str) -> Result<Recipe> {
        self.scope
            .delete(&format!("/api/recipes/{}", segment(slug)))
            .await
    }

    pub async fn duplicate(&self, slug: &str, name: Option<&str>) -> Result<Recipe> {
        let body = RecipeDuplicate {
            name: name.map(str::to_string),
        };
        self.scope
            .send(
                Method::POST,
                &format!("/api/recipes/{}/duplicate", segment(slug)),
                &body,
            )
            .await
    }

    /// Downloads the recipe image. Takes the recipe id, not the slug.
    pub async fn image(&self, recipe_id: &str, size: ImageSize) -> Result<Vec<u8>> {
        self.scope
            .get_bytes(&format!(
                "/api/media/recipes/{}/images/{}",
                segment(recipe_id),
                size.file_name()
            ))
            .await
    }

    /// Uploads a new image. `extension` is the file type without the dot.
    pub async fn update_image(
        &self,
        slug: &str,
        image: Vec<u8>,
        extension: &str,
    ) -> Result<UpdateImageResponse> {
        let form = MultipartForm::new()
            .file("image", format!("image.{}", extension), None, image)
            .text("extension", extension);
        self.scope
            .send_multipart(
                Method::PUT,
                &format!("/api/recipes/{}/image", segment(slug)),
                form,
            )
            .await
    }

    /// Recipes that can be made with the given foods and tools.
    pub async fn suggestions(
        &self,
        foods: &[String],
        tools: &[String],
        limit: Option<i64>,
    ) -> Result<RecipeSuggestionResponse> {
        let query = QueryParams::new()
            .push("foods", foods)
            .push("tools", tools)
            .push("limit", limit);
        self.scope.get_query("/api/recipes/suggestions", &query).await
    }
}
