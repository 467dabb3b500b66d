//! Categories, tags and tools share one endpoint layout under `/api/organizers`.

use reqwest::Method;

use crate::client::api::ApiCore;
use crate::client::error::Result;
use crate::client::query::PaginationQuery;
use crate::client::resources::{segment, Scope};
use crate::client::types::{CreateOrganizer, Pagination, RecipeOrganizer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrganizerKind {
    Categories,
    Tags,
    Tools,
}

impl OrganizerKind {
    fn base_path(&self) -> &'static str {
        match self {
            Self::Categories => "/api/organizers/categories",
            Self::Tags => "/api/organizers/tags",
            Self::Tools => "/api/organizers/tools",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct OrganizersApi<'a> {
    scope: Scope<'a>,
    kind: OrganizerKind,
}

impl<'a> OrganizersApi<'a> {
    pub(crate) fn new(core: &'a ApiCore, kind: OrganizerKind) -> Self {
        Self {
            scope: Scope::new(core),
            kind,
        }
    }

    /// Sends `Accept-Language: <tag>` with calls made through this handle.
    pub fn locale(mut self, tag: &'a str) -> Self {
        self.scope = self.scope.with_locale(tag);
        self
    }

    pub fn kind(&self) -> OrganizerKind {
        self.kind
    }

    pub async fn list(&self, query: &PaginationQuery) -> Result<Pagination<RecipeOrganizer>> {
        self.scope
            .get_query(self.kind.base_path(), &query.to_params())
            .await
    }

    pub async fn get(&self, id: &str) -> Result<RecipeOrganizer> {
        self.scope
            .get(&format!("{}/{}", self.kind.base_path(), segment(id)))
            .await
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<RecipeOrganizer> {
        self.scope
            .get(&format!("{}/slug/{}", self.kind.base_path(), segment(slug)))
            .await
    }

    pub async fn create(&self, name: &str) -> Result<RecipeOrganizer> {
        let body = CreateOrganizer {
            name: name.to_string(),
        };
        self.scope
            .send(Method::POST, self.kind.base_path(), &body)
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<RecipeOrganizer> {
        self.scope
            .delete(&format!("{}/{}", self.kind.base_path(), segment(id)))
            .await
    }
}
