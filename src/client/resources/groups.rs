//! The current user's group.

use crate::client::error::Result;
use crate::client::query::PaginationQuery;
use crate::client::resources::Scope;
use crate::client::types::{
    GroupSummary, HouseholdSummary, MultiPurposeLabel, Pagination, UserSummary,
};

#[derive(Debug, Clone, Copy)]
pub struct GroupsApi<'a> {
    scope: Scope<'a>,
}

localized!(GroupsApi);

impl GroupsApi<'_> {
    pub async fn self_info(&self) -> Result<GroupSummary> {
        self.scope.get("/api/groups/self").await
    }

    pub async fn households(
        &self,
        query: &PaginationQuery,
    ) -> Result<Pagination<HouseholdSummary>> {
        self.scope
            .get_query("/api/groups/households", &query.to_params())
            .await
    }

    pub async fn members(&self, query: &PaginationQuery) -> Result<Pagination<UserSummary>> {
        self.scope
            .get_query("/api/groups/members", &query.to_params())
            .await
    }

    /// Labels used to group shopping list items.
    pub async fn labels(&self, query: &PaginationQuery) -> Result<Pagination<MultiPurposeLabel>> {
        self.scope
            .get_query("/api/groups/labels", &query.to_params())
            .await
    }
}
