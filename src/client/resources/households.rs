//! The current user's household and the household-scoped resources.

use crate::client::error::Result;
use crate::client::query::PaginationQuery;
use crate::client::resources::mealplans::MealPlansApi;
use crate::client::resources::shopping::{ShoppingItemsApi, ShoppingListsApi};
use crate::client::resources::Scope;
use crate::client::types::{HouseholdPreferences, HouseholdSummary, Pagination, UserSummary};

#[derive(Debug, Clone, Copy)]
pub struct HouseholdsApi<'a> {
    scope: Scope<'a>,
}

localized!(HouseholdsApi);

impl<'a> HouseholdsApi<'a> {
    /// Shopping lists of this household. Inherits the locale of this handle.
    pub fn shopping_lists(&self) -> ShoppingListsApi<'a> {
        ShoppingListsApi::from_scope(self.scope)
    }

    pub fn shopping_items(&self) -> ShoppingItemsApi<'a> {
        ShoppingItemsApi::from_scope(self.scope)
    }

    pub fn mealplans(&self) -> MealPlansApi<'a> {
        MealPlansApi::from_scope(self.scope)
    }

    pub async fn self_info(&self) -> Result<HouseholdSummary> {
        self.scope.get("/api/households/self").await
    }

    pub async fn preferences(&self) -> Result<HouseholdPreferences> {
        self.scope.get("/api/households/preferences").await
    }

    pub async fn members(&self, query: &PaginationQuery) -> Result<Pagination<UserSummary>> {
        self.scope
            .get_query("/api/households/members", &query.to_params())
            .await
    }
}
