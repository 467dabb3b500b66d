//! Household shopping lists and their items.

use reqwest::Method;

use crate::client::error::Result;
use crate::client::query::{PaginationQuery, QueryParams};
use crate::client::resources::{segment, Scope};
use crate::client::types::{
    CreateShoppingList, CreateShoppingListItem, Pagination, ShoppingList, ShoppingListAddRecipe,
    ShoppingListItem, ShoppingListItemsCollection, SuccessResponse, UpdateShoppingListItem,
};

const LISTS_PATH: &str = "/api/households/shopping/lists";
const ITEMS_PATH: &str = "/api/households/shopping/items";

#[derive(Debug, Clone, Copy)]
pub struct ShoppingListsApi<'a> {
    scope: Scope<'a>,
}

localized!(ShoppingListsApi);

impl<'a> ShoppingListsApi<'a> {
    pub(crate) fn from_scope(scope: Scope<'a>) -> Self {
        Self { scope }
    }
}

impl ShoppingListsApi<'_> {
    pub async fn list(&self, query: &PaginationQuery) -> Result<Pagination<ShoppingList>> {
        self.scope.get_query(LISTS_PATH, &query.to_params()).await
    }

    /// A list with all of its items.
    pub async fn get(&self, id: &str) -> Result<ShoppingList> {
        self.scope
            .get(&format!("{}/{}", LISTS_PATH, segment(id)))
            .await
    }

    pub async fn create(&self, name: &str) -> Result<ShoppingList> {
        let body = CreateShoppingList {
            name: name.to_string(),
        };
        self.scope.send(Method::POST, LISTS_PATH, &body).await
    }

    pub async fn delete(&self, id: &str) -> Result<ShoppingList> {
        self.scope
            .delete(&format!("{}/{}", LISTS_PATH, segment(id)))
            .await
    }

    /// Adds the ingredients of a recipe to the list, scaled by `quantity`.
    pub async fn add_recipe(
        &self,
        list_id: &str,
        recipe_id: &str,
        quantity: f64,
    ) -> Result<ShoppingList> {
        let body = [ShoppingListAddRecipe {
            recipe_id: recipe_id.to_string(),
            recipe_increment_quantity: quantity,
        }];
        self.scope
            .send(
                Method::POST,
                &format!("{}/{}/recipe", LISTS_PATH, segment(list_id)),
                &body,
            )
            .await
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ShoppingItemsApi<'a> {
    scope: Scope<'a>,
}

localized!(ShoppingItemsApi);

impl<'a> ShoppingItemsApi<'a> {
    pub(crate) fn from_scope(scope: Scope<'a>) -> Self {
        Self { scope }
    }
}

impl ShoppingItemsApi<'_> {
    pub async fn list(&self, query: &PaginationQuery) -> Result<Pagination<ShoppingListItem>> {
        self.scope.get_query(ITEMS_PATH, &query.to_params()).await
    }

    pub async fn get(&self, id: &str) -> Result<ShoppingListItem> {
        self.scope
            .get(&format!("{}/{}", ITEMS_PATH, segment(id)))
            .await
    }

    pub async fn create(
        &self,
        item: &CreateShoppingListItem,
    ) -> Result<ShoppingListItemsCollection> {
        self.scope.send(Method::POST, ITEMS_PATH, item).await
    }

    pub async fn update(
        &self,
        id: &str,
        item: &UpdateShoppingListItem,
    ) -> Result<ShoppingListItemsCollection> {
        self.scope
            .send(
                Method::PUT,
                &format!("{}/{}", ITEMS_PATH, segment(id)),
                item,
            )
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<SuccessResponse> {
        self.scope
            .delete(&format!("{}/{}", ITEMS_PATH, segment(id)))
            .await
    }

    /// Deletes several items in one call.
    pub async fn delete_many(&self, ids: &[String]) -> Result<SuccessResponse> {
        let query = QueryParams::new().push("ids", ids);
        self.scope.delete_query(ITEMS_PATH, &query).await
    }
}
