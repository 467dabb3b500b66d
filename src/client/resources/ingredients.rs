//! Foods and units.

use reqwest::Method;

use crate::client::error::Result;
use crate::client::query::PaginationQuery;
use crate::client::resources::{segment, Scope};
use crate::client::types::{
    CreateIngredientFood, CreateIngredientUnit, IngredientFood, IngredientUnit, Pagination,
};

#[derive(Debug, Clone, Copy)]
pub struct FoodsApi<'a> {
    scope: Scope<'a>,
}

localized!(FoodsApi);

impl FoodsApi<'_> {
    pub async fn list(&self, query: &PaginationQuery) -> Result<Pagination<IngredientFood>> {
        self.scope.get_query("/api/foods", &query.to_params()).await
    }

    pub async fn get(&self, id: &str) -> Result<IngredientFood> {
        self.scope.get(&format!("/api/foods/{}", segment(id))).await
    }

    pub async fn create(&self, food: &CreateIngredientFood) -> Result<IngredientFood> {
        self.scope.send(Method::POST, "/api/foods", food).await
    }

    pub async fn update(&self, id: &str, food: &CreateIngredientFood) -> Result<IngredientFood> {
        self.scope
            .send(Method::PUT, &format!("/api/foods/{}", segment(id)), food)
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<IngredientFood> {
        self.scope
            .delete(&format!("/api/foods/{}", segment(id)))
            .await
    }
}

#[derive(Debug, Clone, Copy)]
pub struct UnitsApi<'a> {
    scope: Scope<'a>,
}

localized!(UnitsApi);

impl UnitsApi<'_> {
    pub async fn list(&self, query: &PaginationQuery) -> Result<Pagination<IngredientUnit>> {
        self.scope.get_query("/api/units", &query.to_params()).await
    }

    pub async fn get(&self, id: &str) -> Result<IngredientUnit> {
        self.scope.get(&format!("/api/units/{}", segment(id))).await
    }

    pub async fn create(&self, unit: &CreateIngredientUnit) -> Result<IngredientUnit> {
        self.scope.send(Method::POST, "/api/units", unit).await
    }

    pub async fn update(&self, id: &str, unit: &CreateIngredientUnit) -> Result<IngredientUnit> {
        self.scope
            .send(Method::PUT, &format!("/api/units/{}", segment(id)), unit)
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<IngredientUnit> {
        self.scope
            .delete(&format!("/api/units/{}", segment(id)))
            .await
    }
}
