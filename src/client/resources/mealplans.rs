//! Household meal plans.

use chrono::NaiveDate;
use reqwest::Method;

use crate::client::error::Result;
use crate::client::query::{PaginationQuery, QueryParams};
use crate::client::resources::Scope;
use crate::client::types::{
    CreatePlanEntry, CreateRandomEntry, Pagination, PlanEntryType, ReadPlanEntry,
};

const MEALPLANS_PATH: &str = "/api/households/mealplans";

/// Filters for `GET /api/households/mealplans`. Dates are inclusive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MealPlanQuery {
    pub pagination: PaginationQuery,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl MealPlanQuery {
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            pagination: PaginationQuery::default(),
            start_date: Some(start),
            end_date: Some(end),
        }
    }

    pub fn to_params(&self) -> QueryParams {
        let date = |d: Option<NaiveDate>| d.map(|d| d.format("%Y-%m-%d").to_string());
        self.pagination
            .to_params()
            .push("start_date", date(self.start_date))
            .push("end_date", date(self.end_date))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MealPlansApi<'a> {
    scope: Scope<'a>,
}

localized!(MealPlansApi);

impl<'a> MealPlansApi<'a> {
    pub(crate) fn from_scope(scope: Scope<'a>) -> Self {
        Self { scope }
    }
}

impl MealPlansApi<'_> {
    pub async fn list(&self, query: &MealPlanQuery) -> Result<Pagination<ReadPlanEntry>> {
        self.scope.get_query(MEALPLANS_PATH, &query.to_params()).await
    }

    pub async fn today(&self) -> Result<Vec<ReadPlanEntry>> {
        self.scope
            .get(&format!("{}/today", MEALPLANS_PATH))
            .await
    }

    pub async fn get(&self, id: i64) -> Result<ReadPlanEntry> {
        self.scope
            .get(&format!("{}/{}", MEALPLANS_PATH, id))
            .await
    }

    pub async fn create(&self, entry: &CreatePlanEntry) -> Result<ReadPlanEntry> {
        self.scope.send(Method::POST, MEALPLANS_PATH, entry).await
    }

    pub async fn delete(&self, id: i64) -> Result<ReadPlanEntry> {
        self.scope
            .delete(&format!("{}/{}", MEALPLANS_PATH, id))
            .await
    }

    /// Lets the server pick a recipe for the given day and meal.
    pub async fn random(&self, date: NaiveDate, entry_type: PlanEntryType) -> Result<ReadPlanEntry> {
        let body = CreateRandomEntry { date, entry_type };
        self.scope
            .send(Method::POST, &format!("{}/random", MEALPLANS_PATH), &body)
            .await
    }
}
