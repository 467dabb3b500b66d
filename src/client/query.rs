//! Query string construction.
//!
//! Options are collected into an ordered [`QueryParams`] list of `(key, value)`
//! pairs. Each value is a [`QueryValue`], and encoding dispatches on its variant:
//!
//! - [`QueryValue::Absent`] drops the key entirely
//! - empty strings and zero are kept (`?q=` and `?count=0` are meaningful)
//! - lists are comma-joined under a single key, and an empty list drops the key
//! - objects are JSON-stringified
//! - everything else is stringified
//!
//! Keys and values are percent-encoded. List elements are encoded one by one and
//! joined with a literal `,` so the separator survives as a separator.
//!
//! [`PaginationQuery`] is the narrow variant used by most list endpoints: it only
//! knows the pagination and ordering fields and always emits them in the same order.

use serde::Serialize;
use serde_json::{Number, Value};

use crate::client::error::{ApiError, Result};

/// A scalar that may appear inside a list value.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryScalar {
    Str(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
}

impl QueryScalar {
    fn render(&self) -> String {
        match self {
            Self::Str(s) => s.clone(),
            Self::Int(n) => n.to_string(),
            Self::UInt(n) => n.to_string(),
            Self::Float(n) => n.to_string(),
            Self::Bool(b) => b.to_string(),
        }
    }
}

/// The value half of a query option.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Absent,
    Scalar(QueryScalar),
    List(Vec<QueryScalar>),
    Object(Value),
}

impl QueryValue {
    /// Percent-encoded form of the value, or `None` when the key is to be omitted.
    fn encode(&self) -> Option<String> {
        match self {
            Self::Absent => None,
            Self::Scalar(scalar) => Some(urlencoding::encode(&scalar.render()).into_owned()),
            Self::List(items) if items.is_empty() => None,
            Self::List(items) => Some(
                items
                    .iter()
                    .map(|item| urlencoding::encode(&item.render()).into_owned())
                    .collect::<Vec<_>>()
                    .join(","),
            ),
            Self::Object(Value::Null) => None,
            Self::Object(value) => Some(urlencoding::encode(&value.to_string()).into_owned()),
        }
    }
}

macro_rules! scalar_from {
    ($variant:ident, $cast:ty: $($ty:ty),+) => {
        $(
            impl From<$ty> for QueryScalar {
                fn from(value: $ty) -> Self {
                    Self::$variant(value as $cast)
                }
            }

            impl From<$ty> for QueryValue {
                fn from(value: $ty) -> Self {
                    Self::Scalar(value.into())
                }
            }
        )+
    };
}

scalar_from!(Int, i64: i8, i16, i32, i64, u8, u16, u32);
scalar_from!(UInt, u64: u64, usize);
scalar_from!(Float, f64: f32, f64);

impl From<bool> for QueryScalar {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<&str> for QueryScalar {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for QueryScalar {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for QueryScalar {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<&String> for QueryValue {
    fn from(value: &String) -> Self {
        Self::Scalar(value.into())
    }
}

impl<T: Into<QueryScalar>> From<Vec<T>> for QueryValue {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<QueryScalar> + Clone> From<&[T]> for QueryValue {
    fn from(values: &[T]) -> Self {
        Self::List(values.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<QueryValue>> From<Option<T>> for QueryValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

impl From<Number> for QueryScalar {
    fn from(n: Number) -> Self {
        if let Some(i) = n.as_i64() {
            Self::Int(i)
        } else if let Some(u) = n.as_u64() {
            Self::UInt(u)
        } else {
            // Finite by construction: serde_json has no NaN or infinity.
            Self::Float(n.as_f64().unwrap_or_default())
        }
    }
}

impl From<Value> for QueryValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Absent,
            Value::Bool(b) => b.into(),
            Value::Number(n) => Self::Scalar(n.into()),
            Value::String(s) => s.into(),
            Value::Array(items) => Self::List(
                items
                    .into_iter()
                    .filter_map(|item| match item {
                        Value::Bool(b) => Some(b.into()),
                        Value::Number(n) => Some(n.into()),
                        Value::String(s) => Some(s.into()),
                        Value::Null => None,
                        other => Some(QueryScalar::Str(other.to_string())),
                    })
                    .collect(),
            ),
            object @ Value::Object(_) => Self::Object(object),
        }
    }
}

/// An ordered list of query options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    pairs: Vec<(String, QueryValue)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an option, keeping insertion order.
    pub fn push(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.pairs.push((key.into(), value.into()));
        self
    }

    /// Appends a structured value that is sent as a JSON string.
    pub fn push_object<T: Serialize>(self, key: impl Into<String>, value: &T) -> Result<Self> {
        let value = serde_json::to_value(value).map_err(ApiError::Encode)?;
        Ok(self.push(key, QueryValue::Object(value)))
    }

    pub fn extend(mut self, other: QueryParams) -> Self {
        self.pairs.extend(other.pairs);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.iter().all(|(_, value)| value.encode().is_none())
    }

    /// Renders the query string including the leading `?`, or `""` when nothing
    /// remains after omitting absent values.
    pub fn to_query_string(&self) -> String {
        let encoded: Vec<String> = self
            .pairs
            .iter()
            .filter_map(|(key, value)| {
                value
                    .encode()
                    .map(|value| format!("{}={}", urlencoding::encode(key), value))
            })
            .collect();

        if encoded.is_empty() {
            String::new()
        } else {
            format!("?{}", encoded.join("&"))
        }
    }
}

impl<K: Into<String>, V: Into<QueryValue>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

/// Builds a query string from a flat JSON object, in the object's key order.
///
/// Anything other than an object yields an empty string.
pub fn build_query_string(options: &Value) -> String {
    match options {
        Value::Object(map) => map
            .iter()
            .map(|(key, value)| (key.clone(), QueryValue::from(value.clone())))
            .collect::<QueryParams>()
            .to_query_string(),
        _ => String::new(),
    }
}

/// Sort direction accepted by list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderDirection {
    Asc,
    Desc,
}

impl OrderDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Where `null` values sort when ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullPosition {
    First,
    Last,
}

impl NullPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Last => "last",
        }
    }
}

/// Pagination and ordering options shared by list endpoints.
///
/// Fields are always emitted in this order: `page`, `perPage`, `orderBy`,
/// `orderByNullPosition`, `orderDirection`, `queryFilter`, `paginationSeed`,
/// `search`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaginationQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub order_by: Option<String>,
    pub order_by_null_position: Option<NullPosition>,
    pub order_direction: Option<OrderDirection>,
    pub query_filter: Option<String>,
    pub pagination_seed: Option<String>,
    pub search: Option<String>,
}

impl PaginationQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }

    pub fn per_page(mut self, per_page: i64) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub fn order_by(mut self, field: impl Into<String>, direction: OrderDirection) -> Self {
        self.order_by = Some(field.into());
        self.order_direction = Some(direction);
        self
    }

    pub fn nulls(mut self, position: NullPosition) -> Self {
        self.order_by_null_position = Some(position);
        self
    }

    pub fn query_filter(mut self, filter: impl Into<String>) -> Self {
        self.query_filter = Some(filter.into());
        self
    }

    pub fn pagination_seed(mut self, seed: impl Into<String>) -> Self {
        self.pagination_seed = Some(seed.into());
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn to_params(&self) -> QueryParams {
        QueryParams::new()
            .push("page", self.page)
            .push("perPage", self.per_page)
            .push("orderBy", self.order_by.as_deref())
            .push(
                "orderByNullPosition",
                self.order_by_null_position.map(|p| p.as_str()),
            )
            .push("orderDirection", self.order_direction.map(|d| d.as_str()))
            .push("queryFilter", self.query_filter.as_deref())
            .push("paginationSeed", self.pagination_seed.as_deref())
            .push("search", self.search.as_deref())
    }

    pub fn to_query_string(&self) -> String {
        self.to_params().to_query_string()
    }
}
