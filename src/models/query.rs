//! Metric query models used by the compile-query endpoint.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Default row limit for a metric query.
pub const DEFAULT_QUERY_LIMIT: u32 = 500;

/// A metric query against one explore.
///
/// # Example
///
/// ```
/// use lightdash_rs::models::MetricQuery;
///
/// let query = MetricQuery::new("orders")
///     .dimension("orders_status")
///     .metric("orders_total_amount")
///     .sort("orders_total_amount", true)
///     .limit(10);
/// assert_eq!(query.limit, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricQuery {
    /// Name of the explore to query
    pub explore_name: String,
    /// Dimension field ids
    #[serde(default)]
    pub dimensions: Vec<String>,
    /// Metric field ids
    #[serde(default)]
    pub metrics: Vec<String>,
    /// Filters
    #[serde(default)]
    pub filters: Filters,
    /// Sort order
    #[serde(default)]
    pub sorts: Vec<SortField>,
    /// Row limit
    #[serde(default = "default_limit")]
    pub limit: u32,
    /// Table calculations
    #[serde(default)]
    pub table_calculations: Vec<TableCalculation>,
}

fn default_limit() -> u32 {
    DEFAULT_QUERY_LIMIT
}

impl MetricQuery {
    /// Start an empty query against an explore.
    pub fn new(explore_name: impl Into<String>) -> Self {
        Self {
            explore_name: explore_name.into(),
            dimensions: Vec::new(),
            metrics: Vec::new(),
            filters: Filters::default(),
            sorts: Vec::new(),
            limit: DEFAULT_QUERY_LIMIT,
            table_calculations: Vec::new(),
        }
    }

    /// Add a dimension.
    pub fn dimension(mut self, field_id: impl Into<String>) -> Self {
        self.dimensions.push(field_id.into());
        self
    }

    /// Add a metric.
    pub fn metric(mut self, field_id: impl Into<String>) -> Self {
        self.metrics.push(field_id.into());
        self
    }

    /// Add a sort.
    pub fn sort(mut self, field_id: impl Into<String>, descending: bool) -> Self {
        self.sorts.push(SortField {
            field_id: field_id.into(),
            descending,
        });
        self
    }

    /// Set the row limit.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Replace the filters.
    pub fn filters(mut self, filters: Filters) -> Self {
        self.filters = filters;
        self
    }
}

/// Filter groups for dimensions and metrics.
///
/// Filter trees are passed through as raw JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Filters {
    /// Dimension filter group
    #[serde(default)]
    pub dimensions: Map<String, Value>,
    /// Metric filter group
    #[serde(default)]
    pub metrics: Map<String, Value>,
}

/// One sort key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortField {
    /// Field id to sort by
    pub field_id: String,
    /// Sort descending
    pub descending: bool,
}

/// A SQL expression evaluated over the query results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCalculation {
    /// Calculation id
    pub name: String,
    /// Display name
    pub display_name: String,
    /// SQL expression
    pub sql: String,
}
