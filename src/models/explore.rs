//! Explore models.
//!
//! An explore is a queryable model compiled from dbt: a base table, the
//! tables joined to it, and every dimension and metric those tables expose.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An explore as listed for a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExploreSummary {
    /// Explore name, also its id
    pub name: String,
    /// Display label
    #[serde(default)]
    pub label: Option<String>,
    /// Sidebar group
    #[serde(default)]
    pub group_label: Option<String>,
    /// Explore type, e.g. `default`
    #[serde(rename = "type", default)]
    pub explore_type: Option<String>,
    /// dbt tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Warehouse database
    #[serde(default)]
    pub database_name: Option<String>,
    /// Warehouse schema
    #[serde(default)]
    pub schema_name: Option<String>,
    /// Description from the dbt model
    #[serde(default)]
    pub description: Option<String>,
    /// Compile error, when the explore failed to build
    #[serde(default)]
    pub errors: Vec<Value>,
}

/// Full definition of one explore.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Explore {
    /// Explore name, also its id
    pub name: String,
    /// Display label
    #[serde(default)]
    pub label: Option<String>,
    /// Explore type
    #[serde(rename = "type", default)]
    pub explore_type: Option<String>,
    /// dbt tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Table every query starts from
    #[serde(default)]
    pub base_table: Option<String>,
    /// Sidebar group
    #[serde(default)]
    pub group_label: Option<String>,
    /// Warehouse target database
    #[serde(default)]
    pub target_database: Option<String>,
    /// Warehouse kind
    #[serde(default)]
    pub warehouse: Option<String>,
    /// Path of the dbt SQL file
    #[serde(default)]
    pub sql_path: Option<String>,
    /// Path of the dbt YAML file
    #[serde(default)]
    pub yml_path: Option<String>,
    /// Tables by name
    #[serde(default)]
    pub tables: BTreeMap<String, CompiledTable>,
    /// Join definitions
    #[serde(default)]
    pub joined_tables: Vec<JoinedTable>,
}

impl Explore {
    /// Every dimension across all tables, ordered by table then field name.
    pub fn dimensions(&self) -> impl Iterator<Item = &Field> {
        self.tables.values().flat_map(|t| t.dimensions.values())
    }

    /// Every metric across all tables, ordered by table then field name.
    pub fn metrics(&self) -> impl Iterator<Item = &Field> {
        self.tables.values().flat_map(|t| t.metrics.values())
    }
}

/// A table inside an explore.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompiledTable {
    /// Table name
    pub name: String,
    /// Display label
    #[serde(default)]
    pub label: Option<String>,
    /// Description
    #[serde(default)]
    pub description: Option<String>,
    /// Warehouse database
    #[serde(default)]
    pub database: Option<String>,
    /// Warehouse schema
    #[serde(default)]
    pub schema: Option<String>,
    /// Fully qualified warehouse table
    #[serde(default)]
    pub sql_table: Option<String>,
    /// Row filter applied to every query
    #[serde(default)]
    pub sql_where: Option<String>,
    /// Sidebar group
    #[serde(default)]
    pub group_label: Option<String>,
    /// Whether the table is hidden
    #[serde(default)]
    pub hidden: bool,
    /// Dimensions by field name
    #[serde(default)]
    pub dimensions: BTreeMap<String, Field>,
    /// Metrics by field name
    #[serde(default)]
    pub metrics: BTreeMap<String, Field>,
    /// Filters every query on this table must carry
    #[serde(default)]
    pub required_filters: Vec<Value>,
}

/// Whether a field is a dimension or a metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Dimension
    Dimension,
    /// Metric
    Metric,
}

/// A dimension or metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// Field name within its table
    pub name: String,
    /// Table the field belongs to
    pub table: String,
    /// Dimension or metric
    pub field_type: FieldType,
    /// Data type (`string`, `number`, ...) or metric kind (`sum`, `count_distinct`, ...)
    #[serde(rename = "type", default)]
    pub data_type: Option<String>,
    /// Display label
    #[serde(default)]
    pub label: Option<String>,
    /// Display label of the table
    #[serde(default)]
    pub table_label: Option<String>,
    /// Description
    #[serde(default)]
    pub description: Option<String>,
    /// Raw SQL
    #[serde(default)]
    pub sql: Option<String>,
    /// Compiled SQL
    #[serde(default)]
    pub compiled_sql: Option<String>,
    /// Whether the field is hidden
    #[serde(default)]
    pub hidden: bool,
    /// Sidebar groups
    #[serde(default)]
    pub groups: Vec<String>,
}

impl Field {
    /// The id used to reference this field in queries: `<table>_<name>`,
    /// with dots replaced by double underscores.
    ///
    /// ```
    /// # use lightdash_rs::models::{Field, FieldType};
    /// let field = Field {
    ///     name: "status".into(),
    ///     table: "orders".into(),
    ///     field_type: FieldType::Dimension,
    ///     data_type: None,
    ///     label: None,
    ///     table_label: None,
    ///     description: None,
    ///     sql: None,
    ///     compiled_sql: None,
    ///     hidden: false,
    ///     groups: vec![],
    /// };
    /// assert_eq!(field.field_id(), "orders_status");
    /// ```
    pub fn field_id(&self) -> String {
        format!("{}_{}", self.table, self.name).replace('.', "__")
    }
}

/// A join between the base table and another table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinedTable {
    /// Joined table name
    pub table: String,
    /// Join condition as written
    #[serde(default)]
    pub sql_on: Option<String>,
    /// Join condition after compilation
    #[serde(default)]
    pub compiled_sql_on: Option<String>,
    /// Join type, e.g. `left`
    #[serde(rename = "type", default)]
    pub join_type: Option<String>,
    /// Whether the joined table is hidden
    #[serde(default)]
    pub hidden: Option<bool>,
    /// Whether the join is applied even when no field of the table is selected
    #[serde(default)]
    pub always: Option<bool>,
}
