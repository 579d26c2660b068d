//! Persisted schema layout: the `hosts`, `listings` and `reviews` tables.
//!
//! Every table carries an implicit, storage-assigned `id` primary key that
//! is not listed among its columns. Backends render these definitions into
//! their own DDL dialect.

use chrono::NaiveDateTime;

/// Name of the auto-assigned primary key column on every table.
pub const ID_COLUMN: &str = "id";

/// Column types used by the rental tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    VarChar(u16),
    Text,
    Boolean,
    Integer,
    Timestamp,
    /// 64-bit foreign key to the `id` of the named table.
    Reference(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDefinition {
    pub name: &'static str,
    pub column_type: ColumnType,
}

const fn column(name: &'static str, column_type: ColumnType) -> ColumnDefinition {
    ColumnDefinition { name, column_type }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableDefinition {
    pub name: &'static str,
    pub columns: &'static [ColumnDefinition],
}

impl TableDefinition {
    /// Column names in insert order.
    pub fn column_names(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.name).collect()
    }

    /// `(column, parent table)` pairs for every foreign key.
    pub fn references(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.columns.iter().filter_map(|c| match c.column_type {
            ColumnType::Reference(parent) => Some((c.name, parent)),
            _ => None,
        })
    }
}

pub const HOSTS: TableDefinition = TableDefinition {
    name: "hosts",
    columns: &[
        column("name", ColumnType::VarChar(255)),
        column("host_is_superhost", ColumnType::Boolean),
        column("created_at", ColumnType::Timestamp),
        column("updated_at", ColumnType::Timestamp),
    ],
};

pub const LISTINGS: TableDefinition = TableDefinition {
    name: "listings",
    columns: &[
        column("name", ColumnType::VarChar(255)),
        column("room_type", ColumnType::VarChar(50)),
        column("minimum_nights", ColumnType::Integer),
        column("host_id", ColumnType::Reference("hosts")),
        column("price", ColumnType::VarChar(20)),
        column("created_at", ColumnType::Timestamp),
        column("updated_at", ColumnType::Timestamp),
    ],
};

pub const REVIEWS: TableDefinition = TableDefinition {
    name: "reviews",
    columns: &[
        column("listing_id", ColumnType::Reference("listings")),
        column("reviewer_name", ColumnType::VarChar(255)),
        column("comments", ColumnType::Text),
        column("sentiment", ColumnType::VarChar(50)),
        column("date", ColumnType::Timestamp),
    ],
};

/// All tables in creation order (parents before children).
pub const TABLES: [TableDefinition; 3] = [HOSTS, LISTINGS, REVIEWS];

/// A positional parameter bound into an INSERT.
#[derive(Debug, Clone, PartialEq)]
pub enum SeedValue {
    Bool(bool),
    Int32(i32),
    Int64(i64),
    Text(String),
    Timestamp(NaiveDateTime),
}

impl SeedValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SeedValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            SeedValue::Int32(i) => Some(i64::from(*i)),
            SeedValue::Int64(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            SeedValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<NaiveDateTime> {
        match self {
            SeedValue::Timestamp(ts) => Some(*ts),
            _ => None,
        }
    }
}
