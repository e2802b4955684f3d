//! Table schemas for the catalog and the SQL generated from them.
//!
//! Every catalog table is described by a [`TableSchema`]: its name plus the
//! ordered list of data columns. The generated `id SERIAL PRIMARY KEY` column
//! is implicit and never part of an insert.

/// SQL type of a data column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Text,
    Boolean,
    Integer,
}

impl ColumnType {
    pub fn as_sql(&self) -> &'static str {
        match self {
            ColumnType::Text => "VARCHAR(255)",
            ColumnType::Boolean => "BOOLEAN",
            ColumnType::Integer => "INTEGER",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub ty: ColumnType,
    pub nullable: bool,
}

impl Column {
    pub const fn required(name: &'static str, ty: ColumnType) -> Self {
        Self {
            name,
            ty,
            nullable: false,
        }
    }

    pub const fn optional(name: &'static str, ty: ColumnType) -> Self {
        Self {
            name,
            ty,
            nullable: true,
        }
    }

    fn definition(&self) -> String {
        if self.nullable {
            format!("{} {}", self.name, self.ty.as_sql())
        } else {
            format!("{} {} NOT NULL", self.name, self.ty.as_sql())
        }
    }
}

/// A catalog table: name, display names used in log lines, and data columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSchema {
    pub name: &'static str,
    /// Capitalized plural, e.g. `Cars`.
    pub title: &'static str,
    /// Lowercase singular, e.g. `car`.
    pub singular: &'static str,
    pub columns: &'static [Column],
}

impl TableSchema {
    /// Drop-and-recreate DDL for this table, as a single multi-statement string.
    pub fn reset_sql(&self) -> String {
        let mut defs = vec!["id SERIAL PRIMARY KEY".to_string()];
        defs.extend(self.columns.iter().map(Column::definition));

        format!(
            "DROP TABLE IF EXISTS {name};\n\nCREATE TABLE IF NOT EXISTS {name} (\n    {defs}\n);",
            name = self.name,
            defs = defs.join(",\n    "),
        )
    }

    /// Insert statement with one positional parameter per data column.
    pub fn insert_sql(&self) -> String {
        let names: Vec<&str> = self.columns.iter().map(|c| c.name).collect();
        let params: Vec<String> = (1..=self.columns.len()).map(|i| format!("${i}")).collect();

        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.name,
            names.join(", "),
            params.join(", ")
        )
    }
}

pub const CARS: TableSchema = TableSchema {
    name: "cars",
    title: "Cars",
    singular: "car",
    columns: &[
        Column::required("name", ColumnType::Text),
        Column::required("isconvertible", ColumnType::Boolean),
        Column::required("exterior", ColumnType::Integer),
        Column::required("roof", ColumnType::Integer),
        Column::required("wheels", ColumnType::Integer),
        Column::required("interior", ColumnType::Integer),
        Column::required("price", ColumnType::Integer),
    ],
};

pub const EXTERIORS: TableSchema = TableSchema {
    name: "exteriors",
    title: "Exteriors",
    singular: "exterior",
    columns: &[
        Column::required("color", ColumnType::Text),
        Column::required("image", ColumnType::Text),
        Column::required("price", ColumnType::Integer),
    ],
};

pub const INTERIORS: TableSchema = TableSchema {
    name: "interiors",
    title: "Interiors",
    singular: "interior",
    columns: &[
        Column::required("color", ColumnType::Text),
        Column::required("image", ColumnType::Text),
        Column::required("price", ColumnType::Integer),
        Column::optional("iscombo", ColumnType::Boolean),
    ],
};

pub const WHEELS: TableSchema = TableSchema {
    name: "wheels",
    title: "Wheels",
    singular: "wheel",
    columns: &[
        Column::required("color", ColumnType::Text),
        Column::required("image", ColumnType::Text),
        Column::required("price", ColumnType::Integer),
    ],
};

pub const ROOFS: TableSchema = TableSchema {
    name: "roofs",
    title: "Roofs",
    singular: "roof",
    columns: &[
        Column::required("color", ColumnType::Text),
        Column::required("image", ColumnType::Text),
        Column::required("price", ColumnType::Integer),
        Column::required("isconvertible", ColumnType::Boolean),
    ],
};

pub const ALL_TABLES: [TableSchema; 5] = [CARS, EXTERIORS, INTERIORS, WHEELS, ROOFS];

/// Looks up one of the catalog tables by name.
pub fn find_table(name: &str) -> Option<&'static TableSchema> {
    ALL_TABLES.iter().find(|t| t.name == name)
}

/// A single positional bind value for an insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlValue {
    Text(String),
    Boolean(bool),
    NullableBoolean(Option<bool>),
    Integer(i32),
}

/// A record that seeds one row of a catalog table.
pub trait CatalogRecord: Send + Sync + 'static {
    const SCHEMA: TableSchema;

    /// Human-readable identifier used in log lines.
    fn label(&self) -> &str;

    /// Bind values in [`TableSchema::columns`] order.
    fn values(&self) -> Vec<SqlValue>;
}
