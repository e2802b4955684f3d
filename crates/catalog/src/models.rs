use serde::{Deserialize, Serialize};

use crate::schema::{self, CatalogRecord, SqlValue, TableSchema};

/// A preset car. Option references are plain ids into the option tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    pub name: String,
    pub isconvertible: bool,
    pub exterior: i32,
    pub roof: i32,
    pub wheels: i32,
    pub interior: i32,
    pub price: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exterior {
    pub color: String,
    pub image: String,
    pub price: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interior {
    pub color: String,
    pub image: String,
    pub price: i32,
    #[serde(default)]
    pub iscombo: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wheel {
    pub color: String,
    pub image: String,
    pub price: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roof {
    pub color: String,
    pub image: String,
    pub price: i32,
    pub isconvertible: bool,
}

impl CatalogRecord for Car {
    const SCHEMA: TableSchema = schema::CARS;

    fn label(&self) -> &str {
        &self.name
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::Text(self.name.clone()),
            SqlValue::Boolean(self.isconvertible),
            SqlValue::Integer(self.exterior),
            SqlValue::Integer(self.roof),
            SqlValue::Integer(self.wheels),
            SqlValue::Integer(self.interior),
            SqlValue::Integer(self.price),
        ]
    }
}

impl CatalogRecord for Exterior {
    const SCHEMA: TableSchema = schema::EXTERIORS;

    fn label(&self) -> &str {
        &self.color
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::Text(self.color.clone()),
            SqlValue::Text(self.image.clone()),
            SqlValue::Integer(self.price),
        ]
    }
}

impl CatalogRecord for Interior {
    const SCHEMA: TableSchema = schema::INTERIORS;

    fn label(&self) -> &str {
        &self.color
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::Text(self.color.clone()),
            SqlValue::Text(self.image.clone()),
            SqlValue::Integer(self.price),
            SqlValue::NullableBoolean(self.iscombo),
        ]
    }
}

impl CatalogRecord for Wheel {
    const SCHEMA: TableSchema = schema::WHEELS;

    fn label(&self) -> &str {
        &self.color
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::Text(self.color.clone()),
            SqlValue::Text(self.image.clone()),
            SqlValue::Integer(self.price),
        ]
    }
}

impl CatalogRecord for Roof {
    const SCHEMA: TableSchema = schema::ROOFS;

    fn label(&self) -> &str {
        &self.color
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::Text(self.color.clone()),
            SqlValue::Text(self.image.clone()),
            SqlValue::Integer(self.price),
            SqlValue::Boolean(self.isconvertible),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ColumnType;

    fn assert_values_match_schema<R: CatalogRecord>(record: &R) {
        let values = record.values();
        assert_eq!(values.len(), R::SCHEMA.columns.len());

        for (value, column) in values.iter().zip(R::SCHEMA.columns) {
            let ok = match value {
                SqlValue::Text(_) => column.ty == ColumnType::Text,
                SqlValue::Integer(_) => column.ty == ColumnType::Integer,
                SqlValue::Boolean(_) => column.ty == ColumnType::Boolean,
                SqlValue::NullableBoolean(_) => {
                    column.ty == ColumnType::Boolean && column.nullable
                }
            };
            assert!(ok, "{}.{} bound as {:?}", R::SCHEMA.name, column.name, value);
        }
    }

    #[test]
    fn test_values_follow_column_order() {
        let car = Car {
            name: "Midnight Runner".to_string(),
            isconvertible: true,
            exterior: 2,
            roof: 3,
            wheels: 4,
            interior: 5,
            price: 65000,
        };

        assert_eq!(car.label(), "Midnight Runner");
        assert_eq!(
            car.values(),
            vec![
                SqlValue::Text("Midnight Runner".to_string()),
                SqlValue::Boolean(true),
                SqlValue::Integer(2),
                SqlValue::Integer(3),
                SqlValue::Integer(4),
                SqlValue::Integer(5),
                SqlValue::Integer(65000),
            ]
        );
        assert_values_match_schema(&car);
    }

    #[test]
    fn test_all_records_match_schema() {
        assert_values_match_schema(&Exterior {
            color: "Red".to_string(),
            image: "red.png".to_string(),
            price: 500,
        });
        assert_values_match_schema(&Interior {
            color: "Black".to_string(),
            image: "black.png".to_string(),
            price: 0,
            iscombo: None,
        });
        assert_values_match_schema(&Wheel {
            color: "Chrome".to_string(),
            image: "chrome.png".to_string(),
            price: 800,
        });
        assert_values_match_schema(&Roof {
            color: "Soft Top".to_string(),
            image: "soft-top.png".to_string(),
            price: 1500,
            isconvertible: true,
        });
    }
}
