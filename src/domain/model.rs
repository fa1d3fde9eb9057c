use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Column set every input must provide, in output order.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "RegistrationDate",
    "First Name",
    "Last Name",
    "Phone",
    "Country",
    "Email",
];

/// Columns the upstream export is known to carry and which we always drop.
pub const DROPPED_COLUMNS: [&str; 2] = ["lang", "BrandCode"];

pub const EMAIL_COLUMN: &str = "Email";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    pub fields: HashMap<String, String>,
}

impl Record {
    pub fn new(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }

    /// Missing columns read as empty, which classification treats as missing.
    pub fn get(&self, column: &str) -> &str {
        self.fields.get(column).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, column: &str, value: String) {
        self.fields.insert(column.to_string(), value);
    }
}

/// Ordered sequence of records plus the column order they are written in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Record>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<Record>) -> Self {
        Self { columns, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Value of a row restricted to the column order, for whole-row equality.
    /// Kept as a vector so values never run together, whatever they contain.
    pub fn row_key(&self, record: &Record) -> Vec<String> {
        self.columns
            .iter()
            .map(|c| record.get(c).to_string())
            .collect()
    }

    pub fn rename_column(&mut self, from: &str, to: &str) {
        for column in &mut self.columns {
            if column == from {
                *column = to.to_string();
            }
        }
        for row in &mut self.rows {
            if let Some(value) = row.fields.remove(from) {
                row.fields.insert(to.to_string(), value);
            }
        }
    }
}

/// Output of the transform stage: the partitioned table.
#[derive(Debug, Clone)]
pub struct CleanResult {
    pub valid: Table,
    pub invalid: Table,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    pub valid_count: usize,
    pub invalid_count: usize,
    pub invalid_path: String,
    pub clean_path: String,
}
