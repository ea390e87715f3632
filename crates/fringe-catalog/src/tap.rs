//! Minimal TAP JSON table format.
//!
//! TAP sync endpoints with `FORMAT=json` answer with column metadata and a
//! row-major value array:
//!
//! ```json
//! {"metadata": [{"name": "ra"}, {"name": "dec"}],
//!  "data": [[279.0, -23.6]]}
//! ```

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Deserialize)]
pub struct TapColumn {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A parsed TAP result table.
#[derive(Debug, Clone, Deserialize)]
pub struct TapTable {
    pub metadata: Vec<TapColumn>,
    pub data: Vec<Vec<Value>>,
}

impl TapTable {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    fn column_index(&self, name: &str) -> Option<usize> {
        self.metadata
            .iter()
            .position(|col| col.name.eq_ignore_ascii_case(name))
    }

    fn cell(&self, row: usize, column: &str) -> Option<&Value> {
        self.data.get(row)?.get(self.column_index(column)?)
    }

    /// Numeric cell; `null` and missing columns are `None`. Some services
    /// emit numbers as strings, so those are parsed too.
    pub fn f64(&self, row: usize, column: &str) -> Option<f64> {
        match self.cell(row, column)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// String cell; `null`, empty and missing columns are `None`.
    pub fn string(&self, row: usize, column: &str) -> Option<String> {
        match self.cell(row, column)? {
            Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            _ => None,
        }
    }
}

/// Quote a string literal for ADQL.
pub fn adql_quote(raw: &str) -> String {
    format!("'{}'", raw.replace('\'', "''"))
}
