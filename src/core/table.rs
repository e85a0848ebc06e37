use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::primitives::{decimal_to_f64, parse_numeric_text};
use crate::error::{ChartError, ChartResult};

/// Role carrying the progress value of each ring. Required.
pub const PERCENTAGE_ROLE: &str = "percentage";
/// Role carrying the ring label used for color assignment. Optional.
pub const LABEL_ROLE: &str = "label";

/// One cell of the input table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Number(f64),
    Decimal(Decimal),
    Text(String),
}

impl CellValue {
    /// Numeric reading of the cell. Blank cells read as `0`.
    pub fn to_f64(&self, field_name: &str) -> ChartResult<f64> {
        match self {
            Self::Null => Ok(0.0),
            Self::Number(value) => Ok(*value),
            Self::Decimal(value) => decimal_to_f64(*value, field_name),
            Self::Text(text) => parse_numeric_text(text, field_name),
        }
    }

    /// Text reading of the cell, `None` for blank cells.
    #[must_use]
    pub fn to_label(&self) -> Option<String> {
        match self {
            Self::Null => None,
            Self::Number(value) => Some(value.to_string()),
            Self::Decimal(value) => Some(value.to_string()),
            Self::Text(text) => Some(text.clone()),
        }
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<Decimal> for CellValue {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableColumn {
    pub name: String,
    #[serde(default)]
    pub roles: SmallVec<[String; 2]>,
}

impl TableColumn {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            roles: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.roles.push(role.into());
        self
    }

    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|candidate| candidate == role)
    }
}

/// Row-oriented table with named column roles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataTable {
    pub columns: Vec<TableColumn>,
    #[serde(default)]
    pub rows: Vec<Vec<CellValue>>,
}

impl DataTable {
    #[must_use]
    pub fn new(columns: Vec<TableColumn>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_row(mut self, row: Vec<CellValue>) -> Self {
        self.rows.push(row);
        self
    }

    /// Index of the first column carrying `role`.
    #[must_use]
    pub fn role_index(&self, role: &str) -> Option<usize> {
        self.columns.iter().position(|column| column.has_role(role))
    }

    /// Cell at `column` in `row`; short rows read as blank.
    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> &CellValue {
        static BLANK: CellValue = CellValue::Null;
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .unwrap_or(&BLANK)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse table: {e}")))
    }
}
