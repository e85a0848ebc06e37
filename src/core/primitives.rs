use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Parses a numeric text cell, tolerating surrounding whitespace.
pub fn parse_numeric_text(text: &str, field_name: &str) -> ChartResult<f64> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| ChartError::InvalidData(format!("{field_name} `{text}` is not numeric")))
}
