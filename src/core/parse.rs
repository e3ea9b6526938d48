//! Permissive field parsers shared by the record types.
//!
//! Policy: required identity columns (`uuid`, `session_uuid`, the text `id`)
//! fail the whole row with a RowError; every optional field degrades to a
//! default instead of failing. The asymmetry decides which malformed data is
//! silently dropped and which is silently defaulted, so keep it here in one
//! place rather than scattered through the record types.

use chrono::NaiveDateTime;
use csv::StringRecord;
use uuid::Uuid;

use crate::errors::RowError;
use crate::utils::time::parse_timestamp;

/// One CSV record paired with its header row, addressable by column name.
///
/// Rows shorter than the header read as missing trailing columns, matching
/// how ragged rows behave in the upstream exports.
pub struct RawRow<'r> {
    headers: &'r StringRecord,
    fields: &'r StringRecord,
}

impl<'r> RawRow<'r> {
    pub fn new(headers: &'r StringRecord, fields: &'r StringRecord) -> Self {
        Self { headers, fields }
    }

    /// Value of the named column; None when the header has no such column
    /// or the record is too short to reach it.
    pub fn get(&self, column: &str) -> Option<&'r str> {
        let idx = self.headers.iter().position(|h| h == column)?;
        self.fields.get(idx)
    }
}

pub fn string_or_empty(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

pub fn required_uuid(row: &RawRow, column: &'static str) -> Result<Uuid, RowError> {
    let value = row.get(column).ok_or(RowError::MissingColumn(column))?;
    Uuid::parse_str(value.trim()).map_err(|_| RowError::InvalidUuid {
        column,
        value: value.to_string(),
    })
}

pub fn required_i64(row: &RawRow, column: &'static str) -> Result<i64, RowError> {
    let value = row.get(column).ok_or(RowError::MissingColumn(column))?;
    value.trim().parse::<i64>().map_err(|_| RowError::InvalidInt {
        column,
        value: value.to_string(),
    })
}

/// Optional FK column: empty or malformed reads as absent.
pub fn optional_uuid(value: Option<&str>) -> Option<Uuid> {
    let v = value?.trim();
    if v.is_empty() {
        return None;
    }
    Uuid::parse_str(v).ok()
}

/// Optional timestamp column: any parse failure reads as absent.
pub fn optional_timestamp(value: Option<&str>) -> Option<NaiveDateTime> {
    parse_timestamp(value?)
}

pub fn int_or(value: Option<&str>, default: i64) -> i64 {
    match value {
        Some(v) if !v.trim().is_empty() => v.trim().parse().unwrap_or(default),
        _ => default,
    }
}

pub fn float_or(value: Option<&str>, default: f64) -> f64 {
    match value {
        Some(v) if !v.trim().is_empty() => v.trim().parse().unwrap_or(default),
        _ => default,
    }
}

/// Case-insensitive boolean: {true,1,yes} / {false,0,no}; anything else,
/// including empty, yields the supplied default.
pub fn bool_or(value: Option<&str>, default: bool) -> bool {
    let Some(v) = value else {
        return default;
    };
    match v.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => true,
        "false" | "0" | "no" => false,
        _ => default,
    }
}
