use chrono::NaiveDateTime;
use serde::Serialize;
use uuid::Uuid;

use crate::core::parse::{self, RawRow};
use crate::errors::RowError;

/// A user account parsed from one row of `user.csv`.
///
/// The input column `created_at` is surfaced as `registration_time`.
/// Records stay immutable after parse; the session links belong to the
/// loader's index, not to the record.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub uuid: Uuid,
    pub nick_name: String,
    pub credits: f64,
    pub email: String,
    pub registration_time: Option<NaiveDateTime>,
}

impl User {
    /// Build a User from a raw CSV row.
    ///
    /// Only a missing or malformed `uuid` discards the row; every other
    /// field falls back to its default.
    pub fn from_row(row: &RawRow) -> Result<Self, RowError> {
        Ok(Self {
            uuid: parse::required_uuid(row, "uuid")?,
            nick_name: parse::string_or_empty(row.get("nick_name")),
            credits: parse::float_or(row.get("credits"), 0.0),
            email: parse::string_or_empty(row.get("email")),
            registration_time: parse::optional_timestamp(row.get("created_at")),
        })
    }
}
