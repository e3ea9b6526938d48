use chrono::NaiveDateTime;
use serde::Serialize;
use uuid::Uuid;

use crate::core::parse::{self, RawRow};
use crate::errors::RowError;

/// A phone call session parsed from one row of `session.csv`.
///
/// `from_user_uuid` is the optional link to the initiating user; a session
/// without one (or whose user was filtered out) stays in the flat
/// collection but is never attached to any user.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub uuid: Uuid,
    pub from_user_uuid: Option<Uuid>,
    pub session_type: i64,
    pub begin_at: Option<NaiveDateTime>,
    pub end_at: Option<NaiveDateTime>,
    pub duration: f64,
    pub from_language: String,
    pub to_language: String,
    pub is_paid: bool,
    pub is_translation_enabled: bool,
    pub is_ai_call: bool,
}

impl Session {
    /// Build a Session from a raw CSV row.
    ///
    /// `uuid` is the only required column; a malformed `from_user_uuid`
    /// reads as absent rather than failing the row.
    pub fn from_row(row: &RawRow) -> Result<Self, RowError> {
        Ok(Self {
            uuid: parse::required_uuid(row, "uuid")?,
            from_user_uuid: parse::optional_uuid(row.get("from_user_uuid")),
            session_type: parse::int_or(row.get("session_type"), 0),
            begin_at: parse::optional_timestamp(row.get("begin_at")),
            end_at: parse::optional_timestamp(row.get("end_at")),
            duration: parse::float_or(row.get("duration"), 0.0),
            from_language: parse::string_or_empty(row.get("from_language")),
            to_language: parse::string_or_empty(row.get("to_language")),
            is_paid: parse::bool_or(row.get("is_paid"), false),
            is_translation_enabled: parse::bool_or(row.get("is_translation_enabled"), false),
            is_ai_call: parse::bool_or(row.get("is_ai_call"), false),
        })
    }

    /// Language pair for display, e.g. "en→es"; empty codes render as "?".
    pub fn language_pair(&self) -> String {
        let from = if self.from_language.is_empty() {
            "?"
        } else {
            self.from_language.as_str()
        };
        let to = if self.to_language.is_empty() {
            "?"
        } else {
            self.to_language.as_str()
        };
        format!("{}→{}", from, to)
    }
}
