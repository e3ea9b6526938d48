use chrono::NaiveDateTime;
use serde::Serialize;
use uuid::Uuid;

use crate::core::parse::{self, RawRow};
use crate::errors::RowError;

/// One text entry of a session conversation, parsed from `session_text.csv`.
///
/// A pure leaf record: never a parent, immutable after parse. The integer
/// `id` is secondary to `uuid` and only matters as the ordering fallback for
/// entries without a `start_at` timestamp.
#[derive(Debug, Clone, Serialize)]
pub struct SessionText {
    pub id: i64,
    pub uuid: Uuid,
    pub session_uuid: Uuid,
    pub start_at: Option<NaiveDateTime>,
    pub text: String,
    pub text_translated: String,
    pub speaker: i64,
    pub is_input: i64,
    #[serde(rename = "type")]
    pub kind: i64,
}

impl SessionText {
    /// Build a SessionText from a raw CSV row.
    ///
    /// Three required columns: `id`, `uuid` and `session_uuid`. Any of them
    /// missing or malformed discards the row.
    pub fn from_row(row: &RawRow) -> Result<Self, RowError> {
        Ok(Self {
            id: parse::required_i64(row, "id")?,
            uuid: parse::required_uuid(row, "uuid")?,
            session_uuid: parse::required_uuid(row, "session_uuid")?,
            start_at: parse::optional_timestamp(row.get("start_at")),
            text: parse::string_or_empty(row.get("text")),
            text_translated: parse::string_or_empty(row.get("text_translated")),
            speaker: parse::int_or(row.get("speaker"), 0),
            is_input: parse::int_or(row.get("is_input"), 0),
            kind: parse::int_or(row.get("type"), 0),
        })
    }

    /// Speaker code → label (0 = user, 1 = AI, by convention of the export).
    pub fn speaker_str(&self) -> &'static str {
        match self.speaker {
            1 => "ai",
            _ => "user",
        }
    }
}
