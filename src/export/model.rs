// src/export/model.rs

use serde::Serialize;
use uuid::Uuid;

use crate::core::loader::DataLoader;
use crate::models::{Session, SessionText, User};
use crate::utils::time::format_timestamp;

/// Bounds of the exported sample: first N users, first M sessions each,
/// first K messages each.
#[derive(Debug, Clone, Copy)]
pub struct SampleLimits {
    pub users: usize,
    pub sessions: usize,
    pub messages: usize,
}

impl Default for SampleLimits {
    fn default() -> Self {
        Self {
            users: 3,
            sessions: 5,
            messages: 10,
        }
    }
}

/// Nested sample tree serialized for the JSON export. Timestamps render as
/// ISO-8601 strings, absent ones as null.
#[derive(Serialize, Clone, Debug)]
pub struct UserExport {
    pub uuid: Uuid,
    pub nick_name: String,
    pub credits: f64,
    pub email: String,
    pub registration_time: Option<String>,
    pub sessions: Vec<SessionExport>,
}

#[derive(Serialize, Clone, Debug)]
pub struct SessionExport {
    pub uuid: Uuid,
    pub session_type: i64,
    pub begin_at: Option<String>,
    pub end_at: Option<String>,
    pub duration: f64,
    pub from_language: String,
    pub to_language: String,
    pub is_paid: bool,
    pub is_translation_enabled: bool,
    pub is_ai_call: bool,
    pub messages: Vec<MessageExport>,
}

#[derive(Serialize, Clone, Debug)]
pub struct MessageExport {
    pub id: i64,
    pub uuid: Uuid,
    pub start_at: Option<String>,
    pub text: String,
    pub text_translated: String,
    pub speaker: i64,
    pub is_input: i64,
    #[serde(rename = "type")]
    pub kind: i64,
}

/// Struttura piatta per l'export CSV: una riga per sessione.
#[derive(Serialize, Clone, Debug)]
pub struct SessionRow {
    pub uuid: Uuid,
    pub from_user_uuid: Option<Uuid>,
    pub session_type: i64,
    pub begin_at: Option<String>,
    pub end_at: Option<String>,
    pub duration: f64,
    pub from_language: String,
    pub to_language: String,
    pub is_paid: bool,
    pub is_translation_enabled: bool,
    pub is_ai_call: bool,
    pub message_count: usize,
}

pub fn build_sample(loader: &DataLoader, limits: SampleLimits) -> Vec<UserExport> {
    loader
        .users()
        .iter()
        .take(limits.users)
        .map(|u| user_export(loader, u, limits))
        .collect()
}

pub fn build_session_rows(loader: &DataLoader) -> Vec<SessionRow> {
    loader
        .sessions()
        .iter()
        .map(|s| SessionRow {
            uuid: s.uuid,
            from_user_uuid: s.from_user_uuid,
            session_type: s.session_type,
            begin_at: fmt_opt(s.begin_at),
            end_at: fmt_opt(s.end_at),
            duration: s.duration,
            from_language: s.from_language.clone(),
            to_language: s.to_language.clone(),
            is_paid: s.is_paid,
            is_translation_enabled: s.is_translation_enabled,
            is_ai_call: s.is_ai_call,
            message_count: loader.messages_of(s).len(),
        })
        .collect()
}

fn user_export(loader: &DataLoader, user: &User, limits: SampleLimits) -> UserExport {
    UserExport {
        uuid: user.uuid,
        nick_name: user.nick_name.clone(),
        credits: user.credits,
        email: user.email.clone(),
        registration_time: fmt_opt(user.registration_time),
        sessions: loader
            .sessions_of(user)
            .into_iter()
            .take(limits.sessions)
            .map(|s| session_export(loader, s, limits))
            .collect(),
    }
}

fn session_export(loader: &DataLoader, session: &Session, limits: SampleLimits) -> SessionExport {
    SessionExport {
        uuid: session.uuid,
        session_type: session.session_type,
        begin_at: fmt_opt(session.begin_at),
        end_at: fmt_opt(session.end_at),
        duration: session.duration,
        from_language: session.from_language.clone(),
        to_language: session.to_language.clone(),
        is_paid: session.is_paid,
        is_translation_enabled: session.is_translation_enabled,
        is_ai_call: session.is_ai_call,
        messages: loader
            .messages_of(session)
            .into_iter()
            .take(limits.messages)
            .map(message_export)
            .collect(),
    }
}

fn message_export(text: &SessionText) -> MessageExport {
    MessageExport {
        id: text.id,
        uuid: text.uuid,
        start_at: fmt_opt(text.start_at),
        text: text.text.clone(),
        text_translated: text.text_translated.clone(),
        speaker: text.speaker,
        is_input: text.is_input,
        kind: text.kind,
    }
}

fn fmt_opt(t: Option<chrono::NaiveDateTime>) -> Option<String> {
    t.map(|t| format_timestamp(&t))
}
