//! Batch loader for the three CSV datasets and owner of the linked graph.
//!
//! Load order is Users → Sessions → SessionTexts; each file is independent
//! during parse and no cross-file consistency is assumed until linking.
//! Linking requires the full collections, so processing is batch, not
//! incremental.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use csv::ReaderBuilder;
use serde::Serialize;
use uuid::Uuid;

use crate::config::Config;
use crate::core::filter::retain_recent;
use crate::core::linker::{self, ChildIndex};
use crate::core::parse::RawRow;
use crate::errors::{AppError, AppResult, RowError};
use crate::models::{Session, SessionText, User};
use crate::utils::path::resolve_data_dir;

pub const USER_FILE: &str = "user.csv";
pub const SESSION_FILE: &str = "session.csv";
pub const SESSION_TEXT_FILE: &str = "session_text.csv";

/// Snapshot of the loaded collections. Computed on demand, never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadStats {
    pub users: usize,
    pub sessions: usize,
    pub session_texts: usize,
    pub users_with_sessions: usize,
    pub sessions_with_messages: usize,
}

/// Loads, filters, indexes and links the call-session datasets.
///
/// The loader owns the flat record collections; relationships live in
/// uuid→index maps built by the linker, and `sessions_of`/`messages_of` are
/// the derived read-only views over them.
pub struct DataLoader {
    data_dir: PathBuf,
    registration_days: i64,
    reference_now: NaiveDateTime,

    user_file: String,
    session_file: String,
    session_text_file: String,

    users: Vec<User>,
    sessions: Vec<Session>,
    session_texts: Vec<SessionText>,

    users_by_uuid: HashMap<Uuid, usize>,
    sessions_by_uuid: HashMap<Uuid, usize>,

    messages_by_session: ChildIndex,
    sessions_by_user: ChildIndex,
}

impl DataLoader {
    /// Loader over `data_dir` with the registration window anchored at the
    /// current local time.
    pub fn new(data_dir: impl Into<PathBuf>, registration_days: i64) -> Self {
        Self::with_reference(data_dir, registration_days, Local::now().naive_local())
    }

    /// Same, but with an explicit reference "now". This is the constructor
    /// tests use to keep the window deterministic.
    pub fn with_reference(
        data_dir: impl Into<PathBuf>,
        registration_days: i64,
        now: NaiveDateTime,
    ) -> Self {
        Self {
            data_dir: data_dir.into(),
            registration_days,
            reference_now: now,
            user_file: USER_FILE.to_string(),
            session_file: SESSION_FILE.to_string(),
            session_text_file: SESSION_TEXT_FILE.to_string(),
            users: Vec::new(),
            sessions: Vec::new(),
            session_texts: Vec::new(),
            users_by_uuid: HashMap::new(),
            sessions_by_uuid: HashMap::new(),
            messages_by_session: ChildIndex::new(),
            sessions_by_user: ChildIndex::new(),
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        let mut loader = Self::new(resolve_data_dir(cfg), cfg.registration_days);
        loader.user_file = cfg.user_file.clone();
        loader.session_file = cfg.session_file.clone();
        loader.session_text_file = cfg.session_text_file.clone();
        loader
    }

    /// Load the three datasets with their configured file names and, unless
    /// disabled, run both linking passes.
    pub fn load_all(&mut self, link: bool) -> AppResult<()> {
        let (users, sessions, texts) = (
            self.user_file.clone(),
            self.session_file.clone(),
            self.session_text_file.clone(),
        );
        self.load_users(&users)?;
        self.load_sessions(&sessions)?;
        self.load_session_texts(&texts)?;

        if link {
            self.link_all();
        }
        Ok(())
    }

    /// Parse the user file, apply the registration-window filter and rebuild
    /// the uuid index. Returns the retained slice.
    pub fn load_users(&mut self, filename: &str) -> AppResult<&[User]> {
        let parsed = read_records(&self.data_dir.join(filename), User::from_row)?;
        self.users = retain_recent(parsed, self.reference_now, self.registration_days);
        self.users_by_uuid = index_by_uuid(self.users.iter().map(|u| u.uuid));
        Ok(&self.users)
    }

    /// Parse the session file and rebuild the uuid index. No window filter
    /// applies to sessions.
    pub fn load_sessions(&mut self, filename: &str) -> AppResult<&[Session]> {
        self.sessions = read_records(&self.data_dir.join(filename), Session::from_row)?;
        self.sessions_by_uuid = index_by_uuid(self.sessions.iter().map(|s| s.uuid));
        Ok(&self.sessions)
    }

    pub fn load_session_texts(&mut self, filename: &str) -> AppResult<&[SessionText]> {
        self.session_texts = read_records(&self.data_dir.join(filename), SessionText::from_row)?;
        Ok(&self.session_texts)
    }

    /// Run both linking passes, texts→sessions first. Replaces the previous
    /// index maps wholesale, so calling it again is idempotent.
    pub fn link_all(&mut self) {
        self.link_texts_to_sessions();
        self.link_sessions_to_users();
    }

    pub fn link_texts_to_sessions(&mut self) {
        self.messages_by_session = linker::link_texts_to_sessions(&self.session_texts);
    }

    pub fn link_sessions_to_users(&mut self) {
        self.sessions_by_user = linker::link_sessions_to_users(&self.sessions);
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn session_texts(&self) -> &[SessionText] {
        &self.session_texts
    }

    /// Point lookup by identity key. A duplicate uuid in the source file
    /// resolves to the last record parsed (last-write-wins, not an error).
    pub fn user_by_uuid(&self, uuid: &Uuid) -> Option<&User> {
        self.users_by_uuid.get(uuid).map(|&i| &self.users[i])
    }

    pub fn session_by_uuid(&self, uuid: &Uuid) -> Option<&Session> {
        self.sessions_by_uuid.get(uuid).map(|&i| &self.sessions[i])
    }

    /// Sessions attached to this user, ordered by begin time (missing
    /// timestamps first). Empty before `link_all` or for users nothing
    /// linked to.
    pub fn sessions_of(&self, user: &User) -> Vec<&Session> {
        match self.sessions_by_user.get(&user.uuid) {
            Some(group) => group.iter().map(|&i| &self.sessions[i]).collect(),
            None => Vec::new(),
        }
    }

    /// Messages of this session, ordered by the message sort key.
    pub fn messages_of(&self, session: &Session) -> Vec<&SessionText> {
        match self.messages_by_session.get(&session.uuid) {
            Some(group) => group.iter().map(|&i| &self.session_texts[i]).collect(),
            None => Vec::new(),
        }
    }

    pub fn stats(&self) -> LoadStats {
        let users_with_sessions = self
            .users
            .iter()
            .filter(|u| self.has_children(&self.sessions_by_user, &u.uuid))
            .count();
        let sessions_with_messages = self
            .sessions
            .iter()
            .filter(|s| self.has_children(&self.messages_by_session, &s.uuid))
            .count();

        LoadStats {
            users: self.users.len(),
            sessions: self.sessions.len(),
            session_texts: self.session_texts.len(),
            users_with_sessions,
            sessions_with_messages,
        }
    }

    fn has_children(&self, index: &ChildIndex, key: &Uuid) -> bool {
        index.get(key).is_some_and(|g| !g.is_empty())
    }
}

fn index_by_uuid(keys: impl Iterator<Item = Uuid>) -> HashMap<Uuid, usize> {
    // enumerate + collect: a duplicate key keeps the later position
    keys.enumerate().map(|(i, k)| (k, i)).collect()
}

/// Read one CSV file into records, silently dropping rows whose required
/// columns fail to parse. Any I/O or CSV-level failure is fatal.
fn read_records<T>(
    path: &Path,
    from_row: impl Fn(&RawRow) -> Result<T, RowError>,
) -> AppResult<Vec<T>> {
    if !path.exists() {
        return Err(AppError::FileNotFound(path.display().to_string()));
    }

    let mut reader = ReaderBuilder::new().flexible(true).from_path(path)?;
    let headers = reader.headers()?.clone();

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result?;
        match from_row(&RawRow::new(&headers, &record)) {
            Ok(rec) => records.push(rec),
            Err(_) => continue, // malformed row, skip
        }
    }

    Ok(records)
}
