//! Relationship linking: group child records by parent key, sort each
//! group, keep the result as parent-uuid → child-index lists.
//!
//! The linker never fails: a child whose parent key resolves to nothing is
//! simply left out of every group (an orphan), and a parent with no group
//! reads as having no children.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::models::{Session, SessionText};
use crate::utils::time::epoch_seconds;

/// Child indices per parent uuid, each list already in display order.
/// Indices point into the flat collection the map was built from.
pub type ChildIndex = HashMap<Uuid, Vec<usize>>;

/// Sort key for messages inside a session: epoch seconds of `start_at` when
/// present, the raw `id` when not.
///
/// Reducing both branches to one i64 domain keeps the order total; entries
/// without a timestamp interleave by id near the epoch instead of clumping
/// uniformly first or last.
pub fn message_sort_key(text: &SessionText) -> i64 {
    text.start_at.map(|t| epoch_seconds(&t)).unwrap_or(text.id)
}

/// Sort key for sessions under a user: `begin_at`, with missing values
/// sorted to the earliest position.
pub fn session_sort_key(session: &Session) -> NaiveDateTime {
    session.begin_at.unwrap_or(NaiveDateTime::MIN)
}

/// Group the whole text collection by `session_uuid` and sort each group.
///
/// No pre-filtering: groups for session uuids that never loaded are built
/// too and simply never looked up. Ties keep file order (stable sort).
pub fn link_texts_to_sessions(texts: &[SessionText]) -> ChildIndex {
    let mut by_session: ChildIndex = HashMap::new();
    for (i, text) in texts.iter().enumerate() {
        by_session.entry(text.session_uuid).or_default().push(i);
    }

    for group in by_session.values_mut() {
        group.sort_by_key(|&i| message_sort_key(&texts[i]));
    }

    by_session
}

/// Group sessions by `from_user_uuid` and sort each group by begin time.
/// Sessions without the FK are skipped and stay orphaned.
pub fn link_sessions_to_users(sessions: &[Session]) -> ChildIndex {
    let mut by_user: ChildIndex = HashMap::new();
    for (i, session) in sessions.iter().enumerate() {
        if let Some(owner) = session.from_user_uuid {
            by_user.entry(owner).or_default().push(i);
        }
    }

    for group in by_user.values_mut() {
        group.sort_by_key(|&i| session_sort_key(&sessions[i]));
    }

    by_user
}
