//! Registration-window filter applied to the parsed user collection.

use chrono::{Duration, NaiveDateTime};

use crate::models::User;

/// Retain users whose registration falls inside the trailing window:
/// `registration_time >= now - window_days`.
///
/// Users without a registration timestamp are always dropped. Input order is
/// preserved. Runs once, right after parse and before indexing or linking,
/// so expired users never appear anywhere in the final graph.
pub fn retain_recent(users: Vec<User>, now: NaiveDateTime, window_days: i64) -> Vec<User> {
    let cutoff = now - Duration::days(window_days);
    users
        .into_iter()
        .filter(|u| u.registration_time.is_some_and(|t| t >= cutoff))
        .collect()
}
