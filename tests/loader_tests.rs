mod common;
use common::*;

use callview::core::loader::DataLoader;
use callview::errors::AppError;
use chrono::{NaiveDate, NaiveDateTime};
use std::path::Path;
use uuid::Uuid;

fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 1, 20)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn write_window_users(dir: &Path) {
    // registrations 1, 10 and 50 days before the fixed reference now
    write_file(
        dir,
        "user.csv",
        &format!(
            "{USER_HEADER}\n\
             {USER_A},fresh,0,fresh@x.com,2026-01-19T08:00:00\n\
             {USER_B},recent,0,recent@x.com,2026-01-10T08:00:00\n\
             cccccccc-0000-0000-0000-000000000003,old,0,old@x.com,2025-12-01T08:00:00\n"
        ),
    );
}

fn retained_nicks(dir: &Path, window_days: i64) -> Vec<String> {
    let mut loader = DataLoader::with_reference(dir, window_days, fixed_now());
    loader.load_users("user.csv").expect("load users");
    loader.users().iter().map(|u| u.nick_name.clone()).collect()
}

#[test]
fn window_filter_is_monotonic() {
    let dir = setup_data_dir("window_monotonic");
    write_window_users(&dir);

    let narrow = retained_nicks(&dir, 5);
    let medium = retained_nicks(&dir, 15);
    let wide = retained_nicks(&dir, 100);

    assert_eq!(narrow, vec!["fresh"]);
    assert_eq!(medium, vec!["fresh", "recent"]);
    assert_eq!(wide, vec!["fresh", "recent", "old"]);

    // a larger window never removes a user retained at a smaller one
    assert!(narrow.iter().all(|n| medium.contains(n)));
    assert!(medium.iter().all(|n| wide.contains(n)));
}

#[test]
fn null_registration_is_always_excluded() {
    let dir = setup_data_dir("null_registration");
    write_file(
        &dir,
        "user.csv",
        &format!(
            "{USER_HEADER}\n\
             {USER_A},ghost,0,ghost@x.com,\n\
             {USER_B},alive,0,alive@x.com,2026-01-19T08:00:00\n"
        ),
    );
    // a session that would link to the excluded user
    write_file(
        &dir,
        "session.csv",
        &format!("{SESSION_HEADER}\n{SESSION_A},{USER_A},1,2026-01-10T10:00:00,,0,,,0,0,0\n"),
    );
    write_file(&dir, "session_text.csv", &format!("{TEXT_HEADER}\n"));

    let mut loader = DataLoader::with_reference(&dir, 36500, fixed_now());
    loader.load_all(true).expect("load all");

    // the ghost user is gone from the graph entirely, not merely hidden
    assert_eq!(loader.users().len(), 1);
    assert!(loader.user_by_uuid(&Uuid::parse_str(USER_A).unwrap()).is_none());

    // its session still exists but is orphaned
    assert_eq!(loader.sessions().len(), 1);
    assert_eq!(loader.stats().users_with_sessions, 0);
}

#[test]
fn missing_source_file_is_fatal() {
    let dir = setup_data_dir("missing_file");

    let mut loader = DataLoader::with_reference(&dir, 30, fixed_now());
    let err = loader.load_all(true).expect_err("no files present");

    assert!(matches!(err, AppError::FileNotFound(_)));
}

#[test]
fn end_to_end_basic_dataset_stats() {
    let dir = setup_data_dir("end_to_end");
    write_basic_dataset(&dir);

    let mut loader = DataLoader::new(&dir, 30);
    loader.load_all(true).expect("load all");

    let stats = loader.stats();
    assert_eq!(stats.users, 1);
    assert_eq!(stats.sessions, 2);
    assert_eq!(stats.session_texts, 3);
    assert_eq!(stats.users_with_sessions, 1);
    assert_eq!(stats.sessions_with_messages, 2);

    // the attached session carries exactly its own messages, in time order
    let user = &loader.users()[0];
    let linked = loader.sessions_of(user);
    assert_eq!(linked.len(), 1);
    assert_eq!(linked[0].uuid, Uuid::parse_str(SESSION_A).unwrap());

    let texts: Vec<&str> = loader
        .messages_of(linked[0])
        .iter()
        .map(|m| m.text.as_str())
        .collect();
    assert_eq!(texts, vec!["Hello there", "General greeting"]);

    // the orphan is present in the flat list but attached nowhere
    let orphan = loader
        .session_by_uuid(&Uuid::parse_str(SESSION_B).unwrap())
        .expect("orphan loaded");
    assert_eq!(orphan.from_user_uuid, None);
    assert_eq!(loader.messages_of(orphan).len(), 1);
}

#[test]
fn load_without_link_leaves_relations_empty() {
    let dir = setup_data_dir("no_link");
    write_basic_dataset(&dir);

    let mut loader = DataLoader::new(&dir, 30);
    loader.load_all(false).expect("load all");

    let user = &loader.users()[0];
    assert!(loader.sessions_of(user).is_empty());
    assert_eq!(loader.stats().users_with_sessions, 0);
    assert_eq!(loader.stats().sessions_with_messages, 0);

    // stats are recomputed on demand and reflect a later link_all
    loader.link_all();
    assert_eq!(loader.stats().users_with_sessions, 1);
    assert_eq!(loader.stats().sessions_with_messages, 2);
}

#[test]
fn per_entity_loads_compose_independently() {
    let dir = setup_data_dir("per_entity");
    write_basic_dataset(&dir);

    let mut loader = DataLoader::new(&dir, 30);
    loader.load_sessions("session.csv").expect("load sessions");

    assert_eq!(loader.sessions().len(), 2);
    assert!(loader.users().is_empty());
    assert!(loader.session_texts().is_empty());
}

#[test]
fn lookup_misses_return_none() {
    let dir = setup_data_dir("lookup_miss");
    write_basic_dataset(&dir);

    let mut loader = DataLoader::new(&dir, 30);
    loader.load_all(true).expect("load all");

    assert!(loader.user_by_uuid(&Uuid::new_v4()).is_none());
    assert!(loader.session_by_uuid(&Uuid::new_v4()).is_none());
}
