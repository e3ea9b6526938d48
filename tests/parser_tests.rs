mod common;
use common::*;

use callview::core::loader::DataLoader;
use callview::core::parse;
use callview::utils::time::parse_timestamp;
use chrono::{NaiveDate, NaiveDateTime};
use std::path::Path;

fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 1, 20)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// Loader with a window wide enough that no fixture user is filtered out.
fn wide_loader(dir: &Path) -> DataLoader {
    DataLoader::with_reference(dir, 36500, fixed_now())
}

#[test]
fn user_optional_fields_default_and_created_at_is_renamed() {
    let dir = setup_data_dir("user_defaults");
    write_file(
        &dir,
        "user.csv",
        &format!(
            "{USER_HEADER}\n\
             {USER_A},alice,,alice@example.com,2026-01-15T08:00:00\n\
             {USER_B},,7.25,,2026-01-16\n"
        ),
    );

    let mut loader = wide_loader(&dir);
    loader.load_users("user.csv").expect("load users");

    let users = loader.users();
    assert_eq!(users.len(), 2);

    // empty credits degrades to 0.0, created_at surfaces as registration_time
    assert_eq!(users[0].credits, 0.0);
    assert_eq!(
        users[0].registration_time.unwrap().to_string(),
        "2026-01-15 08:00:00"
    );

    // bare-date registration reads as midnight, empty strings stay empty
    assert_eq!(users[1].nick_name, "");
    assert_eq!(users[1].credits, 7.25);
    assert_eq!(
        users[1].registration_time.unwrap().to_string(),
        "2026-01-16 00:00:00"
    );
}

#[test]
fn malformed_uuid_drops_exactly_that_row() {
    let dir = setup_data_dir("bad_uuid_row");
    write_file(
        &dir,
        "user.csv",
        &format!(
            "{USER_HEADER}\n\
             {USER_A},alice,1,a@x.com,2026-01-15T08:00:00\n\
             not-a-uuid,mallory,1,m@x.com,2026-01-15T08:00:00\n\
             {USER_B},bob,1,b@x.com,2026-01-15T08:00:00\n"
        ),
    );

    let mut loader = wide_loader(&dir);
    loader.load_users("user.csv").expect("load users");

    // control fixture has 3 rows; the malformed one is silently dropped
    assert_eq!(loader.users().len(), 2);
    assert!(loader.users().iter().all(|u| u.nick_name != "mallory"));
}

#[test]
fn ragged_row_missing_required_cell_is_dropped() {
    let dir = setup_data_dir("ragged_row");
    // uuid is the last column, the short row never reaches it
    write_file(
        &dir,
        "user.csv",
        &format!(
            "nick_name,credits,email,created_at,uuid\n\
             alice,1,a@x.com,2026-01-15T08:00:00,{USER_A}\n\
             bob,1,b@x.com,2026-01-15T08:00:00\n"
        ),
    );

    let mut loader = wide_loader(&dir);
    loader.load_users("user.csv").expect("load users");

    assert_eq!(loader.users().len(), 1);
    assert_eq!(loader.users()[0].nick_name, "alice");
}

#[test]
fn session_optional_fields_are_permissive() {
    let dir = setup_data_dir("session_permissive");
    write_file(
        &dir,
        "session.csv",
        &format!(
            "{SESSION_HEADER}\n\
             {SESSION_A},zzz-not-a-uuid,abc,garbage-date,,abc,en,es,TRUE,maybe,1\n"
        ),
    );

    let mut loader = wide_loader(&dir);
    loader.load_sessions("session.csv").expect("load sessions");

    let s = &loader.sessions()[0];
    // malformed optional FK reads as absent, never fails the row
    assert_eq!(s.from_user_uuid, None);
    assert_eq!(s.session_type, 0);
    assert_eq!(s.begin_at, None);
    assert_eq!(s.duration, 0.0);
    assert!(s.is_paid); // "TRUE" case-insensitive
    assert!(!s.is_translation_enabled); // "maybe" falls back to default
    assert!(s.is_ai_call); // "1"
}

#[test]
fn session_text_requires_id_uuid_and_session_uuid() {
    let dir = setup_data_dir("text_required");
    write_file(
        &dir,
        "session_text.csv",
        &format!(
            "{TEXT_HEADER}\n\
             1,{TEXT_1},{SESSION_A},2026-01-10T10:00:00,ok,,0,1,0\n\
             oops,{TEXT_2},{SESSION_A},2026-01-10T10:00:01,bad id,,0,1,0\n\
             3,{TEXT_3},not-a-uuid,2026-01-10T10:00:02,bad fk,,0,1,0\n\
             4,{TEXT_2},{SESSION_A},,defaults,,,,\n"
        ),
    );

    let mut loader = wide_loader(&dir);
    loader
        .load_session_texts("session_text.csv")
        .expect("load texts");

    let texts = loader.session_texts();
    assert_eq!(texts.len(), 2);
    assert_eq!(texts[0].id, 1);

    // row 4: empty optionals degrade to defaults
    assert_eq!(texts[1].id, 4);
    assert_eq!(texts[1].start_at, None);
    assert_eq!(texts[1].speaker, 0);
    assert_eq!(texts[1].is_input, 0);
    assert_eq!(texts[1].kind, 0);
}

#[test]
fn bool_coercion_truth_table() {
    assert!(parse::bool_or(Some("true"), false));
    assert!(parse::bool_or(Some("1"), false));
    assert!(parse::bool_or(Some("YES"), false));
    assert!(!parse::bool_or(Some("false"), true));
    assert!(!parse::bool_or(Some("0"), true));
    assert!(!parse::bool_or(Some("No"), true));
    // unknown and empty values yield the supplied default
    assert!(parse::bool_or(Some("maybe"), true));
    assert!(!parse::bool_or(Some(""), false));
    assert!(!parse::bool_or(None, false));
}

#[test]
fn timestamp_parsing_accepts_common_iso_layouts() {
    let expected = NaiveDate::from_ymd_opt(2026, 1, 10)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap();

    assert_eq!(parse_timestamp("2026-01-10T10:00:00"), Some(expected));
    assert_eq!(parse_timestamp("2026-01-10 10:00:00"), Some(expected));
    assert_eq!(parse_timestamp("2026-01-10T10:00:00.000"), Some(expected));
    // offset inputs normalize to UTC
    assert_eq!(parse_timestamp("2026-01-10T12:00:00+02:00"), Some(expected));

    assert_eq!(parse_timestamp("10/01/2026"), None);
    assert_eq!(parse_timestamp(""), None);
    assert_eq!(parse_timestamp("not-a-date"), None);
}
