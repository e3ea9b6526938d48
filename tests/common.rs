#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{Duration, Local};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub fn cv() -> Command {
    cargo_bin_cmd!("callview")
}

/// Create a unique dataset directory inside the system temp dir, wiping any
/// leftover from a previous run
pub fn setup_data_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_callview_data", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create data dir");
    path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_callview_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn write_file(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).expect("write fixture");
}

/// Timestamp N days before local now, formatted like the upstream exports.
/// CLI tests need registrations relative to the real clock.
pub fn days_ago(n: i64) -> String {
    (Local::now().naive_local() - Duration::days(n))
        .format("%Y-%m-%dT%H:%M:%S")
        .to_string()
}

pub const USER_A: &str = "11111111-1111-1111-1111-111111111111";
pub const USER_B: &str = "22222222-2222-2222-2222-222222222222";
pub const SESSION_A: &str = "aaaaaaaa-aaaa-aaaa-aaaa-aaaaaaaaaaaa";
pub const SESSION_B: &str = "bbbbbbbb-bbbb-bbbb-bbbb-bbbbbbbbbbbb";
pub const TEXT_1: &str = "cccccccc-cccc-cccc-cccc-ccccccccccc1";
pub const TEXT_2: &str = "cccccccc-cccc-cccc-cccc-ccccccccccc2";
pub const TEXT_3: &str = "cccccccc-cccc-cccc-cccc-ccccccccccc3";

pub const USER_HEADER: &str = "uuid,nick_name,credits,email,created_at";
pub const SESSION_HEADER: &str = "uuid,from_user_uuid,session_type,begin_at,end_at,duration,from_language,to_language,is_paid,is_translation_enabled,is_ai_call";
pub const TEXT_HEADER: &str = "id,uuid,session_uuid,start_at,text,text_translated,speaker,is_input,type";

/// Standard 1-user / 2-session / 3-message dataset: one session linked to
/// the user, one orphan without FK (but with one message of its own).
/// Registration is one day old so the default 30-day window retains it.
pub fn write_basic_dataset(dir: &Path) {
    write_file(
        dir,
        "user.csv",
        &format!(
            "{USER_HEADER}\n{USER_A},alice,12.5,alice@example.com,{}\n",
            days_ago(1)
        ),
    );
    write_file(
        dir,
        "session.csv",
        &format!(
            "{SESSION_HEADER}\n\
             {SESSION_A},{USER_A},1,2026-01-10T10:00:00,2026-01-10T10:05:00,300,en,es,true,1,false\n\
             {SESSION_B},,0,2026-01-11T09:00:00,,0,,,no,,yes\n"
        ),
    );
    write_file(
        dir,
        "session_text.csv",
        &format!(
            "{TEXT_HEADER}\n\
             1,{TEXT_1},{SESSION_A},2026-01-10T10:00:01,Hello there,Hola,0,1,0\n\
             2,{TEXT_2},{SESSION_A},2026-01-10T10:00:05,General greeting,Saludo,1,0,0\n\
             3,{TEXT_3},{SESSION_B},2026-01-11T09:00:01,Orphan message,,0,1,0\n"
        ),
    );
}
