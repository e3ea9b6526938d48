//! Human-readable console views over a loaded dataset.
//!
//! Reporting is a consumer of the loader's getters, nothing more: the load
//! and link pipeline never depends on anything in this module.

use crate::core::loader::DataLoader;
use crate::models::User;
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, color_for_optional_field};
use crate::utils::formatting::{display_or_dashes, truncate_chars};
use crate::utils::table::{Column, Table};
use crate::utils::time::format_timestamp;

/// Max characters of message text shown per sample line.
const SAMPLE_TEXT_LEN: usize = 50;

pub fn print_stats(loader: &DataLoader) {
    let stats = loader.stats();

    println!();
    println!("{}• Users:{} {}{}{}", CYAN, RESET, GREEN, stats.users, RESET);
    println!(
        "{}• Sessions:{} {}{}{}",
        CYAN, RESET, GREEN, stats.sessions, RESET
    );
    println!(
        "{}• Session texts:{} {}{}{}",
        CYAN, RESET, GREEN, stats.session_texts, RESET
    );
    println!(
        "{}• Users with sessions:{} {}",
        CYAN, RESET, stats.users_with_sessions
    );
    println!(
        "{}• Sessions with messages:{} {}",
        CYAN, RESET, stats.sessions_with_messages
    );
    println!();
}

/// Fixed-width table of the retained users with their session counts.
pub fn print_user_table(loader: &DataLoader, limit: Option<usize>) {
    let users = loader.users();
    let shown = limit.unwrap_or(users.len()).min(users.len());

    if users.is_empty() {
        println!("No users loaded.");
        return;
    }

    let mut table = Table::new(vec![
        Column::new("nick_name"),
        Column::new("email"),
        Column::new("credits"),
        Column::new("registered"),
        Column::new("sessions"),
    ]);

    for user in &users[..shown] {
        let registered = user.registration_time.map(|t| format_timestamp(&t));
        // no colors inside cells, they would throw off the width math
        table.add_row(vec![
            user.nick_name.clone(),
            user.email.clone(),
            format!("{:.2}", user.credits),
            display_or_dashes(registered),
            loader.sessions_of(user).len().to_string(),
        ]);
    }

    print!("{}", table.render());
    if shown < users.len() {
        println!("{}... {} more{}", GREY, users.len() - shown, RESET);
    }
}

/// Nested sample: first `users` users, first `sessions` sessions each,
/// first `messages` messages each.
pub fn print_sample(loader: &DataLoader, users: usize, sessions: usize, messages: usize) {
    header("Sample Users");

    if loader.users().is_empty() {
        println!("No users loaded.");
        return;
    }

    for user in loader.users().iter().take(users) {
        print_sample_user(loader, user, sessions, messages);
    }
}

fn print_sample_user(loader: &DataLoader, user: &User, sessions: usize, messages: usize) {
    let linked = loader.sessions_of(user);

    let registered = user.registration_time.map(|t| format_timestamp(&t));

    println!("User: {} (uuid={})", user.nick_name, user.uuid);
    println!("  Email: {}", user.email);
    println!("  Credits: {:.2}", user.credits);
    println!(
        "  Registration: {}{}{}",
        color_for_optional_field(registered.as_deref()),
        display_or_dashes(registered.clone()),
        RESET
    );
    println!("  Sessions: {}", linked.len());

    for session in linked.iter().take(sessions) {
        let msgs = loader.messages_of(session);
        println!(
            "    Session {} [{} → {}] {}s {} ({} messages)",
            session.uuid,
            display_or_dashes(session.begin_at.map(|t| format_timestamp(&t))),
            display_or_dashes(session.end_at.map(|t| format_timestamp(&t))),
            session.duration,
            session.language_pair(),
            msgs.len()
        );

        for msg in msgs.iter().take(messages) {
            println!(
                "      {}: {}",
                msg.speaker_str(),
                truncate_chars(&msg.text, SAMPLE_TEXT_LEN)
            );
        }
    }
}
