pub mod colors;
pub mod formatting;
pub mod path;
pub mod table;
pub mod time;

pub use formatting::truncate_chars;
pub use time::{format_timestamp, parse_timestamp};
