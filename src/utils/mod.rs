pub mod formatting;
pub mod path;
pub mod table;
pub mod time;

pub use formatting::{format_optional, truncate};
pub use time::{hours2readable, parse_duration};
