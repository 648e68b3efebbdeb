//! Shared CLI presentation utilities.
//!
//! Keep this module format-only: no dataset transforms.

pub mod emoji_display;
pub mod tables;

// Re-export commonly used items
pub use emoji_display::{display_emoji, display_issues, display_stats};
pub use tables::{format_optional, print_separator, truncate_string};
