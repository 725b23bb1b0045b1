/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

use crate::models::RecordStatus;

/// PENDING → yellow, APPROVED → green, REJECTED → red
pub fn color_for_status(status: RecordStatus) -> &'static str {
    match status {
        RecordStatus::Pending => YELLOW,
        RecordStatus::Approved => GREEN,
        RecordStatus::Rejected => RED,
    }
}

/// Remaining capacity: none left → red, last few → yellow.
pub fn color_for_slots(remaining: u32, max: u32) -> &'static str {
    if remaining == 0 {
        RED
    } else if remaining * 5 <= max {
        YELLOW
    } else {
        RESET
    }
}

/// Grey out empty cells ("" or "-").
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "-" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
