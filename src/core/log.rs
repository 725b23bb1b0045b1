use crate::db::EntityStore;
use crate::db::log::load_log;
use crate::errors::AppResult;
use crate::utils::colors::{BLUE, GREEN, MAGENTA, RED, RESET, YELLOW};
use crate::utils::formatting::{display_width, truncate_to_width};

/// ANSI colour for an audit operation
fn color_for_operation(op: &str) -> &'static str {
    match op {
        "insert" => GREEN,
        "delete" => RED,
        "update" => YELLOW,
        "migration_applied" => MAGENTA,
        "init" | "seed" => BLUE,
        _ => RESET,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(store: &EntityStore) -> AppResult<()> {
        let entries = load_log(store.conn())?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);
        let op_w = entries
            .iter()
            .map(|e| display_width(&e.operation) + display_width(&e.target) + 3)
            .max()
            .unwrap_or(10)
            .min(60);

        println!("📜 Internal log:\n");

        for e in entries {
            let op_target = if e.target.is_empty() {
                e.operation.clone()
            } else {
                format!("{} ({})", e.operation, e.target)
            };
            let visible = truncate_to_width(&op_target, op_w);
            let padding = " ".repeat(op_w.saturating_sub(display_width(&visible)));

            // only the operation word is coloured
            let colored = match visible.split_once(' ') {
                Some((op, rest)) => format!(
                    "{}{}{} {}",
                    color_for_operation(&e.operation),
                    op,
                    RESET,
                    rest
                ),
                None => format!("{}{}{}", color_for_operation(&e.operation), visible, RESET),
            };

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                e.id,
                e.date,
                colored,
                padding,
                e.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
