use crate::db::entity::EntityKind;
use crate::db::store::EntityStore;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(store: &EntityStore) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let db_path = store.path();
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) ROWS PER KIND
    //
    for kind in [
        EntityKind::User,
        EntityKind::Organization,
        EntityKind::Event,
        EntityKind::Record,
    ] {
        let count = store.count(kind)?;
        println!(
            "{}• {}:{} {}{}{}",
            CYAN,
            kind.table(),
            RESET,
            GREEN,
            count,
            RESET
        );
    }

    //
    // 3) PENDING REVIEWS
    //
    let pending: i64 = store.conn().query_row(
        "SELECT COUNT(*) FROM records WHERE status = 'PENDING'",
        [],
        |row| row.get(0),
    )?;
    println!("{}• Pending records:{} {}", CYAN, RESET, pending);

    //
    // 4) EVENT DATE RANGE
    //
    let first_date: Option<String> = store
        .conn()
        .query_row("SELECT MIN(date) FROM events", [], |row| {
            row.get::<_, Option<String>>(0)
        })
        .optional()?
        .flatten();
    let last_date: Option<String> = store
        .conn()
        .query_row("SELECT MAX(date) FROM events", [], |row| {
            row.get::<_, Option<String>>(0)
        })
        .optional()?
        .flatten();

    println!("{}• Event dates:{}", CYAN, RESET);
    println!(
        "    from: {}",
        first_date.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );
    println!(
        "    to:   {}",
        last_date.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );

    println!();
    Ok(())
}
