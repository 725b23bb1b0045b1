use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, Write};
use std::path::Path;

/// Ok when `path` is free or `force` is set; otherwise ask before
/// overwriting. An empty answer (or closed stdin) keeps the file.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if force || !path.exists() {
        return Ok(());
    }

    warning(format!("{} already exists.", path.display()));
    print!("Replace it? [y/N]: ");
    io::stdout().flush().ok();

    let mut reply = String::new();
    io::stdin().read_line(&mut reply)?;

    match reply.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => {
            info(format!("Overwriting {}", path.display()));
            Ok(())
        }
        _ => Err(AppError::Export(format!(
            "export cancelled: {} was left untouched",
            path.display()
        ))),
    }
}
