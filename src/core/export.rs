use crate::db::{EntityKind, EntityStore};
use crate::errors::AppResult;
use crate::export::{
    CsvRow, ExportFormat, ensure_writable, notify_export_success, write_csv, write_json,
};
use crate::models::{Event, Organization, User, VolunteerRecord};
use serde::Serialize;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export every entity of `kind` to `file`. Returns the row count.
    pub fn export(
        store: &mut EntityStore,
        kind: EntityKind,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        let rows = match kind {
            EntityKind::User => write_rows(&store.get_all::<User>()?, format, path)?,
            EntityKind::Organization => {
                write_rows(&store.get_all::<Organization>()?, format, path)?
            }
            EntityKind::Event => write_rows(&store.get_all::<Event>()?, format, path)?,
            EntityKind::Record => write_rows(&store.get_all::<VolunteerRecord>()?, format, path)?,
        };

        notify_export_success(
            &format!("{} {}", kind.table(), format.as_str().to_uppercase()),
            rows,
            path,
        );
        Ok(rows)
    }
}

fn write_rows<T: CsvRow + Serialize>(
    rows: &[T],
    format: ExportFormat,
    path: &Path,
) -> AppResult<usize> {
    match format {
        ExportFormat::Csv => write_csv(path, rows)?,
        ExportFormat::Json => write_json(path, rows)?,
    }
    Ok(rows.len())
}
