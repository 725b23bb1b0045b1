use crate::cli::commands::{open_store, report_warnings};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::approval::status_notification;
use crate::errors::{AppError, AppResult};
use crate::models::{Organization, RecordStatus, User, VolunteerRecord, new_id};
use crate::ui::messages::{info, success};

/// Handle `submit`, `review` and `hours`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Submit {
            user,
            event,
            hours,
            id,
        } => {
            let mut store = open_store(cfg)?;
            let record_id = id.clone().unwrap_or_else(|| new_id("record"));
            let record = VolunteerRecord::new(record_id, user.as_str(), event.as_str(), *hours)?;
            store.insert(&record)?;

            success(format!(
                "Record {} submitted: {} hour(s) for event {} (PENDING)",
                record.record_id, record.hours_submitted, record.event_id
            ));
        }

        Commands::Review { record, status, by } => {
            let status = RecordStatus::from_code(status).ok_or_else(|| AppError::InvalidEnum {
                enum_name: "status",
                value: status.clone(),
            })?;

            let mut store = open_store(cfg)?;
            let org: Organization = store.get(by)?;
            let mut rec: VolunteerRecord = store.get(record)?;

            let previous = match status {
                RecordStatus::Approved => org.approve_hours(&mut rec),
                RecordStatus::Rejected => org.reject_hours(&mut rec),
                RecordStatus::Pending => rec.update_status(RecordStatus::Pending, &org.org_id),
            };
            store.update(&rec)?;
            report_warnings(&mut store);

            success(format!(
                "Record {}: {} → {} by {}",
                rec.record_id,
                previous.to_db_str(),
                rec.status().to_db_str(),
                org.org_name
            ));
            info(status_notification(&rec));
        }

        Commands::Hours {
            user,
            hours,
            semester,
        } => {
            let mut store = open_store(cfg)?;
            let mut u: User = store.get(user)?;

            match semester {
                Some(s) => u.add_academic_hours(s, *hours)?,
                None => u.add_hours(*hours)?,
            }
            store.update(&u)?;
            report_warnings(&mut store);

            match semester {
                Some(s) => success(format!(
                    "{}: {} hour(s) in {}",
                    u.full_name(),
                    u.hours_for_semester(s),
                    s
                )),
                None => success(format!("{}: {} total hour(s)", u.full_name(), u.total_hours())),
            }
        }

        _ => {}
    }
    Ok(())
}
