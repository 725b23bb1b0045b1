use crate::cli::commands::{open_store, parse_kind, report_warnings};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::{EntityKind, EntityStore};
use crate::errors::AppResult;
use crate::models::{Event, Organization, User, VolunteerRecord};
use crate::ui::messages::{header, info};
use crate::utils::colors::{RESET, color_for_slots, color_for_status, colorize_optional};
use crate::utils::table::Table;

/// Handle `list <kind>` and `show <kind> <id>`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::List { kind } => {
            let kind = parse_kind(kind)?;
            let mut store = open_store(cfg)?;
            let table = match kind {
                EntityKind::User => users_table(&store.get_all::<User>()?),
                EntityKind::Organization => orgs_table(&store.get_all::<Organization>()?),
                EntityKind::Event => events_table(&store.get_all::<Event>()?),
                EntityKind::Record => records_table(&store.get_all::<VolunteerRecord>()?),
            };
            report_warnings(&mut store);

            if table.is_empty() {
                info(format!("No {} stored.", kind.table()));
            } else {
                print!("{}", table.render());
            }
        }

        Commands::Show { kind, id } => {
            let kind = parse_kind(kind)?;
            let mut store = open_store(cfg)?;
            match kind {
                EntityKind::User => show_user(&mut store, id)?,
                EntityKind::Organization => show_org(&mut store, id)?,
                EntityKind::Event => show_event(&mut store, id)?,
                EntityKind::Record => show_record(&mut store, id)?,
            }
            report_warnings(&mut store);
        }

        _ => {}
    }
    Ok(())
}

fn users_table(users: &[User]) -> Table {
    let mut t = Table::new(&["ID", "Name", "Email", "Role", "Hours"]);
    for u in users {
        t.add_row(vec![
            u.user_id.clone(),
            u.full_name(),
            u.email.clone(),
            u.role.to_db_str().to_string(),
            format!("{:.1}", u.total_hours()),
        ]);
    }
    t
}

fn orgs_table(orgs: &[Organization]) -> Table {
    let mut t = Table::new(&["ID", "Name", "Contact", "Email", "Phone", "Events"]);
    for o in orgs {
        t.add_row(vec![
            o.org_id.clone(),
            o.org_name.clone(),
            o.contact_person_name.clone(),
            o.contact_email.clone(),
            colorize_optional(&o.contact_phone),
            o.posted_events().len().to_string(),
        ]);
    }
    t
}

fn events_table(events: &[Event]) -> Table {
    let mut t = Table::new(&["ID", "Title", "Date", "Time", "Org", "Volunteers"]);
    for e in events {
        let color = color_for_slots(e.remaining_slots(), e.max_volunteers());
        t.add_row(vec![
            e.event_id.clone(),
            e.title.clone(),
            e.date_str(),
            format!(
                "{}-{}",
                e.start_time.format("%H:%M"),
                e.end_time.format("%H:%M")
            ),
            e.org_id.clone(),
            format!(
                "{color}{}/{}{RESET}",
                e.current_volunteers(),
                e.max_volunteers()
            ),
        ]);
    }
    t
}

fn records_table(records: &[VolunteerRecord]) -> Table {
    let mut t = Table::new(&["ID", "User", "Event", "Hours", "Submitted", "Status", "Approver"]);
    for r in records {
        let status = r.status();
        t.add_row(vec![
            r.record_id.clone(),
            r.user_id.clone(),
            r.event_id.clone(),
            format!("{:.1}", r.hours_submitted),
            r.submission_date.format("%Y-%m-%d").to_string(),
            format!("{}{}{RESET}", color_for_status(status), status.to_db_str()),
            colorize_optional(r.approver_id().unwrap_or("-")),
        ]);
    }
    t
}

fn show_user(store: &mut EntityStore, id: &str) -> AppResult<()> {
    let u: User = store.get(id)?;
    header(format!("{} ({})", u.full_name(), u.user_id));
    println!("Email: {}", u.email);
    println!("Role: {}", u.role.to_db_str());
    println!("Total Hours: {:.1}", u.total_hours());

    for (semester, hours) in u.academic_semester_hours() {
        println!("  {semester}: {hours:.1}");
    }

    let records = store.records_for_user(&u.user_id)?;
    if !records.is_empty() {
        println!();
        print!("{}", records_table(&records).render());
    }
    Ok(())
}

fn show_org(store: &mut EntityStore, id: &str) -> AppResult<()> {
    let o: Organization = store.get(id)?;
    header(format!("{} ({})", o.org_name, o.org_id));
    println!("Contact: {} <{}>", o.contact_person_name, o.contact_email);
    println!("Phone: {}", colorize_optional(&o.contact_phone));
    println!("Address: {}", o.address);
    println!("Description: {}", o.description);

    let events = store.events_for_org(&o.org_id)?;
    if !events.is_empty() {
        println!();
        print!("{}", events_table(&events).render());
    }
    Ok(())
}

fn show_event(store: &mut EntityStore, id: &str) -> AppResult<()> {
    let e: Event = store.get(id)?;
    header(format!("{} ({})", e.title, e.event_id));
    println!("{}", e.details());
    println!("Organization: {}", e.org_id);
    println!("Contact: {}", e.contact_info);
    println!(
        "Volunteers ({}/{}): {}",
        e.current_volunteers(),
        e.max_volunteers(),
        colorize_optional(&e.registered_volunteers().join(", "))
    );

    let records = store.records_for_event(&e.event_id)?;
    if !records.is_empty() {
        println!();
        print!("{}", records_table(&records).render());
    }
    Ok(())
}

fn show_record(store: &mut EntityStore, id: &str) -> AppResult<()> {
    let r: VolunteerRecord = store.get(id)?;
    let status = r.status();
    header(format!("Record {}", r.record_id));
    println!("User: {}", r.user_id);
    println!("Event: {}", r.event_id);
    println!("Hours: {:.1}", r.hours_submitted);
    println!("Submitted: {}", r.submission_date.format("%Y-%m-%d"));
    println!(
        "Status: {}{}{RESET}",
        color_for_status(status),
        status.to_db_str()
    );
    println!("Approver: {}", colorize_optional(r.approver_id().unwrap_or("-")));
    Ok(())
}
