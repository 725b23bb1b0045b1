use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for volunteerhub
/// Volunteer events, registrations and hour records stored in SQLite
#[derive(Parser)]
#[command(
    name = "volunteerhub",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track volunteer events, registrations and approved hours using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Fill an empty database with sample volunteers, organizations and events
    Seed {
        #[arg(long, help = "Number of random volunteers (default: seed_users from config)")]
        users: Option<usize>,
    },

    /// Create or edit user accounts
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// List every stored entity of one kind
    List {
        /// users | orgs | events | records
        kind: String,
    },

    /// Show one entity in detail
    Show {
        /// users | orgs | events | records
        kind: String,

        id: String,
    },

    /// Register a volunteer for an event
    Register {
        #[arg(long)]
        event: String,

        #[arg(long)]
        user: String,
    },

    /// Remove a volunteer from an event
    Unregister {
        #[arg(long)]
        event: String,

        #[arg(long)]
        user: String,
    },

    /// Submit volunteer hours for review
    Submit {
        #[arg(long)]
        user: String,

        #[arg(long)]
        event: String,

        #[arg(long)]
        hours: f64,

        #[arg(long, help = "Record ID (generated when omitted)")]
        id: Option<String>,
    },

    /// Approve or reject a submitted record
    Review {
        record: String,

        #[arg(long, help = "A=Approved, R=Rejected, P=Pending (full names accepted)")]
        status: String,

        #[arg(long = "by", help = "ID of the reviewing organization")]
        by: String,
    },

    /// Credit hours to a volunteer, optionally for one academic semester
    Hours {
        #[arg(long)]
        user: String,

        #[arg(long)]
        hours: f64,

        #[arg(long, help = "Semester label, e.g. \"Fall 2025\"")]
        semester: Option<String>,
    },

    /// Delete an entity (refused while other rows reference it)
    Delete {
        /// users | orgs | events | records
        kind: String,

        id: String,

        #[arg(long, short = 'f', help = "Skip the confirmation prompt")]
        force: bool,
    },

    /// Export one entity kind to CSV or JSON
    Export {
        #[arg(long, help = "users | orgs | events | records")]
        kind: String,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Show the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },
}

/// Account fields shared by `user add` and `user edit`.
#[derive(Args)]
pub struct UserFields {
    #[arg(long)]
    pub first: Option<String>,

    #[arg(long)]
    pub last: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub password: Option<String>,

    #[arg(long, help = "volunteer | org-rep | admin (V/O/A)")]
    pub role: Option<String>,
}

#[derive(Subcommand)]
pub enum UserAction {
    /// Create a user with a generated `user-<uuid>` ID
    Add {
        #[command(flatten)]
        fields: UserFields,
    },

    /// Change the given fields of an existing user
    Edit {
        id: String,

        #[command(flatten)]
        fields: UserFields,
    },
}
