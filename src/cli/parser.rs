use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for punchcard
/// CLI application to track employee attendance with a local store
#[derive(Parser)]
#[command(
    name = "punchcard",
    version = env!("CARGO_PKG_VERSION"),
    about = "Employee attendance CLI: clock in/out, batch marking, timelines and monthly statistics",
    long_about = None
)]
pub struct Cli {
    /// Override store path (useful for tests or custom locations)
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
    /// Initialize the store and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Clock in for an employee
    In {
        /// Employee id (falls back to default_user from the config file)
        #[arg(long = "user")]
        user: Option<String>,

        /// Date (YYYY-MM-DD), default today
        #[arg(long = "date")]
        date: Option<String>,

        /// Clock-in time (HH:MM), default now
        #[arg(long = "time")]
        time: Option<String>,

        #[arg(long = "note")]
        note: Option<String>,
    },

    /// Clock out for an employee
    Out {
        /// Employee id (falls back to default_user from the config file)
        #[arg(long = "user")]
        user: Option<String>,

        /// Date (YYYY-MM-DD), default today
        #[arg(long = "date")]
        date: Option<String>,

        /// Clock-out time (HH:MM), default now
        #[arg(long = "time")]
        time: Option<String>,

        #[arg(long = "note")]
        note: Option<String>,
    },

    /// Mark attendance for many employees on one date
    Batch {
        /// Date to mark (YYYY-MM-DD)
        date: String,

        /// Present, Half-day, Absent, Late, Leave or Weekend
        #[arg(long = "status")]
        status: String,

        /// Employee ids, comma separated
        #[arg(long = "users", value_delimiter = ',')]
        users: Vec<String>,

        /// Also select every employee of this department
        #[arg(long = "dept")]
        dept: Option<String>,
    },

    /// Show the per-day attendance grid for a month
    Timeline {
        /// Month to show (YYYY-MM), default current
        #[arg(long = "month")]
        month: Option<String>,

        /// Filter employees by department
        #[arg(long = "dept")]
        dept: Option<String>,
    },

    /// Monthly attendance statistics per employee
    Report {
        /// Month to aggregate (YYYY-MM), default current
        #[arg(long = "month")]
        month: Option<String>,
    },

    /// Manage employee records
    Users {
        #[arg(long = "list", help = "List employees")]
        list: bool,

        #[arg(long = "add", help = "Add a new employee (requires --name and --dept)")]
        add: bool,

        #[arg(long = "edit", value_name = "ID", help = "Edit an existing employee")]
        edit: Option<String>,

        #[arg(long = "name")]
        name: Option<String>,

        #[arg(long = "dept")]
        dept: Option<String>,

        /// Admin or Employee (default Employee)
        #[arg(long = "role")]
        role: Option<String>,

        #[arg(long = "username")]
        username: Option<String>,

        #[arg(long = "password")]
        password: Option<String>,

        #[arg(long = "email")]
        email: Option<String>,

        /// Path or URL of the avatar image
        #[arg(long = "avatar")]
        avatar: Option<String>,
    },

    /// View or change application settings
    Settings {
        #[arg(long = "print", help = "Print the stored settings")]
        print: bool,

        #[arg(long = "default-in", value_name = "HH:MM")]
        default_in: Option<String>,

        #[arg(long = "default-out", value_name = "HH:MM")]
        default_out: Option<String>,

        #[arg(long = "lunch-start", value_name = "HH:MM")]
        lunch_start: Option<String>,

        #[arg(long = "lunch-end", value_name = "HH:MM")]
        lunch_end: Option<String>,

        #[arg(long = "add-dept", value_name = "NAME", help = "Add a department")]
        add_dept: Option<String>,

        /// Default, Tet, Noel, NationalDay, Liberation or Custom
        #[arg(long = "theme")]
        theme: Option<String>,

        /// vi or en
        #[arg(long = "language")]
        language: Option<String>,

        /// Path or URL of the custom logo
        #[arg(long = "logo")]
        logo: Option<String>,

        #[arg(long = "primary-color", value_name = "HEX")]
        primary_color: Option<String>,

        #[arg(long = "accent-color", value_name = "HEX")]
        accent_color: Option<String>,
    },

    /// Export attendance data
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        /// Restrict to one month (YYYY-MM)
        #[arg(long, value_name = "MONTH")]
        month: Option<String>,

        /// Export aggregated monthly statistics instead of raw records
        #[arg(long)]
        report: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the store
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
