mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::report::ReportView;

#[derive(Parser)]
#[command(name = "eventdesk")]
#[command(about = "Manage university events and their registered participants")]
struct Cli {
    /// Coordinator username (prompted when omitted)
    #[arg(long, global = true)]
    user: Option<String>,

    /// Coordinator password (prompted when omitted)
    #[arg(long, global = true)]
    password: Option<String>,

    /// Directory holding the event database and settings
    #[arg(long, global = true, default_value = eventdesk_core::db::DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Schedule a new event
    Add {
        /// Event name from the catalog (prompted when omitted)
        #[arg(short, long)]
        name: Option<String>,

        /// Event date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,

        /// Event time (HH:MM); omit for a date-only event
        #[arg(short, long)]
        time: Option<String>,

        #[arg(short, long)]
        venue: Option<String>,

        #[arg(short, long)]
        organizer: Option<String>,

        /// Explicit event identifier (system-assigned when omitted)
        #[arg(long)]
        id: Option<String>,
    },
    /// Update an existing event
    Update {
        /// Identifier of the event to edit
        id: String,

        #[arg(long)]
        new_id: Option<String>,

        #[arg(short, long)]
        name: Option<String>,

        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,

        /// New time (HH:MM), or "none" to clear it
        #[arg(short, long)]
        time: Option<String>,

        #[arg(short, long)]
        venue: Option<String>,

        #[arg(short, long)]
        organizer: Option<String>,

        /// Apply without the change-summary confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Delete an event and all of its registrations
    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Register participants for an event
    Register {
        /// Identifier of the event to register for
        id: String,

        /// Participant full name (interactive loop when omitted)
        #[arg(short, long)]
        name: Option<String>,

        /// Participant type: student or staff
        #[arg(short, long)]
        kind: Option<String>,
    },
    /// List scheduled events
    List,
    /// Render summary reports
    Report {
        #[arg(value_enum, default_value = "upcoming")]
        view: ReportView,
    },
    /// Watch for events starting soon and raise notifications
    Watch {
        /// Minutes of advance notice
        #[arg(long, default_value_t = eventdesk_core::reminders::DEFAULT_LEAD_MINUTES)]
        lead: i64,

        /// Seconds between scans
        #[arg(long, default_value_t = eventdesk_core::reminders::DEFAULT_POLL_SECONDS)]
        interval: u64,
    },
    /// Show or toggle the color theme preference
    Theme {
        /// Flip between light and dark
        #[arg(long)]
        toggle: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    commands::login::require_login(cli.user, cli.password)?;

    match cli.command {
        Commands::Add {
            name,
            date,
            time,
            venue,
            organizer,
            id,
        } => commands::add::run(&cli.data_dir, commands::add::AddArgs {
            name,
            date,
            time,
            venue,
            organizer,
            id,
        }),
        Commands::Update {
            id,
            new_id,
            name,
            date,
            time,
            venue,
            organizer,
            yes,
        } => commands::update::run(&cli.data_dir, commands::update::UpdateArgs {
            id,
            new_id,
            name,
            date,
            time,
            venue,
            organizer,
            yes,
        }),
        Commands::Delete { id, yes } => commands::delete::run(&cli.data_dir, &id, yes),
        Commands::Register { id, name, kind } => {
            commands::register::run(&cli.data_dir, &id, name, kind)
        }
        Commands::List => commands::list::run(&cli.data_dir),
        Commands::Report { view } => commands::report::run(&cli.data_dir, view),
        Commands::Watch { lead, interval } => {
            commands::watch::run(&cli.data_dir, lead, interval).await
        }
        Commands::Theme { toggle } => commands::theme::run(&cli.data_dir, toggle),
    }
}
