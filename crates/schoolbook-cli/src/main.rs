//! schoolbook CLI: the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "schoolbook", version, about = "School admin dashboard core")]
struct Cli {
    /// Config file path (default: ./schoolbook.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the dashboard: totals, enrollment, distribution, top 10
    Dashboard,

    /// Manage the student roster
    Students {
        #[command(subcommand)]
        action: StudentsAction,
    },

    /// Browse and toggle attendance records
    Attendance {
        #[command(subcommand)]
        action: AttendanceAction,
    },

    /// Show the ranked leaderboard
    Leaderboard {
        /// Number of rows to show
        #[arg(long, default_value = "10")]
        top: usize,
    },

    /// Generate and export attendance reports
    Report {
        #[command(subcommand)]
        action: ReportAction,
    },

    /// Create a starter schoolbook.toml
    Init,
}

#[derive(Subcommand)]
enum StudentsAction {
    /// List students, optionally filtered
    List {
        /// Case-insensitive match on name, email, grade, or id
        #[arg(long)]
        search: Option<String>,

        /// Only students in this class
        #[arg(long = "class")]
        class_id: Option<String>,
    },

    /// Add a student
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        grade: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        phone: Option<String>,

        /// Initial attendance rate in [0, 1]
        #[arg(long, default_value = "0.9")]
        rate: f64,

        /// active or inactive
        #[arg(long, default_value = "active")]
        status: String,

        #[arg(long = "class")]
        class_id: Option<String>,
    },

    /// Update fields on an existing student
    Update {
        /// Student id (e.g. S1004)
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        grade: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        rate: Option<f64>,

        #[arg(long)]
        status: Option<String>,

        #[arg(long = "class")]
        class_id: Option<String>,
    },

    /// Remove a student (attendance records are kept)
    Delete {
        /// Student id
        id: String,
    },
}

#[derive(Subcommand)]
enum AttendanceAction {
    /// List attendance records, optionally filtered
    List {
        /// Only records for this class
        #[arg(long = "class")]
        class_id: Option<String>,

        /// Only records on this date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },

    /// Flip present/absent on one record
    Toggle {
        /// Attendance record id (e.g. A017)
        record_id: String,
    },
}

#[derive(Subcommand)]
enum ReportAction {
    /// Export a derived view as CSV
    Export {
        /// Output file path
        #[arg(long)]
        out: PathBuf,

        /// Which view: by-student or by-day
        #[arg(long, default_value = "by-student")]
        view: String,

        /// Also save the full report as JSON next to the CSV
        #[arg(long)]
        json: bool,
    },

    /// Print both derived views
    Show,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("schoolbook=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let config_path = cli.config;

    let result = match cli.command {
        Commands::Dashboard => commands::dashboard::execute(config_path).await,
        Commands::Students { action } => match action {
            StudentsAction::List { search, class_id } => {
                commands::students::list(config_path, search, class_id).await
            }
            StudentsAction::Add {
                name,
                grade,
                email,
                phone,
                rate,
                status,
                class_id,
            } => {
                commands::students::add(
                    config_path,
                    name,
                    grade,
                    email,
                    phone,
                    rate,
                    status,
                    class_id,
                )
                .await
            }
            StudentsAction::Update {
                id,
                name,
                grade,
                email,
                phone,
                rate,
                status,
                class_id,
            } => {
                commands::students::update(
                    config_path,
                    id,
                    name,
                    grade,
                    email,
                    phone,
                    rate,
                    status,
                    class_id,
                )
                .await
            }
            StudentsAction::Delete { id } => commands::students::delete(config_path, id).await,
        },
        Commands::Attendance { action } => match action {
            AttendanceAction::List { class_id, date } => {
                commands::attendance::list(config_path, class_id, date).await
            }
            AttendanceAction::Toggle { record_id } => {
                commands::attendance::toggle(config_path, record_id).await
            }
        },
        Commands::Leaderboard { top } => commands::leaderboard::execute(config_path, top).await,
        Commands::Report { action } => match action {
            ReportAction::Export { out, view, json } => {
                commands::report::export(config_path, out, view, json).await
            }
            ReportAction::Show => commands::report::show(config_path).await,
        },
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
