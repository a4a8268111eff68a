//! gradeledger CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod state;

#[derive(Parser)]
#[command(name = "gradeledger", version, about = "Student record ledger with deterministic scoring")]
struct Cli {
    /// Path to the ledger state file
    #[arg(long, global = true, default_value = "gradeledger.json")]
    state: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new ledger state file
    Init {
        /// Owner identity for the new ledger
        #[arg(long)]
        owner: String,
    },

    /// Grant an identity mutation rights (owner only)
    Authorize {
        /// Acting identity
        #[arg(long)]
        actor: String,

        /// Identity to authorize
        #[arg(long)]
        target: String,
    },

    /// Revoke an identity's mutation rights (owner only)
    Deauthorize {
        /// Acting identity
        #[arg(long)]
        actor: String,

        /// Identity to deauthorize
        #[arg(long)]
        target: String,
    },

    /// Register a new student record
    Register {
        /// Acting identity
        #[arg(long)]
        actor: String,

        /// Student id (positive integer)
        #[arg(long)]
        id: u32,

        /// Student name (1-100 characters)
        #[arg(long)]
        name: String,

        /// Attendance percentage (0-100)
        #[arg(long, default_value = "0")]
        attendance: u8,

        /// Study hours per week (0-168)
        #[arg(long, default_value = "0")]
        study_hours: u8,
    },

    /// Append one or more grades to a student record
    AddGrades {
        /// Acting identity
        #[arg(long)]
        actor: String,

        /// Student id
        #[arg(long)]
        id: u32,

        /// Grades to append (each 0-100, at most 50)
        #[arg(required = true)]
        grades: Vec<u8>,
    },

    /// Overwrite a student's attendance percentage
    Attendance {
        /// Acting identity
        #[arg(long)]
        actor: String,

        /// Student id
        #[arg(long)]
        id: u32,

        /// New attendance percentage (0-100)
        #[arg(long)]
        pct: u8,
    },

    /// Overwrite a student's weekly study hours
    StudyHours {
        /// Acting identity
        #[arg(long)]
        actor: String,

        /// Student id
        #[arg(long)]
        id: u32,

        /// New study hours per week (0-168)
        #[arg(long)]
        hours: u8,
    },

    /// Soft-delete a student record (irreversible)
    Deactivate {
        /// Acting identity
        #[arg(long)]
        actor: String,

        /// Student id
        #[arg(long)]
        id: u32,
    },

    /// Recompute the predicted score and category for a student
    Predict {
        /// Acting identity
        #[arg(long)]
        actor: String,

        /// Student id
        #[arg(long)]
        id: u32,
    },

    /// Show a student record
    Show {
        /// Student id
        #[arg(long)]
        id: u32,
    },

    /// Show a student's performance metrics
    Metrics {
        /// Student id
        #[arg(long)]
        id: u32,
    },

    /// List registered ids, paginated
    List {
        /// Zero-based offset into the enumeration sequence
        #[arg(long, default_value = "0")]
        offset: usize,

        /// Page size (1-100)
        #[arg(long, default_value = "20")]
        limit: usize,
    },

    /// Print the number of registrations ever performed
    Count,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gradeledger=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let state = cli.state;

    let result = match cli.command {
        Commands::Init { owner } => commands::init::execute(&state, owner),
        Commands::Authorize { actor, target } => {
            commands::admin::authorize(&state, actor, target)
        }
        Commands::Deauthorize { actor, target } => {
            commands::admin::deauthorize(&state, actor, target)
        }
        Commands::Register {
            actor,
            id,
            name,
            attendance,
            study_hours,
        } => commands::record::register(&state, actor, id, name, attendance, study_hours),
        Commands::AddGrades { actor, id, grades } => {
            commands::record::add_grades(&state, actor, id, grades)
        }
        Commands::Attendance { actor, id, pct } => {
            commands::record::attendance(&state, actor, id, pct)
        }
        Commands::StudyHours { actor, id, hours } => {
            commands::record::study_hours(&state, actor, id, hours)
        }
        Commands::Deactivate { actor, id } => commands::record::deactivate(&state, actor, id),
        Commands::Predict { actor, id } => commands::predict::execute(&state, actor, id),
        Commands::Show { id } => commands::show::record(&state, id),
        Commands::Metrics { id } => commands::show::metrics(&state, id),
        Commands::List { offset, limit } => commands::list::execute(&state, offset, limit),
        Commands::Count => commands::list::count(&state),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
