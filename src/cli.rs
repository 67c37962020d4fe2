use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "attend", version, about = "Campus attendance verification CLI")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Campus config file (defaults to ~/.config/attend/campus.toml)"
    )]
    pub config: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        default_value = "warn",
        help = "Log filter (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encode an attendance token for a student at a coordinate
    Issue {
        student_id: String,
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        #[arg(long, allow_hyphen_values = true, help = "Issue time in epoch millis")]
        at: Option<i64>,
    },
    /// Decode a token without judging it
    Decode { token: String },
    /// Verify a presented token against the campus boundary and window
    Verify {
        token: String,
        #[arg(long, allow_hyphen_values = true, help = "Current time in epoch millis")]
        now: Option<i64>,
        #[arg(long, help = "Override the configured validity window")]
        window_secs: Option<u64>,
        #[arg(long, default_value_t = false, help = "Consume the token and mark the student present")]
        record: bool,
        #[arg(long)]
        subject: Option<String>,
        #[arg(long, help = "Register date (YYYY-MM-DD), defaults to the local day of --now")]
        date: Option<String>,
    },
    /// Test whether a coordinate lies inside the campus boundary
    Contains {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
    },
    Boundary {
        #[command(subcommand)]
        command: BoundaryCommands,
    },
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    Attendance {
        #[command(subcommand)]
        command: AttendanceCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum BoundaryCommands {
    Show,
    Validate,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    Show,
    Init {
        #[arg(long, default_value_t = false)]
        force: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum AttendanceCommands {
    Mark {
        student_id: String,
        #[arg(long)]
        subject: String,
        #[arg(long, value_enum)]
        status: AttendanceStatus,
        #[arg(long)]
        date: Option<String>,
    },
    List {
        #[arg(long)]
        student: Option<String>,
    },
    Summary {
        student_id: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
}
