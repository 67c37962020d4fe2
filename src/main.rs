use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod domain;
mod geofence;
mod services;

pub use cli::*;
pub use commands::*;
pub use domain::models::*;
pub use geofence::*;
pub use services::attendance::*;
pub use services::config::*;
pub use services::output::*;
pub use services::storage::*;
pub use services::token::*;
pub use services::validator::*;

fn init_logging(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let config_path = resolve_config_path(cli.config.as_deref())?;
    if handle_config_commands(&cli, &config_path)? {
        return Ok(());
    }

    let cfg = load_config(&config_path)?;
    if let Err(e) = cfg.boundary.validate() {
        tracing::error!(
            path = %cfg.source.display(),
            error = %e,
            "campus boundary is malformed; every attendance token will be rejected"
        );
    }

    if handle_boundary_commands(&cli, &cfg)? {
        return Ok(());
    }
    if handle_attendance_commands(&cli)? {
        return Ok(());
    }
    handle_runtime_commands(&cli, &cfg)
}
