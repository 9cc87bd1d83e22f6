use seeder::{BootstrapError, BootstrapReport, SeedAccounts, run_bootstrap};
use std::process::ExitCode;
use tracing_appender::rolling;
use util::config::{self, AppConfig};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let _log_guard = init_logging(&config::log_file(), &config::log_level());

    println!("Bootstrapping {}...", config::project_name());

    match run().await {
        Ok(report) => {
            tracing::info!(
                migrations = report.migrations_applied,
                roles = %report.roles,
                users = %report.users,
                "bootstrap complete"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Bootstrap failed: {err}");
            tracing::error!(error = %err, "bootstrap failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<BootstrapReport, BootstrapError> {
    let cfg = AppConfig::global().clone();
    let seed = SeedAccounts::from_config(&cfg)?;

    let db = db::connect().await.map_err(BootstrapError::Connection)?;
    run_bootstrap(&db, &seed, cfg.seed_transactional).await
}

fn init_logging(log_file: &str, log_level: &str) -> tracing_appender::non_blocking::WorkerGuard {
    use std::fs;
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    fs::create_dir_all("logs").ok();

    let file_appender = rolling::daily("logs", log_file);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true);

    let stdout_layer = config::log_to_stdout().then(|| {
        fmt::layer()
            .with_writer(std::io::stdout)
            .with_ansi(true)
            .with_target(true)
    });

    let env_filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("seeder=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stdout_layer)
        .init();

    guard
}
