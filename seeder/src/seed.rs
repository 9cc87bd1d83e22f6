use async_trait::async_trait;
use colored::*;
use std::fmt;
use std::io::{self, Write};
use std::time::Instant;

use crate::error::BootstrapError;

const STATUS_COLUMN: usize = 80;

/// What a seeder did to its collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The collection already had rows; nothing was written.
    Skipped,
    /// The collection was empty and this many records were created.
    Seeded(usize),
}

impl fmt::Display for SeedOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedOutcome::Skipped => write!(f, "skipped"),
            SeedOutcome::Seeded(n) => write!(f, "seeded {n}"),
        }
    }
}

#[async_trait]
pub trait Seeder: Send + Sync {
    async fn seed(&self) -> Result<SeedOutcome, BootstrapError>;
}

/// Runs one seeder behind a status line and hands back its result.
pub async fn run_seeder<S: Seeder + ?Sized>(seeder: &S, name: &str) -> Result<SeedOutcome, BootstrapError> {
    let base_msg = format!("Seeding {}", name.bold());
    let dots = ".".repeat(STATUS_COLUMN.saturating_sub(base_msg.len()));
    print!("{}{} ", base_msg, dots);
    io::stdout().flush().ok();

    let start = Instant::now();
    let result = seeder.seed().await;
    let time_str = format!("({:.2?})", start.elapsed()).dimmed();

    match &result {
        Ok(SeedOutcome::Seeded(count)) => {
            println!("{} {}", "done".green(), time_str);
            tracing::info!(seeder = name, count, "seeded");
        }
        Ok(SeedOutcome::Skipped) => {
            println!("{} {}", "skipped".yellow(), time_str);
            tracing::info!(seeder = name, "collection not empty, skipped");
        }
        Err(err) => {
            println!("{}", "failed".red());
            tracing::error!(seeder = name, error = %err, "seeding failed");
        }
    }

    result
}
