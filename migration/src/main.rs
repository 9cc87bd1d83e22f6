use migration::runner;
use std::{fs, process};
use util::{config, paths};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(|s| s.as_str()) {
        Some("clean") => {
            remove_db_file();
        }
        Some("fresh") => {
            remove_db_file();
            migrate().await;
        }
        _ => {
            migrate().await;
        }
    }
}

async fn migrate() {
    let url = match paths::database_url() {
        Ok(url) => url,
        Err(err) => {
            eprintln!("Failed to prepare database directory: {err}");
            process::exit(1);
        }
    };

    let db = match sea_orm::Database::connect(&url).await {
        Ok(db) => db,
        Err(err) => {
            eprintln!("DB connection failed: {err}");
            process::exit(1);
        }
    };

    if let Err(err) = runner::run_pending_migrations(&db).await {
        eprintln!("Migration failed: {err}");
        process::exit(1);
    }
}

fn remove_db_file() {
    let Some(db_path) = paths::database_file() else {
        println!("DATABASE_PATH is not a file, nothing to clean: {}", config::database_path());
        return;
    };

    if db_path.exists() {
        if let Err(err) = fs::remove_file(&db_path) {
            eprintln!("Failed to delete DB file: {err}");
            process::exit(1);
        }
        println!("Deleted DB: {}", db_path.display());
    } else {
        println!("DB file does not exist: {}", db_path.display());
    }
}
