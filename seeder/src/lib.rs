pub mod accounts;
pub mod bootstrap;
pub mod error;
pub mod migrate;
pub mod seed;
pub mod seeds;

#[cfg(test)]
mod testing;

pub use accounts::SeedAccounts;
pub use bootstrap::{Bootstrap, BootstrapReport, run_bootstrap};
pub use error::BootstrapError;
