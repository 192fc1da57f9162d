pub mod catalog;
pub mod client;
pub mod config;
pub mod provisioner;

// Re-export the main components used by the binary and tests
pub use client::AdminClient;
pub use config::Config;
pub use provisioner::{Outcome, provision_all};
