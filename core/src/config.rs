use std::path::PathBuf;

use clap::Parser;

/// The configuration for the `recover-secret` binary.
///
/// It can be configured via environment variables or command line arguments using `clap`.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[clap(version, about = "Recover a polynomial's constant term from shares")]
pub struct RecoveryConfig {
    /// Path to the JSON share document
    #[clap(env = "POLYSECRET_INPUT")]
    pub input: PathBuf,
}
