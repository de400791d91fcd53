//! Recovery of a polynomial's constant term from `k` of `n` shares whose
//! values are written in bases 2 through 16.

pub mod config;
pub mod document;
pub mod error;
pub mod params;
pub mod recovery;
pub mod share;

pub use document::ShareDocument;
pub use error::{DocumentError, RecoveryError, RecoveryResult};
pub use params::Threshold;
pub use recovery::SecretRecovery;
pub use share::{BaseSpec, ShareRecord};
