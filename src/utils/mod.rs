/// Shared utilities
pub mod credentials;

pub use credentials::{CredentialSource, EnvCredentials, StaticCredentials};
