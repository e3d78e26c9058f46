/// Adapters - concrete implementations of the port traits
///
/// These modules talk to vendor APIs and the file system.
pub mod documents;
pub mod services;
