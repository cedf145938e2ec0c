//! Network layer - async boundaries (generation endpoint, local file decode)

pub mod actor;
pub mod client;
pub mod file_import;

pub use actor::NetworkActor;
