//! App layer - central state machine processing UI events and network responses

pub mod actor;
pub mod commands;
pub mod state;

pub use actor::AppActor;
pub use state::AppState;
