//! # Teesmith
//!
//! A terminal-based t-shirt customizer: pick a color, toggle decal filter
//! tabs, upload artwork from disk, or generate it from a text prompt.
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (state machine over the shared shirt store)
//! - Network Layer (Tokio runtime: generation endpoint, file decode)

pub mod app;
pub mod constants;
pub mod decals;
pub mod messages;
pub mod network;
pub mod store;
pub mod ui;

// Re-export commonly used types
pub use app::{AppActor, AppState};
pub use decals::{DecalSlot, DecalTarget, FilterTab};
pub use messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
pub use network::NetworkActor;
pub use store::{Screen, ShirtState, Store};
