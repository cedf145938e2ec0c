//! App state - the shared store plus per-view editor selection

use crate::messages::ui_events::EditorTool;
use crate::messages::RenderState;
use crate::store::Store;

/// Main application state - shared shirt store plus the transient editor
/// selection of the customizer view. No I/O happens here.
pub struct AppState {
    /// Shared state store, single source of truth for the shirt
    pub store: Store,

    // Editor selection (per-view, discarded when leaving the customizer)
    pub active_tool: Option<EditorTool>,
    pub prompt: String,
    pub file_path: String,
    /// Decal type name the open picker submits to, a key of the resolver table
    pub target: &'static str,
    pub is_generating: bool,
    pub palette_index: usize,

    // Popups
    pub alert: Option<String>,
    pub show_help: bool,

    // Request id counter, used to correlate log lines
    pub next_request_id: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            store: Store::new(),
            active_tool: None,
            prompt: String::new(),
            file_path: String::new(),
            target: "logo",
            is_generating: false,
            palette_index: 0,
            alert: None,
            show_help: false,
            next_request_id: 1,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            shirt: self.store.state().clone(),
            active_tool: self.active_tool,
            prompt: self.prompt.clone(),
            file_path: self.file_path.clone(),
            target: self.target,
            is_generating: self.is_generating,
            palette_index: self.palette_index,
            alert: self.alert.clone(),
            show_help: self.show_help,
        }
    }
}
