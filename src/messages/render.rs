//! Render state - data structure sent from App layer to UI for rendering

use crate::messages::ui_events::EditorTool;
use crate::store::ShirtState;

/// Complete state needed by the UI to render
#[derive(Debug, Clone)]
pub struct RenderState {
    /// Snapshot of the shared shirt state
    pub shirt: ShirtState,

    // Editor selection (per-view, transient)
    pub active_tool: Option<EditorTool>,
    pub prompt: String,
    pub file_path: String,
    /// Decal type the open picker will submit to ("logo" or "full")
    pub target: &'static str,
    pub is_generating: bool,
    pub palette_index: usize,

    // Popups
    pub alert: Option<String>,
    pub show_help: bool,
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            shirt: ShirtState::default(),
            active_tool: None,
            prompt: String::new(),
            file_path: String::new(),
            target: "logo",
            is_generating: false,
            palette_index: 0,
            alert: None,
            show_help: false,
        }
    }
}
