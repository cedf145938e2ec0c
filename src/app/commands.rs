//! Command handlers - state transitions for every UI event and network response

use crate::app::AppState;
use crate::constants::PALETTE;
use crate::decals::{self, DecalError, FilterTab};
use crate::messages::ui_events::EditorTool;
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::store::Screen;

impl AppState {
    // ========================
    // Screen transitions
    // ========================

    pub fn start_customizing(&mut self) {
        self.store.update(|s| s.screen = Screen::Customizing);
    }

    /// Back to the intro screen. The customizer view unmounts, so its
    /// editor selection is discarded; in-flight work still completes and
    /// still writes to the store when it lands.
    pub fn go_back(&mut self) {
        self.store.update(|s| s.screen = Screen::Intro);
        self.active_tool = None;
        self.prompt.clear();
        self.file_path.clear();
        self.target = "logo";
        self.palette_index = 0;
    }

    // ========================
    // Editor tool selection
    // ========================

    /// Open a tool. Never validates against the filter-tab state; the two
    /// machines are independent.
    pub fn open_tool(&mut self, tool: EditorTool) {
        self.active_tool = Some(tool);
        if tool == EditorTool::ColorPicker {
            // Start the cursor on the current color when it is in the palette
            if let Some(idx) = PALETTE.iter().position(|c| *c == self.store.state().color) {
                self.palette_index = idx;
            }
        }
    }

    pub fn close_tool(&mut self) {
        self.active_tool = None;
    }

    // ========================
    // Filter tabs
    // ========================

    /// Toggle a filter tab. The store boolean is the single source of
    /// truth, so two toggles always restore the original value.
    pub fn toggle_filter_tab(&mut self, tab: FilterTab) {
        let next = !self.store.state().filter_active(tab);
        self.store.update(|s| s.set_filter(tab, next));
    }

    /// Force the default selection: logo on, full-wrap off
    pub fn reset_filter_tabs(&mut self) {
        self.store.update(|s| {
            s.set_filter(FilterTab::Logo, true);
            s.set_filter(FilterTab::FullTexture, false);
        });
    }

    /// Activate a tab only if it is not already active
    pub fn ensure_filter_tab(&mut self, tab: FilterTab) {
        if !self.store.state().filter_active(tab) {
            self.toggle_filter_tab(tab);
        }
    }

    // ========================
    // Color picker
    // ========================

    pub fn next_swatch(&mut self) {
        self.palette_index = (self.palette_index + 1) % PALETTE.len();
        self.apply_swatch();
    }

    pub fn prev_swatch(&mut self) {
        self.palette_index = self
            .palette_index
            .checked_sub(1)
            .unwrap_or(PALETTE.len() - 1);
        self.apply_swatch();
    }

    fn apply_swatch(&mut self) {
        let color = PALETTE[self.palette_index];
        self.store.update(|s| s.color = String::from(color));
    }

    // ========================
    // Picker text input
    // ========================

    pub fn input_char(&mut self, c: char) {
        match self.active_tool {
            Some(EditorTool::ImageGenerator) => self.prompt.push(c),
            Some(EditorTool::FilePicker) => self.file_path.push(c),
            _ => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.active_tool {
            Some(EditorTool::ImageGenerator) => {
                self.prompt.pop();
            }
            Some(EditorTool::FilePicker) => {
                self.file_path.pop();
            }
            _ => {}
        }
    }

    pub fn cycle_target(&mut self) {
        let names: Vec<&'static str> = decals::type_names().collect();
        let current = names.iter().position(|n| *n == self.target).unwrap_or(0);
        self.target = names[(current + 1) % names.len()];
    }

    // ========================
    // Submission
    // ========================

    /// Submit whichever picker is open, producing a network command when
    /// the input passes local validation.
    pub fn submit(&mut self) -> Option<NetworkCommand> {
        match self.active_tool {
            Some(EditorTool::ImageGenerator) => self.submit_prompt(),
            Some(EditorTool::FilePicker) => self.submit_file(),
            _ => None,
        }
    }

    /// Validation happens here, before anything crosses the network
    /// boundary: an empty prompt is rejected with an alert and the
    /// in-flight flag is left untouched. A second submit while one is in
    /// flight is ignored.
    fn submit_prompt(&mut self) -> Option<NetworkCommand> {
        if self.is_generating {
            return None;
        }
        if self.prompt.trim().is_empty() {
            self.alert = Some(String::from("Please enter a prompt"));
            return None;
        }

        self.is_generating = true;
        let id = self.next_id();
        Some(NetworkCommand::Generate {
            id,
            prompt: self.prompt.clone(),
            decal_type: self.target,
        })
    }

    fn submit_file(&mut self) -> Option<NetworkCommand> {
        if self.file_path.trim().is_empty() {
            self.alert = Some(String::from("Enter a file path first"));
            return None;
        }

        let id = self.next_id();
        Some(NetworkCommand::DecodeFile {
            id,
            path: self.file_path.trim().into(),
            decal_type: self.target,
        })
    }

    // ========================
    // Response handling
    // ========================

    /// Apply a finished generation or decode. Results are applied even if
    /// the user closed the tool or left the customizer mid-request.
    pub fn handle_response(&mut self, response: NetworkResponse) {
        match response {
            NetworkResponse::Generated {
                id,
                decal_type,
                image,
            } => {
                self.finish_generation();
                if let Err(e) = self.apply_decal(decal_type, image) {
                    tracing::error!(id, %e, "generated image for unresolvable decal type");
                    self.alert = Some(e.to_string());
                }
            }
            NetworkResponse::GenerateFailed { id, message } => {
                self.finish_generation();
                tracing::warn!(id, %message, "generation failed");
                self.alert = Some(message);
            }
            NetworkResponse::Decoded {
                id,
                decal_type,
                image,
            } => {
                self.active_tool = None;
                self.file_path.clear();
                if let Err(e) = self.apply_decal(decal_type, image) {
                    tracing::error!(id, %e, "decoded file for unresolvable decal type");
                    self.alert = Some(e.to_string());
                }
            }
            NetworkResponse::DecodeFailed { id, message } => {
                self.active_tool = None;
                tracing::warn!(id, %message, "file decode failed");
                self.alert = Some(message);
            }
        }
    }

    /// Write an image into the slot the decal type resolves to, then make
    /// sure the matching filter tab is switched on.
    fn apply_decal(&mut self, decal_type: &str, image: String) -> Result<(), DecalError> {
        let target = decals::resolve(decal_type)?;
        self.store.update(|s| s.set_decal(target.slot, image));
        self.ensure_filter_tab(target.tab);
        Ok(())
    }

    /// Guaranteed cleanup after a generation completes, success or failure
    fn finish_generation(&mut self) {
        self.is_generating = false;
        self.active_tool = None;
    }

    // ========================
    // Popups
    // ========================

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PLACEHOLDER_DECAL;

    #[test]
    fn customize_it_switches_screens() {
        let mut state = AppState::new();
        assert_eq!(state.store.state().screen, Screen::Intro);
        state.start_customizing();
        assert_eq!(state.store.state().screen, Screen::Customizing);
        state.go_back();
        assert_eq!(state.store.state().screen, Screen::Intro);
    }

    #[test]
    fn go_back_discards_editor_selection() {
        let mut state = AppState::new();
        state.start_customizing();
        state.open_tool(EditorTool::ImageGenerator);
        state.prompt = String::from("half-typed");
        state.go_back();
        assert_eq!(state.active_tool, None);
        assert!(state.prompt.is_empty());
    }

    #[test]
    fn toggling_a_tab_twice_restores_it() {
        let mut state = AppState::new();
        for tab in [FilterTab::Logo, FilterTab::FullTexture] {
            let before = state.store.state().filter_active(tab);
            state.toggle_filter_tab(tab);
            assert_eq!(state.store.state().filter_active(tab), !before);
            state.toggle_filter_tab(tab);
            assert_eq!(state.store.state().filter_active(tab), before);
        }
    }

    #[test]
    fn reset_forces_default_selection() {
        let mut state = AppState::new();
        state.toggle_filter_tab(FilterTab::Logo);
        state.toggle_filter_tab(FilterTab::FullTexture);
        state.reset_filter_tabs();
        assert!(state.store.state().logo_texture);
        assert!(!state.store.state().full_texture);
    }

    #[test]
    fn tool_selection_ignores_filter_state() {
        let mut state = AppState::new();
        state.toggle_filter_tab(FilterTab::Logo);
        state.open_tool(EditorTool::FilePicker);
        assert_eq!(state.active_tool, Some(EditorTool::FilePicker));
        state.close_tool();
        assert_eq!(state.active_tool, None);
        assert!(!state.store.state().logo_texture);
    }

    #[test]
    fn swatch_cycling_writes_the_color() {
        let mut state = AppState::new();
        state.open_tool(EditorTool::ColorPicker);
        state.next_swatch();
        assert_eq!(state.store.state().color, PALETTE[1]);
        state.prev_swatch();
        assert_eq!(state.store.state().color, PALETTE[0]);
        state.prev_swatch();
        assert_eq!(state.store.state().color, PALETTE[PALETTE.len() - 1]);
    }

    #[test]
    fn empty_prompt_is_rejected_locally() {
        let mut state = AppState::new();
        state.open_tool(EditorTool::ImageGenerator);
        state.prompt = String::from("   ");
        assert_eq!(state.submit(), None);
        assert!(!state.is_generating);
        assert_eq!(state.alert.as_deref(), Some("Please enter a prompt"));
    }

    #[test]
    fn submit_sets_the_in_flight_flag() {
        let mut state = AppState::new();
        state.open_tool(EditorTool::ImageGenerator);
        state.prompt = String::from("blue dragon logo");
        let cmd = state.submit().unwrap();
        assert!(state.is_generating);
        match cmd {
            NetworkCommand::Generate {
                prompt, decal_type, ..
            } => {
                assert_eq!(prompt, "blue dragon logo");
                assert_eq!(decal_type, "logo");
            }
            other => panic!("expected Generate, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_submissions_are_ignored_while_generating() {
        let mut state = AppState::new();
        state.open_tool(EditorTool::ImageGenerator);
        state.prompt = String::from("a fox");
        assert!(state.submit().is_some());
        assert_eq!(state.submit(), None);
    }

    #[test]
    fn cycle_target_walks_the_resolver_table() {
        let mut state = AppState::new();
        assert_eq!(state.target, "logo");
        state.cycle_target();
        assert_eq!(state.target, "full");
        state.cycle_target();
        assert_eq!(state.target, "logo");
    }

    #[test]
    fn decal_getter_mirrors_the_written_slot() {
        use crate::decals::DecalSlot;

        let mut state = AppState::new();
        state
            .apply_decal("full", String::from("data:image/png;base64,QUJD"))
            .unwrap();
        assert_eq!(
            state.store.state().decal(DecalSlot::Full),
            "data:image/png;base64,QUJD"
        );
        assert_eq!(state.store.state().decal(DecalSlot::Logo), PLACEHOLDER_DECAL);
    }

    #[test]
    fn successful_generation_applies_decal_and_activates_tab() {
        let mut state = AppState::new();
        state.toggle_filter_tab(FilterTab::Logo); // switch logo off first
        assert!(!state.store.state().logo_texture);

        state.open_tool(EditorTool::ImageGenerator);
        state.prompt = String::from("blue dragon logo");
        let cmd = state.submit().unwrap();
        let id = match cmd {
            NetworkCommand::Generate { id, .. } => id,
            other => panic!("expected Generate, got {other:?}"),
        };

        state.handle_response(NetworkResponse::Generated {
            id,
            decal_type: "logo",
            image: String::from("data:image/png;base64,QUJD"),
        });

        assert_eq!(state.store.state().logo_decal, "data:image/png;base64,QUJD");
        assert!(state.store.state().logo_texture);
        assert!(!state.is_generating);
        assert_eq!(state.active_tool, None);
    }

    #[test]
    fn generation_for_full_decal_leaves_logo_alone() {
        let mut state = AppState::new();
        state.handle_response(NetworkResponse::Generated {
            id: 1,
            decal_type: "full",
            image: String::from("data:image/png;base64,QUJD"),
        });
        assert_eq!(state.store.state().full_decal, "data:image/png;base64,QUJD");
        assert!(state.store.state().full_texture);
        assert_eq!(state.store.state().logo_decal, PLACEHOLDER_DECAL);
        assert!(state.store.state().logo_texture);
    }

    #[test]
    fn failed_generation_still_clears_flag_and_tool() {
        let mut state = AppState::new();
        state.open_tool(EditorTool::ImageGenerator);
        state.prompt = String::from("a fox");
        state.submit();

        state.handle_response(NetworkResponse::GenerateFailed {
            id: 1,
            message: String::from("Connection failed"),
        });

        assert!(!state.is_generating);
        assert_eq!(state.active_tool, None);
        assert_eq!(state.alert.as_deref(), Some("Connection failed"));
        assert_eq!(state.store.state().logo_decal, PLACEHOLDER_DECAL);
    }

    #[test]
    fn result_lands_even_after_the_tool_was_closed() {
        let mut state = AppState::new();
        state.open_tool(EditorTool::ImageGenerator);
        state.prompt = String::from("a fox");
        state.submit();
        state.close_tool();

        state.handle_response(NetworkResponse::Generated {
            id: 1,
            decal_type: "logo",
            image: String::from("data:image/png;base64,Zm94"),
        });
        assert_eq!(state.store.state().logo_decal, "data:image/png;base64,Zm94");
    }

    #[test]
    fn decoded_file_closes_the_picker_and_applies() {
        let mut state = AppState::new();
        state.open_tool(EditorTool::FilePicker);
        state.file_path = String::from("shirt.png");
        let cmd = state.submit();
        assert!(matches!(cmd, Some(NetworkCommand::DecodeFile { .. })));

        state.handle_response(NetworkResponse::Decoded {
            id: 1,
            decal_type: "logo",
            image: String::from("data:image/png;base64,cG5n"),
        });
        assert_eq!(state.active_tool, None);
        assert!(state.file_path.is_empty());
        assert_eq!(state.store.state().logo_decal, "data:image/png;base64,cG5n");
    }

    #[test]
    fn decode_failure_surfaces_an_alert_and_mutates_nothing() {
        let mut state = AppState::new();
        state.open_tool(EditorTool::FilePicker);
        state.handle_response(NetworkResponse::DecodeFailed {
            id: 1,
            message: String::from("not an image"),
        });
        assert_eq!(state.active_tool, None);
        assert_eq!(state.alert.as_deref(), Some("not an image"));
        assert_eq!(state.store.state().logo_decal, PLACEHOLDER_DECAL);
        assert_eq!(state.store.state().full_decal, PLACEHOLDER_DECAL);
    }

    #[test]
    fn empty_file_path_is_rejected_locally() {
        let mut state = AppState::new();
        state.open_tool(EditorTool::FilePicker);
        assert_eq!(state.submit(), None);
        assert!(state.alert.is_some());
    }

    #[test]
    fn unknown_decal_type_in_response_is_loud_but_not_fatal() {
        let mut state = AppState::new();
        state.handle_response(NetworkResponse::Generated {
            id: 1,
            decal_type: "sleeve",
            image: String::from("data:image/png;base64,QUJD"),
        });
        assert!(state.alert.is_some());
        assert_eq!(state.store.state().logo_decal, PLACEHOLDER_DECAL);
    }
}
