//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::decals::FilterTab;
use crate::store::Screen;

/// Editor tools a user may have open, one at a time
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EditorTool {
    ColorPicker,
    FilePicker,
    ImageGenerator,
}

impl EditorTool {
    pub fn label(&self) -> &'static str {
        match self {
            EditorTool::ColorPicker => "Color",
            EditorTool::FilePicker => "File",
            EditorTool::ImageGenerator => "Generate",
        }
    }
}

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Screen transitions
    StartCustomizing,
    GoBack,

    // Editor tools
    OpenTool(EditorTool),
    CloseTool,

    // Filter tabs
    ToggleFilterTab(FilterTab),
    ResetFilterTabs,

    // Color picker
    NextSwatch,
    PrevSwatch,

    // Text input for the file picker and image generator
    InputChar(char),
    Backspace,
    /// Switch which decal type the open picker submits to
    CycleTarget,
    /// Submit the open picker (generate or decode)
    Submit,

    // Popups
    DismissAlert,
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(
    key: KeyEvent,
    screen: Screen,
    active_tool: Option<EditorTool>,
    alert_shown: bool,
    show_help: bool,
) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Global Ctrl shortcuts
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('c') = key.code {
            return Some(UiEvent::Quit);
        }
    }

    // Popups swallow everything
    if alert_shown {
        return Some(UiEvent::DismissAlert);
    }
    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match screen {
        Screen::Intro => handle_intro_keys(key),
        Screen::Customizing => handle_customizer_keys(key, active_tool),
    }
}

fn handle_intro_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Enter | KeyCode::Char('c') => Some(UiEvent::StartCustomizing),
        KeyCode::Char('q') => Some(UiEvent::Quit),
        KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
        _ => None,
    }
}

fn handle_customizer_keys(key: KeyEvent, active_tool: Option<EditorTool>) -> Option<UiEvent> {
    match active_tool {
        None => match key.code {
            KeyCode::Char('q') => Some(UiEvent::Quit),
            KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
            KeyCode::Char('b') | KeyCode::Esc => Some(UiEvent::GoBack),
            KeyCode::Char('1') => Some(UiEvent::OpenTool(EditorTool::ColorPicker)),
            KeyCode::Char('2') => Some(UiEvent::OpenTool(EditorTool::FilePicker)),
            KeyCode::Char('3') => Some(UiEvent::OpenTool(EditorTool::ImageGenerator)),
            KeyCode::Char('l') => Some(UiEvent::ToggleFilterTab(FilterTab::Logo)),
            KeyCode::Char('f') => Some(UiEvent::ToggleFilterTab(FilterTab::FullTexture)),
            KeyCode::Char('r') => Some(UiEvent::ResetFilterTabs),
            _ => None,
        },
        Some(EditorTool::ColorPicker) => match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(UiEvent::CloseTool),
            KeyCode::Left | KeyCode::Up => Some(UiEvent::PrevSwatch),
            KeyCode::Right | KeyCode::Down => Some(UiEvent::NextSwatch),
            _ => None,
        },
        // Both text pickers share the editing key map
        Some(EditorTool::FilePicker) | Some(EditorTool::ImageGenerator) => match key.code {
            KeyCode::Esc => Some(UiEvent::CloseTool),
            KeyCode::Enter => Some(UiEvent::Submit),
            KeyCode::Tab => Some(UiEvent::CycleTarget),
            KeyCode::Backspace => Some(UiEvent::Backspace),
            KeyCode::Char(c) => Some(UiEvent::InputChar(c)),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventKind, KeyEventState};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn enter_on_intro_starts_customizing() {
        let event = key_to_ui_event(press(KeyCode::Enter), Screen::Intro, None, false, false);
        assert_eq!(event, Some(UiEvent::StartCustomizing));
    }

    #[test]
    fn alert_swallows_keys() {
        let event = key_to_ui_event(
            press(KeyCode::Char('q')),
            Screen::Customizing,
            None,
            true,
            false,
        );
        assert_eq!(event, Some(UiEvent::DismissAlert));
    }

    #[test]
    fn typing_goes_to_open_picker() {
        let event = key_to_ui_event(
            press(KeyCode::Char('q')),
            Screen::Customizing,
            Some(EditorTool::ImageGenerator),
            false,
            false,
        );
        assert_eq!(event, Some(UiEvent::InputChar('q')));
    }

    #[test]
    fn filter_keys_map_to_tabs() {
        let logo = key_to_ui_event(
            press(KeyCode::Char('l')),
            Screen::Customizing,
            None,
            false,
            false,
        );
        assert_eq!(logo, Some(UiEvent::ToggleFilterTab(FilterTab::Logo)));
        let full = key_to_ui_event(
            press(KeyCode::Char('f')),
            Screen::Customizing,
            None,
            false,
            false,
        );
        assert_eq!(full, Some(UiEvent::ToggleFilterTab(FilterTab::FullTexture)));
    }
}
