//! App actor - message loop processing UI events and network responses

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
use crate::store::ShirtState;

/// App actor that processes UI events and network responses
pub struct AppActor {
    state: AppState,
    network_tx: mpsc::UnboundedSender<NetworkCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        network_tx: mpsc::UnboundedSender<NetworkCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state: AppState::new(),
            network_tx,
            render_tx,
        }
    }

    /// Attach an observer to the shared store before the actor starts.
    /// This is the hook a rendering surface would use.
    pub fn subscribe_store(&mut self) -> mpsc::UnboundedReceiver<ShirtState> {
        self.state.store.subscribe()
    }

    /// Run the actor message loop
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut net_rx: mpsc::UnboundedReceiver<NetworkResponse>,
    ) {
        // Send initial render state
        let _ = self.render_tx.send(self.state.to_render_state());

        loop {
            tokio::select! {
                Some(event) = ui_rx.recv() => {
                    if self.handle_ui_event(event) {
                        // Quit signal received
                        let _ = self.network_tx.send(NetworkCommand::Shutdown);
                        break;
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                Some(response) = net_rx.recv() => {
                    tracing::debug!(id = response.id(), "network response received");
                    self.state.handle_response(response);
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                else => break,
            }
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            // Screen transitions
            UiEvent::StartCustomizing => self.state.start_customizing(),
            UiEvent::GoBack => self.state.go_back(),

            // Editor tools
            UiEvent::OpenTool(tool) => self.state.open_tool(tool),
            UiEvent::CloseTool => self.state.close_tool(),

            // Filter tabs
            UiEvent::ToggleFilterTab(tab) => self.state.toggle_filter_tab(tab),
            UiEvent::ResetFilterTabs => self.state.reset_filter_tabs(),

            // Color picker
            UiEvent::NextSwatch => self.state.next_swatch(),
            UiEvent::PrevSwatch => self.state.prev_swatch(),

            // Picker text input
            UiEvent::InputChar(c) => self.state.input_char(c),
            UiEvent::Backspace => self.state.backspace(),
            UiEvent::CycleTarget => self.state.cycle_target(),
            UiEvent::Submit => {
                if let Some(cmd) = self.state.submit() {
                    let _ = self.network_tx.send(cmd);
                }
            }

            // Popups
            UiEvent::DismissAlert => self.state.dismiss_alert(),
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            // System
            UiEvent::Quit => return true,
        }

        false
    }
}
