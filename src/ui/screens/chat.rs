//! Chat screen with the travel agent.

use egui::Ui;

use super::Screen;
use crate::chat::ChatSession;
use crate::state::AppAction;
use crate::ui::widgets::{screen_header, ChatPanel, ChatPanelAction};

/// Chat screen state.
#[derive(Default)]
pub struct ChatScreen {
    /// Conversation
    pub session: ChatSession,
    /// Panel widget state
    panel: ChatPanel,
}

impl ChatScreen {
    /// Create a new chat screen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the chat screen. `back_to` is where the back button leads.
    pub fn show(&mut self, ui: &mut Ui, back_to: Screen) -> Option<AppAction> {
        let mut action = None;

        if screen_header(ui, "Atendimento", true) {
            action = Some(AppAction::Navigate(back_to));
        }

        if let Some(ChatPanelAction::SendMessage(text)) = self.panel.show(ui, self.session.messages()) {
            if self.session.send(&text) {
                self.panel.scroll_to_bottom();
            }
        }

        action
    }
}
