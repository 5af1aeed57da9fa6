//! Chat panel widget.
//!
//! Displays the conversation and an input row for new messages.

use egui::{Align, Color32, Layout, RichText, ScrollArea, Ui};

use crate::chat::{ChatMessage, AGENT_NAME};
use crate::ui::theme::Brand;

/// Chat panel actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatPanelAction {
    /// Send a message.
    SendMessage(String),
}

/// Chat panel widget state.
#[derive(Default)]
pub struct ChatPanel {
    /// Input message.
    input: String,
    /// Scroll to bottom flag.
    scroll_to_bottom: bool,
}

impl ChatPanel {
    /// Request scroll to bottom (call after a new message).
    pub fn scroll_to_bottom(&mut self) {
        self.scroll_to_bottom = true;
    }

    /// Render the chat panel.
    pub fn show(&mut self, ui: &mut Ui, messages: &[ChatMessage]) -> Option<ChatPanelAction> {
        let mut action = None;

        let mut scroll_area = ScrollArea::vertical()
            .max_height(ui.available_height() - 48.0)
            .auto_shrink([false, false]);

        if self.scroll_to_bottom {
            scroll_area = scroll_area.stick_to_bottom(true);
            self.scroll_to_bottom = false;
        }

        scroll_area.show(ui, |ui| {
            for msg in messages {
                show_message(ui, msg);
            }
        });

        ui.separator();

        // Input area
        ui.horizontal(|ui| {
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.input)
                    .desired_width(ui.available_width() - 72.0)
                    .hint_text("Digite sua mensagem..."),
            );

            let send_clicked = ui.button("Enviar").clicked();
            let enter_pressed =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            if (send_clicked || enter_pressed) && !self.input.trim().is_empty() {
                let message = self.input.trim().to_string();
                self.input.clear();
                action = Some(ChatPanelAction::SendMessage(message));
            }
        });

        action
    }
}

/// Show a single message as a bubble, right-aligned for the traveler.
fn show_message(ui: &mut Ui, msg: &ChatMessage) {
    let (bg_color, text_color, layout) = if msg.is_local() {
        (Brand::ACCENT, Color32::WHITE, Layout::right_to_left(Align::Min))
    } else {
        (
            ui.visuals().faint_bg_color,
            ui.visuals().text_color(),
            Layout::left_to_right(Align::Min),
        )
    };

    ui.with_layout(layout, |ui| {
        egui::Frame::new()
            .fill(bg_color)
            .inner_margin(8.0)
            .outer_margin(2.0)
            .corner_radius(10.0)
            .show(ui, |ui| {
                ui.set_max_width(260.0);
                ui.vertical(|ui| {
                    if !msg.is_local() {
                        ui.label(RichText::new(AGENT_NAME).small().strong().color(Brand::ACCENT));
                    }
                    ui.label(RichText::new(&msg.text).color(text_color));
                    ui.label(
                        RichText::new(msg.sent_at.format("%H:%M").to_string())
                            .small()
                            .color(text_color.gamma_multiply(0.7)),
                    );
                });
            });
    });
}
