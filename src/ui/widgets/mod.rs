//! UI widgets for reusable components.

pub mod bottom_nav;
pub mod chat_panel;
pub mod experience_card;

pub use bottom_nav::BottomNav;
pub use chat_panel::{ChatPanel, ChatPanelAction};
pub use experience_card::{favorite_button, rating_label, CardAction, ExperienceCard};

use egui::{RichText, Ui};

/// Screen header with an optional back button. Returns true when back is clicked.
pub fn screen_header(ui: &mut Ui, title: &str, back: bool) -> bool {
    let mut clicked = false;
    ui.horizontal(|ui| {
        if back && ui.button("← Voltar").clicked() {
            clicked = true;
        }
        ui.heading(RichText::new(title).strong());
    });
    ui.add_space(8.0);
    clicked
}

/// Centered message for empty lists.
pub fn empty_state(ui: &mut Ui, icon: &str, title: &str, hint: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.label(RichText::new(icon).size(40.0));
        ui.add_space(8.0);
        ui.label(RichText::new(title).size(17.0).strong());
        ui.label(RichText::new(hint).weak());
    });
}
