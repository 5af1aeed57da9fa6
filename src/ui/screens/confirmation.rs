//! Confirmation screen shown after a reservation or trip request.

use egui::{RichText, Ui, Vec2};

use crate::state::{AppAction, ConfirmationDetails};
use crate::ui::theme::Brand;

/// Confirmation screen UI.
pub struct ConfirmationScreen;

impl ConfirmationScreen {
    /// Render `details` and return navigation when the button is clicked.
    pub fn show(ui: &mut Ui, details: &ConfirmationDetails) -> Option<AppAction> {
        let mut action = None;

        ui.vertical_centered(|ui| {
            ui.add_space(120.0);
            ui.label(RichText::new("✔").size(64.0).color(Brand::SUCCESS));
            ui.add_space(16.0);
            ui.label(RichText::new(&details.title).size(24.0).strong());
            ui.add_space(8.0);
            ui.label(RichText::new(&details.message).size(15.0).weak());
            ui.add_space(40.0);

            if ui
                .add_sized(
                    Vec2::new(ui.available_width().min(280.0), 44.0),
                    egui::Button::new(
                        RichText::new(&details.button_text)
                            .size(16.0)
                            .color(egui::Color32::WHITE),
                    )
                    .fill(Brand::ACCENT),
                )
                .clicked()
            {
                action = Some(AppAction::Navigate(details.button_destination));
            }
        });

        action
    }
}
