//! Welcome screen: log in or browse as a guest.

use egui::{RichText, Ui, Vec2};

use super::Screen;
use crate::state::AppAction;
use crate::ui::theme::Brand;

/// Welcome screen UI.
pub struct WelcomeScreen;

impl WelcomeScreen {
    /// Render the welcome screen and return the requested action.
    pub fn show(ui: &mut Ui) -> Option<AppAction> {
        let mut action = None;

        ui.vertical_centered(|ui| {
            ui.add_space(100.0);

            ui.label(RichText::new("⛵").size(64.0));
            ui.add_space(12.0);
            ui.label(
                RichText::new("Moveasy")
                    .size(40.0)
                    .strong()
                    .color(Brand::ACCENT),
            );
            ui.add_space(8.0);
            ui.label(
                RichText::new("Experiências e viagens sob medida, do seu jeito.")
                    .size(16.0)
                    .weak(),
            );

            ui.add_space(80.0);

            let button_size = Vec2::new(ui.available_width().min(300.0), 48.0);

            if ui
                .add_sized(
                    button_size,
                    egui::Button::new(RichText::new("Entrar").size(18.0).color(egui::Color32::WHITE))
                        .fill(Brand::ACCENT),
                )
                .clicked()
            {
                action = Some(AppAction::Navigate(Screen::Login));
            }

            ui.add_space(12.0);

            if ui
                .add_sized(
                    button_size,
                    egui::Button::new(RichText::new("Explorar como convidado").size(16.0)),
                )
                .clicked()
            {
                action = Some(AppAction::ContinueAsGuest);
            }
        });

        action
    }
}
