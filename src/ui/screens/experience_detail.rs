//! Experience detail screen.

use egui::{Align, Layout, RichText, ScrollArea, Ui, Vec2};

use super::Screen;
use crate::catalog::Experience;
use crate::state::AppAction;
use crate::ui::theme::Brand;
use crate::ui::widgets::{favorite_button, rating_label};

/// Experience detail screen UI.
pub struct ExperienceDetailScreen;

impl ExperienceDetailScreen {
    /// Render the details of `experience`.
    pub fn show(ui: &mut Ui, experience: &Experience, is_favorite: bool) -> Option<AppAction> {
        let mut action = None;

        ui.horizontal(|ui| {
            if ui.button("← Voltar").clicked() {
                action = Some(AppAction::Navigate(Screen::Explore));
            }
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if favorite_button(ui, is_favorite) {
                    action = Some(AppAction::ToggleFavorite(experience.id.clone()));
                }
            });
        });
        ui.add_space(8.0);

        ScrollArea::vertical()
            .max_height(ui.available_height() - 64.0)
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.label(
                    RichText::new(experience.category.label())
                        .small()
                        .color(Brand::ACCENT),
                );
                ui.label(RichText::new(&experience.title).size(24.0).strong());
                ui.label(RichText::new(format!("📍 {}", experience.location)).weak());
                rating_label(ui, experience);

                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    ui.label(format!("⏱ {}", experience.duration));
                    ui.separator();
                    ui.label(format!("Anfitrião: {}", experience.host));
                });

                ui.add_space(12.0);
                ui.separator();
                ui.add_space(8.0);

                ui.label(RichText::new("Sobre a experiência").strong());
                ui.label(&experience.description);

                ui.add_space(12.0);
                ui.label(RichText::new("Destaques").strong());
                for highlight in &experience.highlights {
                    ui.label(format!("✓ {}", highlight));
                }

                ui.add_space(16.0);
                if ui.link("Dúvidas? Fale com um agente").clicked() {
                    action = Some(AppAction::Navigate(Screen::Chat));
                }
            });

        ui.separator();
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new(experience.price_label()).size(18.0).strong());
                ui.label(RichText::new("por pessoa").small().weak());
            });
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui
                    .add_sized(
                        Vec2::new(140.0, 40.0),
                        egui::Button::new(RichText::new("Reservar").size(16.0).color(egui::Color32::WHITE))
                            .fill(Brand::ACCENT),
                    )
                    .clicked()
                {
                    action = Some(AppAction::Navigate(Screen::Reservation));
                }
            });
        });

        action
    }
}
