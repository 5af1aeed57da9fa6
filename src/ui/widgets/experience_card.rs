//! Experience card used by the explore and favorites lists.

use egui::{Align, Layout, RichText, Ui};

use crate::catalog::Experience;
use crate::ui::theme::Brand;

/// What the user did with a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    /// Open the detail screen
    Open,
    /// Toggle the favorite heart
    ToggleFavorite,
}

/// Favorite heart button. Returns true when clicked.
pub fn favorite_button(ui: &mut Ui, is_favorite: bool) -> bool {
    let (icon, color) = if is_favorite {
        ("♥", Brand::FAVORITE)
    } else {
        ("♡", ui.visuals().weak_text_color())
    };

    ui.add(egui::Button::new(RichText::new(icon).size(20.0).color(color)).frame(false))
        .on_hover_text(if is_favorite {
            "Remover dos favoritos"
        } else {
            "Adicionar aos favoritos"
        })
        .clicked()
}

/// Rating line: "★ 4.9 (214)".
pub fn rating_label(ui: &mut Ui, experience: &Experience) {
    ui.horizontal(|ui| {
        ui.label(RichText::new("★").color(Brand::STAR));
        ui.label(RichText::new(format!("{:.1}", experience.rating)).strong());
        ui.label(RichText::new(format!("({})", experience.review_count)).weak());
    });
}

/// Experience card widget.
pub struct ExperienceCard;

impl ExperienceCard {
    /// Render a card and return the user's action, if any.
    pub fn show(ui: &mut Ui, experience: &Experience, is_favorite: bool) -> Option<CardAction> {
        let mut action = None;

        egui::Frame::new()
            .fill(ui.visuals().faint_bg_color)
            .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
            .inner_margin(12.0)
            .corner_radius(12.0)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(experience.category.label())
                            .small()
                            .color(Brand::ACCENT),
                    );
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if favorite_button(ui, is_favorite) {
                            action = Some(CardAction::ToggleFavorite);
                        }
                    });
                });

                let title = ui.add(
                    egui::Label::new(RichText::new(&experience.title).size(17.0).strong())
                        .sense(egui::Sense::click()),
                );
                if title.clicked() {
                    action = Some(CardAction::Open);
                }

                ui.label(RichText::new(format!("📍 {}", experience.location)).weak());
                rating_label(ui, experience);

                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    ui.label(RichText::new(experience.price_label()).strong());
                    ui.label(RichText::new("/ pessoa").small().weak());

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if ui.button("Ver detalhes").clicked() {
                            action = Some(CardAction::Open);
                        }
                    });
                });
            });

        ui.add_space(8.0);
        action
    }
}
