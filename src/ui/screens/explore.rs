//! Explore screen: browse and search the experience catalog.

use egui::{RichText, ScrollArea, Ui, Vec2};

use super::Screen;
use crate::catalog::{mock_experiences, search, Category, Experience, User};
use crate::state::AppAction;
use crate::ui::theme::Brand;
use crate::ui::widgets::{CardAction, ExperienceCard};

/// Explore screen state.
pub struct ExploreScreen {
    /// Catalog being browsed
    pub experiences: Vec<Experience>,
    /// Search filter
    pub search_query: String,
    /// Category filter
    pub category: Option<Category>,
}

impl Default for ExploreScreen {
    fn default() -> Self {
        Self {
            experiences: mock_experiences(),
            search_query: String::new(),
            category: None,
        }
    }
}

impl ExploreScreen {
    /// Create a new explore screen over the built-in catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Experiences matching the current filters.
    pub fn visible_experiences(&self) -> Vec<&Experience> {
        search(&self.experiences, &self.search_query, self.category)
    }

    /// Greeting line for the header.
    pub fn greeting(user: Option<&User>) -> String {
        match user {
            Some(user) => format!("Olá, {}!", user.first_name()),
            None => "Olá, viajante!".to_string(),
        }
    }

    /// Render the explore screen.
    pub fn show(&mut self, ui: &mut Ui, user: Option<&User>, favorites: &[String]) -> Option<AppAction> {
        let mut action = None;

        ui.label(RichText::new(Self::greeting(user)).size(22.0).strong());
        ui.label(RichText::new("Para onde vamos agora?").weak());
        ui.add_space(12.0);

        ui.add(
            egui::TextEdit::singleline(&mut self.search_query)
                .hint_text("🔍 Buscar destinos ou experiências")
                .desired_width(f32::INFINITY),
        );
        ui.add_space(8.0);

        // Category chips
        ui.horizontal_wrapped(|ui| {
            ui.selectable_value(&mut self.category, None, "Todos");
            for category in Category::all() {
                ui.selectable_value(&mut self.category, Some(*category), category.label());
            }
        });
        ui.add_space(8.0);

        // Custom trip banner
        egui::Frame::new()
            .fill(Brand::ACCENT.linear_multiply(0.12))
            .inner_margin(12.0)
            .corner_radius(12.0)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.label(RichText::new("Quer uma viagem sob medida?").strong());
                ui.label(RichText::new("Conte para onde quer ir e montamos o roteiro.").small());
                ui.add_space(4.0);
                if ui
                    .add_sized(
                        Vec2::new(180.0, 32.0),
                        egui::Button::new(RichText::new("Solicitar viagem").color(egui::Color32::WHITE))
                            .fill(Brand::ACCENT),
                    )
                    .clicked()
                {
                    action = Some(AppAction::Navigate(Screen::Booking));
                }
            });
        ui.add_space(12.0);

        let visible: Vec<Experience> = self.visible_experiences().into_iter().cloned().collect();

        ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
            if visible.is_empty() {
                ui.vertical_centered(|ui| {
                    ui.add_space(24.0);
                    ui.label(RichText::new("Nenhuma experiência encontrada").weak());
                });
            }

            for experience in visible {
                let is_favorite = favorites.iter().any(|f| f == &experience.id);
                match ExperienceCard::show(ui, &experience, is_favorite) {
                    Some(CardAction::Open) => {
                        action = Some(AppAction::SelectExperience(experience));
                    }
                    Some(CardAction::ToggleFavorite) => {
                        action = Some(AppAction::ToggleFavorite(experience.id));
                    }
                    None => {}
                }
            }
        });

        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::mock_user;

    #[test]
    fn test_greeting() {
        let user = mock_user();
        assert_eq!(ExploreScreen::greeting(Some(&user)), "Olá, Marina!");
        assert_eq!(ExploreScreen::greeting(None), "Olá, viajante!");
    }

    #[test]
    fn test_filters_apply() {
        let mut screen = ExploreScreen::new();
        assert_eq!(screen.visible_experiences().len(), screen.experiences.len());

        screen.category = Some(Category::Gastronomy);
        let visible = screen.visible_experiences();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "exp-4");

        screen.search_query = "noronha".to_string();
        assert!(screen.visible_experiences().is_empty());
    }
}
