//! Favorites screen.

use egui::{ScrollArea, Ui};

use crate::catalog::{favorite_experiences, Experience};
use crate::state::AppAction;
use crate::ui::widgets::{empty_state, screen_header, CardAction, ExperienceCard};

/// Favorites screen UI.
pub struct FavoritesScreen;

impl FavoritesScreen {
    /// Render the favorited subset of `all_experiences`.
    pub fn show(ui: &mut Ui, favorites: &[String], all_experiences: &[Experience]) -> Option<AppAction> {
        let mut action = None;

        screen_header(ui, "Favoritos", false);

        let saved: Vec<Experience> = favorite_experiences(all_experiences, favorites)
            .into_iter()
            .cloned()
            .collect();

        if saved.is_empty() {
            empty_state(
                ui,
                "♡",
                "Nenhum favorito ainda",
                "Toque no coração de uma experiência para salvá-la aqui.",
            );
            return None;
        }

        ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
            for experience in saved {
                match ExperienceCard::show(ui, &experience, true) {
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
