//! Reservation screen for the selected experience.

use egui::{Align, Layout, RichText, Ui, Vec2};

use super::booking::{parse_date, FormError};
use super::Screen;
use crate::catalog::{format_brl, reservation_total, Experience, NewTrip};
use crate::state::AppAction;
use crate::ui::theme::Brand;
use crate::ui::widgets::screen_header;

/// Reservation screen state.
pub struct ReservationScreen {
    /// Experience the form was filled for
    experience_id: Option<String>,
    /// Date input
    pub date: String,
    /// Number of guests
    pub guests: u32,
    /// Free-form notes
    pub notes: String,
    /// Last validation error
    pub error: Option<FormError>,
}

impl Default for ReservationScreen {
    fn default() -> Self {
        Self {
            experience_id: None,
            date: String::new(),
            guests: 1,
            notes: String::new(),
            error: None,
        }
    }
}

impl ReservationScreen {
    /// Create a new reservation screen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the form when a different experience is being reserved.
    pub fn prepare(&mut self, experience: &Experience) {
        if self.experience_id.as_deref() != Some(experience.id.as_str()) {
            *self = Self {
                experience_id: Some(experience.id.clone()),
                ..Self::default()
            };
        }
    }

    /// Validate the form; on success reset it and return the add-trip action.
    pub fn submit(&mut self, experience: &Experience) -> Option<AppAction> {
        let result = parse_date(&self.date, "Data").and_then(|date| {
            NewTrip::reservation(experience, date, self.guests, &self.notes).map_err(FormError::from)
        });

        match result {
            Ok(trip) => {
                *self = Self::default();
                Some(AppAction::AddTrip(trip))
            }
            Err(e) => {
                self.error = Some(e);
                None
            }
        }
    }

    /// Render the reservation form.
    pub fn show(&mut self, ui: &mut Ui, experience: &Experience) -> Option<AppAction> {
        let mut action = None;
        self.prepare(experience);

        if screen_header(ui, "Reservar", true) {
            action = Some(AppAction::Navigate(Screen::ExperienceDetail));
        }

        ui.label(RichText::new(&experience.title).size(18.0).strong());
        ui.label(RichText::new(format!("📍 {}  ·  ⏱ {}", experience.location, experience.duration)).weak());
        ui.add_space(16.0);

        ui.label("Data");
        ui.add(
            egui::TextEdit::singleline(&mut self.date)
                .hint_text("AAAA-MM-DD")
                .desired_width(f32::INFINITY),
        );
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            ui.label("Pessoas");
            ui.add(egui::DragValue::new(&mut self.guests).range(1..=20));
        });
        ui.add_space(8.0);

        ui.label("Observações");
        ui.add(
            egui::TextEdit::multiline(&mut self.notes)
                .desired_rows(3)
                .desired_width(f32::INFINITY),
        );

        ui.add_space(12.0);
        ui.separator();
        ui.horizontal(|ui| {
            ui.label(format!("{} x {}", experience.price_label(), self.guests));
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(
                    RichText::new(format_brl(reservation_total(experience, self.guests)))
                        .size(18.0)
                        .strong(),
                );
            });
        });

        if let Some(error) = &self.error {
            ui.add_space(8.0);
            ui.colored_label(Brand::ERROR, error.to_string());
        }

        ui.add_space(16.0);
        if ui
            .add_sized(
                Vec2::new(ui.available_width(), 44.0),
                egui::Button::new(RichText::new("Confirmar reserva").size(16.0).color(egui::Color32::WHITE))
                    .fill(Brand::ACCENT),
            )
            .clicked()
        {
            action = self.submit(experience).or(action);
        }

        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::mock_experiences;

    #[test]
    fn test_prepare_resets_for_new_experience() {
        let experiences = mock_experiences();
        let mut screen = ReservationScreen::new();
        screen.prepare(&experiences[0]);
        screen.guests = 4;

        screen.prepare(&experiences[0]);
        assert_eq!(screen.guests, 4);

        screen.prepare(&experiences[1]);
        assert_eq!(screen.guests, 1);
    }

    #[test]
    fn test_submit_builds_reservation() {
        let experience = mock_experiences().remove(2);
        let mut screen = ReservationScreen::new();
        screen.date = "2025-09-01".to_string();
        screen.guests = 2;

        match screen.submit(&experience) {
            Some(AppAction::AddTrip(trip)) => {
                assert_eq!(trip.experience.as_ref(), Some(&experience));
                assert_eq!(trip.request.total_price_brl, Some(240.0));
            }
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn test_submit_invalid_date() {
        let experience = mock_experiences().remove(0);
        let mut screen = ReservationScreen::new();
        screen.date = "amanhã".to_string();
        assert_eq!(screen.submit(&experience), None);
        assert_eq!(screen.error, Some(FormError::InvalidDate("Data")));
    }
}
