//! Booking screen: request a custom trip for the agency to quote.

use chrono::NaiveDate;
use egui::{RichText, ScrollArea, Ui, Vec2};

use super::Screen;
use crate::catalog::{NewTrip, TripValidationError};
use crate::state::AppAction;
use crate::ui::theme::Brand;
use crate::ui::widgets::screen_header;

/// Date format accepted by the forms.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Form errors shown under the booking and reservation forms.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Data inválida em \"{0}\" (use AAAA-MM-DD)")]
    InvalidDate(&'static str),

    #[error("{0}")]
    Trip(#[from] TripValidationError),
}

/// Parse a required form date.
pub fn parse_date(input: &str, field: &'static str) -> Result<NaiveDate, FormError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|_| FormError::InvalidDate(field))
}

/// Parse an optional form date; blank means none.
pub fn parse_optional_date(input: &str, field: &'static str) -> Result<Option<NaiveDate>, FormError> {
    if input.trim().is_empty() {
        Ok(None)
    } else {
        parse_date(input, field).map(Some)
    }
}

/// Booking screen state.
pub struct BookingScreen {
    /// Destination input
    pub destination: String,
    /// Departure date input
    pub start_date: String,
    /// Return date input (optional)
    pub end_date: String,
    /// Number of travelers
    pub travelers: u32,
    /// Free-form notes
    pub notes: String,
    /// Last validation error
    pub error: Option<FormError>,
}

impl Default for BookingScreen {
    fn default() -> Self {
        Self {
            destination: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            travelers: 2,
            notes: String::new(),
            error: None,
        }
    }
}

impl BookingScreen {
    /// Create a new booking screen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the trip request from the form.
    pub fn build_request(&self) -> Result<NewTrip, FormError> {
        let start = parse_date(&self.start_date, "Ida")?;
        let end = parse_optional_date(&self.end_date, "Volta")?;
        Ok(NewTrip::custom_request(
            &self.destination,
            start,
            end,
            self.travelers,
            &self.notes,
        )?)
    }

    /// Validate the form; on success reset it and return the add-trip action.
    pub fn submit(&mut self) -> Option<AppAction> {
        match self.build_request() {
            Ok(trip) => {
                *self = Self::default();
                Some(AppAction::AddTrip(trip))
            }
            Err(e) => {
                tracing::debug!("Booking form rejected: {}", e);
                self.error = Some(e);
                None
            }
        }
    }

    /// Render the booking form.
    pub fn show(&mut self, ui: &mut Ui) -> Option<AppAction> {
        let mut action = None;

        if screen_header(ui, "Viagem sob medida", true) {
            action = Some(AppAction::Navigate(Screen::Explore));
        }

        ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
            ui.label(
                RichText::new("Conte seus planos e enviaremos um orçamento personalizado.").weak(),
            );
            ui.add_space(16.0);

            ui.label("Destino");
            ui.add(
                egui::TextEdit::singleline(&mut self.destination)
                    .hint_text("Ex.: Chapada Diamantina")
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(8.0);

            ui.columns(2, |columns| {
                columns[0].label("Ida");
                columns[0].add(egui::TextEdit::singleline(&mut self.start_date).hint_text("AAAA-MM-DD"));
                columns[1].label("Volta (opcional)");
                columns[1].add(egui::TextEdit::singleline(&mut self.end_date).hint_text("AAAA-MM-DD"));
            });
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.label("Viajantes");
                ui.add(egui::DragValue::new(&mut self.travelers).range(1..=20));
            });
            ui.add_space(8.0);

            ui.label("Observações");
            ui.add(
                egui::TextEdit::multiline(&mut self.notes)
                    .hint_text("Preferências, orçamento, ocasião especial...")
                    .desired_rows(4)
                    .desired_width(f32::INFINITY),
            );

            if let Some(error) = &self.error {
                ui.add_space(8.0);
                ui.colored_label(Brand::ERROR, error.to_string());
            }

            ui.add_space(16.0);
            if ui
                .add_sized(
                    Vec2::new(ui.available_width(), 44.0),
                    egui::Button::new(RichText::new("Enviar solicitação").size(16.0).color(egui::Color32::WHITE))
                        .fill(Brand::ACCENT),
                )
                .clicked()
            {
                action = self.submit().or(action.take());
            }
        });

        action
    }
}
