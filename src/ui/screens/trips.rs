//! Trips screen: reservations and custom requests, newest first.

use egui::{Align, Layout, RichText, ScrollArea, Ui};

use crate::catalog::{Trip, TripStatus};
use crate::ui::theme::Brand;
use crate::ui::widgets::{empty_state, screen_header};

/// Trips screen UI.
pub struct TripsScreen;

impl TripsScreen {
    /// Render the trip list.
    pub fn show(ui: &mut Ui, trips: &[Trip]) {
        screen_header(ui, "Meus pedidos", false);

        if trips.is_empty() {
            empty_state(
                ui,
                "🧳",
                "Nenhum pedido ainda",
                "Suas reservas e solicitações aparecem aqui.",
            );
            return;
        }

        ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
            for trip in trips {
                Self::render_trip(ui, trip);
                ui.add_space(8.0);
            }
        });
    }

    fn render_trip(ui: &mut Ui, trip: &Trip) {
        let status_color = match trip.status {
            TripStatus::Confirmed => Brand::SUCCESS,
            TripStatus::Pending => Brand::PENDING,
        };

        egui::Frame::new()
            .fill(ui.visuals().faint_bg_color)
            .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
            .inner_margin(12.0)
            .corner_radius(12.0)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                ui.horizontal(|ui| {
                    ui.label(RichText::new(trip.title()).strong());
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(
                            RichText::new(trip.status.label())
                                .small()
                                .color(status_color),
                        );
                    });
                });

                ui.label(RichText::new(format!("📍 {}", trip.request.destination)).weak());
                ui.label(format!(
                    "📅 {}  ·  👥 {}",
                    trip.date_label(),
                    trip.request.travelers
                ));

                if let Some(price) = trip.price_label() {
                    ui.label(RichText::new(format!("Total: {}", price)).strong());
                }
                if !trip.request.notes.is_empty() {
                    ui.label(RichText::new(&trip.request.notes).italics().weak());
                }
            });
    }
}
