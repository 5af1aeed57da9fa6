//! Profile screen: account details, shortcuts and logout.

use egui::{Align, Layout, RichText, Ui, Vec2};

use super::Screen;
use crate::catalog::User;
use crate::state::AppAction;
use crate::ui::theme::{Brand, Theme};
use crate::ui::widgets::screen_header;

/// Actions the profile screen can request.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileAction {
    /// An application state change
    App(AppAction),
    /// Switch between light and dark theme
    ToggleTheme,
}

/// Profile screen UI.
pub struct ProfileScreen;

impl ProfileScreen {
    /// Render the profile screen.
    pub fn show(
        ui: &mut Ui,
        user: Option<&User>,
        trip_count: usize,
        theme: Theme,
    ) -> Option<ProfileAction> {
        let mut action = None;

        screen_header(ui, "Perfil", false);

        match user {
            Some(user) => Self::render_user(ui, user, trip_count),
            None => {
                ui.vertical_centered(|ui| {
                    ui.add_space(24.0);
                    ui.label(RichText::new("👤").size(48.0));
                    ui.label(RichText::new("Você está navegando como convidado").strong());
                    ui.label(RichText::new("Entre para reservar e acompanhar seus pedidos.").weak());
                    ui.add_space(12.0);
                    if ui
                        .add_sized(
                            Vec2::new(200.0, 40.0),
                            egui::Button::new(RichText::new("Entrar").color(egui::Color32::WHITE))
                                .fill(Brand::ACCENT),
                        )
                        .clicked()
                    {
                        action = Some(ProfileAction::App(AppAction::Navigate(Screen::Login)));
                    }
                });
            }
        }

        ui.add_space(16.0);
        ui.separator();

        let row_size = Vec2::new(ui.available_width(), 40.0);

        if ui
            .add_sized(row_size, egui::Button::new("🧳  Meus pedidos").frame(false))
            .clicked()
        {
            action = Some(ProfileAction::App(AppAction::OpenTrips));
        }
        if ui
            .add_sized(row_size, egui::Button::new("💬  Falar com um agente").frame(false))
            .clicked()
        {
            action = Some(ProfileAction::App(AppAction::Navigate(Screen::Chat)));
        }

        let theme_label = match theme {
            Theme::Light => "🌙  Tema escuro",
            Theme::Dark => "☀  Tema claro",
        };
        if ui
            .add_sized(row_size, egui::Button::new(theme_label).frame(false))
            .clicked()
        {
            action = Some(ProfileAction::ToggleTheme);
        }

        if user.is_some() {
            ui.separator();
            if ui
                .add_sized(
                    row_size,
                    egui::Button::new(RichText::new("Sair").color(Brand::ERROR)).frame(false),
                )
                .clicked()
            {
                action = Some(ProfileAction::App(AppAction::LogOut));
            }
        }

        ui.with_layout(Layout::bottom_up(Align::Center), |ui| {
            ui.label(
                RichText::new(format!("Moveasy v{}", env!("CARGO_PKG_VERSION")))
                    .small()
                    .weak(),
            );
        });

        action
    }

    fn render_user(ui: &mut Ui, user: &User, trip_count: usize) {
        ui.horizontal(|ui| {
            egui::Frame::new()
                .fill(Brand::ACCENT)
                .inner_margin(14.0)
                .corner_radius(28.0)
                .show(ui, |ui| {
                    ui.label(
                        RichText::new(user.initials())
                            .size(20.0)
                            .strong()
                            .color(egui::Color32::WHITE),
                    );
                });

            ui.vertical(|ui| {
                ui.label(RichText::new(&user.name).size(18.0).strong());
                ui.label(RichText::new(&user.email).weak());
                ui.label(
                    RichText::new(format!(
                        "Membro desde {}",
                        user.member_since.format("%m/%Y")
                    ))
                    .small()
                    .weak(),
                );
            });
        });

        ui.add_space(12.0);
        egui::Grid::new("profile_details")
            .num_columns(2)
            .spacing([16.0, 6.0])
            .show(ui, |ui| {
                ui.label(RichText::new("Telefone").weak());
                ui.label(&user.phone);
                ui.end_row();

                ui.label(RichText::new("Cidade").weak());
                ui.label(&user.location);
                ui.end_row();

                ui.label(RichText::new("Pedidos").weak());
                ui.label(trip_count.to_string());
                ui.end_row();
            });
    }
}
