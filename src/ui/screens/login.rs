//! Login screen.
//!
//! There is no backend: any email containing `@` with a non-empty password
//! logs in as the demo user.

use egui::{RichText, Ui, Vec2};

use super::Screen;
use crate::state::AppAction;
use crate::ui::theme::Brand;
use crate::ui::widgets::screen_header;

/// Login form validation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("Informe um email válido")]
    InvalidEmail,

    #[error("Informe sua senha")]
    EmptyPassword,
}

/// Check the login form.
pub fn validate_credentials(email: &str, password: &str) -> Result<(), LoginError> {
    if !email.contains('@') {
        return Err(LoginError::InvalidEmail);
    }
    if password.is_empty() {
        return Err(LoginError::EmptyPassword);
    }
    Ok(())
}

/// Login screen state.
#[derive(Default)]
pub struct LoginScreen {
    /// Email input
    pub email: String,
    /// Password input
    pub password: String,
    /// Validation error shown under the form
    pub error: Option<LoginError>,
}

impl LoginScreen {
    /// Create a new login screen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the form; on success clear it and return the login action.
    pub fn submit(&mut self) -> Option<AppAction> {
        match validate_credentials(&self.email, &self.password) {
            Ok(()) => {
                tracing::info!("Login accepted for {}", self.email.trim());
                *self = Self::default();
                Some(AppAction::LogIn)
            }
            Err(e) => {
                self.error = Some(e);
                None
            }
        }
    }

    /// Render the login screen.
    pub fn show(&mut self, ui: &mut Ui) -> Option<AppAction> {
        let mut action = None;

        if screen_header(ui, "Entrar", true) {
            self.error = None;
            action = Some(AppAction::Navigate(Screen::Welcome));
        }

        ui.add_space(24.0);
        ui.label(RichText::new("Bem-vindo de volta!").size(22.0).strong());
        ui.label(RichText::new("Acesse sua conta para reservar experiências.").weak());
        ui.add_space(24.0);

        ui.label("Email");
        ui.add(
            egui::TextEdit::singleline(&mut self.email)
                .hint_text("voce@exemplo.com")
                .desired_width(f32::INFINITY),
        );
        ui.add_space(12.0);

        ui.label("Senha");
        let password = ui.add(
            egui::TextEdit::singleline(&mut self.password)
                .password(true)
                .desired_width(f32::INFINITY),
        );
        let enter_pressed =
            password.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        if let Some(error) = &self.error {
            ui.add_space(8.0);
            ui.colored_label(Brand::ERROR, error.to_string());
        }

        ui.add_space(24.0);
        let clicked = ui
            .add_sized(
                Vec2::new(ui.available_width(), 44.0),
                egui::Button::new(RichText::new("Entrar").size(17.0).color(egui::Color32::WHITE))
                    .fill(Brand::ACCENT),
            )
            .clicked();

        if clicked || enter_pressed {
            action = self.submit().or(action);
        }

        action
    }
}
