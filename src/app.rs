//! Main application state and egui integration.

use std::sync::Arc;

use eframe::egui;

use moveasy::catalog::{mock_experiences, Experience};
use moveasy::state::{AppAction, AppState};
use moveasy::storage::config::{self, AppConfig};
use moveasy::storage::{FileStore, KeyValueStore, MemoryStore};
use moveasy::ui::screens::profile::ProfileAction;
use moveasy::ui::screens::{
    BookingScreen, ChatScreen, ConfirmationScreen, ExperienceDetailScreen, ExploreScreen,
    FavoritesScreen, LoginScreen, ProfileScreen, ReservationScreen, Screen, TripsScreen,
    WelcomeScreen,
};
use moveasy::ui::theme::Theme;
use moveasy::ui::widgets::BottomNav;

/// Main application state.
pub struct MoveasyApp {
    /// Shared state and persistence
    state: AppState,
    /// UI theme
    theme: Theme,
    /// Application configuration
    config: AppConfig,
    /// Catalog shown on the favorites screen
    experiences: Vec<Experience>,
    /// Login form state
    login_screen: LoginScreen,
    /// Explore filters
    explore_screen: ExploreScreen,
    /// Custom trip form state
    booking_screen: BookingScreen,
    /// Reservation form state
    reservation_screen: ReservationScreen,
    /// Chat conversation
    chat_screen: ChatScreen,
}

impl MoveasyApp {
    /// Create a new application instance.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = config::load_config().unwrap_or_else(|e| {
            tracing::warn!("Failed to load config, using defaults: {}", e);
            AppConfig::default()
        });

        let theme = Theme::from(config.ui.theme);
        cc.egui_ctx.set_visuals(theme.visuals());
        cc.egui_ctx.set_zoom_factor(config.ui.clamped_font_scale());

        let state = AppState::load(open_store(&config));

        Self {
            state,
            theme,
            config,
            experiences: mock_experiences(),
            login_screen: LoginScreen::new(),
            explore_screen: ExploreScreen::new(),
            booking_screen: BookingScreen::new(),
            reservation_screen: ReservationScreen::new(),
            chat_screen: ChatScreen::new(),
        }
    }

    /// Toggle the theme between light and dark and remember the choice.
    fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.theme = self.theme.toggled();
        ctx.set_visuals(self.theme.visuals());

        self.config.ui.theme = self.theme.into();
        if let Err(e) = config::save_config(&self.config) {
            tracing::warn!("Failed to save config: {}", e);
        }
    }

    /// Render the active screen.
    fn render_screen(&mut self, ui: &mut egui::Ui) -> Option<AppAction> {
        let user = self.state.user();

        match self.state.active_screen() {
            Screen::Welcome => WelcomeScreen::show(ui),
            Screen::Login => self.login_screen.show(ui),
            Screen::Explore => {
                self.explore_screen
                    .show(ui, user.as_ref(), self.state.favorites())
            }
            Screen::ExperienceDetail => match self.state.selected_experience() {
                Some(experience) => {
                    let is_favorite = self.state.is_favorite(&experience.id);
                    ExperienceDetailScreen::show(ui, experience, is_favorite)
                }
                None => Some(AppAction::Navigate(Screen::Explore)),
            },
            Screen::Favorites => {
                FavoritesScreen::show(ui, self.state.favorites(), &self.experiences)
            }
            Screen::Trips => {
                TripsScreen::show(ui, self.state.trips());
                None
            }
            Screen::Booking => self.booking_screen.show(ui),
            Screen::Reservation => match self.state.selected_experience() {
                Some(experience) => self.reservation_screen.show(ui, experience),
                None => Some(AppAction::Navigate(Screen::Explore)),
            },
            Screen::Profile => {
                match ProfileScreen::show(ui, user.as_ref(), self.state.trips().len(), self.theme) {
                    Some(ProfileAction::App(action)) => Some(action),
                    Some(ProfileAction::ToggleTheme) => {
                        self.toggle_theme(ui.ctx());
                        None
                    }
                    None => None,
                }
            }
            Screen::Chat => self.chat_screen.show(ui, self.state.chat_return()),
            Screen::Confirmation => ConfirmationScreen::show(ui, self.state.confirmation()),
        }
    }
}

/// Open the on-disk store, or fall back to memory for this session.
fn open_store(config: &AppConfig) -> Arc<dyn KeyValueStore> {
    let dir = config.storage_dir();
    match FileStore::open(&dir) {
        Ok(store) => {
            tracing::info!("Using storage at {}", dir.display());
            Arc::new(store)
        }
        Err(e) => {
            tracing::warn!("Storage unavailable ({}), changes will not be saved", e);
            Arc::new(MemoryStore::new())
        }
    }
}

impl eframe::App for MoveasyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut pending = None;

        // Bottom navigation, only on top-level screens
        if self.state.show_bottom_nav() {
            egui::TopBottomPanel::bottom("bottom_nav").show(ctx, |ui| {
                if let Some(next) = BottomNav::show(ui, self.state.active_screen()) {
                    pending = Some(AppAction::Navigate(next));
                }
            });
        }

        // Main content area
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(action) = self.render_screen(ui) {
                pending = Some(action);
            }
        });

        if let Some(action) = pending {
            self.state.apply(action);
            ctx.request_repaint();
        }
    }
}
