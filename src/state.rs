//! Top-level application state and the transitions screens can request.
//!
//! Screens never mutate state directly: they return an [`AppAction`] and the
//! app feeds it to [`AppState::apply`].

use std::sync::Arc;

use chrono::Utc;

use crate::catalog::{mock_user, Experience, NewTrip, Trip, User};
use crate::storage::{KeyValueStore, Persisted, KEY_FAVORITES, KEY_IS_LOGGED_IN, KEY_TRIPS};
use crate::ui::screens::Screen;

/// Something a screen asks the app to do.
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    /// Switch screens
    Navigate(Screen),
    /// Enter the app without logging in
    ContinueAsGuest,
    /// Mark the user as logged in and go to explore
    LogIn,
    /// Log out and return to welcome
    LogOut,
    /// Add or remove an experience id from favorites
    ToggleFavorite(String),
    /// Open an experience's detail screen
    SelectExperience(Experience),
    /// Store a trip and show the confirmation
    AddTrip(NewTrip),
    /// Jump to the trip list
    OpenTrips,
}

/// Text and target of the confirmation screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationDetails {
    pub title: String,
    pub message: String,
    pub button_text: String,
    pub button_destination: Screen,
}

impl Default for ConfirmationDetails {
    fn default() -> Self {
        Self {
            title: String::new(),
            message: String::new(),
            button_text: String::new(),
            button_destination: Screen::Explore,
        }
    }
}

impl ConfirmationDetails {
    fn for_trip(trip: &NewTrip) -> Self {
        match &trip.experience {
            Some(exp) => Self {
                title: "Reserva Confirmada!".to_string(),
                message: format!(
                    "Sua reserva para {} foi confirmada. Bons ventos!",
                    exp.title
                ),
                button_text: "Ver meus pedidos".to_string(),
                button_destination: Screen::Trips,
            },
            None => Self {
                title: "Solicitação Enviada!".to_string(),
                message: "Sua solicitação foi enviada. Entraremos em contato em breve com um orçamento."
                    .to_string(),
                button_text: "Ver meus pedidos".to_string(),
                button_destination: Screen::Trips,
            },
        }
    }
}

/// Application state shared by all screens.
#[derive(Debug)]
pub struct AppState {
    is_logged_in: Persisted<bool>,
    is_guest: bool,
    active_screen: Screen,
    favorites: Persisted<Vec<String>>,
    trips: Persisted<Vec<Trip>>,
    selected_experience: Option<Experience>,
    confirmation: ConfirmationDetails,
    chat_return: Screen,
}

impl AppState {
    /// Load persisted state from `store`.
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let is_logged_in = Persisted::load(store.clone(), KEY_IS_LOGGED_IN, false);
        let favorites = Persisted::load(store.clone(), KEY_FAVORITES, Vec::new());
        let trips = Persisted::load(store, KEY_TRIPS, Vec::new());

        let logged_in = *is_logged_in.get();
        tracing::info!(
            "Loaded state: logged_in={}, {} favorites, {} trips",
            logged_in,
            favorites.get().len(),
            trips.get().len()
        );

        Self {
            is_logged_in,
            is_guest: !logged_in,
            active_screen: if logged_in {
                Screen::Explore
            } else {
                Screen::Welcome
            },
            favorites,
            trips,
            selected_experience: None,
            confirmation: ConfirmationDetails::default(),
            chat_return: Screen::Explore,
        }
    }

    /// Currently mounted screen.
    pub fn active_screen(&self) -> Screen {
        self.active_screen
    }

    /// Whether the user is logged in.
    pub fn is_logged_in(&self) -> bool {
        *self.is_logged_in.get()
    }

    /// Whether the user chose to browse without an account.
    pub fn is_guest(&self) -> bool {
        self.is_guest
    }

    /// The logged-in user.
    pub fn user(&self) -> Option<User> {
        self.is_logged_in().then(mock_user)
    }

    /// Favorite experience ids, in the order they were added.
    pub fn favorites(&self) -> &[String] {
        self.favorites.get()
    }

    /// Whether an experience is a favorite.
    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.get().iter().any(|f| f == id)
    }

    /// Trip records, newest first.
    pub fn trips(&self) -> &[Trip] {
        self.trips.get()
    }

    /// Experience opened from explore or favorites.
    pub fn selected_experience(&self) -> Option<&Experience> {
        self.selected_experience.as_ref()
    }

    /// Content of the confirmation screen.
    pub fn confirmation(&self) -> &ConfirmationDetails {
        &self.confirmation
    }

    /// Screen the chat's back button leads to.
    pub fn chat_return(&self) -> Screen {
        self.chat_return
    }

    /// Whether the bottom navigation bar is shown on the active screen.
    pub fn show_bottom_nav(&self) -> bool {
        !matches!(
            self.active_screen,
            Screen::Welcome
                | Screen::Login
                | Screen::ExperienceDetail
                | Screen::Booking
                | Screen::Reservation
                | Screen::Chat
                | Screen::Confirmation
        )
    }

    /// Switch screens.
    ///
    /// Screens that need a selected experience fall back to explore when
    /// there is none. Opening the chat remembers the screen it was opened from.
    pub fn navigate(&mut self, screen: Screen) {
        let target = if screen.requires_experience() && self.selected_experience.is_none() {
            tracing::warn!("No experience selected for {:?}, showing Explore", screen);
            Screen::Explore
        } else {
            screen
        };

        if target == Screen::Chat && self.active_screen != Screen::Chat {
            self.chat_return = self.active_screen;
        }

        tracing::debug!("Navigating from {:?} to {:?}", self.active_screen, target);
        self.active_screen = target;
    }

    /// Add the id to favorites, or remove it if already there.
    pub fn toggle_favorite(&mut self, id: &str) {
        self.favorites.update(|favorites| {
            if let Some(pos) = favorites.iter().position(|f| f == id) {
                favorites.remove(pos);
            } else {
                favorites.push(id.to_string());
            }
        });
    }

    /// Store a new trip at the front of the list and show the confirmation.
    pub fn add_trip(&mut self, new_trip: NewTrip) -> String {
        let id = self.next_trip_id();
        self.confirmation = ConfirmationDetails::for_trip(&new_trip);

        let trip = new_trip.into_trip(id.clone(), Utc::now());
        tracing::info!("Added trip {} ({:?})", trip.id, trip.status);
        self.trips.update(|trips| trips.insert(0, trip));

        self.navigate(Screen::Confirmation);
        id
    }

    /// Set the login flag. Logging in also ends guest mode.
    pub fn set_logged_in(&mut self, status: bool) {
        self.is_logged_in.set(status);
        if status {
            self.is_guest = false;
        }
        tracing::info!("Logged in: {}", status);
    }

    /// Browse without an account.
    pub fn continue_as_guest(&mut self) {
        self.is_guest = true;
        self.navigate(Screen::Explore);
    }

    /// Log out and return to the welcome screen.
    pub fn log_out(&mut self) {
        self.set_logged_in(false);
        self.navigate(Screen::Welcome);
    }

    /// Open the detail screen for an experience.
    pub fn select_experience(&mut self, experience: Experience) {
        self.selected_experience = Some(experience);
        self.navigate(Screen::ExperienceDetail);
    }

    /// Apply an action returned by a screen.
    pub fn apply(&mut self, action: AppAction) {
        match action {
            AppAction::Navigate(screen) => self.navigate(screen),
            AppAction::ContinueAsGuest => self.continue_as_guest(),
            AppAction::LogIn => {
                self.set_logged_in(true);
                self.navigate(Screen::Explore);
            }
            AppAction::LogOut => self.log_out(),
            AppAction::ToggleFavorite(id) => self.toggle_favorite(&id),
            AppAction::SelectExperience(experience) => self.select_experience(experience),
            AppAction::AddTrip(trip) => {
                self.add_trip(trip);
            }
            AppAction::OpenTrips => self.navigate(Screen::Trips),
        }
    }

    /// `trip-<unix millis>`, bumped past any id already in use.
    fn next_trip_id(&self) -> String {
        let mut millis = Utc::now().timestamp_millis();
        loop {
            let id = format!("trip-{}", millis);
            if !self.trips.get().iter().any(|t| t.id == id) {
                return id;
            }
            millis += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::mock_experiences;
    use crate::storage::MemoryStore;
    use chrono::NaiveDate;

    fn fresh_state() -> (Arc<MemoryStore>, AppState) {
        let store = Arc::new(MemoryStore::new());
        let state = AppState::load(store.clone());
        (store, state)
    }

    #[test]
    fn test_initial_state_logged_out() {
        let (_, state) = fresh_state();
        assert_eq!(state.active_screen(), Screen::Welcome);
        assert!(state.is_guest());
        assert!(state.user().is_none());
        assert!(!state.show_bottom_nav());
    }

    #[test]
    fn test_initial_state_logged_in() {
        let store = Arc::new(MemoryStore::new());
        store.set(KEY_IS_LOGGED_IN, "true").unwrap();

        let state = AppState::load(store);
        assert_eq!(state.active_screen(), Screen::Explore);
        assert!(!state.is_guest());
        assert_eq!(state.user().unwrap().name, "Marina Costa");
        assert!(state.show_bottom_nav());
    }

    #[test]
    fn test_toggle_favorite_adds_then_removes() {
        let (store, mut state) = fresh_state();
        state.toggle_favorite("exp-1");
        state.toggle_favorite("exp-3");
        assert_eq!(state.favorites(), ["exp-1", "exp-3"]);
        assert!(state.is_favorite("exp-3"));

        state.toggle_favorite("exp-1");
        assert_eq!(state.favorites(), ["exp-3"]);
        assert_eq!(
            store.get(KEY_FAVORITES).unwrap().as_deref(),
            Some("[\"exp-3\"]")
        );
    }

    #[test]
    fn test_detail_without_selection_falls_back_to_explore() {
        let (_, mut state) = fresh_state();
        state.navigate(Screen::ExperienceDetail);
        assert_eq!(state.active_screen(), Screen::Explore);
        state.navigate(Screen::Reservation);
        assert_eq!(state.active_screen(), Screen::Explore);
    }

    #[test]
    fn test_select_experience_opens_detail() {
        let (_, mut state) = fresh_state();
        let exp = mock_experiences().remove(1);
        state.apply(AppAction::SelectExperience(exp.clone()));
        assert_eq!(state.active_screen(), Screen::ExperienceDetail);
        assert_eq!(state.selected_experience(), Some(&exp));

        state.apply(AppAction::Navigate(Screen::Reservation));
        assert_eq!(state.active_screen(), Screen::Reservation);
    }

    #[test]
    fn test_add_reservation_sets_confirmation() {
        let (_, mut state) = fresh_state();
        let exp = mock_experiences().remove(0);
        let date = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
        let trip = NewTrip::reservation(&exp, date, 2, "").unwrap();

        let id = state.add_trip(trip);
        assert!(id.starts_with("trip-"));
        assert_eq!(state.active_screen(), Screen::Confirmation);

        let confirmation = state.confirmation();
        assert_eq!(confirmation.title, "Reserva Confirmada!");
        assert_eq!(
            confirmation.message,
            format!("Sua reserva para {} foi confirmada. Bons ventos!", exp.title)
        );
        assert_eq!(confirmation.button_text, "Ver meus pedidos");
        assert_eq!(confirmation.button_destination, Screen::Trips);
    }

    #[test]
    fn test_add_custom_request_prepends() {
        let (_, mut state) = fresh_state();
        let date = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();

        let first = state.add_trip(NewTrip::custom_request("Jericoacoara", date, None, 2, "").unwrap());
        let second = state.add_trip(NewTrip::custom_request("Paraty", date, None, 1, "").unwrap());

        assert_ne!(first, second);
        assert_eq!(state.trips()[0].id, second);
        assert_eq!(state.trips()[1].id, first);
        assert_eq!(state.confirmation().title, "Solicitação Enviada!");
    }

    #[test]
    fn test_login_and_logout() {
        let (store, mut state) = fresh_state();
        state.apply(AppAction::ContinueAsGuest);
        assert!(state.is_guest());
        assert_eq!(state.active_screen(), Screen::Explore);

        state.apply(AppAction::LogIn);
        assert!(state.is_logged_in());
        assert!(!state.is_guest());
        assert_eq!(store.get(KEY_IS_LOGGED_IN).unwrap().as_deref(), Some("true"));

        state.apply(AppAction::LogOut);
        assert!(!state.is_logged_in());
        assert_eq!(state.active_screen(), Screen::Welcome);
        assert_eq!(store.get(KEY_IS_LOGGED_IN).unwrap().as_deref(), Some("false"));
    }

    #[test]
    fn test_chat_back_returns_to_detail() {
        let (_, mut state) = fresh_state();
        state.apply(AppAction::SelectExperience(mock_experiences().remove(0)));
        state.apply(AppAction::Navigate(Screen::Chat));
        assert_eq!(state.active_screen(), Screen::Chat);

        let back = state.chat_return();
        state.apply(AppAction::Navigate(back));
        assert_eq!(state.active_screen(), Screen::ExperienceDetail);
    }

    #[test]
    fn test_chat_back_returns_to_profile() {
        let (_, mut state) = fresh_state();
        assert_eq!(state.chat_return(), Screen::Explore);

        state.apply(AppAction::Navigate(Screen::Profile));
        state.apply(AppAction::Navigate(Screen::Chat));
        state.apply(AppAction::Navigate(Screen::Chat));
        assert_eq!(state.chat_return(), Screen::Profile);

        state.apply(AppAction::Navigate(state.chat_return()));
        assert_eq!(state.active_screen(), Screen::Profile);
    }

    #[test]
    fn test_bottom_nav_visibility() {
        let (_, mut state) = fresh_state();
        for (screen, visible) in [
            (Screen::Explore, true),
            (Screen::Favorites, true),
            (Screen::Trips, true),
            (Screen::Profile, true),
            (Screen::Booking, false),
            (Screen::Chat, false),
            (Screen::Login, false),
        ] {
            state.navigate(screen);
            assert_eq!(state.show_bottom_nav(), visible, "{:?}", screen);
        }
    }
}
