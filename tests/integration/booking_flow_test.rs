//! Integration tests for the navigation flows between screens.

use std::sync::Arc;

use moveasy::catalog::{find_experience, TripStatus};
use moveasy::storage::MemoryStore;
use moveasy::ui::screens::{BookingScreen, ReservationScreen};
use moveasy::{AppAction, AppState, Screen};

fn guest_state() -> AppState {
    let mut state = AppState::load(Arc::new(MemoryStore::new()));
    state.apply(AppAction::ContinueAsGuest);
    state
}

#[test]
fn test_reserve_experience_flow() {
    let mut state = guest_state();
    let experience = find_experience("exp-5").unwrap();

    state.apply(AppAction::SelectExperience(experience.clone()));
    assert!(!state.show_bottom_nav());
    state.apply(AppAction::Navigate(Screen::Reservation));
    assert_eq!(state.active_screen(), Screen::Reservation);

    let mut form = ReservationScreen::new();
    form.prepare(&experience);
    form.date = "2025-11-20".to_string();
    form.guests = 3;
    let action = form.submit(&experience).expect("valid form");
    state.apply(action);

    assert_eq!(state.active_screen(), Screen::Confirmation);
    let trip = &state.trips()[0];
    assert_eq!(trip.status, TripStatus::Confirmed);
    assert_eq!(trip.request.total_price_brl, Some(960.0));

    let destination = state.confirmation().button_destination;
    state.apply(AppAction::Navigate(destination));
    assert_eq!(state.active_screen(), Screen::Trips);
    assert!(state.show_bottom_nav());
}

#[test]
fn test_custom_request_flow() {
    let mut state = guest_state();
    state.apply(AppAction::Navigate(Screen::Booking));

    let mut form = BookingScreen::new();
    form.destination = "Serra da Canastra".to_string();
    form.start_date = "2026-01-10".to_string();
    let action = form.submit().expect("valid form");
    state.apply(action);

    assert_eq!(state.confirmation().title, "Solicitação Enviada!");
    assert_eq!(state.trips()[0].status, TripStatus::Pending);
    assert_eq!(state.trips()[0].request.travelers, 2);
}

#[test]
fn test_newest_trip_first() {
    let mut state = guest_state();

    for destination in ["Ouro Preto", "Tiradentes", "Petrópolis"] {
        let mut form = BookingScreen::new();
        form.destination = destination.to_string();
        form.start_date = "2026-03-01".to_string();
        state.apply(form.submit().unwrap());
    }

    let destinations: Vec<_> = state
        .trips()
        .iter()
        .map(|t| t.request.destination.as_str())
        .collect();
    assert_eq!(destinations, vec!["Petrópolis", "Tiradentes", "Ouro Preto"]);
}

#[test]
fn test_favorite_toggle_from_detail() {
    let mut state = guest_state();
    let experience = find_experience("exp-1").unwrap();
    state.apply(AppAction::SelectExperience(experience.clone()));

    state.apply(AppAction::ToggleFavorite(experience.id.clone()));
    assert!(state.is_favorite(&experience.id));
    assert_eq!(state.active_screen(), Screen::ExperienceDetail);

    state.apply(AppAction::ToggleFavorite(experience.id.clone()));
    assert!(!state.is_favorite(&experience.id));
}

#[test]
fn test_guest_login_from_profile() {
    let mut state = guest_state();
    state.apply(AppAction::Navigate(Screen::Profile));
    assert!(state.user().is_none());

    state.apply(AppAction::Navigate(Screen::Login));
    state.apply(AppAction::LogIn);
    assert_eq!(state.active_screen(), Screen::Explore);
    assert!(state.user().is_some());
    assert!(!state.is_guest());
}
