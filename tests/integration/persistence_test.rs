//! Integration tests for state surviving an app restart.

use std::sync::Arc;

use chrono::NaiveDate;
use moveasy::catalog::{mock_experiences, NewTrip};
use moveasy::storage::{FileStore, KeyValueStore, KEY_FAVORITES, KEY_IS_LOGGED_IN, KEY_TRIPS};
use moveasy::{AppAction, AppState, Screen};
use tempfile::tempdir;

fn open(dir: &std::path::Path) -> Arc<FileStore> {
    Arc::new(FileStore::open(dir.join("storage")).unwrap())
}

#[test]
fn test_login_favorites_and_trips_survive_restart() {
    let dir = tempdir().unwrap();

    {
        let mut state = AppState::load(open(dir.path()));
        assert_eq!(state.active_screen(), Screen::Welcome);

        state.apply(AppAction::LogIn);
        state.apply(AppAction::ToggleFavorite("exp-2".to_string()));
        state.apply(AppAction::ToggleFavorite("exp-5".to_string()));

        let date = NaiveDate::from_ymd_opt(2025, 10, 12).unwrap();
        let trip = NewTrip::custom_request("Chapada dos Veadeiros", date, None, 2, "").unwrap();
        state.apply(AppAction::AddTrip(trip));
        assert_eq!(state.active_screen(), Screen::Confirmation);
    }

    let state = AppState::load(open(dir.path()));
    assert!(state.is_logged_in());
    assert!(!state.is_guest());
    assert_eq!(state.active_screen(), Screen::Explore);
    assert_eq!(state.favorites(), ["exp-2", "exp-5"]);
    assert_eq!(state.trips().len(), 1);
    assert_eq!(state.trips()[0].request.destination, "Chapada dos Veadeiros");
}

#[test]
fn test_session_state_is_not_persisted() {
    let dir = tempdir().unwrap();

    {
        let mut state = AppState::load(open(dir.path()));
        state.apply(AppAction::SelectExperience(mock_experiences().remove(0)));
        assert!(state.selected_experience().is_some());
    }

    let state = AppState::load(open(dir.path()));
    assert!(state.selected_experience().is_none());
    assert_eq!(state.active_screen(), Screen::Welcome);
}

#[test]
fn test_corrupt_blobs_fall_back_to_defaults() {
    let dir = tempdir().unwrap();
    let store = open(dir.path());
    store.set(KEY_IS_LOGGED_IN, "yes please").unwrap();
    store.set(KEY_FAVORITES, "{\"oops\": 1}").unwrap();
    store.set(KEY_TRIPS, "[{\"id\": 3}]").unwrap();

    let state = AppState::load(store);
    assert!(!state.is_logged_in());
    assert!(state.favorites().is_empty());
    assert!(state.trips().is_empty());
}

#[test]
fn test_stored_blobs_are_plain_json() {
    let dir = tempdir().unwrap();
    let store = open(dir.path());

    let mut state = AppState::load(store.clone());
    state.apply(AppAction::ToggleFavorite("exp-3".to_string()));
    state.apply(AppAction::LogIn);

    let favorites = std::fs::read_to_string(dir.path().join("storage/moveasy_favorites.json")).unwrap();
    assert_eq!(favorites, "[\"exp-3\"]");
    assert_eq!(store.get(KEY_IS_LOGGED_IN).unwrap().as_deref(), Some("true"));
}
