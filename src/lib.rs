//! Moveasy - travel experiences and trip requests
//!
//! A mobile-first booking app: browse a catalog of experiences, keep
//! favorites, reserve or request custom trips and chat with an agent.
//! Login status, favorites and trips are persisted as JSON blobs in a local
//! key-value store.

pub mod catalog;
pub mod chat;
pub mod state;
pub mod storage;
pub mod ui;

// Re-export commonly used types
pub use catalog::{Experience, NewTrip, Trip, User};
pub use state::{AppAction, AppState, ConfirmationDetails};
pub use storage::config::AppConfig;
pub use ui::screens::Screen;
