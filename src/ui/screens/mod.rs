//! UI screens for the application.

pub mod booking;
pub mod chat;
pub mod confirmation;
pub mod experience_detail;
pub mod explore;
pub mod favorites;
pub mod login;
pub mod profile;
pub mod reservation;
pub mod trips;
pub mod welcome;

pub use booking::BookingScreen;
pub use chat::ChatScreen;
pub use confirmation::ConfirmationScreen;
pub use experience_detail::ExperienceDetailScreen;
pub use explore::ExploreScreen;
pub use favorites::FavoritesScreen;
pub use login::LoginScreen;
pub use profile::ProfileScreen;
pub use reservation::ReservationScreen;
pub use trips::TripsScreen;
pub use welcome::WelcomeScreen;

/// Screen navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    /// Landing screen for logged-out users
    #[default]
    Welcome,
    /// Email/password login
    Login,
    /// Experience catalog
    Explore,
    /// Single experience
    ExperienceDetail,
    /// Saved experiences
    Favorites,
    /// Reservations and requests
    Trips,
    /// Custom trip request form
    Booking,
    /// Reservation form for the selected experience
    Reservation,
    /// Account
    Profile,
    /// Support chat
    Chat,
    /// Result of a booking or reservation
    Confirmation,
}

impl Screen {
    /// Whether the screen renders the selected experience.
    pub fn requires_experience(&self) -> bool {
        matches!(self, Screen::ExperienceDetail | Screen::Reservation)
    }
}
