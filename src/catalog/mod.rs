//! Experience catalog, users and trip records.

pub mod mock_data;
pub mod trip;
pub mod types;

pub use mock_data::{mock_experiences, mock_user};
pub use trip::{reservation_total, NewTrip, Trip, TripRequest, TripStatus, TripValidationError};
pub use types::{format_brl, Category, Experience, User};

/// Look up a catalog experience by id.
pub fn find_experience(id: &str) -> Option<Experience> {
    mock_experiences().into_iter().find(|e| e.id == id)
}

/// Filter experiences by a free-text query and an optional category.
///
/// The query matches case-insensitively against title, location and
/// description. Catalog order is preserved.
pub fn search<'a>(
    experiences: &'a [Experience],
    query: &str,
    category: Option<Category>,
) -> Vec<&'a Experience> {
    let query = query.trim().to_lowercase();

    experiences
        .iter()
        .filter(|e| category.map_or(true, |c| e.category == c))
        .filter(|e| {
            query.is_empty()
                || e.title.to_lowercase().contains(&query)
                || e.location.to_lowercase().contains(&query)
                || e.description.to_lowercase().contains(&query)
        })
        .collect()
}

/// Experiences whose ids are in `favorite_ids`, in catalog order.
///
/// Ids that no longer exist in the catalog are skipped.
pub fn favorite_experiences<'a>(
    all: &'a [Experience],
    favorite_ids: &[String],
) -> Vec<&'a Experience> {
    all.iter()
        .filter(|e| favorite_ids.iter().any(|id| id == &e.id))
        .collect()
}
