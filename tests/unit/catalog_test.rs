//! Unit tests for the experience catalog.

use std::collections::HashSet;

use moveasy::catalog::{
    favorite_experiences, find_experience, mock_experiences, mock_user, reservation_total, search,
    Category,
};

#[test]
fn test_catalog_ids_are_unique() {
    let experiences = mock_experiences();
    let ids: HashSet<_> = experiences.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids.len(), experiences.len());
}

#[test]
fn test_catalog_entries_are_bookable() {
    for experience in mock_experiences() {
        assert!(experience.price_brl > 0.0, "{} has no price", experience.id);
        assert!((0.0..=5.0).contains(&experience.rating));
        assert!(!experience.highlights.is_empty());
    }
}

#[test]
fn test_every_category_has_an_experience() {
    let experiences = mock_experiences();
    for category in Category::all() {
        assert!(
            !search(&experiences, "", Some(*category)).is_empty(),
            "no experience for {}",
            category
        );
    }
}

#[test]
fn test_search_matches_description_words() {
    let experiences = mock_experiences();
    let results = search(&experiences, "capoeira", None);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].location, "Salvador, BA");
}

#[test]
fn test_favorites_follow_catalog_order() {
    let experiences = mock_experiences();
    let favorites = vec!["exp-6".to_string(), "exp-1".to_string()];
    let saved = favorite_experiences(&experiences, &favorites);
    assert_eq!(saved[0].id, "exp-1");
    assert_eq!(saved[1].id, "exp-6");
}

#[test]
fn test_reservation_total_scales_with_guests() {
    let experience = find_experience("exp-4").unwrap();
    assert_eq!(reservation_total(&experience, 1), 450.0);
    assert_eq!(reservation_total(&experience, 4), 1800.0);
}

#[test]
fn test_mock_user() {
    let user = mock_user();
    assert_eq!(user.first_name(), "Marina");
    assert_eq!(user.initials(), "MC");
}
