//! Unit tests for the stored JSON shape of trips.

use chrono::{NaiveDate, TimeZone, Utc};
use moveasy::catalog::{find_experience, NewTrip, Trip, TripStatus};

#[test]
fn test_reservation_json_fields() {
    let experience = find_experience("exp-1").unwrap();
    let date = NaiveDate::from_ymd_opt(2025, 4, 20).unwrap();
    let created = Utc.with_ymd_and_hms(2025, 4, 1, 12, 0, 0).unwrap();
    let trip = NewTrip::reservation(&experience, date, 2, "")
        .unwrap()
        .into_trip("trip-1743508800000".to_string(), created);

    let json: serde_json::Value = serde_json::to_value(&trip).unwrap();
    assert_eq!(json["id"], "trip-1743508800000");
    assert_eq!(json["status"], "confirmed");
    assert_eq!(json["experience"]["id"], "exp-1");
    assert_eq!(json["experience"]["category"], "nautical");
    assert_eq!(json["request"]["startDate"], "2025-04-20");
    assert_eq!(json["request"]["travelers"], 2);
    assert_eq!(json["request"]["totalPriceBrl"], 560.0);
}

#[test]
fn test_custom_request_parses_without_notes() {
    let raw = r#"{
        "id": "trip-1",
        "experience": null,
        "request": {
            "destination": "Jalapão",
            "startDate": "2025-08-01",
            "endDate": "2025-08-07",
            "travelers": 4,
            "totalPriceBrl": null
        },
        "status": "pending",
        "createdAt": "2025-07-01T10:00:00Z"
    }"#;

    let trip: Trip = serde_json::from_str(raw).unwrap();
    assert_eq!(trip.status, TripStatus::Pending);
    assert!(trip.experience.is_none());
    assert!(trip.request.notes.is_empty());
    assert_eq!(trip.date_label(), "01/08/2025 - 07/08/2025");
}
