//! Trip records: reservations of catalog experiences and custom trip requests.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::types::{format_brl, Experience};

/// Lifecycle status of a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripStatus {
    /// Reservation of a catalog experience
    Confirmed,
    /// Custom request waiting for a quote
    Pending,
}

impl TripStatus {
    /// Get display name.
    pub fn label(&self) -> &'static str {
        match self {
            TripStatus::Confirmed => "Confirmada",
            TripStatus::Pending => "Aguardando orçamento",
        }
    }
}

/// Details the traveler filled in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRequest {
    /// Destination (experience location for reservations)
    pub destination: String,
    /// First day
    pub start_date: NaiveDate,
    /// Last day, if different from the first
    pub end_date: Option<NaiveDate>,
    /// Number of travelers / guests
    pub travelers: u32,
    /// Free-form notes
    #[serde(default)]
    pub notes: String,
    /// Total price in BRL, known only for reservations
    pub total_price_brl: Option<f64>,
}

/// A persisted trip record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    /// Identifier ("trip-<unix millis>")
    pub id: String,
    /// Reserved experience; `None` for custom requests
    pub experience: Option<Experience>,
    /// Request details
    pub request: TripRequest,
    /// Status
    pub status: TripStatus,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Trip {
    /// Title for list rows.
    pub fn title(&self) -> String {
        match &self.experience {
            Some(exp) => exp.title.clone(),
            None => format!("Viagem para {}", self.request.destination),
        }
    }

    /// Date range for list rows.
    pub fn date_label(&self) -> String {
        let start = self.request.start_date.format("%d/%m/%Y");
        match self.request.end_date {
            Some(end) if end != self.request.start_date => {
                format!("{} - {}", start, end.format("%d/%m/%Y"))
            }
            _ => start.to_string(),
        }
    }

    /// Price for list rows.
    pub fn price_label(&self) -> Option<String> {
        self.request.total_price_brl.map(format_brl)
    }
}

/// Trip payload before it is given an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTrip {
    /// Reserved experience; `None` for custom requests
    pub experience: Option<Experience>,
    /// Request details
    pub request: TripRequest,
}

/// Trip validation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TripValidationError {
    #[error("Informe o destino")]
    EmptyDestination,

    #[error("Informe ao menos um viajante")]
    NoTravelers,

    #[error("A data de volta deve ser depois da data de ida")]
    EndBeforeStart,
}

impl NewTrip {
    /// Build a reservation of a catalog experience.
    pub fn reservation(
        experience: &Experience,
        date: NaiveDate,
        guests: u32,
        notes: &str,
    ) -> Result<Self, TripValidationError> {
        if guests == 0 {
            return Err(TripValidationError::NoTravelers);
        }

        Ok(Self {
            request: TripRequest {
                destination: experience.location.clone(),
                start_date: date,
                end_date: None,
                travelers: guests,
                notes: notes.trim().to_string(),
                total_price_brl: Some(reservation_total(experience, guests)),
            },
            experience: Some(experience.clone()),
        })
    }

    /// Build a custom trip request that the agency will quote.
    pub fn custom_request(
        destination: &str,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
        travelers: u32,
        notes: &str,
    ) -> Result<Self, TripValidationError> {
        let destination = destination.trim();
        if destination.is_empty() {
            return Err(TripValidationError::EmptyDestination);
        }
        if travelers == 0 {
            return Err(TripValidationError::NoTravelers);
        }
        if end_date.is_some_and(|end| end < start_date) {
            return Err(TripValidationError::EndBeforeStart);
        }

        Ok(Self {
            experience: None,
            request: TripRequest {
                destination: destination.to_string(),
                start_date,
                end_date,
                travelers,
                notes: notes.trim().to_string(),
                total_price_brl: None,
            },
        })
    }

    /// Status the stored trip will carry.
    pub fn status(&self) -> TripStatus {
        if self.experience.is_some() {
            TripStatus::Confirmed
        } else {
            TripStatus::Pending
        }
    }

    /// Attach an id and creation time.
    pub fn into_trip(self, id: String, created_at: DateTime<Utc>) -> Trip {
        let status = self.status();
        Trip {
            id,
            experience: self.experience,
            request: self.request,
            status,
            created_at,
        }
    }
}

/// Total price of a reservation.
pub fn reservation_total(experience: &Experience, guests: u32) -> f64 {
    experience.price_brl * f64::from(guests)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::mock_data::mock_experiences;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_reservation_total() {
        let exp = &mock_experiences()[0];
        let trip = NewTrip::reservation(exp, date(2025, 3, 10), 3, "").unwrap();
        assert_eq!(trip.request.total_price_brl, Some(exp.price_brl * 3.0));
        assert_eq!(trip.request.destination, exp.location);
        assert_eq!(trip.status(), TripStatus::Confirmed);
    }

    #[test]
    fn test_reservation_requires_guests() {
        let exp = &mock_experiences()[0];
        assert_eq!(
            NewTrip::reservation(exp, date(2025, 3, 10), 0, ""),
            Err(TripValidationError::NoTravelers)
        );
    }

    #[test]
    fn test_custom_request_validation() {
        let start = date(2025, 7, 1);

        assert_eq!(
            NewTrip::custom_request("   ", start, None, 2, ""),
            Err(TripValidationError::EmptyDestination)
        );
        assert_eq!(
            NewTrip::custom_request("Noronha", start, Some(date(2025, 6, 30)), 2, ""),
            Err(TripValidationError::EndBeforeStart)
        );

        let ok = NewTrip::custom_request(" Noronha ", start, Some(date(2025, 7, 8)), 2, " lua de mel ")
            .unwrap();
        assert_eq!(ok.request.destination, "Noronha");
        assert_eq!(ok.request.notes, "lua de mel");
        assert_eq!(ok.request.total_price_brl, None);
        assert_eq!(ok.status(), TripStatus::Pending);
    }

    #[test]
    fn test_trip_labels() {
        let trip = NewTrip::custom_request("Bonito", date(2025, 1, 5), Some(date(2025, 1, 9)), 1, "")
            .unwrap()
            .into_trip("trip-1".to_string(), Utc::now());
        assert_eq!(trip.title(), "Viagem para Bonito");
        assert_eq!(trip.date_label(), "05/01/2025 - 09/01/2025");
        assert_eq!(trip.price_label(), None);
    }
}
