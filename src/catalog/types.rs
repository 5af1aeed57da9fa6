//! Catalog types: experiences and users.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Experience category, used by the explore filter chips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Sailing, boat tours, diving
    Nautical,
    /// Trekking, rafting, climbing
    Adventure,
    /// Museums, historic centers, festivals
    Culture,
    /// Food and wine tours
    Gastronomy,
    /// Parks, waterfalls, wildlife
    Nature,
}

impl Category {
    /// Get display name.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Nautical => "Náutico",
            Category::Adventure => "Aventura",
            Category::Culture => "Cultura",
            Category::Gastronomy => "Gastronomia",
            Category::Nature => "Natureza",
        }
    }

    /// Get all categories in display order.
    pub fn all() -> &'static [Category] {
        &[
            Category::Nautical,
            Category::Adventure,
            Category::Culture,
            Category::Gastronomy,
            Category::Nature,
        ]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A bookable activity from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    /// Stable identifier, referenced by favorites
    pub id: String,
    /// Display title
    pub title: String,
    /// City / region
    pub location: String,
    /// Category
    pub category: Category,
    /// Price per person in BRL
    pub price_brl: f64,
    /// Average rating (0-5)
    pub rating: f32,
    /// Number of reviews
    pub review_count: u32,
    /// Human readable duration ("4 horas")
    pub duration: String,
    /// Long description
    pub description: String,
    /// Bullet highlights shown on the detail screen
    pub highlights: Vec<String>,
    /// Host / operator name
    pub host: String,
}

impl Experience {
    /// Format the per-person price for display.
    pub fn price_label(&self) -> String {
        format_brl(self.price_brl)
    }
}

/// The signed-in traveler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Identifier
    pub id: String,
    /// Full name
    pub name: String,
    /// Email address
    pub email: String,
    /// Phone number
    pub phone: String,
    /// Home city
    pub location: String,
    /// Date the account was created
    pub member_since: NaiveDate,
}

impl User {
    /// First name, used for greetings.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    /// Two-letter initials for the avatar badge.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Format an amount in Brazilian reais ("R$ 1.250,00").
pub fn format_brl(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let negative = cents < 0;
    let cents = cents.abs();
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    format!("{}R$ {},{:02}", if negative { "-" } else { "" }, grouped, frac)
}
