use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::shared::geo::GeoPoint;

// ============================================================================
// Aggregate Root
// ============================================================================

/// One generated identity from randomuser.me.
///
/// Read-only: arrives whole from the API and is only displayed afterwards.
/// Required fields are enforced during deserialization, so the UI never
/// receives a partially filled record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub gender: String,
    pub name: PersonName,
    pub location: Location,
    pub email: String,
    pub login: LoginCredentials,
    pub dob: DatedAge,
    pub registered: DatedAge,
    pub phone: String,
    pub cell: String,
    pub id: NationalId,
    pub picture: Picture,
    pub nat: String,
}

impl UserRecord {
    /// "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name.first, self.name.last)
    }

    /// One-line postal address: "8929 Valwood Pkwy, Billings, Michigan, United States 63104"
    pub fn street_address(&self) -> String {
        let loc = &self.location;
        format!(
            "{} {}, {}, {}, {} {}",
            loc.street.number, loc.street.name, loc.city, loc.state, loc.country, loc.postcode
        )
    }

    /// Parsed map position; the API ships coordinates as strings.
    pub fn geo_point(&self) -> Result<GeoPoint, String> {
        GeoPoint::parse(
            &self.location.coordinates.latitude,
            &self.location.coordinates.longitude,
        )
    }
}

// ============================================================================
// Nested values
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonName {
    pub title: String,
    pub first: String,
    pub last: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub street: Street,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postcode: Postcode,
    pub coordinates: RawCoordinates,
    pub timezone: Timezone,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Street {
    pub number: i64,
    pub name: String,
}

/// Postcode: a number for some nationalities, a string ("EC1A 1BB") for others.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Postcode {
    Number(i64),
    Text(String),
}

impl fmt::Display for Postcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Postcode::Number(n) => write!(f, "{}", n),
            Postcode::Text(s) => f.write_str(s),
        }
    }
}

/// Coordinates exactly as the API sends them (decimal strings).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCoordinates {
    pub latitude: String,
    pub longitude: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timezone {
    pub offset: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub uuid: Uuid,
    pub username: String,
    pub password: String,
    pub salt: String,
    pub md5: String,
    pub sha1: String,
    pub sha256: String,
}

/// Event date plus age in years at generation time (dob, registered).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatedAge {
    pub date: DateTime<Utc>,
    pub age: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NationalId {
    pub name: String,
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Picture {
    pub large: String,
    pub medium: String,
    pub thumbnail: String,
}
