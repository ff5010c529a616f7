//! Wire DTOs and normalized records
//!
//! DTOs mirror the backend JSON permissively: every field is optional and
//! unknown enum values never fail deserialization. Normalization happens
//! once per entity at the accessor boundary and produces fully-defaulted
//! records, so rendering code never branches on absence.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Fuel type of a car. Unknown wire values fall back to [`FuelType::Petrol`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FuelType {
    Petrol,
    Diesel,
    Electric,
    Hybrid,
}

impl FuelType {
    pub const ALL: [FuelType; 4] = [
        FuelType::Petrol,
        FuelType::Diesel,
        FuelType::Electric,
        FuelType::Hybrid,
    ];

    /// Wire value, also used as the form select value.
    pub fn as_str(&self) -> &'static str {
        match self {
            FuelType::Petrol => "Petrol",
            FuelType::Diesel => "Diesel",
            FuelType::Electric => "Electric",
            FuelType::Hybrid => "Hybrid",
        }
    }

    /// French display label.
    pub fn label(&self) -> &'static str {
        match self {
            FuelType::Petrol => "Essence",
            FuelType::Diesel => "Diesel",
            FuelType::Electric => "Électrique",
            FuelType::Hybrid => "Hybride",
        }
    }

    /// Permissive parse; anything unrecognized is Petrol.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "Diesel" => FuelType::Diesel,
            "Electric" => FuelType::Electric,
            "Hybrid" => FuelType::Hybrid,
            _ => FuelType::Petrol,
        }
    }
}

impl Default for FuelType {
    fn default() -> Self {
        FuelType::Petrol
    }
}

/// Reservation status. Values the client does not recognize pass through
/// verbatim and render as-is; deserialization never fails on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReservationStatus {
    Pending,
    Validated,
    Refused,
    Other(String),
}

impl From<String> for ReservationStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Pending" => ReservationStatus::Pending,
            "Validated" => ReservationStatus::Validated,
            "Refused" => ReservationStatus::Refused,
            _ => ReservationStatus::Other(raw),
        }
    }
}

impl From<ReservationStatus> for String {
    fn from(status: ReservationStatus) -> Self {
        match status {
            ReservationStatus::Pending => "Pending".to_string(),
            ReservationStatus::Validated => "Validated".to_string(),
            ReservationStatus::Refused => "Refused".to_string(),
            ReservationStatus::Other(raw) => raw,
        }
    }
}

impl ReservationStatus {
    /// Display label; unrecognized statuses show their raw text.
    pub fn label(&self) -> &str {
        match self {
            ReservationStatus::Pending => "En attente",
            ReservationStatus::Validated => "Validée",
            ReservationStatus::Refused => "Refusée",
            ReservationStatus::Other(raw) => raw,
        }
    }

    /// Badge CSS class for the four visual categories.
    pub fn badge_class(&self) -> &'static str {
        match self {
            ReservationStatus::Pending => "badge badge-warning",
            ReservationStatus::Validated => "badge badge-success",
            ReservationStatus::Refused => "badge badge-danger",
            ReservationStatus::Other(_) => "badge badge-neutral",
        }
    }

    /// Validate/refuse actions are offered only while pending.
    pub fn is_pending(&self) -> bool {
        matches!(self, ReservationStatus::Pending)
    }
}

/// Embedded entity summary inside a reservation. The backend sometimes
/// embeds a full summary object and sometimes just a name string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PartyRef {
    Summary(RefSummary),
    Name(String),
}

/// Summary shape shared by embedded clients and cars.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RefSummary {
    pub id: Option<i64>,
    pub full_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
}

impl PartyRef {
    /// Best-effort display name; defaults to "-" when nothing usable.
    pub fn display_name(&self) -> String {
        match self {
            PartyRef::Name(name) if !name.trim().is_empty() => name.clone(),
            PartyRef::Name(_) => "-".to_string(),
            PartyRef::Summary(summary) => {
                if let Some(full) = summary.full_name.as_deref().filter(|s| !s.trim().is_empty()) {
                    return full.to_string();
                }
                match (summary.first_name.as_deref(), summary.last_name.as_deref()) {
                    (Some(first), Some(last)) => return format!("{first} {last}"),
                    _ => {}
                }
                match (summary.brand.as_deref(), summary.model.as_deref()) {
                    (Some(brand), Some(model)) => format!("{brand} {model}"),
                    (Some(single), None) | (None, Some(single)) => single.to_string(),
                    _ => "-".to_string(),
                }
            }
        }
    }
}

/// Car as transferred over the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CarDto {
    pub id: Option<i64>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub price_per_day: Option<f64>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub manufacture_year: Option<i32>,
    pub fuel_type: Option<String>,
    pub seats: Option<u32>,
    pub available: Option<bool>,
}

/// Fully-defaulted car record produced at the accessor boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct CarRecord {
    pub id: i64,
    pub brand: String,
    pub model: String,
    pub price_per_day: f64,
    pub image: Option<String>,
    pub description: String,
    pub manufacture_year: Option<i32>,
    pub fuel_type: FuelType,
    pub seats: u32,
    pub available: bool,
}

impl From<CarDto> for CarRecord {
    fn from(dto: CarDto) -> Self {
        CarRecord {
            id: dto.id.unwrap_or_default(),
            brand: dto.brand.unwrap_or_default(),
            model: dto.model.unwrap_or_default(),
            price_per_day: dto.price_per_day.unwrap_or_default(),
            image: dto.image.filter(|url| !url.trim().is_empty()),
            description: dto.description.unwrap_or_default(),
            manufacture_year: dto.manufacture_year,
            fuel_type: dto.fuel_type.as_deref().map(FuelType::parse).unwrap_or_default(),
            seats: dto.seats.unwrap_or(5),
            available: dto.available.unwrap_or(true),
        }
    }
}

impl CarRecord {
    pub fn year_label(&self) -> String {
        match self.manufacture_year {
            Some(year) => year.to_string(),
            None => "-".to_string(),
        }
    }
}

/// Reservation as transferred over the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReservationDto {
    pub id: Option<i64>,
    pub client: Option<PartyRef>,
    pub car: Option<PartyRef>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub total_amount: Option<f64>,
    pub status: Option<ReservationStatus>,
}

/// Fully-defaulted reservation record.
#[derive(Debug, Clone, PartialEq)]
pub struct ReservationRecord {
    pub id: i64,
    pub client_name: String,
    pub car_name: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub total_amount: f64,
    pub status: ReservationStatus,
}

impl From<ReservationDto> for ReservationRecord {
    fn from(dto: ReservationDto) -> Self {
        ReservationRecord {
            id: dto.id.unwrap_or_default(),
            client_name: dto
                .client
                .map(|r| r.display_name())
                .unwrap_or_else(|| "-".to_string()),
            car_name: dto
                .car
                .map(|r| r.display_name())
                .unwrap_or_else(|| "-".to_string()),
            start_date: dto.start_date.as_deref().and_then(parse_wire_date),
            end_date: dto.end_date.as_deref().and_then(parse_wire_date),
            total_amount: dto.total_amount.unwrap_or_default(),
            status: dto
                .status
                .unwrap_or_else(|| ReservationStatus::Other("Unknown".to_string())),
        }
    }
}

impl ReservationRecord {
    pub fn start_label(&self) -> String {
        date_label(self.start_date)
    }

    pub fn end_label(&self) -> String {
        date_label(self.end_date)
    }
}

/// User as transferred over the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserDto {
    pub id: Option<i64>,
    pub full_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub registration_date: Option<String>,
    pub reservation_count: Option<u32>,
    pub active: Option<bool>,
}

/// Fully-defaulted user record. A missing active flag means active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub registered_at: Option<NaiveDate>,
    pub reservation_count: u32,
    pub active: bool,
}

impl From<UserDto> for UserRecord {
    fn from(dto: UserDto) -> Self {
        let full_name = match dto.full_name.filter(|s| !s.trim().is_empty()) {
            Some(name) => name,
            None => match (dto.first_name.as_deref(), dto.last_name.as_deref()) {
                (Some(first), Some(last)) => format!("{first} {last}"),
                (Some(single), None) | (None, Some(single)) => single.to_string(),
                (None, None) => "-".to_string(),
            },
        };
        UserRecord {
            id: dto.id.unwrap_or_default(),
            full_name,
            email: dto.email.unwrap_or_default(),
            registered_at: dto.registration_date.as_deref().and_then(parse_wire_date),
            reservation_count: dto.reservation_count.unwrap_or_default(),
            // Only an explicit false marks a user inactive.
            active: dto.active != Some(false),
        }
    }
}

impl UserRecord {
    pub fn registered_label(&self) -> String {
        date_label(self.registered_at)
    }
}

/// Reservation statistics read from `/reservations/stats`. Used verbatim,
/// never recomputed from the reservation list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReservationStats {
    pub total: u64,
    pub pending: u64,
}

/// Parse the date formats the backend is known to emit.
pub fn parse_wire_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%d/%m/%Y"))
        .ok()
}

/// French-locale date label, "-" when absent.
pub fn date_label(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => date.format("%d/%m/%Y").to_string(),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_passthrough_roundtrip() {
        let status: ReservationStatus = serde_json::from_str("\"Cancelled\"").unwrap();
        assert_eq!(status, ReservationStatus::Other("Cancelled".to_string()));
        assert_eq!(status.label(), "Cancelled");
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"Cancelled\"");
    }

    #[test]
    fn test_status_known_values() {
        let status: ReservationStatus = serde_json::from_str("\"Validated\"").unwrap();
        assert_eq!(status, ReservationStatus::Validated);
        assert!(!status.is_pending());
        assert!(ReservationStatus::Pending.is_pending());
    }

    #[test]
    fn test_car_normalization_defaults() {
        let car = CarRecord::from(CarDto {
            brand: Some("Toyota".to_string()),
            model: Some("Corolla".to_string()),
            price_per_day: Some(15000.0),
            ..Default::default()
        });
        assert_eq!(car.fuel_type, FuelType::Petrol);
        assert_eq!(car.seats, 5);
        assert!(car.available);
        assert_eq!(car.year_label(), "-");
    }

    #[test]
    fn test_car_image_kept_only_when_non_blank() {
        let with_image = CarRecord::from(CarDto {
            image: Some("https://exemple.com/corolla.jpg".to_string()),
            ..Default::default()
        });
        assert_eq!(
            with_image.image.as_deref(),
            Some("https://exemple.com/corolla.jpg")
        );

        // A blank URL must normalize to None so the table can show the
        // placeholder instead of a broken <img>.
        let blank = CarRecord::from(CarDto {
            image: Some("   ".to_string()),
            ..Default::default()
        });
        assert_eq!(blank.image, None);

        let absent = CarRecord::from(CarDto::default());
        assert_eq!(absent.image, None);
    }

    #[test]
    fn test_car_unknown_fuel_falls_back_to_petrol() {
        let car = CarRecord::from(CarDto {
            fuel_type: Some("Steam".to_string()),
            ..Default::default()
        });
        assert_eq!(car.fuel_type, FuelType::Petrol);
    }

    #[test]
    fn test_user_default_active_law() {
        let missing = UserRecord::from(UserDto::default());
        assert!(missing.active);

        let explicit_true = UserRecord::from(UserDto {
            active: Some(true),
            ..Default::default()
        });
        assert!(explicit_true.active);

        let explicit_false = UserRecord::from(UserDto {
            active: Some(false),
            ..Default::default()
        });
        assert!(!explicit_false.active);
    }

    #[test]
    fn test_user_name_fallback() {
        let user = UserRecord::from(UserDto {
            first_name: Some("Awa".to_string()),
            last_name: Some("Diallo".to_string()),
            ..Default::default()
        });
        assert_eq!(user.full_name, "Awa Diallo");
    }

    #[test]
    fn test_reservation_embedded_summary_or_plain_name() {
        let embedded: ReservationDto = serde_json::from_str(
            r#"{"id": 4, "client": {"firstName": "Moussa", "lastName": "Traoré"},
                "car": "Toyota Corolla", "status": "Pending"}"#,
        )
        .unwrap();
        let record = ReservationRecord::from(embedded);
        assert_eq!(record.client_name, "Moussa Traoré");
        assert_eq!(record.car_name, "Toyota Corolla");
        assert_eq!(record.total_amount, 0.0);
    }

    #[test]
    fn test_toggled_flag_renormalizes_with_no_other_field_altered() {
        let dto = UserDto {
            id: Some(9),
            full_name: Some("Awa Diallo".to_string()),
            email: Some("awa@example.com".to_string()),
            reservation_count: Some(3),
            active: Some(true),
            ..Default::default()
        };
        let before = UserRecord::from(dto.clone());
        let after = UserRecord::from(UserDto {
            active: Some(false),
            ..dto
        });
        assert!(before.active);
        assert!(!after.active);
        assert_eq!(before.full_name, after.full_name);
        assert_eq!(before.email, after.email);
        assert_eq!(before.reservation_count, after.reservation_count);
    }

    #[test]
    fn test_parse_wire_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 5, 14).unwrap();
        assert_eq!(parse_wire_date("2024-05-14"), Some(expected));
        assert_eq!(parse_wire_date("2024-05-14T10:30:00"), Some(expected));
        assert_eq!(parse_wire_date("2024-05-14T10:30:00+00:00"), Some(expected));
        assert_eq!(parse_wire_date("14/05/2024"), Some(expected));
        assert_eq!(parse_wire_date("not a date"), None);
        assert_eq!(date_label(None), "-");
    }
}
