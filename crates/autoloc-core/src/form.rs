//! Car form draft lifecycle
//!
//! The draft holds raw input text; coercion to a typed payload happens at
//! submit time. Empty optional numeric fields become absent, never zero.

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{CarRecord, FuelType};

/// Oldest manufacture year the form accepts.
pub const MIN_MANUFACTURE_YEAR: i32 = 1900;

/// Newest manufacture year the form accepts: the current year.
pub fn max_manufacture_year() -> i32 {
    Utc::now().year()
}

/// Create/update request body for a car.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarPayload {
    pub brand: String,
    pub model: String,
    pub price_per_day: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacture_year: Option<i32>,
    pub fuel_type: FuelType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seats: Option<u32>,
    pub available: bool,
}

/// Rejection reasons surfaced when a draft cannot be submitted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("La marque est obligatoire")]
    MissingBrand,

    #[error("Le modèle est obligatoire")]
    MissingModel,

    #[error("Prix par jour invalide")]
    InvalidPrice,

    #[error("Année de fabrication invalide")]
    InvalidYear,

    #[error("Nombre de places invalide")]
    InvalidSeats,
}

/// Editable state of the car form, mirroring the inputs verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct CarDraft {
    pub brand: String,
    pub model: String,
    pub price_per_day: String,
    pub image: String,
    pub description: String,
    pub manufacture_year: String,
    pub fuel_type: FuelType,
    pub seats: String,
    pub available: bool,
}

impl Default for CarDraft {
    fn default() -> Self {
        CarDraft {
            brand: String::new(),
            model: String::new(),
            price_per_day: String::new(),
            image: String::new(),
            description: String::new(),
            manufacture_year: String::new(),
            fuel_type: FuelType::Petrol,
            seats: "5".to_string(),
            available: true,
        }
    }
}

impl CarDraft {
    /// Empty draft for the create form.
    pub fn for_create() -> Self {
        Self::default()
    }

    /// Draft seeded from an existing record for the edit form, with
    /// defaults substituted for absent optional fields.
    pub fn for_edit(car: &CarRecord) -> Self {
        CarDraft {
            brand: car.brand.clone(),
            model: car.model.clone(),
            price_per_day: trim_float(car.price_per_day),
            image: car.image.clone().unwrap_or_default(),
            description: car.description.clone(),
            manufacture_year: car
                .manufacture_year
                .map(|year| year.to_string())
                .unwrap_or_default(),
            fuel_type: car.fuel_type,
            seats: car.seats.to_string(),
            available: car.available,
        }
    }

    /// Coerce the raw inputs into a typed request body.
    pub fn to_payload(&self) -> Result<CarPayload, DraftError> {
        let brand = self.brand.trim();
        if brand.is_empty() {
            return Err(DraftError::MissingBrand);
        }
        let model = self.model.trim();
        if model.is_empty() {
            return Err(DraftError::MissingModel);
        }

        let price_per_day: f64 = self
            .price_per_day
            .trim()
            .parse()
            .map_err(|_| DraftError::InvalidPrice)?;
        if !price_per_day.is_finite() || price_per_day < 0.0 {
            return Err(DraftError::InvalidPrice);
        }

        let manufacture_year = match self.manufacture_year.trim() {
            "" => None,
            raw => {
                let year: i32 = raw.parse().map_err(|_| DraftError::InvalidYear)?;
                if !(MIN_MANUFACTURE_YEAR..=max_manufacture_year()).contains(&year) {
                    return Err(DraftError::InvalidYear);
                }
                Some(year)
            }
        };
        let seats = match self.seats.trim() {
            "" => None,
            raw => Some(raw.parse::<u32>().map_err(|_| DraftError::InvalidSeats)?),
        };

        Ok(CarPayload {
            brand: brand.to_string(),
            model: model.to_string(),
            price_per_day,
            image: non_empty(&self.image),
            description: non_empty(&self.description),
            manufacture_year,
            fuel_type: self.fuel_type,
            seats,
            available: self.available,
        })
    }
}

fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn trim_float(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CarDto;

    #[test]
    fn test_create_defaults() {
        let draft = CarDraft::for_create();
        assert_eq!(draft.fuel_type, FuelType::Petrol);
        assert_eq!(draft.seats, "5");
        assert!(draft.available);
        assert!(draft.brand.is_empty());
    }

    #[test]
    fn test_submit_coercion() {
        let draft = CarDraft {
            brand: "Toyota".to_string(),
            model: "Corolla".to_string(),
            price_per_day: "15000".to_string(),
            manufacture_year: String::new(),
            seats: "5".to_string(),
            ..Default::default()
        };
        let payload = draft.to_payload().unwrap();
        assert_eq!(payload.price_per_day, 15000.0);
        assert_eq!(payload.manufacture_year, None);
        assert_eq!(payload.seats, Some(5));

        // An absent year must be absent on the wire, not zero or null.
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("manufactureYear").is_none());
        assert_eq!(json["seats"], 5);
        assert_eq!(json["pricePerDay"], 15000.0);
    }

    #[test]
    fn test_empty_optional_text_becomes_absent() {
        let draft = CarDraft {
            brand: "Renault".to_string(),
            model: "Clio".to_string(),
            price_per_day: "9000".to_string(),
            image: "   ".to_string(),
            description: String::new(),
            ..Default::default()
        };
        let payload = draft.to_payload().unwrap();
        assert_eq!(payload.image, None);
        assert_eq!(payload.description, None);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let valid = CarDraft {
            brand: "Toyota".to_string(),
            model: "Yaris".to_string(),
            price_per_day: "8000".to_string(),
            ..Default::default()
        };

        let mut missing_brand = valid.clone();
        missing_brand.brand = "  ".to_string();
        assert_eq!(missing_brand.to_payload(), Err(DraftError::MissingBrand));

        let mut bad_price = valid.clone();
        bad_price.price_per_day = "cher".to_string();
        assert_eq!(bad_price.to_payload(), Err(DraftError::InvalidPrice));

        let mut bad_year = valid.clone();
        bad_year.manufacture_year = "l'an dernier".to_string();
        assert_eq!(bad_year.to_payload(), Err(DraftError::InvalidYear));

        let mut bad_seats = valid;
        bad_seats.seats = "-2".to_string();
        assert_eq!(bad_seats.to_payload(), Err(DraftError::InvalidSeats));
    }

    #[test]
    fn test_manufacture_year_bounds() {
        let valid = CarDraft {
            brand: "Toyota".to_string(),
            model: "Yaris".to_string(),
            price_per_day: "8000".to_string(),
            ..Default::default()
        };

        let mut too_old = valid.clone();
        too_old.manufacture_year = "1899".to_string();
        assert_eq!(too_old.to_payload(), Err(DraftError::InvalidYear));

        let mut future = valid.clone();
        future.manufacture_year = (max_manufacture_year() + 1).to_string();
        assert_eq!(future.to_payload(), Err(DraftError::InvalidYear));

        let mut current = valid;
        current.manufacture_year = max_manufacture_year().to_string();
        let payload = current.to_payload().unwrap();
        assert_eq!(payload.manufacture_year, Some(max_manufacture_year()));
    }

    #[test]
    fn test_edit_seed_substitutes_defaults() {
        let car = CarRecord::from(CarDto {
            id: Some(3),
            brand: Some("Peugeot".to_string()),
            model: Some("208".to_string()),
            price_per_day: Some(12000.0),
            ..Default::default()
        });
        let draft = CarDraft::for_edit(&car);
        assert_eq!(draft.price_per_day, "12000");
        assert_eq!(draft.manufacture_year, "");
        assert_eq!(draft.seats, "5");
        assert!(draft.available);
    }
}
