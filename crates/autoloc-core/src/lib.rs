//! Domain types and view-state logic for the AutoLoc admin dashboard
//!
//! # Modules
//!
//! - `config`: backend origin configuration, fixed at startup
//! - `error`: API error taxonomy and Result alias
//! - `fallback`: illustrative dashboard dataset for offline rendering
//! - `flight`: single-flight supersede guard for overlapping loads
//! - `form`: car form draft lifecycle and submit coercion
//! - `model`: wire DTOs and normalized records
//! - `stats`: derived statistics, recomputed in full on every load

pub mod config;
pub mod error;
pub mod fallback;
pub mod flight;
pub mod form;
pub mod model;
pub mod stats;

// Re-exports
pub use config::ApiConfig;
pub use error::{ApiError, Result};
pub use flight::{LoadSequence, LoadTicket};
pub use form::{max_manufacture_year, CarDraft, CarPayload, DraftError, MIN_MANUFACTURE_YEAR};
pub use model::{
    CarDto, CarRecord, FuelType, PartyRef, RefSummary, ReservationDto, ReservationRecord,
    ReservationStats, ReservationStatus, UserDto, UserRecord,
};
pub use stats::{car_stats, dashboard_stats, format_amount, revenue, user_stats};
pub use stats::{CarStats, DashboardStats, UserStats};
