//! Illustrative dashboard dataset
//!
//! Shown when the backend is unreachable at dashboard load time so the
//! page stays visually populated behind the error banner. The data is
//! fixed and clearly fictional; a successful reload replaces it entirely.

use chrono::NaiveDate;

use crate::model::{ReservationRecord, ReservationStatus};
use crate::stats::DashboardStats;

/// Two sample reservations, one pending and one validated.
pub fn sample_reservations() -> Vec<ReservationRecord> {
    vec![
        ReservationRecord {
            id: 1,
            client_name: "Awa Diallo".to_string(),
            car_name: "Toyota Corolla".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 6, 1),
            end_date: NaiveDate::from_ymd_opt(2024, 6, 5),
            total_amount: 75000.0,
            status: ReservationStatus::Pending,
        },
        ReservationRecord {
            id: 2,
            client_name: "Moussa Traoré".to_string(),
            car_name: "Renault Clio".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 6, 3),
            end_date: NaiveDate::from_ymd_opt(2024, 6, 8),
            total_amount: 50000.0,
            status: ReservationStatus::Validated,
        },
    ]
}

/// Fixed counters consistent with [`sample_reservations`].
pub fn sample_stats() -> DashboardStats {
    DashboardStats {
        cars: 8,
        reservations: 2,
        pending: 1,
        revenue: 50000.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::revenue;

    #[test]
    fn test_fallback_dataset_shape() {
        let reservations = sample_reservations();
        assert_eq!(reservations.len(), 2);

        let stats = sample_stats();
        assert_eq!(stats.reservations, 2);
        assert_eq!(stats.pending, 1);
        // The fixed revenue matches what recomputation would yield.
        assert_eq!(stats.revenue, revenue(&reservations));
    }
}
