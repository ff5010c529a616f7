//! Derived statistics
//!
//! Every statistic here is recomputed in full from the current collection
//! on each load. Nothing is maintained incrementally; a mutation is always
//! followed by a reload that feeds fresh collections back through these
//! functions.

use crate::model::{CarRecord, ReservationRecord, ReservationStats, ReservationStatus, UserRecord};

/// Cars page counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CarStats {
    pub total: usize,
    pub available: usize,
    pub unavailable: usize,
}

pub fn car_stats(cars: &[CarRecord]) -> CarStats {
    let available = cars.iter().filter(|car| car.available).count();
    CarStats {
        total: cars.len(),
        available,
        unavailable: cars.len() - available,
    }
}

/// Users page counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
}

pub fn user_stats(users: &[UserRecord]) -> UserStats {
    let active = users.iter().filter(|user| user.active).count();
    UserStats {
        total: users.len(),
        active,
        inactive: users.len() - active,
    }
}

/// Revenue over validated reservations only; missing amounts already
/// normalized to zero.
pub fn revenue(reservations: &[ReservationRecord]) -> f64 {
    reservations
        .iter()
        .filter(|r| r.status == ReservationStatus::Validated)
        .map(|r| r.total_amount)
        .sum()
}

/// Dashboard counters. Total and pending come from the stats read
/// verbatim; they are not recomputed from the reservation list.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DashboardStats {
    pub cars: usize,
    pub reservations: u64,
    pub pending: u64,
    pub revenue: f64,
}

pub fn dashboard_stats(
    cars: &[CarRecord],
    reservations: &[ReservationRecord],
    wire: &ReservationStats,
) -> DashboardStats {
    DashboardStats {
        cars: cars.len(),
        reservations: wire.total,
        pending: wire.pending,
        revenue: revenue(reservations),
    }
}

/// Amount label with space-grouped thousands, as the backend currency
/// (FCFA) is customarily written.
pub fn format_amount(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let whole = (cents / 100).abs();
    let frac = (cents % 100).abs();

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    if cents < 0 {
        grouped.insert(0, '-');
    }
    if frac != 0 {
        format!("{grouped}.{frac:02}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CarDto, ReservationDto, UserDto};

    fn reservation(status: &str, amount: Option<f64>) -> ReservationRecord {
        ReservationRecord::from(ReservationDto {
            status: Some(ReservationStatus::from(status.to_string())),
            total_amount: amount,
            ..Default::default()
        })
    }

    #[test]
    fn test_revenue_counts_validated_only() {
        let reservations = vec![
            reservation("Pending", Some(75000.0)),
            reservation("Validated", Some(50000.0)),
        ];
        assert_eq!(revenue(&reservations), 50000.0);
    }

    #[test]
    fn test_revenue_is_order_invariant_and_defaults_missing_to_zero() {
        let mut reservations = vec![
            reservation("Validated", Some(20000.0)),
            reservation("Validated", None),
            reservation("Refused", Some(99999.0)),
            reservation("Validated", Some(30000.0)),
        ];
        let forward = revenue(&reservations);
        reservations.reverse();
        assert_eq!(revenue(&reservations), forward);
        assert_eq!(forward, 50000.0);
    }

    #[test]
    fn test_car_stats_partition() {
        let cars: Vec<CarRecord> = [Some(true), Some(false), None, Some(true)]
            .into_iter()
            .map(|available| {
                CarRecord::from(CarDto {
                    available,
                    ..Default::default()
                })
            })
            .collect();
        let stats = car_stats(&cars);
        assert_eq!(stats.total, 4);
        // Missing flag normalizes to available.
        assert_eq!(stats.available, 3);
        assert_eq!(stats.unavailable, 1);
        assert_eq!(stats.available + stats.unavailable, stats.total);
    }

    #[test]
    fn test_user_stats_default_active() {
        let users: Vec<UserRecord> = [None, Some(false), Some(true)]
            .into_iter()
            .map(|active| {
                UserRecord::from(UserDto {
                    active,
                    ..Default::default()
                })
            })
            .collect();
        let stats = user_stats(&users);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.active, 2);
        assert_eq!(stats.inactive, 1);
    }

    #[test]
    fn test_dashboard_uses_wire_stats_verbatim() {
        let reservations = vec![
            reservation("Pending", Some(75000.0)),
            reservation("Validated", Some(50000.0)),
        ];
        // Deliberately different from what the list would suggest: the
        // stats endpoint is authoritative.
        let wire = ReservationStats {
            total: 12,
            pending: 7,
        };
        let stats = dashboard_stats(&[], &reservations, &wire);
        assert_eq!(stats.reservations, 12);
        assert_eq!(stats.pending, 7);
        assert_eq!(stats.revenue, 50000.0);
        assert_eq!(stats.cars, 0);
    }

    #[test]
    fn test_recomputation_is_idempotent() {
        let reservations = vec![
            reservation("Validated", Some(10000.0)),
            reservation("Pending", Some(5000.0)),
        ];
        let wire = ReservationStats { total: 2, pending: 1 };
        let first = dashboard_stats(&[], &reservations, &wire);
        let second = dashboard_stats(&[], &reservations, &wire);
        assert_eq!(first, second);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(50000.0), "50 000");
        assert_eq!(format_amount(1234567.0), "1 234 567");
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(999.0), "999");
        assert_eq!(format_amount(1500.5), "1 500.50");
    }
}
