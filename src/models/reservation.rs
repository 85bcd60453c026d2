//! Modelo de Reservation
//!
//! Struct de reserva, máquina de estados y el predicado de solapamiento
//! de intervalos que gobierna la admisión de reservas.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estado de una reserva.
///
/// Máquina de estados: `pending --approve--> confirmed`,
/// `pending --disapprove--> cancelled`, `confirmed --cancel--> cancelled`.
/// `cancelled` es terminal. Solo las reservas `confirmed` bloquean el
/// vehículo en su intervalo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Pending => "pending",
            ReservationStatus::Confirmed => "confirmed",
            ReservationStatus::Cancelled => "cancelled",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(ReservationStatus::Pending),
            "confirmed" => Some(ReservationStatus::Confirmed),
            "cancelled" => Some(ReservationStatus::Cancelled),
            _ => None,
        }
    }

    /// Transiciones válidas de la máquina de estados
    pub fn can_transition_to(&self, next: ReservationStatus) -> bool {
        matches!(
            (self, next),
            (ReservationStatus::Pending, ReservationStatus::Confirmed)
                | (ReservationStatus::Pending, ReservationStatus::Cancelled)
                | (ReservationStatus::Confirmed, ReservationStatus::Cancelled)
        )
    }
}

/// Reservation - mapea exactamente a la tabla reservations
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Reservation {
    pub id: Uuid,
    pub user_id: Uuid,
    pub vehicule_id: Uuid,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub status: String,
    pub motif: String,
    pub created_at: DateTime<Utc>,
}

/// Datos de una reserva nueva, ya validados por el motor de admisión
#[derive(Debug, Clone)]
pub struct NewReservation {
    pub user_id: Uuid,
    pub vehicule_id: Uuid,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub motif: String,
}

/// Predicado de solapamiento de intervalos semiabiertos.
///
/// `[a_start, a_end)` y `[b_start, b_end)` se solapan sii
/// `a_start < b_end && a_end > b_start`. Una reserva que termina
/// exactamente cuando otra empieza NO cuenta como conflicto.
pub fn intervals_overlap(
    a_start: DateTime<Utc>,
    a_end: DateTime<Utc>,
    b_start: DateTime<Utc>,
    b_end: DateTime<Utc>,
) -> bool {
    a_start < b_end && a_end > b_start
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn ts(s: &str) -> DateTime<Utc> {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
            .unwrap()
            .and_utc()
    }

    #[test]
    fn test_overlap_partial() {
        // [01, 05) contra [04, 06): se solapan un día
        assert!(intervals_overlap(
            ts("2026-02-04T00:00:00"),
            ts("2026-02-06T00:00:00"),
            ts("2026-02-01T00:00:00"),
            ts("2026-02-05T00:00:00"),
        ));
    }

    #[test]
    fn test_overlap_contained() {
        assert!(intervals_overlap(
            ts("2026-02-02T00:00:00"),
            ts("2026-02-03T00:00:00"),
            ts("2026-02-01T00:00:00"),
            ts("2026-02-05T00:00:00"),
        ));
    }

    #[test]
    fn test_overlap_one_second() {
        assert!(intervals_overlap(
            ts("2026-02-04T23:59:59"),
            ts("2026-02-06T00:00:00"),
            ts("2026-02-01T00:00:00"),
            ts("2026-02-05T00:00:00"),
        ));
    }

    #[test]
    fn test_adjacent_intervals_do_not_overlap() {
        // La nueva empieza exactamente cuando termina la existente
        assert!(!intervals_overlap(
            ts("2026-02-05T00:00:00"),
            ts("2026-02-06T00:00:00"),
            ts("2026-02-01T00:00:00"),
            ts("2026-02-05T00:00:00"),
        ));
        // Y al revés: la nueva termina cuando empieza la existente
        assert!(!intervals_overlap(
            ts("2026-01-01T00:00:00"),
            ts("2026-02-01T00:00:00"),
            ts("2026-02-01T00:00:00"),
            ts("2026-02-05T00:00:00"),
        ));
    }

    #[test]
    fn test_disjoint_intervals() {
        assert!(!intervals_overlap(
            ts("2026-03-01T00:00:00"),
            ts("2026-03-05T00:00:00"),
            ts("2026-02-01T00:00:00"),
            ts("2026-02-05T00:00:00"),
        ));
    }

    #[test]
    fn test_status_transitions() {
        use ReservationStatus::*;

        assert!(Pending.can_transition_to(Confirmed));
        assert!(Pending.can_transition_to(Cancelled));
        assert!(Confirmed.can_transition_to(Cancelled));

        // cancelled es terminal
        assert!(!Cancelled.can_transition_to(Pending));
        assert!(!Cancelled.can_transition_to(Confirmed));
        assert!(!Confirmed.can_transition_to(Pending));
        assert!(!Confirmed.can_transition_to(Confirmed));
    }

    #[test]
    fn test_status_roundtrip() {
        for s in ["pending", "confirmed", "cancelled"] {
            assert_eq!(ReservationStatus::from_str(s).unwrap().as_str(), s);
        }
        assert_eq!(ReservationStatus::from_str("approved"), None);
    }
}
