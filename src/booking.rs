use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use tracing::info;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::booking_model::{Booking, BookingResponse, SeatBooking};
use crate::store::BookingStore;

/// One async mutex per (movie_id, screening_time) key, so the
/// check-then-insert sequence for a screening never interleaves with
/// another reservation for the same screening.
#[derive(Clone, Default)]
pub struct ScreeningLocks {
    inner: Arc<Mutex<HashMap<(i64, String), Arc<tokio::sync::Mutex<()>>>>>,
}

impl ScreeningLocks {
    fn for_screening(&self, movie_id: i64, screening_time: &str) -> Arc<tokio::sync::Mutex<()>> {
        let mut locks = self.inner.lock().unwrap();
        // Entries held only by the map belong to finished reservations;
        // dropping them keeps the map bounded by in-flight screenings.
        locks.retain(|_, lock| Arc::strong_count(lock) > 1);
        locks
            .entry((movie_id, screening_time.to_string()))
            .or_default()
            .clone()
    }
}

#[derive(Clone)]
pub struct BookingService {
    store: BookingStore,
    locks: ScreeningLocks,
}

impl BookingService {
    pub fn new(store: BookingStore) -> Self {
        Self {
            store,
            locks: ScreeningLocks::default(),
        }
    }

    /// Reserves the requested seats for a screening, or fails with
    /// `Conflict` naming the first requested seat that is already taken.
    /// On conflict nothing is written.
    pub async fn reserve(&self, request: SeatBooking) -> Result<BookingResponse, AppError> {
        let lock = self
            .locks
            .for_screening(request.movie_id, &request.screening_time);
        let _guard = lock.lock().await;

        let booked: HashSet<String> = self
            .store
            .find_seats(request.movie_id, &request.screening_time)
            .await?
            .into_iter()
            .collect();

        if let Some(seat) = request.seats.iter().find(|seat| booked.contains(*seat)) {
            return Err(AppError::Conflict(format!(
                "Seat {} is already booked",
                seat
            )));
        }

        let booking = Booking {
            booking_id: new_booking_id(),
            movie_id: request.movie_id,
            screening_date: request.screening_date,
            screening_time: request.screening_time,
            user_email: request.user_email,
        };

        self.store.insert_booking(&booking, &request.seats).await?;
        info!("Booking confirmed: {}", booking.booking_id);

        Ok(BookingResponse {
            booking_id: booking.booking_id,
            movie_id: booking.movie_id,
            seats: request.seats,
            screening_time: booking.screening_time,
            screening_date: booking.screening_date,
            user_email: booking.user_email,
            status: "confirmed".to_string(),
        })
    }

    pub async fn booked_seats(
        &self,
        movie_id: i64,
        screening_time: &str,
    ) -> Result<Vec<String>, AppError> {
        Ok(self.store.find_seats(movie_id, screening_time).await?)
    }
}

/// Collision-resistant booking identifier.
pub fn new_booking_id() -> String {
    format!("BK-{}", Uuid::new_v4().simple())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn service() -> BookingService {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        let store = BookingStore::new(pool);
        store.initialize().await.unwrap();
        BookingService::new(store)
    }

    fn request(movie_id: i64, time: &str, seats: &[&str]) -> SeatBooking {
        SeatBooking {
            movie_id,
            seats: seats.iter().map(|s| s.to_string()).collect(),
            screening_time: time.to_string(),
            screening_date: None,
            user_email: "test@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn reserve_confirms_free_seats() {
        let svc = service().await;

        let booked = svc
            .reserve(request(550, "20:00", &["B1", "B2"]))
            .await
            .unwrap();
        assert_eq!(booked.status, "confirmed");
        assert_eq!(booked.seats, vec!["B1", "B2"]);
        assert!(booked.booking_id.starts_with("BK-"));
    }

    #[tokio::test]
    async fn overlapping_reservation_is_rejected_without_writes() {
        let svc = service().await;
        svc.reserve(request(550, "20:00", &["B1", "B2"]))
            .await
            .unwrap();

        let err = svc
            .reserve(request(550, "20:00", &["B1", "C3"]))
            .await
            .unwrap_err();
        match err {
            AppError::Conflict(detail) => assert!(detail.contains("B1")),
            other => panic!("expected conflict, got {:?}", other),
        }

        let mut seats = svc.booked_seats(550, "20:00").await.unwrap();
        seats.sort();
        assert_eq!(seats, vec!["B1", "B2"]);
    }

    #[tokio::test]
    async fn conflict_names_first_seat_in_request_order() {
        let svc = service().await;
        svc.reserve(request(550, "20:00", &["A1", "C3"]))
            .await
            .unwrap();

        let err = svc
            .reserve(request(550, "20:00", &["C3", "A1"]))
            .await
            .unwrap_err();
        match err {
            AppError::Conflict(detail) => assert_eq!(detail, "Seat C3 is already booked"),
            other => panic!("expected conflict, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn different_screening_time_does_not_conflict() {
        let svc = service().await;
        svc.reserve(request(550, "20:00", &["B1"])).await.unwrap();

        let booked = svc.reserve(request(550, "22:00", &["B1"])).await.unwrap();
        assert_eq!(booked.status, "confirmed");
    }

    #[tokio::test]
    async fn concurrent_overlapping_reservations_admit_one_winner() {
        let svc = service().await;

        let (a, b) = tokio::join!(
            svc.reserve(request(550, "20:00", &["B1", "B2"])),
            svc.reserve(request(550, "20:00", &["B2", "B3"])),
        );
        assert!(
            a.is_ok() != b.is_ok(),
            "exactly one of two overlapping reservations may win"
        );

        let seats = svc.booked_seats(550, "20:00").await.unwrap();
        assert_eq!(seats.len(), 2);
    }

    #[test]
    fn screening_locks_evict_released_entries() {
        let locks = ScreeningLocks::default();

        let held = locks.for_screening(550, "20:00");
        locks.for_screening(550, "22:00");

        // "22:00" was dropped on return; "20:00" is still held above.
        let also_held = locks.for_screening(551, "20:00");
        assert_eq!(locks.inner.lock().unwrap().len(), 2);

        drop(held);
        drop(also_held);
        locks.for_screening(551, "22:00");
        assert_eq!(locks.inner.lock().unwrap().len(), 1);
    }

    #[test]
    fn booking_ids_do_not_collide_within_a_second() {
        let ids: HashSet<String> = (0..1000).map(|_| new_booking_id()).collect();
        assert_eq!(ids.len(), 1000);
    }
}
