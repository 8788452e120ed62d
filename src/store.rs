use sqlx::sqlite::SqlitePool;

use crate::models::booking_model::Booking;

/// Handle to the reservation tables. Cheap to clone; all clones share
/// the same connection pool.
#[derive(Clone)]
pub struct BookingStore {
    pool: SqlitePool,
}

impl BookingStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Idempotently creates the `bookings` and `seats` tables. Called
    /// once at process startup.
    pub async fn initialize(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS bookings (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                booking_id TEXT NOT NULL UNIQUE,
                movie_id INTEGER NOT NULL,
                screening_date TEXT,
                screening_time TEXT NOT NULL,
                user_email TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS seats (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                booking_id TEXT NOT NULL REFERENCES bookings (booking_id),
                seat_number TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Seat labels already booked for the given screening, in no
    /// particular order.
    pub async fn find_seats(
        &self,
        movie_id: i64,
        screening_time: &str,
    ) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar(
            r#"
            SELECT s.seat_number
            FROM seats s
            JOIN bookings b ON b.booking_id = s.booking_id
            WHERE b.movie_id = ?1 AND b.screening_time = ?2
            "#,
        )
        .bind(movie_id)
        .bind(screening_time)
        .fetch_all(&self.pool)
        .await
    }

    /// Writes the booking row and one seat row per label inside a single
    /// transaction; a failure on any row rolls back all of them.
    pub async fn insert_booking(
        &self,
        booking: &Booking,
        seats: &[String],
    ) -> Result<(), sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO bookings (booking_id, movie_id, screening_date, screening_time, user_email)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&booking.booking_id)
        .bind(booking.movie_id)
        .bind(booking.screening_date)
        .bind(&booking.screening_time)
        .bind(&booking.user_email)
        .execute(&mut *tx)
        .await?;

        for seat in seats {
            sqlx::query("INSERT INTO seats (booking_id, seat_number) VALUES (?1, ?2)")
                .bind(&booking.booking_id)
                .bind(seat)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await
    }
}
