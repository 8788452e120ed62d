use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Request body for `POST /api/bookings`.
#[derive(Debug, Clone, Deserialize)]
pub struct SeatBooking {
    pub movie_id: i64,
    pub seats: Vec<String>,
    pub screening_time: String,
    #[serde(default)]
    pub screening_date: Option<NaiveDate>,
    pub user_email: String,
}

/// One persisted booking row; its seats live in the `seats` table.
#[derive(Debug, Clone)]
pub struct Booking {
    pub booking_id: String,
    pub movie_id: i64,
    pub screening_date: Option<NaiveDate>,
    pub screening_time: String,
    pub user_email: String,
}

#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub booking_id: String,
    pub movie_id: i64,
    pub seats: Vec<String>,
    pub screening_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screening_date: Option<NaiveDate>,
    pub user_email: String,
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BookedSeats {
    pub booked_seats: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct SeatsQuery {
    pub screening_time: String,
    /// Accepted and ignored; seat uniqueness is scoped by
    /// (movie_id, screening_time) only.
    #[serde(default)]
    pub screening_date: Option<NaiveDate>,
}
