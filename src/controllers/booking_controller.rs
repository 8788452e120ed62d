use axum::{extract::State, response::Json};

use crate::error::AppError;
use crate::models::booking_model::{BookingResponse, SeatBooking};
use crate::state::AppState;

pub async fn create_booking(
    State(state): State<AppState>,
    Json(booking): Json<SeatBooking>,
) -> Result<Json<BookingResponse>, AppError> {
    let confirmed = state.bookings.reserve(booking).await?;
    Ok(Json(confirmed))
}
