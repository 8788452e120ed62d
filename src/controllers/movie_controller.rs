use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde_json::Value;

use crate::error::AppError;
use crate::models::booking_model::{BookedSeats, SeatsQuery};
use crate::state::AppState;

pub async fn now_playing(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let payload = state.catalog.list_now_playing().await?;
    Ok(Json(payload))
}

pub async fn movie_details(
    State(state): State<AppState>,
    Path(movie_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let payload = state.catalog.get_details(movie_id).await?;
    Ok(Json(payload))
}

pub async fn booked_seats(
    State(state): State<AppState>,
    Path(movie_id): Path<i64>,
    Query(params): Query<SeatsQuery>,
) -> Result<Json<BookedSeats>, AppError> {
    let booked_seats = state
        .bookings
        .booked_seats(movie_id, &params.screening_time)
        .await?;

    Ok(Json(BookedSeats { booked_seats }))
}
