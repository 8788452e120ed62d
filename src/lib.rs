use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

pub mod booking;
pub mod catalog;
pub mod config;
pub mod controllers;
pub mod error;
pub mod models;
pub mod state;
pub mod store;

use controllers::{booking_controller::*, movie_controller::*};
use state::AppState;

pub fn app(state: AppState, allowed_origin: HeaderValue) -> Router {
    Router::new()
        .route("/api/movies/now-playing", get(now_playing))
        .route("/api/movies/:movie_id", get(movie_details))
        .route("/api/movies/:movie_id/seats", get(booked_seats))
        .route("/api/bookings", post(create_booking))
        .layer(
            CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_origin(allowed_origin)
                .allow_headers([header::CONTENT_TYPE])
                .allow_credentials(true),
        )
        .with_state(state)
}
