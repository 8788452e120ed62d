pub mod booking_controller;
pub mod movie_controller;
