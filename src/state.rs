use crate::booking::BookingService;
use crate::catalog::CatalogClient;

#[derive(Clone)]
pub struct AppState {
    pub bookings: BookingService,
    pub catalog: CatalogClient,
}
