pub mod api;
pub mod api_client;
pub mod reservation_service;

pub use api::{ApiError, ReservationApi};
pub use api_client::ApiClient;
pub use reservation_service::{fetch_reservations, create_reservation};

#[cfg(test)]
pub(crate) mod mock_api;
