pub mod reservation_viewmodel;

pub use reservation_viewmodel::{ReservationViewModel, AppViewModel};
