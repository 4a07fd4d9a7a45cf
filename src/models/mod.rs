pub mod reservation;
pub mod draft;
pub mod view_mode;

pub use reservation::{
    Reservation, NewReservationSubmission, ActiveReservationsResponse,
    PastReservationsResponse, ApiErrorBody,
};
pub use draft::{NewReservationDraft, DraftField, DateRangeDraft, RangeField, DraftError};
pub use view_mode::ViewMode;
