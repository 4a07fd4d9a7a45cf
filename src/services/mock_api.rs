// Doble de ReservationApi para tests: registra llamadas y devuelve respuestas fijas

use std::cell::RefCell;
use crate::models::{DateRangeDraft, NewReservationSubmission, Reservation};
use crate::services::api::{ApiError, ReservationApi};

#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    Active,
    Past(DateRangeDraft),
    Create(NewReservationSubmission),
}

pub struct MockApi {
    pub calls: RefCell<Vec<ApiCall>>,
    pub active: RefCell<Result<Vec<Reservation>, ApiError>>,
    pub past: RefCell<Result<Vec<Reservation>, ApiError>>,
    pub create: RefCell<Result<Reservation, ApiError>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            active: RefCell::new(Ok(Vec::new())),
            past: RefCell::new(Ok(Vec::new())),
            create: RefCell::new(Ok(reservation("new", "Laboratorio de Química"))),
        }
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.borrow().clone()
    }
}

pub fn reservation(id: &str, lab: &str) -> Reservation {
    Reservation {
        reservation_id: id.to_string(),
        date: "2024-05-01".to_string(),
        hour: "9".to_string(),
        status: "active".to_string(),
        student_id: "s1".to_string(),
        name: "Ana".to_string(),
        email: "a@x.com".to_string(),
        lab: lab.to_string(),
        creation_timestamp: "2024-04-30T10:00:00Z".to_string(),
    }
}

impl ReservationApi for MockApi {
    async fn get_active_reservations(&self) -> Result<Vec<Reservation>, ApiError> {
        self.calls.borrow_mut().push(ApiCall::Active);
        self.active.borrow().clone()
    }

    async fn get_past_reservations(&self, range: &DateRangeDraft) -> Result<Vec<Reservation>, ApiError> {
        self.calls.borrow_mut().push(ApiCall::Past(range.clone()));
        self.past.borrow().clone()
    }

    async fn create_reservation(&self, submission: &NewReservationSubmission) -> Result<Reservation, ApiError> {
        self.calls.borrow_mut().push(ApiCall::Create(submission.clone()));
        self.create.borrow().clone()
    }
}
