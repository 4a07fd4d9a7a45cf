// ============================================================================
// API - Contrato con el backend de reservas + errores
// ============================================================================

use std::fmt;
use crate::models::{
    ApiErrorBody, DateRangeDraft, DraftError, NewReservationSubmission, Reservation,
};

/// Mensaje genérico cuando el backend rechaza una reserva sin `message`
pub const CREATE_FALLBACK_MESSAGE: &str = "Error al crear la reserva";

/// Las tres llamadas HTTP de la aplicación. En el navegador todo corre en un
/// solo hilo, por eso los futures no son `Send`.
#[allow(async_fn_in_trait)]
pub trait ReservationApi {
    /// GET /reservations
    async fn get_active_reservations(&self) -> Result<Vec<Reservation>, ApiError>;

    /// GET /past-reservations?startDate=..&endDate=..
    async fn get_past_reservations(&self, range: &DateRangeDraft) -> Result<Vec<Reservation>, ApiError>;

    /// POST /reservation
    async fn create_reservation(&self, submission: &NewReservationSubmission) -> Result<Reservation, ApiError>;
}

/// Error de una operación contra el backend
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Fallo de transporte (sin respuesta)
    Network(String),
    /// Respuesta no 2xx; `message` viene del backend o es genérico
    Http { status: u16, message: String },
    /// Cuerpo de respuesta inesperado
    Parse(String),
    /// Rechazado en el cliente antes de llamar a la red
    Validation(String),
}

impl ApiError {
    /// Texto único que ve el usuario
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(msg) => format!("Error de red: {}", msg),
            ApiError::Http { message, .. } => message.clone(),
            ApiError::Parse(msg) => format!("Respuesta inválida del servidor: {}", msg),
            ApiError::Validation(msg) => msg.clone(),
        }
    }

    /// Construye el error de una respuesta no exitosa a partir de su cuerpo
    pub fn from_http_body(status: u16, body: &str, fallback: &str) -> Self {
        let message = serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.message)
            .filter(|msg| !msg.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string());
        ApiError::Http { status, message }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Http { status, message } => write!(f, "HTTP {}: {}", status, message),
            ApiError::Parse(msg) => write!(f, "Parse error: {}", msg),
            ApiError::Validation(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<DraftError> for ApiError {
    fn from(err: DraftError) -> Self {
        ApiError::Validation(err.to_string())
    }
}
