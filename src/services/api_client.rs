// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// Implementación de ReservationApi sobre gloo-net (fetch del navegador)
// ============================================================================

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use crate::config::{AppConfig, CONFIG};
use crate::models::{
    ActiveReservationsResponse, DateRangeDraft, NewReservationSubmission,
    PastReservationsResponse, Reservation,
};
use crate::services::api::{ApiError, ReservationApi, CREATE_FALLBACK_MESSAGE};

/// Cliente API - SOLO comunicación HTTP
#[derive(Clone)]
pub struct ApiClient {
    config: AppConfig,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_config(CONFIG.clone())
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self { config }
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn read_error(response: Response, fallback: &str) -> ApiError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        ApiError::from_http_body(status, &body, fallback)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ReservationApi for ApiClient {
    async fn get_active_reservations(&self) -> Result<Vec<Reservation>, ApiError> {
        let url = self.config.reservations_url();
        log::debug!("📋 [API] GET {}", url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            let fallback = format!("HTTP {}: {}", response.status(), response.status_text());
            return Err(Self::read_error(response, &fallback).await);
        }

        let body: ActiveReservationsResponse = Self::read_json(response).await?;
        log::info!("✅ [API] {} reservas activas", body.active_reservations.len());
        Ok(body.active_reservations)
    }

    async fn get_past_reservations(&self, range: &DateRangeDraft) -> Result<Vec<Reservation>, ApiError> {
        let url = self.config.past_reservations_url();
        log::debug!("📋 [API] GET {} ({} → {})", url, range.start_date, range.end_date);

        let response = Request::get(&url)
            .query([
                ("startDate", range.start_date.as_str()),
                ("endDate", range.end_date.as_str()),
            ])
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            let fallback = format!("HTTP {}: {}", response.status(), response.status_text());
            return Err(Self::read_error(response, &fallback).await);
        }

        let body: PastReservationsResponse = Self::read_json(response).await?;
        log::info!("✅ [API] {} reservas pasadas", body.reservations.len());
        Ok(body.reservations)
    }

    async fn create_reservation(&self, submission: &NewReservationSubmission) -> Result<Reservation, ApiError> {
        let url = self.config.create_reservation_url();
        log::info!("📝 [API] Enviando reserva: {:?}", submission);

        let response = Request::post(&url)
            .json(submission)
            .map_err(|e| ApiError::Parse(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            let err = Self::read_error(response, CREATE_FALLBACK_MESSAGE).await;
            log::error!("❌ [API] Reserva rechazada: {}", err);
            return Err(err);
        }

        let created: Reservation = Self::read_json(response).await?;
        log::info!("✅ [API] Reserva creada: {}", created.reservation_id);
        Ok(created)
    }
}
