// ============================================================================
// RESERVATION SERVICE - Capa de lectura y de mutación
// ============================================================================
// Sin estado de UI: recibe el modo/rango/borrador y devuelve datos o error
// ============================================================================

use crate::config::AppConfig;
use crate::models::{DateRangeDraft, NewReservationDraft, Reservation, ViewMode};
use crate::services::api::{ApiError, ReservationApi};

/// Obtiene la lista que corresponde al modo actual.
///
/// En modo `Past` con el rango incompleto devuelve una lista vacía sin llamar
/// a la red.
pub async fn fetch_reservations<A: ReservationApi>(
    api: &A,
    mode: ViewMode,
    range: &DateRangeDraft,
) -> Result<Vec<Reservation>, ApiError> {
    match mode {
        ViewMode::Active | ViewMode::AwaitingRange => api.get_active_reservations().await,
        ViewMode::Past => {
            if !range.is_complete() {
                log::debug!("⏭️ [SERVICE] Rango incompleto, no se consulta el backend");
                return Ok(Vec::new());
            }
            api.get_past_reservations(range).await
        }
    }
}

/// Valida el borrador y lo envía. Un borrador inválido nunca llega a la red.
pub async fn create_reservation<A: ReservationApi>(
    api: &A,
    draft: &NewReservationDraft,
    config: &AppConfig,
) -> Result<Reservation, ApiError> {
    let submission = draft.to_submission(config).map_err(|e| {
        log::warn!("⚠️ [SERVICE] Borrador rechazado: {}", e);
        ApiError::from(e)
    })?;
    api.create_reservation(&submission).await
}
