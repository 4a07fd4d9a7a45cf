// ============================================================================
// QUERY STATE - Cache de la lista de reservas + orden de respuestas
// ============================================================================
// Cada fetch recibe un ticket creciente. Solo se aplica la respuesta del
// último ticket emitido; las anteriores se descartan.
// ============================================================================

use crate::models::{DateRangeDraft, Reservation, ViewMode};

/// Clave de la consulta (modo + rango)
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub mode: ViewMode,
    pub range: DateRangeDraft,
}

/// Identifica una petición en vuelo
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestTicket {
    pub id: u64,
    pub key: QueryKey,
}

#[derive(Clone, Debug, Default)]
pub struct ReservationQuery {
    data: Option<Vec<Reservation>>,
    error: Option<String>,
    in_flight: Option<u64>,
    next_id: u64,
}

impl ReservationQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registra una nueva petición; invalida cualquier ticket anterior
    pub fn begin(&mut self, key: QueryKey) -> RequestTicket {
        self.next_id += 1;
        let id = self.next_id;
        self.in_flight = Some(id);
        RequestTicket { id, key }
    }

    /// Aplica el resultado si el ticket sigue siendo el último.
    /// Devuelve `false` cuando la respuesta llegó tarde y se descartó.
    pub fn resolve(&mut self, ticket: &RequestTicket, result: Result<Vec<Reservation>, String>) -> bool {
        if self.in_flight != Some(ticket.id) {
            log::debug!(
                "⏭️ [QUERY] Respuesta descartada (ticket {} superado por {:?})",
                ticket.id,
                self.in_flight
            );
            return false;
        }

        self.in_flight = None;
        match result {
            Ok(list) => {
                self.data = Some(list);
                self.error = None;
            }
            Err(message) => {
                self.error = Some(message);
            }
        }
        true
    }

    /// Descarta la lista cacheada (tras crear una reserva)
    pub fn invalidate(&mut self) {
        self.data = None;
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn data(&self) -> &[Reservation] {
        self.data.as_deref().unwrap_or(&[])
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::mock_api::reservation;

    fn active_key() -> QueryKey {
        QueryKey { mode: ViewMode::Active, range: DateRangeDraft::default() }
    }

    fn past_key() -> QueryKey {
        QueryKey { mode: ViewMode::Past, range: DateRangeDraft::new("2024-01-01", "2024-01-31") }
    }

    #[test]
    fn latest_ticket_wins() {
        let mut query = ReservationQuery::new();
        let first = query.begin(past_key());
        let second = query.begin(active_key());

        assert!(query.resolve(&second, Ok(vec![reservation("active", "Lab")])));
        assert!(!query.resolve(&first, Ok(vec![reservation("old", "Lab")])));

        assert_eq!(query.data().len(), 1);
        assert_eq!(query.data()[0].reservation_id, "active");
    }

    #[test]
    fn slow_old_response_after_new_one_started_is_dropped() {
        let mut query = ReservationQuery::new();
        let first = query.begin(active_key());
        let _second = query.begin(past_key());

        assert!(!query.resolve(&first, Ok(vec![reservation("r1", "Lab")])));
        assert!(query.is_fetching());
        assert!(query.data().is_empty());
    }

    #[test]
    fn error_is_recorded_and_cleared_by_success() {
        let mut query = ReservationQuery::new();
        let ticket = query.begin(active_key());
        query.resolve(&ticket, Err("Error de red: offline".into()));
        assert_eq!(query.error(), Some("Error de red: offline"));
        assert!(!query.is_fetching());

        let ticket = query.begin(active_key());
        query.resolve(&ticket, Ok(Vec::new()));
        assert_eq!(query.error(), None);
    }

    #[test]
    fn invalidate_drops_cached_list() {
        let mut query = ReservationQuery::new();
        let ticket = query.begin(active_key());
        query.resolve(&ticket, Ok(vec![reservation("r1", "Lab")]));
        assert_eq!(query.data().len(), 1);

        query.invalidate();
        assert!(query.data().is_empty());
        assert!(!query.is_fetching());
    }
}
