// ============================================================================
// VIEW STATE - Estado de pantalla y sus transiciones
// ============================================================================
// Las transiciones no hacen I/O: devuelven un `Effect` que el ViewModel ejecuta
// ============================================================================

use crate::models::{
    DateRangeDraft, DraftError, DraftField, NewReservationDraft, RangeField, ViewMode,
};
use crate::state::query_state::{QueryKey, ReservationQuery};

/// Trabajo pendiente que deja una transición
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    Refetch,
}

/// Estado de la mutación "crear reserva"
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MutationState {
    pub pending: bool,
    pub error: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct ViewState {
    pub view_mode: ViewMode,
    pub draft: NewReservationDraft,
    pub range: DateRangeDraft,
    pub is_add_modal_open: bool,
    pub is_date_range_modal_open: bool,
    pub query: ReservationQuery,
    pub mutation: MutationState,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clave de la consulta que corresponde al estado actual
    pub fn query_key(&self) -> QueryKey {
        QueryKey {
            mode: self.view_mode,
            range: self.range.clone(),
        }
    }

    pub fn open_add_modal(&mut self) {
        self.is_add_modal_open = true;
        self.mutation.error = None;
    }

    /// Cancelar: se cierra el modal y se descarta el borrador
    pub fn close_add_modal(&mut self) {
        self.is_add_modal_open = false;
        self.draft = NewReservationDraft::default();
        self.mutation.error = None;
    }

    pub fn update_draft_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    pub fn update_range_field(&mut self, field: RangeField, value: impl Into<String>) {
        self.range.set(field, value);
    }

    /// Activas → AwaitingRange abre el modal de fechas sin cambiar la lista.
    /// Pasadas → Activas limpia el rango y pide recargar.
    pub fn toggle_view_mode(&mut self) -> Effect {
        match self.view_mode {
            ViewMode::Active => {
                self.view_mode = ViewMode::AwaitingRange;
                self.is_date_range_modal_open = true;
                Effect::None
            }
            ViewMode::AwaitingRange => Effect::None,
            ViewMode::Past => {
                self.range.clear();
                self.view_mode = ViewMode::Active;
                Effect::Refetch
            }
        }
    }

    /// Confirma el rango. Con algún campo vacío no cambia nada.
    pub fn submit_date_range(&mut self) -> Result<Effect, DraftError> {
        if !self.range.is_complete() {
            return Err(DraftError::IncompleteRange);
        }
        self.is_date_range_modal_open = false;
        self.view_mode = ViewMode::Past;
        Ok(Effect::Refetch)
    }

    /// Deshace el intento de cambio a Pasadas sin pedir datos
    pub fn cancel_date_range_modal(&mut self) -> Effect {
        self.is_date_range_modal_open = false;
        self.range.clear();
        self.view_mode = ViewMode::Active;
        Effect::None
    }

    /// Marca la mutación como en curso. `false` si ya había una.
    pub fn begin_creation(&mut self) -> bool {
        if self.mutation.pending {
            return false;
        }
        self.mutation.pending = true;
        self.mutation.error = None;
        true
    }

    pub fn complete_creation(&mut self) -> Effect {
        self.mutation = MutationState::default();
        self.query.invalidate();
        self.is_add_modal_open = false;
        self.draft = NewReservationDraft::default();
        Effect::Refetch
    }

    /// El modal sigue abierto y el borrador intacto para reintentar
    pub fn fail_creation(&mut self, message: String) {
        self.mutation.pending = false;
        self.mutation.error = Some(message);
    }

    pub fn hour_hint_visible(&self, config: &crate::config::AppConfig) -> bool {
        self.draft.hour_out_of_range(config)
    }
}
