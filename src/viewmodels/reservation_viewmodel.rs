// ============================================================================
// RESERVATION VIEWMODEL - Acciones de usuario → estado → red
// ============================================================================
// Las vistas solo llaman a estos métodos; el ViewModel aplica la transición,
// notifica el re-render y ejecuta el fetch/mutación que corresponda
// ============================================================================

use std::rc::Rc;
use crate::config::AppConfig;
use crate::models::{DraftError, DraftField, RangeField, Reservation};
use crate::services::{create_reservation, fetch_reservations, ApiClient, ApiError, ReservationApi};
use crate::state::app_state::{AppState, IncrementalUpdate, UpdateType};
use crate::state::view_state::Effect;

/// ViewModel usado por la app en el navegador
pub type AppViewModel = ReservationViewModel<ApiClient>;

pub struct ReservationViewModel<A: ReservationApi> {
    state: AppState,
    api: Rc<A>,
    config: Rc<AppConfig>,
}

impl<A: ReservationApi> Clone for ReservationViewModel<A> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            api: self.api.clone(),
            config: self.config.clone(),
        }
    }
}

impl<A: ReservationApi> ReservationViewModel<A> {
    pub fn new(state: AppState, api: A, config: AppConfig) -> Self {
        Self {
            state,
            api: Rc::new(api),
            config: Rc::new(config),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Carga inicial: solo se pide la lista en modo Activas
    pub async fn mount(&self) {
        if self.state.read(|s| s.view_mode.shows_active_list()) {
            self.refetch().await;
        }
    }

    /// Pide la lista del modo actual y aplica la respuesta si sigue vigente
    pub async fn refetch(&self) {
        let ticket = self.state.update(|s| {
            let key = s.query_key();
            s.query.begin(key)
        });
        log::info!("🔄 [VM] Fetch #{} ({:?})", ticket.id, ticket.key.mode);

        let result = fetch_reservations(&*self.api, ticket.key.mode, &ticket.key.range).await;
        if let Err(e) = &result {
            log::error!("❌ [VM] Error obteniendo reservas: {}", e);
        }

        let applied = self
            .state
            .update_silent(|s| s.query.resolve(&ticket, result.map_err(|e| e.user_message())));
        if applied {
            self.state.notify_subscribers();
        }
    }

    async fn run(&self, effect: Effect) {
        if effect == Effect::Refetch {
            self.refetch().await;
        }
    }

    pub fn open_add_modal(&self) {
        self.state.update(|s| s.open_add_modal());
    }

    pub fn close_add_modal(&self) {
        self.state.update(|s| s.close_add_modal());
    }

    /// Escritura en un input: sin re-render completo para no perder el foco
    pub fn update_draft_field(&self, field: DraftField, value: String) {
        self.state.update_silent(|s| s.update_draft_field(field, value));
        if field == DraftField::Hour {
            self.state
                .notify_subscribers_with_type(UpdateType::Incremental(IncrementalUpdate::HourHint));
        }
    }

    pub fn update_range_field(&self, field: RangeField, value: String) {
        self.state.update_silent(|s| s.update_range_field(field, value));
    }

    pub async fn toggle_view_mode(&self) {
        let effect = self.state.update(|s| s.toggle_view_mode());
        self.run(effect).await;
    }

    pub async fn submit_date_range(&self) -> Result<(), DraftError> {
        let effect = self.state.update(|s| s.submit_date_range())?;
        log::info!("📅 [VM] Rango de fechas aplicado");
        self.run(effect).await;
        Ok(())
    }

    pub fn cancel_date_range_modal(&self) {
        let effect = self.state.update(|s| s.cancel_date_range_modal());
        debug_assert_eq!(effect, Effect::None);
    }

    /// Envía el borrador. `Ok(None)` si ya había un envío en curso.
    pub async fn submit_new_reservation(&self) -> Result<Option<Reservation>, ApiError> {
        if !self.state.update(|s| s.begin_creation()) {
            log::warn!("⚠️ [VM] Envío ignorado: ya hay una reserva en curso");
            return Ok(None);
        }

        let draft = self.state.read(|s| s.draft.clone());
        match create_reservation(&*self.api, &draft, &self.config).await {
            Ok(created) => {
                log::info!("✅ [VM] Reserva creada: {}", created.reservation_id);
                let effect = self.state.update(|s| s.complete_creation());
                self.run(effect).await;
                Ok(Some(created))
            }
            Err(e) => {
                self.state.update(|s| s.fail_creation(e.user_message()));
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use futures::executor::block_on;
    use crate::models::{DateRangeDraft, NewReservationDraft, ViewMode};
    use crate::services::mock_api::{reservation, ApiCall, MockApi};
    use crate::views::reservation_table::row_cells;

    fn view_model(api: MockApi) -> ReservationViewModel<MockApi> {
        ReservationViewModel::new(AppState::new(), api, AppConfig::default())
    }

    fn fill_draft(vm: &ReservationViewModel<MockApi>, hour: &str) {
        let values = [
            (DraftField::StudentId, "s2"),
            (DraftField::Name, "Bo"),
            (DraftField::Email, "b@x.com"),
            (DraftField::Lab, "Laboratorio de Química"),
            (DraftField::Date, "2024-06-01"),
            (DraftField::Hour, hour),
        ];
        for (field, value) in values {
            vm.update_draft_field(field, value.to_string());
        }
    }

    #[test]
    fn mount_loads_active_list_into_one_row() {
        let api = MockApi::new();
        let mut r1 = reservation("r1", "Laboratorio de Física");
        r1.creation_timestamp = "...".into();
        *api.active.borrow_mut() = Ok(vec![r1]);
        let vm = view_model(api);

        block_on(vm.mount());

        let rows: Vec<_> = vm.state().read(|s| s.query.data().iter().map(row_cells).collect());
        assert_eq!(rows.len(), 1);
        assert_eq!(
            rows[0],
            ["2024-05-01", "9", "s1", "Ana", "a@x.com", "Laboratorio de Física", "active"]
                .map(String::from)
        );
        assert!(!vm.state().read(|s| s.query.is_fetching()));
    }

    #[test]
    fn cancelling_range_modal_issues_no_fetch() {
        let vm = view_model(MockApi::new());

        block_on(vm.toggle_view_mode());
        vm.cancel_date_range_modal();

        assert_eq!(vm.state().read(|s| s.view_mode), ViewMode::Active);
        assert!(vm.api.calls().is_empty());
    }

    #[test]
    fn incomplete_range_submission_issues_no_fetch() {
        let vm = view_model(MockApi::new());

        block_on(vm.toggle_view_mode());
        vm.update_range_field(RangeField::EndDate, "2024-01-31".into());
        let result = block_on(vm.submit_date_range());

        assert_eq!(result, Err(DraftError::IncompleteRange));
        assert!(vm.api.calls().is_empty());
        assert!(vm.state().read(|s| s.is_date_range_modal_open));
    }

    #[test]
    fn full_round_trip_between_modes() {
        let api = MockApi::new();
        *api.past.borrow_mut() = Ok(vec![reservation("old", "Laboratorio de Biología")]);
        let vm = view_model(api);

        block_on(vm.toggle_view_mode());
        vm.update_range_field(RangeField::StartDate, "2024-01-01".into());
        vm.update_range_field(RangeField::EndDate, "2024-01-31".into());
        block_on(vm.submit_date_range()).unwrap();

        assert_eq!(vm.state().read(|s| s.view_mode), ViewMode::Past);
        assert_eq!(vm.state().read(|s| s.query.data()[0].reservation_id.clone()), "old");

        block_on(vm.toggle_view_mode());

        assert_eq!(vm.state().read(|s| s.view_mode), ViewMode::Active);
        assert_eq!(
            vm.api.calls(),
            vec![
                ApiCall::Past(DateRangeDraft::new("2024-01-01", "2024-01-31")),
                ApiCall::Active,
            ]
        );
    }

    #[test]
    fn fetch_error_is_stored_for_the_banner() {
        let api = MockApi::new();
        *api.active.borrow_mut() = Err(ApiError::Network("offline".into()));
        let vm = view_model(api);

        block_on(vm.refetch());

        assert_eq!(
            vm.state().read(|s| s.query.error().map(str::to_string)),
            Some("Error de red: offline".to_string())
        );
    }

    #[test]
    fn successful_creation_closes_modal_and_refetches() {
        let vm = view_model(MockApi::new());
        vm.open_add_modal();
        fill_draft(&vm, "08:00");

        let created = block_on(vm.submit_new_reservation()).unwrap();

        assert!(created.is_some());
        assert!(!vm.state().read(|s| s.is_add_modal_open));
        assert_eq!(vm.state().read(|s| s.draft.clone()), NewReservationDraft::default());
        let calls = vm.api.calls();
        assert_eq!(calls.len(), 2);
        match &calls[0] {
            ApiCall::Create(submission) => assert_eq!(submission.hour, 8),
            other => panic!("unexpected call {:?}", other),
        }
        assert_eq!(calls[1], ApiCall::Active);
    }

    #[test]
    fn rejected_creation_keeps_modal_open() {
        let api = MockApi::new();
        *api.create.borrow_mut() = Err(ApiError::Http { status: 400, message: "lab unavailable".into() });
        let vm = view_model(api);
        vm.open_add_modal();
        fill_draft(&vm, "9");

        let err = block_on(vm.submit_new_reservation()).unwrap_err();

        assert_eq!(err.user_message(), "lab unavailable");
        vm.state().read(|s| {
            assert!(s.is_add_modal_open);
            assert_eq!(s.draft.name, "Bo");
            assert_eq!(s.mutation.error.as_deref(), Some("lab unavailable"));
        });
    }

    #[test]
    fn invalid_hour_is_rejected_before_network() {
        let vm = view_model(MockApi::new());
        vm.open_add_modal();
        fill_draft(&vm, "7");

        let err = block_on(vm.submit_new_reservation()).unwrap_err();

        assert!(matches!(err, ApiError::Validation(_)));
        assert!(vm.api.calls().is_empty());
        assert!(vm.state().read(|s| s.is_add_modal_open));
    }

    #[test]
    fn second_submit_while_pending_is_ignored() {
        let vm = view_model(MockApi::new());
        fill_draft(&vm, "9");
        assert!(vm.state().update_silent(|s| s.begin_creation()));

        let result = block_on(vm.submit_new_reservation()).unwrap();

        assert!(result.is_none());
        assert!(vm.api.calls().is_empty());
    }

    #[test]
    fn hour_input_triggers_incremental_hint_update() {
        let vm = view_model(MockApi::new());
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let seen = seen.clone();
            vm.state().subscribe_to_changes(move |update| seen.borrow_mut().push(update));
        }

        vm.update_draft_field(DraftField::Name, "Bo".into());
        vm.update_draft_field(DraftField::Hour, "25".into());

        assert_eq!(
            *seen.borrow(),
            vec![UpdateType::Incremental(IncrementalUpdate::HourHint)]
        );
        assert!(vm.state().read(|s| s.hour_hint_visible(vm.config())));
    }
}
