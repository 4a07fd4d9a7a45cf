// ============================================================================
// APP - Aplicación principal
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use gloo_timers::callback::Timeout;
use crate::config::CONFIG;
use crate::dom::{append_child, get_element_by_id, set_inner_html};
use crate::dom::incremental::update_hour_hint;
use crate::services::ApiClient;
use crate::state::app_state::{AppState, IncrementalUpdate, UpdateType};
use crate::viewmodels::{AppViewModel, ReservationViewModel};
use crate::views::render_app;

pub struct App {
    vm: AppViewModel,
    root: Element,
}

impl App {
    /// Crear nueva aplicación montada en `#app`
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new();
        let vm = ReservationViewModel::new(state.clone(), ApiClient::new(), CONFIG.clone());

        // Varios cambios en el mismo tick → un solo re-render
        let render_scheduled = Rc::new(Cell::new(false));
        let state_for_updates = state.clone();
        state.subscribe_to_changes(move |update| match update {
            UpdateType::FullRender => {
                if render_scheduled.replace(true) {
                    return;
                }
                let render_scheduled = render_scheduled.clone();
                Timeout::new(0, move || {
                    render_scheduled.set(false);
                    crate::rerender_app();
                })
                .forget();
            }
            UpdateType::Incremental(IncrementalUpdate::HourHint) => {
                if let Err(e) = update_hour_hint(&state_for_updates, &CONFIG) {
                    log::warn!("⚠️ [APP] Error actualizando aviso de hora: {:?}", e);
                }
            }
        });

        log::info!("✅ [APP] Conectado a {}", CONFIG.api_base_url);
        Ok(Self { vm, root })
    }

    /// Re-render completo dentro de `#app`
    pub fn render(&self) -> Result<(), JsValue> {
        set_inner_html(&self.root, "");
        let view = render_app(&self.vm)?;
        append_child(&self.root, &view)
    }

    /// Primera carga de datos
    pub fn mount(&self) {
        let vm = self.vm.clone();
        wasm_bindgen_futures::spawn_local(async move {
            vm.mount().await;
        });
    }
}
