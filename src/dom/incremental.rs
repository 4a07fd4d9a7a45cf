// ============================================================================
// INCREMENTAL DOM UPDATES - Actualización incremental del DOM
// ============================================================================
// Solo toca elementos concretos; el formulario abierto no se re-renderiza
// mientras el usuario escribe
// ============================================================================

use wasm_bindgen::prelude::*;
use crate::config::AppConfig;
use crate::dom::{add_class, get_element_by_id, remove_class};
use crate::state::app_state::AppState;

pub const HOUR_HINT_ID: &str = "hour-hint";
pub const HOUR_INPUT_ID: &str = "reservation-hour";

/// Muestra u oculta el aviso de hora fuera de rango
pub fn update_hour_hint(state: &AppState, config: &AppConfig) -> Result<(), JsValue> {
    let visible = state.read(|s| s.hour_hint_visible(config));

    // El modal puede estar cerrado: no hay nada que actualizar
    let Some(hint) = get_element_by_id(HOUR_HINT_ID) else {
        return Ok(());
    };

    if visible {
        remove_class(&hint, "d-none")?;
    } else {
        add_class(&hint, "d-none")?;
    }

    if let Some(input) = get_element_by_id(HOUR_INPUT_ID) {
        if visible {
            add_class(&input, "is-invalid")?;
        } else {
            remove_class(&input, "is-invalid")?;
        }
    }

    Ok(())
}
