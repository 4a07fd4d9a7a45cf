// ============================================================================
// RESERVAS LAB - CLIENTE DE RESERVAS DE LABORATORIO (RUST PURO + WASM)
// ============================================================================
// Arquitectura MVVM:
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Acciones de usuario + orquestación de red
// - Services: SOLO comunicación API
// - State: Estado de pantalla con Rc<RefCell> + transiciones
// - Models: Estructuras compartidas con backend
// ============================================================================

pub mod config;
pub mod models;
pub mod services;
pub mod state;
pub mod viewmodels;
pub mod utils;
mod dom;
mod views;
mod app;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use crate::app::App;
use crate::config::CONFIG;

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let level = if CONFIG.is_logging_enabled() {
        log::Level::Debug
    } else {
        log::Level::Warn
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("🚀 ReservasLab - Rust Puro + MVVM ({})", CONFIG.environment);

    let app = App::new()?;
    app.render()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    // La carga inicial va después de guardar la app para que el re-render la encuentre
    APP.with(|app_cell| {
        if let Some(app) = app_cell.borrow().as_ref() {
            app.mount();
        }
    });

    Ok(())
}

/// Re-render completo de la app
pub fn rerender_app() {
    APP.with(|app_cell| {
        if let Some(app) = app_cell.borrow().as_ref() {
            if let Err(e) = app.render() {
                log::error!("❌ [RERENDER] Error re-renderizando: {:?}", e);
            }
        } else {
            log::warn!("⚠️ [RERENDER] App no está inicializada");
        }
    });
}
