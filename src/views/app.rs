// ============================================================================
// APP VIEW - Pantalla principal (Rust puro)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, on_click, ElementBuilder};
use crate::models::ViewMode;
use crate::utils::i18n::{t, t_args};
use crate::viewmodels::AppViewModel;
use crate::views::{
    render_date_range_modal, render_navbar, render_new_reservation_modal, render_reservation_table,
};

/// Renderizar la aplicación completa según el estado actual
pub fn render_app(vm: &AppViewModel) -> Result<Element, JsValue> {
    let lang = vm.config().language.clone();
    let (mode, fetch_error, is_fetching, add_open, range_open) = vm.state().read(|s| {
        (
            s.view_mode,
            s.query.error().map(str::to_string),
            s.query.is_fetching(),
            s.is_add_modal_open,
            s.is_date_range_modal_open,
        )
    });

    // Un fetch fallido reemplaza toda la vista
    if let Some(message) = fetch_error {
        return Ok(ElementBuilder::new("div")?
            .class("alert alert-danger")
            .attr("role", "alert")?
            .text(&t_args("algo_salio_mal", &lang, &[message.as_str()]))
            .build());
    }

    let root = ElementBuilder::new("div")?
        .class("min-vh-100 d-flex flex-column")
        .build();

    append_child(&root, &render_navbar(vm, &lang)?)?;

    let main = ElementBuilder::new("div")?
        .class("container-fluid flex-grow-1 p-4 bg-light")
        .build();

    let title_key = if mode.is_past() { "titulo_pasadas" } else { "titulo_activas" };
    let title = ElementBuilder::new("h1")?
        .class("text-center mb-4")
        .text(&t(title_key, &lang))
        .build();
    append_child(&main, &title)?;

    if mode == ViewMode::Active {
        let add_btn = ElementBuilder::new("button")?
            .class("btn btn-primary me-auto mt-4 mb-4")
            .attr("type", "button")?
            .text(&t("agregar_reserva", &lang))
            .build();
        let vm_clone = vm.clone();
        on_click(&add_btn, move |_| vm_clone.open_add_modal())?;
        append_child(&main, &add_btn)?;
    }

    if is_fetching {
        let loading = ElementBuilder::new("div")?
            .class("text-center")
            .text(&t("cargando", &lang))
            .build();
        append_child(&main, &loading)?;
    } else {
        let reservations = vm.state().read(|s| s.query.data().to_vec());
        if reservations.is_empty() {
            log::debug!("ℹ️ [VIEW] Lista vacía ({:?})", mode);
        }
        append_child(&main, &render_reservation_table(&reservations, &lang)?)?;
    }

    append_child(&root, &main)?;

    if add_open {
        append_child(&root, &render_new_reservation_modal(vm, &lang)?)?;
    }
    if range_open {
        append_child(&root, &render_date_range_modal(vm, &lang)?)?;
    }

    let footer = ElementBuilder::new("footer")?
        .class("bg-body-tertiary text-center p-3")
        .child(ElementBuilder::new("p")?.class("mb-0").text(&t("pie", &lang)).build())?
        .build();
    append_child(&root, &footer)?;

    Ok(root)
}
