// ============================================================================
// NAVBAR VIEW - Marca + botón Activas/Pasadas
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{on_click, ElementBuilder};
use crate::models::ViewMode;
use crate::utils::i18n::t;
use crate::viewmodels::AppViewModel;

/// Etiqueta del botón: ofrece cambiar a la otra lista
pub fn toggle_label_key(mode: ViewMode) -> &'static str {
    if mode.is_past() {
        "ver_activas"
    } else {
        "ver_pasadas"
    }
}

pub fn render_navbar(vm: &AppViewModel, lang: &str) -> Result<Element, JsValue> {
    let mode = vm.state().read(|s| s.view_mode);

    let brand = ElementBuilder::new("a")?
        .class("navbar-brand")
        .attr("href", "#")?
        .text(&t("marca", lang))
        .build();

    let toggle_btn = ElementBuilder::new("button")?
        .class("btn btn-success")
        .attr("type", "button")?
        .text(&t(toggle_label_key(mode), lang))
        .build();

    {
        let vm = vm.clone();
        on_click(&toggle_btn, move |_| {
            let vm = vm.clone();
            wasm_bindgen_futures::spawn_local(async move {
                vm.toggle_view_mode().await;
            });
        })?;
    }

    let container = ElementBuilder::new("div")?
        .class("container-fluid")
        .child(brand)?
        .child(toggle_btn)?
        .build();

    let nav = ElementBuilder::new("nav")?
        .class("navbar navbar-expand-lg bg-body-tertiary")
        .child(container)?
        .build();

    Ok(nav)
}
