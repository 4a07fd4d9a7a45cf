// ============================================================================
// NEW RESERVATION MODAL - Formulario de nueva reserva
// ============================================================================
// Los inputs actualizan el borrador sin re-render; el aviso de hora se
// actualiza de forma incremental (ver dom::incremental)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, on_click, on_field_change, on_submit, ElementBuilder};
use crate::dom::incremental::{HOUR_HINT_ID, HOUR_INPUT_ID};
use crate::models::{DraftField, NewReservationDraft};
use crate::utils::i18n::{t, t_args};
use crate::viewmodels::AppViewModel;

pub fn render_new_reservation_modal(vm: &AppViewModel, lang: &str) -> Result<Element, JsValue> {
    let config = vm.config().clone();
    let (draft, pending, error, hint_visible) = vm.state().read(|s| {
        (
            s.draft.clone(),
            s.mutation.pending,
            s.mutation.error.clone(),
            s.hour_hint_visible(&config),
        )
    });
    let min_hour = config.min_hour.to_string();
    let max_hour = config.max_hour.to_string();

    let on_cancel = {
        let vm = vm.clone();
        move |_: web_sys::Event| vm.close_add_modal()
    };

    // Header
    let close_btn = ElementBuilder::new("button")?
        .class("btn-close")
        .attr("type", "button")?
        .attr("aria-label", &t("cancelar", lang))?
        .build();
    on_click(&close_btn, on_cancel.clone())?;

    let header = ElementBuilder::new("div")?
        .class("modal-header")
        .child(ElementBuilder::new("h5")?.class("modal-title").text(&t("nueva_reserva", lang)).build())?
        .child(close_btn)?
        .build();

    // Formulario
    let form = ElementBuilder::new("form")?.build();
    append_child(&form, &text_group(&draft, DraftField::StudentId, "text", &t("id_estudiante", lang))?)?;
    append_child(&form, &text_group(&draft, DraftField::Name, "text", &t("nombre", lang))?)?;
    append_child(&form, &text_group(&draft, DraftField::Email, "email", &t("email", lang))?)?;
    append_child(&form, &lab_group(&draft, &config.available_labs, lang)?)?;
    append_child(&form, &text_group(&draft, DraftField::Date, "date", &t("fecha", lang))?)?;

    // Hora: input numérico + aviso
    let hour_input = ElementBuilder::new("input")?
        .class(if hint_visible { "form-control is-invalid" } else { "form-control" })
        .id(HOUR_INPUT_ID)?
        .attr("type", "number")?
        .attr("name", DraftField::Hour.name())?
        .attr("min", &min_hour)?
        .attr("max", &max_hour)?
        .attr("value", &draft.hour)?
        .flag("required", true)?
        .build();
    let hour_hint = ElementBuilder::new("div")?
        .class(if hint_visible { "form-text text-danger" } else { "form-text text-danger d-none" })
        .id(HOUR_HINT_ID)?
        .text(&t_args("hora_fuera_rango", lang, &[min_hour.as_str(), max_hour.as_str()]))
        .build();
    let hour_group = ElementBuilder::new("div")?
        .class("mb-3")
        .child(label(&t_args("hora_rango", lang, &[min_hour.as_str(), max_hour.as_str()]))?)?
        .child(hour_input)?
        .child(hour_hint)?
        .build();
    append_child(&form, &hour_group)?;

    if let Some(message) = error {
        let alert = ElementBuilder::new("div")?
            .class("alert alert-danger")
            .attr("role", "alert")?
            .text(&message)
            .build();
        append_child(&form, &alert)?;
    }

    // Footer
    let cancel_btn = ElementBuilder::new("button")?
        .class("btn btn-secondary")
        .attr("type", "button")?
        .text(&t("cancelar", lang))
        .build();
    on_click(&cancel_btn, on_cancel)?;

    let submit_btn = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .attr("type", "submit")?
        .flag("disabled", pending)?
        .text(&t(if pending { "guardando" } else { "guardar_reserva" }, lang))
        .build();

    let footer = ElementBuilder::new("div")?
        .class("modal-footer")
        .child(cancel_btn)?
        .child(submit_btn)?
        .build();
    append_child(&form, &footer)?;

    {
        let vm = vm.clone();
        on_field_change(&form, move |name, value| {
            if let Some(field) = DraftField::from_name(&name) {
                vm.update_draft_field(field, value);
            }
        })?;
    }
    {
        let vm = vm.clone();
        on_submit(&form, move || {
            let vm = vm.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = vm.submit_new_reservation().await {
                    log::warn!("⚠️ [VIEW] Reserva no creada: {}", e);
                }
            });
        })?;
    }

    let body = ElementBuilder::new("div")?.class("modal-body").child(form)?.build();

    wrap_modal("new-reservation-modal", header, body)
}

fn label(text: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("label")?.class("form-label").text(text).build())
}

fn text_group(
    draft: &NewReservationDraft,
    field: DraftField,
    input_type: &str,
    label_text: &str,
) -> Result<Element, JsValue> {
    let input = ElementBuilder::new("input")?
        .class("form-control")
        .attr("type", input_type)?
        .attr("name", field.name())?
        .attr("value", draft.get(field))?
        .flag("required", true)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("mb-3")
        .child(label(label_text)?)?
        .child(input)?
        .build())
}

fn lab_group(draft: &NewReservationDraft, labs: &[String], lang: &str) -> Result<Element, JsValue> {
    let select = ElementBuilder::new("select")?
        .class("form-select")
        .attr("name", DraftField::Lab.name())?
        .flag("required", true)?
        .build();

    let placeholder = ElementBuilder::new("option")?
        .attr("value", "")?
        .flag("selected", draft.lab.is_empty())?
        .text(&t("seleccionar_laboratorio", lang))
        .build();
    append_child(&select, &placeholder)?;

    for lab in labs {
        let option = ElementBuilder::new("option")?
            .attr("value", lab)?
            .flag("selected", &draft.lab == lab)?
            .text(lab)
            .build();
        append_child(&select, &option)?;
    }

    Ok(ElementBuilder::new("div")?
        .class("mb-3")
        .child(label(&t("laboratorio", lang))?)?
        .child(select)?
        .build())
}

/// Contenedor común de modal (fondo + diálogo)
pub(crate) fn wrap_modal(id: &str, header: Element, body: Element) -> Result<Element, JsValue> {
    let content = ElementBuilder::new("div")?
        .class("modal-content")
        .child(header)?
        .child(body)?
        .build();
    let dialog = ElementBuilder::new("div")?
        .class("modal-dialog")
        .child(content)?
        .build();
    let modal = ElementBuilder::new("div")?
        .id(id)?
        .class("modal d-block")
        .attr("tabindex", "-1")?
        .attr("role", "dialog")?
        .child(dialog)?
        .build();

    let root = ElementBuilder::new("div")?
        .child(modal)?
        .child(ElementBuilder::new("div")?.class("modal-backdrop show").build())?
        .build();
    Ok(root)
}
