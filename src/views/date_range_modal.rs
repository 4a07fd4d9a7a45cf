// ============================================================================
// DATE RANGE MODAL - Rango de fechas para reservas pasadas
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, on_click, on_field_change, on_submit, ElementBuilder};
use crate::models::{DateRangeDraft, RangeField};
use crate::utils::i18n::t;
use crate::viewmodels::AppViewModel;
use crate::views::new_reservation_modal::wrap_modal;

pub fn render_date_range_modal(vm: &AppViewModel, lang: &str) -> Result<Element, JsValue> {
    let range = vm.state().read(|s| s.range.clone());

    let on_cancel = {
        let vm = vm.clone();
        move |_: web_sys::Event| vm.cancel_date_range_modal()
    };

    let close_btn = ElementBuilder::new("button")?
        .class("btn-close")
        .attr("type", "button")?
        .attr("aria-label", &t("cancelar", lang))?
        .build();
    on_click(&close_btn, on_cancel.clone())?;

    let header = ElementBuilder::new("div")?
        .class("modal-header")
        .child(ElementBuilder::new("h5")?.class("modal-title").text(&t("seleccionar_rango", lang)).build())?
        .child(close_btn)?
        .build();

    let form = ElementBuilder::new("form")?.build();
    append_child(&form, &date_group(&range, RangeField::StartDate, &t("fecha_inicio", lang))?)?;
    append_child(&form, &date_group(&range, RangeField::EndDate, &t("fecha_fin", lang))?)?;

    let cancel_btn = ElementBuilder::new("button")?
        .class("btn btn-secondary")
        .attr("type", "button")?
        .text(&t("cancelar", lang))
        .build();
    on_click(&cancel_btn, on_cancel)?;

    let apply_btn = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .attr("type", "submit")?
        .text(&t("aplicar", lang))
        .build();

    let footer = ElementBuilder::new("div")?
        .class("modal-footer")
        .child(cancel_btn)?
        .child(apply_btn)?
        .build();
    append_child(&form, &footer)?;

    {
        let vm = vm.clone();
        on_field_change(&form, move |name, value| {
            if let Some(field) = RangeField::from_name(&name) {
                vm.update_range_field(field, value);
            }
        })?;
    }
    {
        let vm = vm.clone();
        on_submit(&form, move || {
            let vm = vm.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = vm.submit_date_range().await {
                    log::warn!("⚠️ [VIEW] Rango no aplicado: {}", e);
                }
            });
        })?;
    }

    let body = ElementBuilder::new("div")?.class("modal-body").child(form)?.build();

    wrap_modal("date-range-modal", header, body)
}

fn date_group(range: &DateRangeDraft, field: RangeField, label_text: &str) -> Result<Element, JsValue> {
    let input = ElementBuilder::new("input")?
        .class("form-control")
        .attr("type", "date")?
        .attr("name", field.name())?
        .attr("value", range.get(field))?
        .flag("required", true)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("mb-3")
        .child(ElementBuilder::new("label")?.class("form-label").text(label_text).build())?
        .child(input)?
        .build())
}
