// ============================================================================
// EVENT HANDLING - Sistema de eventos
// ============================================================================
// Los listeners se registran sobre elementos que se destruyen en cada re-render
// completo (set_inner_html("")), así que closure.forget() no acumula listeners.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};
use crate::dom::field_name_and_value;

fn listen<F>(element: &Element, event_type: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    element.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    listen(element, "click", handler)
}

/// Submit de un `<form>`; el navegador ya validó `required`/`type`
pub fn on_submit<F>(form: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    listen(form, "submit", move |e: Event| {
        e.prevent_default();
        handler();
    })
}

/// Cada cambio de un campo del formulario entrega `(name, value)`.
/// Escucha `input` y `change` para cubrir `<select>` y `type="date"`.
pub fn on_field_change<F>(form: &Element, handler: F) -> Result<(), JsValue>
where
    F: Fn(String, String) + 'static,
{
    let handler = std::rc::Rc::new(handler);
    for event_type in ["input", "change"] {
        let handler = handler.clone();
        listen(form, event_type, move |e: Event| {
            let field = e
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .and_then(|element| field_name_and_value(&element));
            if let Some((name, value)) = field {
                handler(name, value);
            }
        })?;
    }
    Ok(())
}
