// ============================================================================
// RESERVATION TABLE VIEW - Tabla de reservas
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, ElementBuilder};
use crate::models::Reservation;
use crate::utils::i18n::t;

/// Claves de traducción de las columnas, en orden
pub const COLUMN_KEYS: [&str; 7] = [
    "col_fecha",
    "col_hora",
    "col_id_estudiante",
    "col_estudiante",
    "col_email",
    "col_laboratorio",
    "col_estado",
];

/// Celdas de una fila, en el orden de `COLUMN_KEYS`
pub fn row_cells(reservation: &Reservation) -> [String; 7] {
    [
        reservation.date.clone(),
        reservation.hour.clone(),
        reservation.student_id.clone(),
        reservation.name.clone(),
        reservation.email.clone(),
        reservation.lab.clone(),
        reservation.status.clone(),
    ]
}

pub fn render_reservation_table(reservations: &[Reservation], lang: &str) -> Result<Element, JsValue> {
    let wrapper = ElementBuilder::new("div")?
        .class("table-responsive")
        .build();

    let table = ElementBuilder::new("table")?
        .class("table table-striped")
        .build();

    let head_row = ElementBuilder::new("tr")?.build();
    for key in COLUMN_KEYS {
        let th = ElementBuilder::new("th")?
            .attr("scope", "col")?
            .text(&t(key, lang))
            .build();
        append_child(&head_row, &th)?;
    }
    let thead = ElementBuilder::new("thead")?.child(head_row)?.build();

    let tbody = ElementBuilder::new("tbody")?.build();
    for reservation in reservations {
        let row = ElementBuilder::new("tr")?
            .attr("data-reservation-id", &reservation.reservation_id)?
            .build();
        for cell in row_cells(reservation) {
            let td = ElementBuilder::new("td")?.text(&cell).build();
            append_child(&row, &td)?;
        }
        append_child(&tbody, &row)?;
    }

    append_child(&table, &thead)?;
    append_child(&table, &tbody)?;
    append_child(&wrapper, &table)?;

    Ok(wrapper)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::mock_api::reservation;
    use crate::utils::i18n::t;

    #[test]
    fn cells_follow_column_order() {
        let r = reservation("r1", "Laboratorio de Física");
        let cells = row_cells(&r);
        assert_eq!(cells[0], "2024-05-01");
        assert_eq!(cells[1], "9");
        assert_eq!(cells[2], "s1");
        assert_eq!(cells[3], "Ana");
        assert_eq!(cells[4], "a@x.com");
        assert_eq!(cells[5], "Laboratorio de Física");
        assert_eq!(cells[6], "active");
    }

    #[test]
    fn every_column_has_a_spanish_label() {
        let labels: Vec<String> = COLUMN_KEYS.iter().map(|key| t(key, "ES")).collect();
        assert_eq!(
            labels,
            ["Fecha", "Hora", "ID Estudiante", "Estudiante", "Email", "Laboratorio", "Estado"]
        );
    }
}
