// ============================================================================
// MÓDULO DE INTERNACIONALIZACIÓN
// ============================================================================

use std::collections::HashMap;

/// Obtener diccionario de traducciones para un idioma (ES por defecto)
fn get_translations(lang: &str) -> HashMap<&'static str, &'static str> {
    let mut translations = HashMap::new();
    let lang_upper = lang.to_uppercase();

    match lang_upper.as_str() {
        "EN" => {
            // Navbar / página
            translations.insert("marca", "ReservasLab");
            translations.insert("ver_pasadas", "Past Reservations");
            translations.insert("ver_activas", "Active Reservations");
            translations.insert("titulo_activas", "Lab Reservations");
            translations.insert("titulo_pasadas", "Past Reservations");
            translations.insert("agregar_reserva", "Add Reservation");
            translations.insert("cargando", "Loading...");
            translations.insert("algo_salio_mal", "Something went wrong: {}");
            translations.insert("pie", "© 2023 ReservasLab. All rights reserved.");

            // Tabla
            translations.insert("col_fecha", "Date");
            translations.insert("col_hora", "Hour");
            translations.insert("col_id_estudiante", "Student ID");
            translations.insert("col_estudiante", "Student");
            translations.insert("col_email", "Email");
            translations.insert("col_laboratorio", "Lab");
            translations.insert("col_estado", "Status");

            // Modal nueva reserva
            translations.insert("nueva_reserva", "New Reservation");
            translations.insert("id_estudiante", "Student ID");
            translations.insert("nombre", "Name");
            translations.insert("email", "Email");
            translations.insert("laboratorio", "Lab");
            translations.insert("seleccionar_laboratorio", "Select a lab");
            translations.insert("fecha", "Date");
            translations.insert("hora_rango", "Hour ({}-{})");
            translations.insert("hora_fuera_rango", "The hour must be between {} and {}.");
            translations.insert("cancelar", "Cancel");
            translations.insert("guardar_reserva", "Save Reservation");
            translations.insert("guardando", "Saving...");

            // Modal rango de fechas
            translations.insert("seleccionar_rango", "Select Date Range");
            translations.insert("fecha_inicio", "Start Date");
            translations.insert("fecha_fin", "End Date");
            translations.insert("aplicar", "Apply");
        }
        _ => {
            // Navbar / página
            translations.insert("marca", "ReservasLab");
            translations.insert("ver_pasadas", "Reservas Pasadas");
            translations.insert("ver_activas", "Reservas Activas");
            translations.insert("titulo_activas", "Reservas de Laboratorio");
            translations.insert("titulo_pasadas", "Reservas Pasadas");
            translations.insert("agregar_reserva", "Agregar Reserva");
            translations.insert("cargando", "Cargando...");
            translations.insert("algo_salio_mal", "Algo salió mal: {}");
            translations.insert("pie", "© 2023 ReservasLab. Todos los derechos reservados.");

            // Tabla
            translations.insert("col_fecha", "Fecha");
            translations.insert("col_hora", "Hora");
            translations.insert("col_id_estudiante", "ID Estudiante");
            translations.insert("col_estudiante", "Estudiante");
            translations.insert("col_email", "Email");
            translations.insert("col_laboratorio", "Laboratorio");
            translations.insert("col_estado", "Estado");

            // Modal nueva reserva
            translations.insert("nueva_reserva", "Nueva Reserva");
            translations.insert("id_estudiante", "ID de Estudiante");
            translations.insert("nombre", "Nombre");
            translations.insert("email", "Email");
            translations.insert("laboratorio", "Laboratorio");
            translations.insert("seleccionar_laboratorio", "Seleccionar laboratorio");
            translations.insert("fecha", "Fecha");
            translations.insert("hora_rango", "Hora ({}-{})");
            translations.insert("hora_fuera_rango", "La hora debe estar entre {} y {}.");
            translations.insert("cancelar", "Cancelar");
            translations.insert("guardar_reserva", "Guardar Reserva");
            translations.insert("guardando", "Guardando...");

            // Modal rango de fechas
            translations.insert("seleccionar_rango", "Seleccionar Rango de Fechas");
            translations.insert("fecha_inicio", "Fecha de Inicio");
            translations.insert("fecha_fin", "Fecha de Fin");
            translations.insert("aplicar", "Aplicar");
        }
    }

    translations
}

/// Función de traducción
///
/// Devuelve la clave si no hay traducción
pub fn t(key: &str, lang: &str) -> String {
    let translations = get_translations(lang);

    if let Some(translation) = translations.get(key) {
        return translation.to_string();
    }

    key.to_string()
}

/// Traducción con argumentos: cada `{}` se reemplaza en orden
pub fn t_args(key: &str, lang: &str, args: &[&str]) -> String {
    let template = t(key, lang);
    let mut out = String::with_capacity(template.len());
    let mut rest = template.as_str();
    let mut args = args.iter();

    while let Some(pos) = rest.find("{}") {
        out.push_str(&rest[..pos]);
        match args.next() {
            Some(arg) => out.push_str(arg),
            None => out.push_str("{}"),
        }
        rest = &rest[pos + 2..];
    }
    out.push_str(rest);
    out
}
