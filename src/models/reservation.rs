use serde::{Deserialize, Deserializer, Serialize};

/// Reserva tal como la devuelve el backend (solo lectura en el cliente).
/// Un campo ausente se muestra como celda vacía.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize, Debug)]
#[serde(default)]
pub struct Reservation {
    pub reservation_id: String,
    pub date: String,
    #[serde(deserialize_with = "string_or_number")]
    pub hour: String,
    pub status: String,
    pub student_id: String,
    pub name: String,
    pub email: String,
    pub lab: String,
    pub creation_timestamp: String,
}

/// Payload de POST /reservation
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct NewReservationSubmission {
    pub student_id: String,
    pub name: String,
    pub lab: String,
    pub date: String,
    pub hour: i32,
    pub email: String,
}

/// Respuesta de GET /reservations
#[derive(Debug, Deserialize)]
pub struct ActiveReservationsResponse {
    #[serde(default)]
    pub active_reservations: Vec<Reservation>,
}

/// Respuesta de GET /past-reservations
#[derive(Debug, Deserialize)]
pub struct PastReservationsResponse {
    #[serde(default)]
    pub reservations: Vec<Reservation>,
}

/// Cuerpo de error del backend (`{ "message": "..." }`)
#[derive(Debug, Default, Deserialize)]
pub struct ApiErrorBody {
    pub message: Option<String>,
}

// La reserva recién creada puede traer la hora como número
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "hour must be a string or a number, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_active_reservations_body() {
        let body = r#"{"active_reservations":[{"reservation_id":"r1","date":"2024-05-01","hour":"9","status":"active","student_id":"s1","name":"Ana","email":"a@x.com","lab":"Laboratorio de Física","creation_timestamp":"2024-04-30T10:00:00Z"}]}"#;
        let parsed: ActiveReservationsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.active_reservations.len(), 1);
        let r = &parsed.active_reservations[0];
        assert_eq!(r.reservation_id, "r1");
        assert_eq!(r.hour, "9");
        assert_eq!(r.lab, "Laboratorio de Física");
    }

    #[test]
    fn numeric_hour_is_kept_as_text() {
        let body = r#"{"reservation_id":"r9","date":"2024-06-01","hour":8,"status":"active","student_id":"s2","name":"Bo","email":"b@x.com","lab":"Laboratorio de Química","creation_timestamp":"t"}"#;
        let r: Reservation = serde_json::from_str(body).unwrap();
        assert_eq!(r.hour, "8");
    }

    #[test]
    fn record_with_missing_fields_still_parses() {
        let body = r#"{"active_reservations":[{"reservation_id":"r2","date":"2024-05-02","lab":"Laboratorio de Física"},{"reservation_id":"r3","hour":null}]}"#;
        let parsed: ActiveReservationsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.active_reservations.len(), 2);
        let r = &parsed.active_reservations[0];
        assert_eq!(r.email, "");
        assert_eq!(r.hour, "");
        assert_eq!(r.lab, "Laboratorio de Física");
        assert_eq!(parsed.active_reservations[1].hour, "");
    }

    #[test]
    fn missing_list_field_means_empty() {
        let parsed: PastReservationsResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.reservations.is_empty());
    }

    #[test]
    fn submission_serializes_hour_as_integer() {
        let submission = NewReservationSubmission {
            student_id: "s2".into(),
            name: "Bo".into(),
            lab: "Laboratorio de Química".into(),
            date: "2024-06-01".into(),
            hour: 8,
            email: "b@x.com".into(),
        };
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["hour"], serde_json::json!(8));
    }

    #[test]
    fn error_body_without_message() {
        let body: ApiErrorBody = serde_json::from_str(r#"{"error":"x"}"#).unwrap();
        assert!(body.message.is_none());
    }
}
