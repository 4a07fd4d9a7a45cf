// ============================================================================
// DRAFTS - Datos de formulario aún no enviados
// ============================================================================

use std::fmt;
use serde::{Deserialize, Serialize};
use crate::config::AppConfig;
use crate::models::reservation::NewReservationSubmission;

/// Campo editable del formulario de nueva reserva
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    StudentId,
    Name,
    Email,
    Lab,
    Date,
    Hour,
}

impl DraftField {
    pub const ALL: [DraftField; 6] = [
        DraftField::StudentId,
        DraftField::Name,
        DraftField::Email,
        DraftField::Lab,
        DraftField::Date,
        DraftField::Hour,
    ];

    /// Atributo `name` del input en el DOM
    pub fn name(&self) -> &'static str {
        match self {
            DraftField::StudentId => "student_id",
            DraftField::Name => "name",
            DraftField::Email => "email",
            DraftField::Lab => "lab",
            DraftField::Date => "date",
            DraftField::Hour => "hour",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|field| field.name() == name)
    }
}

/// Borrador de nueva reserva. `hour` guarda el texto tal cual se escribió.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewReservationDraft {
    pub student_id: String,
    pub name: String,
    pub email: String,
    pub lab: String,
    pub date: String,
    pub hour: String,
}

impl NewReservationDraft {
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::StudentId => &self.student_id,
            DraftField::Name => &self.name,
            DraftField::Email => &self.email,
            DraftField::Lab => &self.lab,
            DraftField::Date => &self.date,
            DraftField::Hour => &self.hour,
        }
    }

    /// Reemplaza un solo campo, el resto queda igual
    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::StudentId => self.student_id = value,
            DraftField::Name => self.name = value,
            DraftField::Email => self.email = value,
            DraftField::Lab => self.lab = value,
            DraftField::Date => self.date = value,
            DraftField::Hour => self.hour = value,
        }
    }

    /// Hora parseada; `None` si el campo está vacío o no empieza con dígitos
    pub fn parsed_hour(&self) -> Option<i32> {
        parse_hour(&self.hour)
    }

    /// `true` cuando hay una hora escrita que cae fuera del rango permitido
    pub fn hour_out_of_range(&self, config: &AppConfig) -> bool {
        match self.parsed_hour() {
            Some(hour) => !config.hour_in_range(hour),
            None => !self.hour.trim().is_empty(),
        }
    }

    /// Convierte el borrador en el payload del POST, validando antes de tocar la red
    pub fn to_submission(&self, config: &AppConfig) -> Result<NewReservationSubmission, DraftError> {
        for field in DraftField::ALL {
            if self.get(field).is_empty() {
                return Err(DraftError::MissingField(field));
            }
        }

        if !self.email.contains('@') {
            return Err(DraftError::InvalidEmail(self.email.clone()));
        }

        if !config.is_valid_lab(&self.lab) {
            return Err(DraftError::UnknownLab(self.lab.clone()));
        }

        let hour = self
            .parsed_hour()
            .ok_or_else(|| DraftError::InvalidHour(self.hour.clone()))?;
        if !config.hour_in_range(hour) {
            return Err(DraftError::HourOutOfRange {
                hour,
                min: config.min_hour,
                max: config.max_hour,
            });
        }

        // El resto del borrador viaja tal cual; solo `hour` cambia de tipo
        Ok(NewReservationSubmission {
            student_id: self.student_id.clone(),
            name: self.name.clone(),
            lab: self.lab.clone(),
            date: self.date.clone(),
            hour,
            email: self.email.clone(),
        })
    }
}

/// Solo cuenta la parte `HH` de un valor `HH:MM`; admite dígitos iniciales
/// seguidos de basura ("9h" → 9)
fn parse_hour(raw: &str) -> Option<i32> {
    let head = raw.split(':').next().unwrap_or("").trim();
    let (sign, digits) = match head.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, head.strip_prefix('+').unwrap_or(head)),
    };
    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    digits[..end].parse::<i32>().ok().map(|hour| sign * hour)
}

/// Campo del formulario de rango de fechas
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RangeField {
    StartDate,
    EndDate,
}

impl RangeField {
    pub fn name(&self) -> &'static str {
        match self {
            RangeField::StartDate => "startDate",
            RangeField::EndDate => "endDate",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "startDate" => Some(RangeField::StartDate),
            "endDate" => Some(RangeField::EndDate),
            _ => None,
        }
    }
}

/// Rango de fechas para la consulta de reservas pasadas.
/// No se valida el orden: un inicio posterior al fin se envía tal cual.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRangeDraft {
    pub start_date: String,
    pub end_date: String,
}

impl DateRangeDraft {
    pub fn new(start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        Self {
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }

    pub fn set(&mut self, field: RangeField, value: impl Into<String>) {
        match field {
            RangeField::StartDate => self.start_date = value.into(),
            RangeField::EndDate => self.end_date = value.into(),
        }
    }

    pub fn get(&self, field: RangeField) -> &str {
        match field {
            RangeField::StartDate => &self.start_date,
            RangeField::EndDate => &self.end_date,
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.start_date.trim().is_empty() && !self.end_date.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.start_date.clear();
        self.end_date.clear();
    }
}

/// Rechazo de un formulario antes de llamar al backend
#[derive(Debug, Clone, PartialEq)]
pub enum DraftError {
    MissingField(DraftField),
    InvalidEmail(String),
    UnknownLab(String),
    InvalidHour(String),
    HourOutOfRange { hour: i32, min: u8, max: u8 },
    IncompleteRange,
}

impl fmt::Display for DraftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DraftError::MissingField(field) => write!(f, "El campo {} es obligatorio", field.name()),
            DraftError::InvalidEmail(email) => write!(f, "Email inválido: {}", email),
            DraftError::UnknownLab(lab) => write!(f, "Laboratorio desconocido: {}", lab),
            DraftError::InvalidHour(raw) => write!(f, "Hora inválida: {}", raw),
            DraftError::HourOutOfRange { min, max, .. } => {
                write!(f, "La hora debe estar entre {} y {}.", min, max)
            }
            DraftError::IncompleteRange => write!(f, "Debe indicar fecha de inicio y fecha de fin"),
        }
    }
}

impl std::error::Error for DraftError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_draft(hour: &str) -> NewReservationDraft {
        NewReservationDraft {
            student_id: "s2".into(),
            name: "Bo".into(),
            email: "b@x.com".into(),
            lab: "Laboratorio de Química".into(),
            date: "2024-06-01".into(),
            hour: hour.into(),
        }
    }

    #[test]
    fn set_only_touches_one_field() {
        let mut draft = filled_draft("9");
        draft.set(DraftField::Name, "Carla");
        assert_eq!(draft.name, "Carla");
        assert_eq!(draft.student_id, "s2");
        assert_eq!(draft.hour, "9");
    }

    #[test]
    fn hh_mm_hour_is_coerced_to_integer() {
        let submission = filled_draft("08:00").to_submission(&AppConfig::default()).unwrap();
        assert_eq!(submission.hour, 8);
        assert_eq!(submission.lab, "Laboratorio de Química");
    }

    #[test]
    fn hours_outside_range_are_rejected() {
        let config = AppConfig::default();
        for hour in ["7", "22", "0", "-3", "23:30"] {
            let err = filled_draft(hour).to_submission(&config).unwrap_err();
            assert!(matches!(err, DraftError::HourOutOfRange { .. }), "hour {hour}");
        }
        for hour in ["8", "21", "21:59", "13"] {
            assert!(filled_draft(hour).to_submission(&config).is_ok(), "hour {hour}");
        }
    }

    #[test]
    fn text_fields_are_sent_verbatim() {
        let mut draft = filled_draft("9");
        draft.name = " Bo ".into();
        draft.student_id = "   ".into();

        let submission = draft.to_submission(&AppConfig::default()).unwrap();

        assert_eq!(submission.name, draft.name);
        assert_eq!(submission.student_id, "   ");
        assert_eq!(submission.email, draft.email);
    }

    #[test]
    fn non_numeric_hour_is_invalid() {
        let err = filled_draft("tarde").to_submission(&AppConfig::default()).unwrap_err();
        assert_eq!(err, DraftError::InvalidHour("tarde".into()));
    }

    #[test]
    fn leading_digits_are_enough() {
        assert_eq!(parse_hour("9h"), Some(9));
        assert_eq!(parse_hour(" 10 "), Some(10));
        assert_eq!(parse_hour(""), None);
    }

    #[test]
    fn missing_and_unknown_values_are_rejected() {
        let config = AppConfig::default();
        let mut draft = filled_draft("9");
        draft.student_id.clear();
        assert_eq!(
            draft.to_submission(&config).unwrap_err(),
            DraftError::MissingField(DraftField::StudentId)
        );

        let mut draft = filled_draft("9");
        draft.lab = "Laboratorio de Música".into();
        assert!(matches!(draft.to_submission(&config), Err(DraftError::UnknownLab(_))));

        let mut draft = filled_draft("9");
        draft.email = "sin-arroba".into();
        assert!(matches!(draft.to_submission(&config), Err(DraftError::InvalidEmail(_))));
    }

    #[test]
    fn hour_hint_only_for_typed_values() {
        let config = AppConfig::default();
        assert!(!filled_draft("").hour_out_of_range(&config));
        assert!(filled_draft("25").hour_out_of_range(&config));
        assert!(!filled_draft("10").hour_out_of_range(&config));
    }

    #[test]
    fn range_completeness() {
        let mut range = DateRangeDraft::default();
        assert!(!range.is_complete());
        range.set(RangeField::StartDate, "2024-01-01");
        assert!(!range.is_complete());
        range.set(RangeField::EndDate, "2024-01-31");
        assert!(range.is_complete());
        range.clear();
        assert_eq!(range, DateRangeDraft::default());
    }

    #[test]
    fn field_names_round_trip() {
        for field in DraftField::ALL {
            assert_eq!(DraftField::from_name(field.name()), Some(field));
        }
        assert_eq!(RangeField::from_name("endDate"), Some(RangeField::EndDate));
        assert_eq!(RangeField::from_name("other"), None);
    }
}
