use serde::{Deserialize, Serialize};

/// Qué conjunto de reservas se muestra.
///
/// `AwaitingRange` es el paso intermedio del cambio Activas → Pasadas: el modal
/// de rango de fechas está abierto y la pantalla sigue mostrando las activas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewMode {
    #[default]
    Active,
    AwaitingRange,
    Past,
}

impl ViewMode {
    /// La lista visible es la de reservas activas
    pub fn shows_active_list(&self) -> bool {
        !matches!(self, ViewMode::Past)
    }

    pub fn is_past(&self) -> bool {
        matches!(self, ViewMode::Past)
    }
}
