// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::state::view_state::ViewState;

/// Tipo de actualización del DOM
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateType {
    /// Actualización incremental (solo elementos específicos)
    Incremental(IncrementalUpdate),
    /// Re-render completo
    FullRender,
}

/// Tipo de actualización incremental específica
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IncrementalUpdate {
    /// Aviso "La hora debe estar entre ..." del formulario de reserva
    HourHint,
}

/// Handle compartido al estado de pantalla. Clonarlo comparte el mismo estado.
#[derive(Clone, Default)]
pub struct AppState {
    view: Rc<RefCell<ViewState>>,
    change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn(UpdateType)>>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lectura del estado
    pub fn read<R>(&self, reader: impl FnOnce(&ViewState) -> R) -> R {
        reader(&self.view.borrow())
    }

    /// Modifica el estado sin notificar (inputs que no necesitan re-render)
    pub fn update_silent<R>(&self, updater: impl FnOnce(&mut ViewState) -> R) -> R {
        updater(&mut self.view.borrow_mut())
    }

    /// Modifica el estado y pide re-render completo
    pub fn update<R>(&self, updater: impl FnOnce(&mut ViewState) -> R) -> R {
        let result = self.update_silent(updater);
        self.notify_subscribers_with_type(UpdateType::FullRender);
        result
    }

    /// Suscribirse a cambios de estado
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn(UpdateType) + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    pub fn notify_subscribers(&self) {
        self.notify_subscribers_with_type(UpdateType::FullRender);
    }

    pub fn notify_subscribers_with_type(&self, update_type: UpdateType) {
        // Copia para que un callback pueda suscribir sin pánico de RefCell
        let subscribers: Vec<_> = self.change_subscribers.borrow().iter().cloned().collect();
        for callback in subscribers {
            callback(update_type);
        }
    }
}
