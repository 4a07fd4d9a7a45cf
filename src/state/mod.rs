// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod query_state;
pub mod view_state;
pub mod app_state;

pub use query_state::*;
pub use view_state::*;
pub use app_state::*;
