pub mod app;
pub mod navbar;
pub mod reservation_table;
pub mod new_reservation_modal;
pub mod date_range_modal;

pub use app::render_app;
pub use navbar::render_navbar;
pub use reservation_table::render_reservation_table;
pub use new_reservation_modal::render_new_reservation_modal;
pub use date_range_modal::render_date_range_modal;
