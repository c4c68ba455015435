pub mod api;
pub mod filters;
pub mod pagination;
pub mod state;
pub mod ui;
