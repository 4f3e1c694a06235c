//! GUI module - User interface components

mod app;
mod dashboard_view;
mod order_form;

pub use app::DashboardApp;
pub use dashboard_view::DashboardView;
pub use order_form::{OrderForm, OrderFormAction};
