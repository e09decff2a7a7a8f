mod admin_scope;
mod content_cards;
mod dashboard;
mod session;

pub use admin_scope::admin_scope;
pub use content_cards::admin_cards_handler;
pub use dashboard::admin_dashboard_handler;
pub use session::admin_session_handler;
