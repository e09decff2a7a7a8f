mod admin_login;
mod admin_logout;

use actix_web::web;

pub use admin_login::{admin_login_handler, admin_login_page, AdminLoginForm};
pub use admin_logout::admin_logout_handler;

pub fn init_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/admin-login", web::get().to(admin_login_page))
        .route("/admin-login", web::post().to(admin_login_handler))
        .route("/admin-logout", web::post().to(admin_logout_handler));
}
