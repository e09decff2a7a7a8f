mod login_admin;

pub use login_admin::{AdminSession, LoginAdminError, LoginAdminUseCase};
