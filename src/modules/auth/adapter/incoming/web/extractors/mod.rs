mod admin_principal;

pub use admin_principal::AdminPrincipal;
