pub mod extractors;
pub mod middleware;
pub mod routes;
pub mod session_cookie;
