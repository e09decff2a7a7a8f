mod content_repository_postgres;
pub mod content_table;

pub use content_repository_postgres::ContentRepositoryPostgres;
pub use content_table::ContentTable;
