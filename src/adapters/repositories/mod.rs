mod pg_file_repository;
mod pg_logo_repository;

pub use pg_file_repository::PgFileRepository;
pub use pg_logo_repository::PgLogoRepository;
