pub mod file_repository;
pub mod logo_repository;
