pub mod file_record;
pub mod logo;
pub mod source;
