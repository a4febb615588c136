pub mod config;
pub mod html;
pub mod models;
pub mod pdf_options;
pub mod storage_key;
pub mod validate;
