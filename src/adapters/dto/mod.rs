pub mod logo_dto;
pub mod pdf_dto;
