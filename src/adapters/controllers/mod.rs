pub mod health_controller;
pub mod logo_controller;
pub mod pdf_controller;
