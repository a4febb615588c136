pub mod auth;
pub mod controllers;
pub mod dto;
pub mod error;
pub mod repositories;
pub mod state;
