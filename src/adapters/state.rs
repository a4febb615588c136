use axum::extract::FromRef;
use std::sync::Arc;

use crate::{
    application::{
        repositories::{file_repository::FileRepository, logo_repository::LogoRepository},
        services::ObjectStorage,
    },
    domain::config::settings::Settings,
    services::{InputResolver, RendererHandle},
};

#[derive(Clone, FromRef)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub file_repository: Arc<dyn FileRepository>,
    pub logo_repository: Arc<dyn LogoRepository>,
    pub storage: Arc<dyn ObjectStorage>,
    pub renderer: RendererHandle,
    pub input_resolver: Arc<InputResolver>,
}
