mod error;
mod input_resolver;
mod renderer;
mod s3_storage;

pub use error::{RenderError, StorageError};
pub use input_resolver::InputResolver;
pub use renderer::RendererHandle;
pub use s3_storage::S3Storage;
