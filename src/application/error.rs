#[derive(Debug)]
pub enum ApplicationError {
    Unauthenticated(String),
    MissingInput,
    InvalidUrl,
    FetchFailed(String),
    UnsupportedFileType,
    RendererUnavailable,
    RenderFailed(String),
    StoreWriteFailed(String),
    StoreDeleteFailed(String),
    MetadataWriteFailed(String),
    NotFound(String),
    BadRequest(String),
    DatabaseError(String),
    InternalError(String),
}
