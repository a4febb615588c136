use std::path::PathBuf;

/// Process-wide configuration, loaded once at startup from the environment
/// and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Settings {
    pub port: u16,
    pub database_url: String,
    pub jwt_secret: String,
    pub bucket_name: String,
    pub s3_endpoint: Option<String>,
    pub renderer_path: Option<PathBuf>,
}

impl Settings {
    pub fn from_env() -> Self {
        let database_url = std::env::var("DATABASE_URL")
            .expect("ERROR: DATABASE_URL environment variable must be set");

        let jwt_secret = std::env::var("JWT_SECRET_KEY")
            .expect("ERROR: JWT_SECRET_KEY environment variable must be set");

        let bucket_name = std::env::var("S3_BUCKET_NAME")
            .expect("ERROR: S3_BUCKET_NAME environment variable must be set");

        let s3_endpoint = std::env::var("S3_ENDPOINT_URL").ok();

        let renderer_path = std::env::var("WKHTMLTOPDF_PATH").ok().map(PathBuf::from);

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .expect("PORT must be a valid u16");

        Self {
            port,
            database_url,
            jwt_secret,
            bucket_name,
            s3_endpoint,
            renderer_path,
        }
    }
}
