use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Couldn't load site configuration: {0}")]
    Configuration(String),
    #[error("Analytics source must be https:// or root-relative, got {0:?}")]
    InvalidAnalyticsSource(String),
    #[error("Couldn't bind listener")]
    Bind(#[source] std::io::Error),
    #[error("Server stopped unexpectedly")]
    Serve(#[source] std::io::Error),
}
