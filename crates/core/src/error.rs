use thiserror::Error;

#[derive(Error, Debug)]
pub enum WidgetdError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid interface description: {0}")]
    Description(#[from] serde_json::Error),
}
