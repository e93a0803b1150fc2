use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid range '{value}'. Expected START:END with START <= END")]
    InvalidRange { value: String },

    #[error(transparent)]
    Raster(#[from] sarstack_io::Error),
}
