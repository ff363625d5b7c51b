/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Validation errors for business rules
    #[error("Validation error: {0}")]
    Validation(String),

    /// Unknown menu item or catalog position
    #[error("Not found: {0}")]
    NotFound(String),

    /// Cart position outside the current cart
    #[error("Cart position {index} is out of range (cart has {len} lines)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Action not permitted on the current screen
    #[error("Invalid action: {0}")]
    InvalidAction(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Terminal I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        AppError::NotFound(resource.into())
    }

    pub fn invalid_action(msg: impl Into<String>) -> Self {
        AppError::InvalidAction(msg.into())
    }

    /// Errors the user can correct by issuing another command.
    /// Everything else ends the session.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AppError::Validation(_)
                | AppError::NotFound(_)
                | AppError::IndexOutOfRange { .. }
                | AppError::InvalidAction(_)
        )
    }
}
