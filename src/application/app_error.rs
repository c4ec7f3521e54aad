use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Waitlist storage error: {0}")]
    Storage(String),

    #[error("Confirmation trigger error: {0}")]
    Notification(String),

    #[error("Email delivery error: {0}")]
    EmailDelivery(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Clone, Copy, Debug)]
pub enum ErrorCode {
    MissingFields,
    MethodNotAllowed,
    StorageError,
    NotificationError,
    EmailDeliveryFailed,
    InternalError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::MissingFields => "MISSING_FIELDS",
            ErrorCode::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            ErrorCode::StorageError => "STORAGE_ERROR",
            ErrorCode::NotificationError => "NOTIFICATION_ERROR",
            ErrorCode::EmailDeliveryFailed => "EMAIL_DELIVERY_FAILED",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::MissingFields => ErrorCode::MissingFields,
            AppError::MethodNotAllowed => ErrorCode::MethodNotAllowed,
            AppError::Storage(_) => ErrorCode::StorageError,
            AppError::Notification(_) => ErrorCode::NotificationError,
            AppError::EmailDelivery(_) => ErrorCode::EmailDeliveryFailed,
            AppError::Internal(_) => ErrorCode::InternalError,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
