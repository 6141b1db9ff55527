//! Unified error handling for the storefront.
//!
//! Route handlers return `Result<T, AppError>`. A failed catalog load is
//! terminal for the current render: the user sees a single error message
//! and no partial catalog. Unknown product ids are not errors; they are
//! recovered locally by the not-found view in `routes::home`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::catalog::DataSourceError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Catalog data source unreachable or malformed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] DataSourceError),

    /// Session store operation failed.
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request error");

        let status = match &self {
            Self::Catalog(_) => StatusCode::BAD_GATEWAY,
            Self::Session(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Catalog(_) => {
                "No se pudo cargar el catálogo. Asegúrate de que el enlace de la hoja sea público y correcto."
            }
            Self::Session(_) => "Error interno del servidor",
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
