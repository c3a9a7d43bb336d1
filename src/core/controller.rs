use std::sync::Arc;
use axum::http::StatusCode;
use crate::catalog::domain::CatalogService;
use crate::core::library::LibraryError;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) service: Arc<dyn CatalogService>,
}

impl AppState {
    pub fn new(service: Box<dyn CatalogService>) -> AppState {
        AppState {
            service: Arc::from(service),
        }
    }
}

pub(crate) type ServerError = (StatusCode, String);

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    (StatusCode::BAD_REQUEST, format!("{}", err))
}

impl From<LibraryError> for ServerError {
    fn from(err: LibraryError) -> Self {
        match err {
            LibraryError::Database { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{}", err))
            }
            LibraryError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, format!("{}", err))
            }
            LibraryError::Validation { .. } => {
                (StatusCode::BAD_REQUEST, format!("{}", err))
            }
            LibraryError::Serialization { .. } => {
                (StatusCode::BAD_REQUEST, format!("{}", err))
            }
        }
    }
}
