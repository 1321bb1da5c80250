use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use btm_config::ConfigError;
use btm_db::error::DatabaseError;
use btm_refresh::RefreshError;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Database(#[from] DatabaseError),

    #[error("{0}")]
    Refresh(#[from] RefreshError),

    #[error("catalog not usable: {0}")]
    Config(#[from] ConfigError),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Database(err) => match err {
                DatabaseError::InvalidInput(_) => StatusCode::BAD_REQUEST,
                DatabaseError::Duplicate { .. } => StatusCode::CONFLICT,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Refresh(err) => match err {
                RefreshError::FetchFailed(_) => StatusCode::BAD_GATEWAY,
                RefreshError::StorageUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.status_code();
        if code.is_server_error() {
            tracing::error!(error = %self, status = code.as_u16(), "request failed");
        }
        let body = ErrorBody {
            error: self.to_string(),
        };
        (code, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use btm_catalog::FetchError;

    use super::*;

    #[test]
    fn fetch_failure_is_bad_gateway() {
        let err = ApiError::from(RefreshError::FetchFailed(FetchError::HttpStatus {
            status: 401,
            message: String::new(),
        }));
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn duplicate_is_conflict() {
        let err = ApiError::from(DatabaseError::Duplicate {
            entity: "exercise",
            key: "Squat / Legs / Body Weight".into(),
        });
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
        assert_eq!(err.to_string(), "exercise already exists: Squat / Legs / Body Weight");
    }

    #[test]
    fn missing_key_is_server_error() {
        let err = ApiError::from(ConfigError::NotConfigured {
            section: "catalog".into(),
        });
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
