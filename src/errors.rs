use axum::http::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

/// Failures while reading the rental dataset. All of them are fatal at startup.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing required column '{0}'")]
    MissingColumn(String),

    #[error("row {row}: '{value}' is not a date")]
    InvalidDate { row: usize, value: String },

    #[error("row {row}: hour {value} is outside 0-23")]
    InvalidHour { row: usize, value: u8 },

    #[error("row {row}: total {total} != casual {casual} + registered {registered}")]
    InconsistentTotal {
        row: usize,
        casual: u64,
        registered: u64,
        total: u64,
    },

    #[error("dataset has no rows")]
    Empty,
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
