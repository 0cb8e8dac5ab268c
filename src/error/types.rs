// src/error/types.rs
use thiserror::Error;

/// Errors produced by the metadata API client layer.
///
/// The catalog read path propagates these unchanged so the caller can
/// distinguish "no results" from "fetch failed".
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Network failure: {0}")]
    NetworkFailure(String),

    #[error("Decode failure: {0}")]
    DecodeFailure(String),
}

/// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Search query is empty")]
    EmptyQuery,

    #[error("Not signed in")]
    NotAuthenticated,

    #[error("Profile not found")]
    ProfileNotFound,

    #[error("Could not load user roster: {0}")]
    RosterLoadFailed(String),

    #[error("Profile store error: {0}")]
    ProfileStore(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Pool error: {0}")]
    Pool(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    Other(String),
}

impl From<r2d2::Error> for AppError {
    fn from(err: r2d2::Error) -> Self {
        AppError::Pool(err.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
pub type AppResult<T> = Result<T, AppError>;
