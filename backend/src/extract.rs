//! Request extractors

use axum::extract::FromRequest;

use crate::error::AppError;

/// `Json` extractor whose rejections use the JSON error envelope
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
