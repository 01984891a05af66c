//! Page error types
//!
//! Failures here are server-side faults (database or template rendering).
//! User input problems never reach this type: validation errors re-render
//! the form instead.

use cadastro_db::DbError;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

const ERROR_PAGE: &str = r#"<!DOCTYPE html>
<html lang="pt-br">
<head><meta charset="utf-8"><title>Erro interno</title></head>
<body><h1>Erro interno do servidor</h1><p>Tente novamente mais tarde.</p></body>
</html>
"#;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("Database error: {0}")]
    Database(#[from] DbError),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        (StatusCode::INTERNAL_SERVER_ERROR, Html(ERROR_PAGE)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, PageError>;
