use crate::PageError;

use cadastro_db::DbError;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;

#[tokio::test]
async fn test_template_error_renders_500_page() {
    let error = PageError::Template(minijinja::Error::new(
        minijinja::ErrorKind::TemplateNotFound,
        "missing.html",
    ));
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(body.to_vec()).unwrap();

    assert!(html.contains("Erro interno do servidor"));
}

#[tokio::test]
async fn test_database_error_renders_500_page() {
    let error = PageError::Database(DbError::from(sqlx::Error::RowNotFound));
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(body.to_vec()).unwrap();

    // Internal details stay in the log, not in the page
    assert!(html.contains("Erro interno do servidor"));
    assert!(!html.contains("RowNotFound"));
}
