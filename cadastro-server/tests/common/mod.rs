#![allow(dead_code)]

//! Test infrastructure for cadastro-server page tests

use cadastro_core::Usuario;
use cadastro_db::UsuarioRepository;
use cadastro_server::AppState;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    // In-memory needs a single connection: every extra connection would
    // open its own empty database
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    cadastro_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing
pub async fn create_test_state() -> AppState {
    let pool = create_test_pool().await;

    AppState::new(pool).expect("Failed to build test state")
}

/// Insert a usuario through the repository
pub async fn insert_usuario(pool: &SqlitePool, nome: &str, email: &str, idade: i32) -> Usuario {
    let usuario = Usuario::new(nome.to_string(), email.to_string(), idade);

    UsuarioRepository::new(pool.clone())
        .create(&usuario)
        .await
        .expect("Failed to insert usuario");

    usuario
}

/// Count rows in usuarios
pub async fn count_usuarios(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM usuarios")
        .fetch_one(pool)
        .await
        .expect("Failed to count usuarios")
}
