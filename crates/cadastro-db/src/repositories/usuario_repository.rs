//! Usuario repository for the registration feature.
//!
//! Storage conventions: UUIDs are stored as their canonical TEXT form and
//! timestamps as unix seconds, so rows survive a round trip at second
//! precision only.

use crate::{DbError, Result as DbErrorResult};

use cadastro_core::Usuario;

use std::panic::Location;

use chrono::DateTime;
use error_location::ErrorLocation;
use sqlx::SqlitePool;
use uuid::Uuid;

/// A `usuarios` row exactly as stored, before decoding into the model.
#[derive(sqlx::FromRow)]
struct UsuarioRow {
    id: String,
    nome: String,
    email: String,
    idade: i64,
    created_at: i64,
}

impl UsuarioRow {
    fn into_usuario(self) -> DbErrorResult<Usuario> {
        Ok(Usuario {
            id: Uuid::parse_str(&self.id).map_err(|e| DbError::Initialization {
                message: format!("Invalid UUID in usuario.id: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?,
            nome: self.nome,
            email: self.email,
            idade: self.idade as i32,
            created_at: DateTime::from_timestamp(self.created_at, 0).ok_or_else(|| {
                DbError::Initialization {
                    message: "Invalid timestamp in usuario.created_at".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?,
        })
    }
}

pub struct UsuarioRepository {
    pool: SqlitePool,
}

impl UsuarioRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, usuario: &Usuario) -> DbErrorResult<()> {
        let id = usuario.id.to_string();
        let created_at = usuario.created_at.timestamp();

        sqlx::query(
            r#"
                INSERT INTO usuarios (id, nome, email, idade, created_at)
                VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(id)
        .bind(&usuario.nome)
        .bind(&usuario.email)
        .bind(usuario.idade)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<Usuario>> {
        let rows = sqlx::query_as::<_, UsuarioRow>(
            r#"
                SELECT id, nome, email, idade, created_at
                FROM usuarios
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(UsuarioRow::into_usuario)
            .collect::<DbErrorResult<Vec<_>>>()
    }
}
