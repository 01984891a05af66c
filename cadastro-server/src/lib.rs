pub mod error;
pub mod health;
pub mod logger;
pub mod pages;
pub mod routes;
pub mod state;
pub mod templates;

#[cfg(test)]
mod tests;

pub use error::{Result as ServerResult, ServerError};
pub use pages::cadastrar_usuario::{cadastrar_usuario, cadastrar_usuario_form};
pub use pages::error::{PageError, Result as PageResult};
pub use pages::listar_usuarios::listar_usuarios;
pub use state::AppState;

pub use crate::routes::build_router;
