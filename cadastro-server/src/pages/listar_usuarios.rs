//! Listing page handler

use crate::pages::error::Result as PageResult;
use crate::state::AppState;

use cadastro_db::UsuarioRepository;

use axum::{extract::State, response::Html};
use minijinja::context;

/// GET /usuarios/
///
/// List every registered usuario
pub async fn listar_usuarios(State(state): State<AppState>) -> PageResult<Html<String>> {
    let repo = UsuarioRepository::new(state.pool.clone());
    let usuarios = repo.find_all().await?;

    let template = state.templates.get_template("listar_usuarios.html")?;
    let html = template.render(context! { usuarios => usuarios })?;

    Ok(Html(html))
}
